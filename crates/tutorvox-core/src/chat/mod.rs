//! Voice-chat orchestration.
//!
//! `ChatService` turns a caller's message plus history into a text reply and
//! a stored audio file. `prompt` holds the persona and chat settings.

pub mod prompt;
pub mod service;
