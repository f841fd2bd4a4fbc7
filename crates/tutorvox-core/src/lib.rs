//! Chat orchestration and port trait definitions for tutorvox.
//!
//! This crate defines the "ports" (provider and store traits) that the
//! infrastructure layer implements, plus the `ChatService` that chains them.
//! It depends only on `tutorvox-types` -- never on `tutorvox-infra` or any
//! HTTP/filesystem crate.

pub mod audio;
pub mod chat;
pub mod llm;
pub mod speech;
