//! Speech provider implementations.

pub mod openai;
