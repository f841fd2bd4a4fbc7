//! Infrastructure layer for tutorvox.
//!
//! Contains implementations of the traits defined in `tutorvox-core`:
//! the OpenAI-compatible chat provider, the OpenAI speech provider, and the
//! local-disk audio store. Also owns configuration loading.

pub mod audio;
pub mod config;
pub mod llm;
pub mod speech;
