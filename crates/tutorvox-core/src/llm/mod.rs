//! LLM provider abstraction for tutorvox.
//!
//! `LlmProvider` is the RPITIT trait concrete text-generation backends
//! implement; the OpenAI-compatible implementation lives in `tutorvox-infra`.

pub mod provider;
