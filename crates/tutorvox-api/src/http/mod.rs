//! HTTP layer for tutorvox.
//!
//! Axum router exposing the chat round trip, the liveness probe, bulk audio
//! deletion, and static serving of the audio store.

pub mod error;
pub mod handlers;
pub mod router;
