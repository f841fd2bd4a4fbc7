//! Text-to-speech provider abstraction.

pub mod provider;
