//! Audio store trait.
//!
//! Defines the interface for the directory that holds synthesized replies.
//! Implementations live in tutorvox-infra.

use tutorvox_types::error::AudioStoreError;

/// Trait for the local audio store.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait AudioStore: Send + Sync {
    /// Write `audio` under `filename`, creating the store directory if needed.
    ///
    /// On failure no partial file is left behind.
    fn save(
        &self,
        filename: &str,
        audio: &[u8],
    ) -> impl std::future::Future<Output = Result<(), AudioStoreError>> + Send;

    /// Delete every regular file in the store, skipping subdirectories.
    ///
    /// Returns the number of files removed. An empty or missing store
    /// returns `0`.
    fn clear(&self) -> impl std::future::Future<Output = Result<usize, AudioStoreError>> + Send;
}
