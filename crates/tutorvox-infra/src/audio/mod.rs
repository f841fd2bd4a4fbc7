//! Local-disk audio store.
//!
//! Implements the `AudioStore` trait from `tutorvox-core`. Files live flat in
//! a single directory that the HTTP layer also serves under `/audio`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tutorvox_core::audio::is_safe_filename;
use tutorvox_core::audio::store::AudioStore;
use tutorvox_types::error::AudioStoreError;

/// Audio store backed by a directory on the local filesystem.
///
/// All operations go through `tokio::fs` for async I/O.
#[derive(Debug, Clone)]
pub struct LocalAudioStore {
    dir: PathBuf,
}

impl LocalAudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the audio files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the store directory (and parents) if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AudioStoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| io_error(&self.dir, source))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> AudioStoreError {
    AudioStoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl AudioStore for LocalAudioStore {
    async fn save(&self, filename: &str, audio: &[u8]) -> Result<(), AudioStoreError> {
        if !is_safe_filename(filename) {
            return Err(AudioStoreError::InvalidFileName(filename.to_string()));
        }

        self.ensure_dir().await?;

        let path = self.dir.join(filename);
        if let Err(source) = tokio::fs::write(&path, audio).await {
            // Drop whatever was partially written; the original error wins.
            if let Err(cleanup) = tokio::fs::remove_file(&path).await
                && cleanup.kind() != ErrorKind::NotFound
            {
                tracing::warn!(
                    path = %path.display(),
                    error = %cleanup,
                    "failed to remove partial audio file"
                );
            }
            return Err(io_error(&path, source));
        }

        tracing::debug!(path = %path.display(), bytes = audio.len(), "saved audio file");
        Ok(())
    }

    async fn clear(&self) -> Result<usize, AudioStoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    dir = %self.dir.display(),
                    "audio directory missing, nothing to clear"
                );
                return Ok(0);
            }
            Err(source) => return Err(io_error(&self.dir, source)),
        };

        let mut deleted = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| io_error(&self.dir, source))?
        {
            let path = entry.path();

            // Follows symlinks: a link to a regular file counts as a file.
            let metadata = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(io_error(&path, source)),
            };
            if !metadata.is_file() {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => deleted += 1,
                // Removed concurrently by someone else.
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(source) => return Err(io_error(&path, source)),
            }
        }

        tracing::info!(dir = %self.dir.display(), deleted, "cleared audio directory");
        Ok(deleted)
    }
}
