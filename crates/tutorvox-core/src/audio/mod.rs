//! Audio store abstraction and file naming.
//!
//! Generated replies are written as `<uuid-v4>.<ext>` under the store
//! directory and served from [`AUDIO_MOUNT_PATH`].

pub mod store;

use tutorvox_types::config::AUDIO_MOUNT_PATH;
use tutorvox_types::speech::AudioFormat;
use uuid::Uuid;

/// Generate a fresh, collision-free file name for a synthesized reply.
pub fn generate_audio_filename(format: AudioFormat) -> String {
    format!("{}.{}", Uuid::new_v4(), format.extension())
}

/// Compose the public URL path for a stored audio file.
pub fn audio_url_path(filename: &str) -> String {
    format!("{AUDIO_MOUNT_PATH}/{filename}")
}

/// Whether `filename` is a single plain path component.
///
/// Rejects separators, parent references, and hidden names so a store can
/// never be asked to write outside its directory.
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains('\0')
}
