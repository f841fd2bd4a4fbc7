//! `tvox clear-audio` - bulk delete without a running server.

use anyhow::Result;
use console::style;

use tutorvox_core::audio::store::AudioStore;
use tutorvox_infra::audio::LocalAudioStore;
use tutorvox_infra::config::AppConfig;

/// Delete every regular file in the configured audio directory.
pub async fn clear_audio(config: &AppConfig, json: bool, quiet: bool) -> Result<()> {
    let store = LocalAudioStore::new(&config.server.audio_dir);
    let deleted = store.clear().await?;

    if json {
        let out = serde_json::json!({
            "status": "ok",
            "delete_files": deleted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !quiet {
        println!(
            "  {} Deleted {} file(s) from {}",
            style("✓").green(),
            style(deleted).bold(),
            style(store.dir().display()).yellow()
        );
    }
    Ok(())
}
