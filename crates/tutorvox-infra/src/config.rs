//! Configuration loader for tutorvox.
//!
//! Builds an [`AppConfig`] from, lowest to highest precedence: built-in
//! defaults, an optional `tutorvox.toml`, a `.env` file, and the process
//! environment. The result is validated once and then injected into the
//! services; nothing reads the environment after startup.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;

use tutorvox_types::config::ServerConfig;
use tutorvox_types::error::ConfigError;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tutorvox.toml";

/// Fully resolved runtime configuration.
///
/// Does NOT derive Debug so the API key cannot end up in logs.
#[derive(Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api_key: Option<SecretString>,
}

impl AppConfig {
    /// The API key, or [`ConfigError::Missing`] when none was configured.
    pub fn require_api_key(&self) -> Result<&SecretString, ConfigError> {
        self.api_key.as_ref().ok_or(ConfigError::Missing("OPEN_AI_KEY"))
    }
}

/// On-disk shape of `tutorvox.toml`: the server settings plus the key.
#[derive(Deserialize, Default)]
struct FileConfig {
    #[serde(flatten)]
    server: ServerConfig,
    #[serde(default)]
    api_key: Option<String>,
}

/// Load configuration for this process.
///
/// `path` is an explicit `--config` argument: if given it must exist. Without
/// it, `tutorvox.toml` in the working directory is used when present.
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(env_path) => tracing::debug!("Loaded environment from {}", env_path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("Failed to load .env: {err}"),
    }

    load_config_with(path, |key| std::env::var(key).ok()).await
}

/// Load configuration with an explicit environment lookup.
pub async fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => read_config_file(path, true).await?,
        None => read_config_file(Path::new(DEFAULT_CONFIG_FILE), false).await?,
    };

    let mut config = AppConfig {
        server: file.server,
        api_key: file.api_key.map(SecretString::from),
    };
    apply_env_overrides(&mut config, lookup)?;
    validate(&config.server)?;
    Ok(config)
}

async fn read_config_file(path: &Path, required: bool) -> Result<FileConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(FileConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<FileConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Overlay environment variables onto `config`.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = get("OPEN_AI_KEY").or_else(|| get("OPENAI_API_KEY")) {
        config.api_key = Some(SecretString::from(key));
    }

    let server = &mut config.server;
    if let Some(v) = get("OPENAI_BASE_URL") {
        server.api_base = v;
    }
    if let Some(v) = get("LLM") {
        server.llm_model = v;
    }
    if let Some(v) = get("TTS_MODEL") {
        server.tts_model = v;
    }
    if let Some(v) = get("SERVER") {
        server.public_base_url = v;
    }
    if let Some(v) = get("TUTORVOX_AUDIO_DIR") {
        server.audio_dir = PathBuf::from(v);
    }
    if let Some(v) = get("TUTORVOX_VOICE") {
        server.voice = v;
    }
    if let Some(v) = get("TUTORVOX_SYSTEM_PROMPT") {
        server.system_prompt = Some(v);
    }
    if let Some(v) = get("TUTORVOX_TEMPERATURE") {
        server.temperature = parse_env("TUTORVOX_TEMPERATURE", &v)?;
    }
    if let Some(v) = get("TUTORVOX_LLM_TIMEOUT_SECS") {
        server.llm_timeout_secs = parse_env("TUTORVOX_LLM_TIMEOUT_SECS", &v)?;
    }
    if let Some(v) = get("TUTORVOX_TTS_TIMEOUT_SECS") {
        server.tts_timeout_secs = parse_env("TUTORVOX_TTS_TIMEOUT_SECS", &v)?;
    }
    Ok(())
}

fn parse_env<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        message: format!("'{value}': {err}"),
    })
}

/// Reject settings no request could succeed with.
pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(ConfigError::Invalid {
            key: "temperature",
            message: format!("{} is outside 0.0..=2.0", config.temperature),
        });
    }
    if config.llm_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            key: "llm_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.tts_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            key: "tts_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.llm_model.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "llm_model",
            message: "must not be empty".to_string(),
        });
    }
    if config.tts_model.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "tts_model",
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
