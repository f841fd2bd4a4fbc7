//! OpenAiSpeechProvider -- concrete [`SpeechProvider`] for the OpenAI audio API.
//!
//! Sends requests to `POST {base_url}/audio/speech` with bearer
//! authentication and returns the encoded audio body as-is.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use tutorvox_core::speech::provider::SpeechProvider;
use tutorvox_types::speech::{SpeechError, SpeechRequest, SpeechResponse};

/// Request body for the OpenAI speech endpoint.
#[derive(Debug, Serialize)]
struct OpenAiSpeechBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// OpenAI text-to-speech provider.
pub struct OpenAiSpeechProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
}

impl OpenAiSpeechProvider {
    /// Create a new speech provider.
    ///
    /// `timeout` bounds the whole HTTP exchange, body download included.
    pub fn new(
        api_key: SecretString,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn url(&self) -> String {
        format!("{}/audio/speech", self.base_url)
    }

    fn map_send_error(&self, err: reqwest::Error) -> SpeechError {
        if err.is_timeout() {
            SpeechError::Timeout(self.timeout)
        } else {
            SpeechError::Provider {
                message: format!("HTTP request failed: {err}"),
            }
        }
    }
}

// OpenAiSpeechProvider intentionally does NOT derive Debug.

impl SpeechProvider for OpenAiSpeechProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse, SpeechError> {
        let body = OpenAiSpeechBody {
            model: &request.model,
            input: &request.input,
            voice: &request.voice,
            response_format: request.format.extension(),
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => SpeechError::AuthenticationFailed,
                429 => SpeechError::RateLimited,
                _ => SpeechError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?
            .to_vec();

        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        Ok(SpeechResponse {
            audio,
            format: request.format,
        })
    }
}
