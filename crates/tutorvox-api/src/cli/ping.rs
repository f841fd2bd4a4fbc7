//! `tvox ping` - call `GET /awake_server` on a running server.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use console::style;

/// Probe `{base_url}/awake_server` and fail unless it answers `true`.
pub async fn ping(base_url: &str, json: bool, quiet: bool) -> Result<()> {
    let url = awake_url(base_url);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let result = probe(&client, &url).await;
    let awake = result.is_ok();

    if json {
        let out = serde_json::json!({
            "url": url,
            "awake": awake,
            "error": result.as_ref().err().map(|e| format!("{e:#}")),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !quiet {
        match &result {
            Ok(()) => println!("  {} {} is awake", style("✓").green(), style(&url).cyan()),
            Err(e) => println!("  {} {}: {e:#}", style("✗").red(), style(&url).cyan()),
        }
    }

    if !awake {
        bail!("server at {base_url} is not responding");
    }
    Ok(())
}

async fn probe(client: &reqwest::Client, url: &str) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("unexpected status {status}");
    }
    let body: serde_json::Value = response.json().await.context("invalid response body")?;
    if body != serde_json::Value::Bool(true) {
        bail!("unexpected response {body}");
    }
    Ok(())
}

fn awake_url(base_url: &str) -> String {
    format!("{}/awake_server", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_awake_url_trims_slash() {
        assert_eq!(
            awake_url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000/awake_server"
        );
    }

    #[tokio::test]
    async fn test_ping_awake_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/awake_server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(true))
            .mount(&server)
            .await;

        assert!(ping(&server.uri(), false, true).await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_rejects_unexpected_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/awake_server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(false))
            .mount(&server)
            .await;

        assert!(ping(&server.uri(), false, true).await.is_err());
    }

    #[tokio::test]
    async fn test_ping_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(ping(&server.uri(), false, true).await.is_err());
    }
}
