//! REST client for the hosted backend's species table
//!
//! The backend exposes tables through a PostgREST-style interface: rows are
//! inserted with `POST /rest/v1/<table>` and, with
//! `Prefer: return=representation`, the inserted rows come back as a JSON
//! array.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::sink::SpeciesSink;
use crate::config::BackendConfig;
use crate::import::ImportError;
use crate::species::SpeciesRow;

/// Error body returned by the backend on a rejected request
#[derive(Debug, Deserialize)]
struct BackendError {
    message: Option<String>,
    error: Option<String>,
    details: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            bail!("No backend URL configured. Set BIOATLAS_URL or [backend].url in the config file");
        }
        if config.api_key.trim().is_empty() {
            bail!(
                "No backend API key configured. Set BIOATLAS_API_KEY or [backend].api_key in the config file"
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: table_endpoint(&config.url, &config.table),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SpeciesSink for RestClient {
    async fn insert_species(&self, rows: &[SpeciesRow]) -> Result<Vec<Value>, ImportError> {
        let start = Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await
            .map_err(|e| ImportError::write(format!("Request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImportError::write(format!("Failed to read backend response: {}", e)))?;

        debug!(
            "POST {} ({} rows) -> {} in {:?}",
            self.endpoint,
            rows.len(),
            status,
            start.elapsed()
        );

        if !status.is_success() {
            return Err(ImportError::write(describe_error(status, &body)));
        }

        parse_inserted(&body)
    }
}

/// Insert endpoint for `table` under the backend base URL
fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim().trim_end_matches('/'), table)
}

/// Human-readable message for a failed insert, preferring the backend's own
fn describe_error(status: StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<BackendError>(body) {
        if let Some(message) = err.message.or(err.error) {
            return match err.details {
                Some(details) if !details.is_empty() => format!("{} ({})", message, details),
                _ => message,
            };
        }
    }

    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn parse_inserted(body: &str) -> Result<Vec<Value>, ImportError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(rows)) => Ok(rows),
        Ok(Value::Object(row)) => Ok(vec![Value::Object(row)]),
        Ok(other) => Err(ImportError::write(format!(
            "Unexpected insert response: {}",
            other
        ))),
        Err(e) => Err(ImportError::write(format!(
            "Invalid JSON in insert response: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend(url: &str, api_key: &str) -> BackendConfig {
        BackendConfig {
            url: url.to_string(),
            api_key: api_key.to_string(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn test_table_endpoint() {
        assert_eq!(
            table_endpoint("https://abc.example.co/", "species"),
            "https://abc.example.co/rest/v1/species"
        );
        assert_eq!(
            table_endpoint("https://abc.example.co", "species_staging"),
            "https://abc.example.co/rest/v1/species_staging"
        );
    }

    #[test]
    fn test_new_requires_url_and_key() {
        assert!(RestClient::new(&backend("", "key")).is_err());
        assert!(RestClient::new(&backend("https://abc.example.co", " ")).is_err());

        let client = RestClient::new(&backend("https://abc.example.co", "key")).unwrap();
        assert_eq!(client.endpoint(), "https://abc.example.co/rest/v1/species");
    }

    #[test]
    fn test_describe_error_prefers_backend_message() {
        let body = r#"{"code":"23502","message":"null value in column \"genus\"","details":"Failing row contains (...)"}"#;
        assert_eq!(
            describe_error(StatusCode::BAD_REQUEST, body),
            "null value in column \"genus\" (Failing row contains (...))"
        );
        assert_eq!(
            describe_error(StatusCode::TOO_MANY_REQUESTS, r#"{"error":"rate limited"}"#),
            "rate limited"
        );
    }

    #[test]
    fn test_describe_error_falls_back_to_status() {
        assert_eq!(
            describe_error(StatusCode::BAD_GATEWAY, "<html>upstream</html>"),
            "502 Bad Gateway"
        );
    }

    #[test]
    fn test_parse_inserted() {
        assert_eq!(parse_inserted("").unwrap(), Vec::<Value>::new());
        assert_eq!(
            parse_inserted(r#"[{"id":1},{"id":2}]"#).unwrap(),
            vec![json!({"id": 1}), json!({"id": 2})]
        );
        assert_eq!(parse_inserted(r#"{"id":7}"#).unwrap(), vec![json!({"id": 7})]);
        assert!(matches!(parse_inserted("42"), Err(ImportError::Write(_))));
        assert!(matches!(parse_inserted("{oops"), Err(ImportError::Write(_))));
    }
}
