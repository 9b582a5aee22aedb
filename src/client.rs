use crate::utils::error::{PokeApiError, Result};
use crate::utils::validation;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around `reqwest::Client` for PokeAPI lookups.
///
/// One GET per call, no retries, no caching. The base URL is injectable so
/// tests can point at a mock server.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        validation::validate_url("base_url", base_url)?;

        let http = Client::builder()
            .user_agent(concat!("pokeapi-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{endpoint}` and decode the JSON body.
    ///
    /// `endpoint` is a root-relative path, optionally with a query string
    /// (e.g. `/pokemon/pikachu` or `/pokemon?limit=20&offset=0`).
    pub async fn fetch(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(PokeApiError::NotFound {
                path: endpoint.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/pokemon/pikachu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"name": "pikachu", "id": 25}));
        });

        let client = PokeApiClient::with_base_url(&server.base_url()).unwrap();
        let data = client.fetch("/pokemon/pikachu").await.unwrap();

        api_mock.assert();
        assert_eq!(data["name"], "pikachu");
        assert_eq!(data["id"], 25);
    }

    #[tokio::test]
    async fn test_fetch_passes_query_string() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pokemon")
                .query_param("limit", "20")
                .query_param("offset", "40");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"count": 0, "results": []}));
        });

        let client = PokeApiClient::with_base_url(&server.base_url()).unwrap();
        let data = client.fetch("/pokemon?limit=20&offset=40").await.unwrap();

        api_mock.assert();
        assert_eq!(data["count"], 0);
    }

    #[tokio::test]
    async fn test_fetch_404_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon/missingno");
            then.status(404);
        });

        let client = PokeApiClient::with_base_url(&server.base_url()).unwrap();
        let err = client.fetch("/pokemon/missingno").await.unwrap_err();

        assert_eq!(err.to_string(), "Resource not found: /pokemon/missingno");
    }

    #[tokio::test]
    async fn test_fetch_server_error_carries_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon/1");
            then.status(503).body("upstream unavailable");
        });

        let client = PokeApiClient::with_base_url(&server.base_url()).unwrap();
        let err = client.fetch("/pokemon/1").await.unwrap_err();

        assert_eq!(err.to_string(), "API Error 503: upstream unavailable");
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_network_error() {
        // Port 1 is never listening locally.
        let client = PokeApiClient::with_base_url("http://127.0.0.1:1").unwrap();
        let err = client.fetch("/pokemon/1").await.unwrap_err();

        assert!(err.to_string().starts_with("Network error:"), "got: {err}");
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon/1");
            then.status(200).body("not json at all");
        });

        let client = PokeApiClient::with_base_url(&server.base_url()).unwrap();
        let err = client.fetch("/pokemon/1").await.unwrap_err();

        // Body decode failures go into the same bucket as transport failures.
        assert!(err.to_string().starts_with("Network error:"), "got: {err}");
    }

    #[test]
    fn test_with_base_url_rejects_invalid() {
        assert!(PokeApiClient::with_base_url("").is_err());
        assert!(PokeApiClient::with_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = PokeApiClient::with_base_url("http://127.0.0.1:9999/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
