use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

use crate::catalog::EndpointDescriptor;
use crate::tester::{ParamValues, TestRequest, build_request};

const FAILED_TO_FETCH: &str = "Failed to fetch";
const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[rustfmt::skip]
#[derive(Debug, Error)]
pub enum TesterError {
    #[error("Invalid base URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, #[source] source: url::ParseError },

    #[error("Invalid request location `{location}`: {source}")]
    InvalidLocation { location: String, #[source] source: url::ParseError },

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    InvalidJsonBody(reqwest::Error),
}

/// Outcome of one test run, ready for display.
#[derive(Clone, Debug, Serialize)]
pub struct TestResult {
    /// HTTP status of the response, absent when none was received.
    pub status: Option<u16>,

    /// Indented JSON text of the response body or of the error object.
    pub body: String,
}

impl TestResult {
    fn received(status: reqwest::StatusCode, body: &Value) -> Self {
        Self {
            status: Some(status.as_u16()),
            body: to_pretty_json(body),
        }
    }

    fn failed(error: &TesterError) -> Self {
        let message = error.to_string();
        let message = if message.is_empty() { UNKNOWN_ERROR.to_string() } else { message };
        Self {
            status: None,
            body: to_pretty_json(&json!({
                "error": FAILED_TO_FETCH,
                "message": message
            })),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status.is_none()
    }
}

fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Sends test requests for catalog endpoints and reports what came back.
#[derive(Clone, Debug)]
pub struct Tester {
    http_client: reqwest::Client,
    base_url: Url,
}

impl Tester {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Result<Self, TesterError> {
        let base_url = Url::parse(base_url).map_err(|source| TesterError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { http_client, base_url })
    }

    /// Same connection pool, different origin.
    pub fn with_base_url(&self, base_url: &str) -> Result<Self, TesterError> {
        Self::new(self.http_client.clone(), base_url)
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs one test request. Never fails: transport and decoding problems
    /// become the `Failed to fetch` error object.
    pub async fn run_test(&self, descriptor: &EndpointDescriptor, values: &ParamValues) -> TestResult {
        let request = build_request(descriptor, values);
        match self.send(&request).await {
            Ok((status, body)) => {
                tracing::debug!(method = %request.method, location = %request.location, %status, "Test request completed");
                TestResult::received(status, &body)
            }
            Err(e) => {
                tracing::warn!(method = %request.method, location = %request.location, "Test request failed: {}", e);
                TestResult::failed(&e)
            }
        }
    }

    async fn send(&self, request: &TestRequest) -> Result<(reqwest::StatusCode, Value), TesterError> {
        let url = self.base_url.join(&request.location).map_err(|source| TesterError::InvalidLocation {
            location: request.location.clone(),
            source,
        })?;
        tracing::debug!("Sending {} request to {}", request.method, url);

        let mut builder = self.http_client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            // sets `Content-Type: application/json`
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.json::<Value>().await.map_err(TesterError::InvalidJsonBody)?;
        Ok((status, body))
    }
}
