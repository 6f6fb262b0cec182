//! Authenticated HTTP gateway with response classification.

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use super::logging::{LogSink, RequestLog};
use crate::error::{Error, Result};

/// Production endpoint of the reseller API.
pub const DEFAULT_BASE_URL: &str = "https://resell.lightningproxies.net/api";

const API_KEY_HEADER: &str = "x-api-key";

/// Sends requests to the reseller API.
///
/// Owns the base URL and the authentication headers. Every request goes out
/// with `x-api-key` and `Content-Type: application/json`, and every response
/// is classified the same way regardless of method.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    log: Arc<dyn RequestLog>,
}

impl Gateway {
    /// Creates a gateway with its own reqwest client.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lightning-proxies/", env!("LIGHTNING_VERSION")))
            .build()?;
        Self::with_client(client, api_key, base_url)
    }

    /// Creates a gateway on top of an existing reqwest client.
    ///
    /// The authentication headers are attached per request, so they apply
    /// even if `client` was built with other default headers.
    pub fn with_client(client: Client, api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::invalid(
                "Parameter 'api_key' is required and cannot be empty.",
            ));
        }
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            Error::invalid("Parameter 'api_key' must contain only visible ASCII characters.")
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            log: Arc::new(LogSink),
        })
    }

    /// Replaces the request logger (defaults to [`LogSink`]).
    pub fn with_log(mut self, log: impl RequestLog + 'static) -> Self {
        self.log = Arc::new(log);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and `path` with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[tracing::instrument(skip(self, query))]
    pub async fn get(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {}...", url);

        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }
        self.send(request).await
    }

    #[tracing::instrument(skip(self, form, json))]
    pub async fn post(
        &self,
        path: &str,
        form: Option<&[(&str, &str)]>,
        json: Option<&Value>,
    ) -> Result<Value> {
        let url = self.url(path);
        debug!("POST {}...", url);

        let mut request = self.client.post(&url);
        if let Some(form) = form {
            request = request.form(form);
        }
        if let Some(json) = json {
            request = request.json(json);
        }
        self.send(request).await
    }

    /// Sends one request and reports the outcome to the logger.
    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        // Applied last so the documented headers win over anything the body set.
        let response = match request.headers(self.headers.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = Error::Transport(e);
                self.log.failed(&err);
                return Err(err);
            }
        };

        let url = response.url().to_string();
        match classify(response).await {
            Ok(value) => {
                self.log.succeeded(&url);
                Ok(value)
            }
            Err(err) => {
                self.log.failed(&err);
                Err(err)
            }
        }
    }
}

/// Maps a response to its parsed JSON body or the matching error.
async fn classify(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(if status == StatusCode::UNAUTHORIZED {
            Error::Authentication { status, body }
        } else {
            Error::Status { status, body }
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
