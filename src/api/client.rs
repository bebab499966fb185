//! FoxESS Cloud request dispatcher.
//!
//! Builds signed requests and normalizes every outcome into the single
//! ApiResult shape: the remote JSON body on success, `{"error": ...}` on any
//! failure. No error crosses this boundary as an `Err`.

use chrono::Utc;
use log::{debug, error};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::{FoxEssError, Result};

use super::signature::generate_signature;

/// Fixed browser-like identity; the remote API rejects requests without a
/// recognizable client.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// HTTP method for a dispatch. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Client for the FoxESS Cloud OpenAPI
pub struct FoxEssClient {
    http: reqwest::Client,
    config: Config,
}

impl FoxEssClient {
    /// Create a client from startup configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FoxEssError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Perform one authenticated call and return the ApiResult mapping.
    ///
    /// Success is the remote JSON body verbatim; every failure kind becomes
    /// `{"error": <description>}`, logged once at error level.
    pub async fn dispatch(&self, method: Method, path: &str, params: Option<Value>) -> Value {
        match self.try_dispatch(method, path, params).await {
            Ok(body) => body,
            Err(e) => {
                error!("API request to {} failed: {}", path, e);
                json!({ "error": e.to_string() })
            }
        }
    }

    async fn try_dispatch(&self, method: Method, path: &str, params: Option<Value>) -> Result<Value> {
        let Some(token) = self.config.api_key.as_deref() else {
            return Err(FoxEssError::MissingCredential);
        };

        let url = format!("{}{}", self.config.domain, path);
        let timestamp = Utc::now().timestamp_millis();
        debug!("dispatching {:?} {}", method, path);

        let request = match method {
            Method::Get => {
                let mut req = self.http.get(&url);
                if let Some(params) = &params {
                    req = req.query(params);
                }
                req
            }
            Method::Post => {
                let req = self.http.post(&url);
                match &params {
                    Some(params) => req.json(params),
                    None => req,
                }
            }
        };

        let response = request
            .headers(self.auth_headers(path, token, timestamp)?)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FoxEssError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(classify_transport_error)
    }

    /// Authentication headers for one request: the raw token, the decimal
    /// timestamp, and the signature binding them to the path.
    fn auth_headers(&self, path: &str, token: &str, timestamp: i64) -> Result<HeaderMap> {
        let value = |s: &str| {
            HeaderValue::from_str(s)
                .map_err(|e| FoxEssError::Client(format!("Invalid header value: {}", e)))
        };

        let mut headers = HeaderMap::new();
        headers.insert("token", value(token)?);
        headers.insert("timestamp", value(&timestamp.to_string())?);
        headers.insert("signature", value(&generate_signature(path, token, timestamp))?);
        headers.insert("lang", HeaderValue::from_static("en"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        Ok(headers)
    }
}

/// Partition a transport failure into the timeout / connection / catch-all
/// kinds of the error taxonomy.
fn classify_transport_error(e: reqwest::Error) -> FoxEssError {
    if e.is_timeout() {
        FoxEssError::Timeout(e.to_string())
    } else if e.is_connect() {
        FoxEssError::Connection(e.to_string())
    } else {
        FoxEssError::Transport(e.to_string())
    }
}

impl std::fmt::Debug for FoxEssClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoxEssClient")
            .field("domain", &self.config.domain)
            .field("credential_configured", &self.config.api_key.is_some())
            .finish()
    }
}
