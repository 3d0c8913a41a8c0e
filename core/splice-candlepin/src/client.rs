//! Signed HTTP transport for Candlepin.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::CandlepinConfig;
use crate::error::{CandlepinError, CandlepinResult};
use crate::oauth::OAuthSigner;

/// Header naming the admin user a request acts as.
pub const ADMIN_USER_HEADER: &str = "cp-user";

/// How a response body should be handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Parse the body as JSON.
    Json,
    /// Return the body text untouched (the rules endpoint serves base64).
    Raw,
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Raw(String),
    /// The response had no body.
    Empty,
}

impl Payload {
    /// Returns the JSON value; an empty body is `null`, raw text a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Raw(text) => Value::String(text),
            Payload::Empty => Value::Null,
        }
    }

    /// Returns the body text, if the response had a raw body.
    pub fn into_raw(self) -> Option<String> {
        match self {
            Payload::Raw(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

/// OAuth-signed Candlepin REST client.
///
/// Holds one `reqwest::Client`, so connections are pooled across calls.
/// Calls are issued one at a time by the caller; nothing here is shared
/// mutable state.
pub struct CandlepinClient {
    config: CandlepinConfig,
    http: Client,
    signer: OAuthSigner,
}

impl CandlepinClient {
    /// Creates a client from connection settings.
    ///
    /// A zero `timeout_secs` is rejected; every request must be bounded.
    pub fn new(config: CandlepinConfig) -> CandlepinResult<Self> {
        if config.timeout_secs == 0 {
            return Err(CandlepinError::Config(
                "timeout_secs must be positive".to_string(),
            ));
        }

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(path) = &config.ca_cert {
            let pem = std::fs::read(path).map_err(|e| {
                CandlepinError::Config(format!("cannot read CA certificate {}: {e}", path.display()))
            })?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }
        if config.accept_invalid_certs {
            warn!("TLS certificate verification disabled for {}", config.base_url);
            builder = builder.danger_accept_invalid_certs(true);
        }

        let signer = OAuthSigner::new(&config.consumer_key, &config.consumer_secret);

        Ok(Self {
            http: builder.build()?,
            signer,
            config,
        })
    }

    /// Returns the settings this client was built with.
    pub fn config(&self) -> &CandlepinConfig {
        &self.config
    }

    /// Issues one signed request.
    ///
    /// `path` must begin with `/` and is appended to the base URL. A 404
    /// is [`CandlepinError::NotFound`]; any other status except 200 and 204
    /// is [`CandlepinError::RequestFailed`].
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        format: ResponseFormat,
    ) -> CandlepinResult<Payload> {
        if !path.starts_with('/') {
            return Err(CandlepinError::InvalidPath(path.to_string()));
        }

        let full_url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let url = Url::parse(&full_url)
            .map_err(|e| CandlepinError::Config(format!("invalid request URL {full_url}: {e}")))?;

        let authorization = self.signer.authorization_header(method.as_str(), &url);

        debug!("Candlepin request: {} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, authorization)
            .header(ADMIN_USER_HEADER, &self.config.admin_user);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        if status == 404 {
            debug!("Candlepin {} {}: not found", method, path);
            return Err(CandlepinError::NotFound);
        }
        if status != 200 && status != 204 {
            let body = response.text().await.unwrap_or_default();
            warn!("Candlepin {} {} failed with status {}", method, path, status);
            return Err(CandlepinError::RequestFailed { status, body });
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Payload::Empty);
        }

        match format {
            ResponseFormat::Json => Ok(Payload::Json(serde_json::from_str(&text)?)),
            ResponseFormat::Raw => Ok(Payload::Raw(text)),
        }
    }

    /// Issues a request and deserializes the JSON body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> CandlepinResult<T> {
        let payload = self
            .request(path, method, body, ResponseFormat::Json)
            .await?;
        Ok(serde_json::from_value(payload.into_json())?)
    }

    /// Issues a request whose response body, if any, is ignored.
    pub(crate) async fn request_unit(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> CandlepinResult<()> {
        self.request(path, method, body, ResponseFormat::Json)
            .await
            .map(|_| ())
    }

    /// Issues a GET expecting a JSON array; an empty body is an empty list.
    pub(crate) async fn request_list(&self, path: &str) -> CandlepinResult<Vec<Value>> {
        match self
            .request(path, Method::GET, None, ResponseFormat::Json)
            .await?
        {
            Payload::Json(Value::Array(items)) => Ok(items),
            Payload::Empty => Ok(Vec::new()),
            other => Err(CandlepinError::UnexpectedResponse(format!(
                "expected a JSON array from {path}, got {other:?}"
            ))),
        }
    }
}
