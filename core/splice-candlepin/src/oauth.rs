//! Two-legged OAuth 1.0a request signing (HMAC-SHA1).
//!
//! Candlepin trusts a fixed consumer key/secret pair; there is no token,
//! so the token secret in the signing key is always empty.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Url;
use sha1::Sha1;

/// Signature method advertised in every request.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol version advertised in every request.
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 16;

type HmacSha1 = Hmac<Sha1>;

/// Percent-encodes a value, keeping only RFC 3986 unreserved characters.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Returns the base string URI: scheme, host, non-default port and path.
pub fn normalized_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}

/// Builds the signature base string from the method, URL and all parameters.
///
/// `params` must contain both the oauth parameters and the decoded query
/// parameters; the query string of `url` itself is ignored.
pub fn signature_base_string(method: &str, url: &Url, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&normalized_url(url)),
        percent_encode(&normalized)
    )
}

/// Signs a base string, returning the base64 HMAC-SHA1 digest.
pub fn hmac_sha1_signature(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Signs requests with a consumer key/secret pair.
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    consumer_secret: String,
}

impl std::fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

impl OAuthSigner {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Returns the `Authorization` header for a request, with a fresh nonce
    /// and the current time.
    pub fn authorization_header(&self, method: &str, url: &Url) -> String {
        self.authorization_header_with(method, url, &generate_nonce(), chrono::Utc::now().timestamp())
    }

    /// Returns the `Authorization` header for a fixed nonce and timestamp.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];

        let mut params = oauth_params.clone();
        params.extend(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())));

        let base_string = signature_base_string(method, url, &params);
        let signature = hmac_sha1_signature(&base_string, &self.consumer_secret, "");
        oauth_params.push(("oauth_signature".to_string(), signature));

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth realm=\"\", {fields}")
    }
}
