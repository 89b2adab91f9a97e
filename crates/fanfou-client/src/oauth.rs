//! OAuth 1.0a request signing
//!
//! Fanfou authenticates every API call with an HMAC-SHA1 signed
//! `Authorization` header. This module holds the credential types and the
//! signer that produces that header.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore;
use sha1::Sha1;

use crate::{Error, Result};

/// RFC 3986 unreserved characters stay as-is: ALPHA / DIGIT / "-" / "." / "_" / "~"
pub(crate) const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Application credentials (consumer key and secret)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerCredentials {
    key: String,
    secret: String,
}

impl ConsumerCredentials {
    /// Create consumer credentials
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Consumer key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Consumer secret
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Per-user access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    secret: String,
}

impl AccessToken {
    /// Create an access token
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Token value
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Token secret
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// OAuth 1.0a signer bound to one consumer and one access token
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    consumer: ConsumerCredentials,
    token: AccessToken,
}

impl OAuthSigner {
    /// Create a signer, rejecting empty credential material
    pub fn new(consumer: ConsumerCredentials, token: AccessToken) -> Result<Self> {
        if consumer.key.is_empty() || consumer.secret.is_empty() {
            return Err(Error::Auth("consumer key and secret are required".into()));
        }
        if token.token.is_empty() || token.secret.is_empty() {
            return Err(Error::Auth("access token and secret are required".into()));
        }
        Ok(Self { consumer, token })
    }

    /// Generate the `Authorization` header value for a request.
    ///
    /// `url` must not carry a query string; query and url-encoded form
    /// parameters go in `params`. Multipart parts are never signed.
    pub fn sign(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| Error::Auth(format!("Failed to get timestamp: {e}")))?
            .as_secs()
            .to_string();

        self.sign_with(method, url, params, &timestamp, &generate_nonce())
    }

    /// Sign with a fixed timestamp and nonce
    pub fn sign_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        timestamp: &str,
        nonce: &str,
    ) -> Result<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.consumer.key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.token.token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer.secret),
            percent_encode(&self.token.secret)
        );

        let signature = hmac_sha1(&signing_key, &base_string)?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }
}

/// Percent-encode a string according to RFC 3986.
fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compute HMAC-SHA1 and return the base64-encoded digest.
fn hmac_sha1(key: &str, data: &str) -> Result<String> {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).map_err(|e| Error::Auth(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
