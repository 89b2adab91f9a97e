//! Response classification
//!
//! Every endpoint funnels its reply through [`classify`], which turns a raw
//! `(status, body)` pair into either a typed [`ApiResponse`] or an [`Error`]:
//!
//! | Status | Outcome |
//! |---|---|
//! | 2xx, body decodes | `Ok(ApiResponse)` carrying payload and raw body |
//! | 2xx, body does not decode | `Err(Error::Decode)` carrying the raw body |
//! | anything else | `Err(Error::Api)` with no raw body |
//!
//! Classification is a pure function of its input.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::request::RawResponse;
use crate::{Error, Result};

/// Successful, decoded API response
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded payload
    pub data: T,
    /// Body bytes as received
    pub raw: Bytes,
    /// Response headers, keyed by lowercase name
    pub headers: HashMap<String, String>,
}

impl<T> ApiResponse<T> {
    /// Get a response header by lowercase name
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// Error body returned by the Fanfou API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Request path echoed by the server
    #[serde(default)]
    pub request: Option<String>,
    /// Error message
    pub error: String,
}

/// Classify a raw response into a typed payload or an error
pub fn classify<T>(response: RawResponse) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let success = response.is_success();
    let RawResponse {
        status,
        headers,
        body,
    } = response;

    if !success {
        let (message, request) = match serde_json::from_slice::<ApiErrorBody>(&body) {
            Ok(parsed) => (parsed.error, parsed.request),
            Err(_) => (fallback_message(status, &body), None),
        };
        tracing::warn!(status, %message, "API returned an error status");
        return Err(Error::Api {
            status,
            message,
            request,
        });
    }

    match serde_json::from_slice::<T>(&body) {
        Ok(data) => Ok(ApiResponse {
            status,
            data,
            raw: body,
            headers,
        }),
        Err(source) => {
            tracing::warn!(status, error = %source, "response body does not match expected shape");
            Err(Error::Decode { source, raw: body })
        }
    }
}

fn fallback_message(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unknown error")
        .to_string()
}

/// The three-way view of a call: result, raw body, error
///
/// On success `result` and `raw` are set. On a decode failure `raw` and
/// `error` are set. On an error status only `error` is set.
#[derive(Debug)]
pub struct Outcome<T> {
    /// Decoded payload, if any
    pub result: Option<T>,
    /// Raw body, if the exchange produced a usable one
    pub raw: Option<Bytes>,
    /// Error, if the call failed
    pub error: Option<Error>,
}

impl<T> From<Result<ApiResponse<T>>> for Outcome<T> {
    fn from(result: Result<ApiResponse<T>>) -> Self {
        match result {
            Ok(response) => Self {
                result: Some(response.data),
                raw: Some(response.raw),
                error: None,
            },
            Err(error) => Self {
                result: None,
                raw: error.raw_body().cloned(),
                error: Some(error),
            },
        }
    }
}

impl<T> Outcome<T> {
    /// Whether the call failed
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl Outcome<bool> {
    /// Boolean endpoints report `false` whenever no result was decoded.
    pub fn flag(&self) -> bool {
        self.result.unwrap_or(false)
    }
}
