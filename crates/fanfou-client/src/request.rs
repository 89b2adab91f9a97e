//! Request and response values exchanged with a [`Transport`](crate::Transport)

use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

/// HTTP method for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request (reads)
    Get,
    /// POST request (writes and uploads)
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A single API request
///
/// Text parameters travel as the query string for GET and as a url-encoded
/// form for POST. When `files` is non-empty the POST body is multipart and the
/// text parameters become text parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint path without the `.json` suffix (e.g., "statuses/update")
    pub path: String,
    /// Text parameters
    pub params: Vec<(String, String)>,
    /// File parameters: form field name and local path
    pub files: Vec<(String, PathBuf)>,
}

impl ApiRequest {
    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create a new POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            params: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Add a text parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add every pair from an iterator
    pub fn params<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.params.extend(pairs);
        self
    }

    /// Attach a file under the given form field
    pub fn file(mut self, field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.files.push((field.into(), path.into()));
        self
    }

    /// Whether the body must be sent as multipart
    pub fn is_multipart(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Raw HTTP response before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Check if the response is successful (2xx status)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
