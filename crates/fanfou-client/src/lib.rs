//! Fanfou API Client Library
//!
//! This crate provides an async Rust client for the Fanfou HTTP API, including
//! OAuth 1.0a request signing, one method per remote endpoint, and a uniform
//! response classifier that maps every reply to a typed payload or an [`Error`].
//!
//! # Example
//!
//! ```rust,no_run
//! use fanfou_client::{AccessToken, Client, ReqParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new_with_oauth("consumer-key", "consumer-secret")
//!         .authorize(AccessToken::new("token", "token-secret"))?;
//!
//!     let params = ReqParams::new().status("hello fanfou");
//!     let response = client.statuses_update(&params).await?;
//!     println!("posted {}", response.data.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod oauth;
pub mod params;
pub mod request;
pub mod transport;
pub mod types;

pub use classify::{classify, ApiResponse, Outcome};
pub use client::Client;
pub use config::ClientConfig;
pub use oauth::{AccessToken, ConsumerCredentials, OAuthSigner};
pub use params::ReqParams;
pub use request::{ApiRequest, HttpMethod, RawResponse};
pub use transport::{SignedTransport, Transport};

use bytes::Bytes;

/// Result type for Fanfou API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Fanfou API operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credential or signing-transport setup failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A required parameter is missing or an upload file is unreadable
    #[error("Validation error: {0}")]
    Validation(String),

    /// No response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
        /// Request path echoed back by the server, when present
        request: Option<String>,
    },

    /// A success status carried a body that does not match the expected shape
    #[error("Decode error: {source}")]
    Decode {
        /// Underlying JSON error
        source: serde_json::Error,
        /// The undecodable response body
        raw: Bytes,
    },
}

impl Error {
    /// Raw response body attached to this error.
    ///
    /// Only decode failures keep the body; error statuses never do.
    pub fn raw_body(&self) -> Option<&Bytes> {
        match self {
            Error::Decode { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// HTTP status code, for errors that came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// Check if the server failed to handle the request (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}
