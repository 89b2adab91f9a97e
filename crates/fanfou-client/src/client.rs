//! Client - entry point for the Fanfou API
//!
//! A [`Client`] is created from consumer credentials, then authorized with an
//! access token, which builds the OAuth-signing transport. Endpoint methods
//! live in [`crate::endpoints`]; each one validates its parameters, builds an
//! [`ApiRequest`], sends it through the transport and classifies the reply.
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
//!     let timeline = client
//!         .statuses_home_timeline(&ReqParams::new().count("20"))
//!         .await?;
//!     for status in timeline.data {
//!         println!("{}: {}", status.id, status.text);
//!     }
//!     Ok(())
//! }
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

use crate::classify::{classify, ApiResponse};
use crate::config::ClientConfig;
use crate::oauth::{AccessToken, ConsumerCredentials, OAuthSigner};
use crate::params::ReqParams;
use crate::request::ApiRequest;
use crate::transport::{SignedTransport, Transport};
use crate::{Error, Result};

/// Fanfou API client
///
/// Cheap to clone; clones share the transport and its connection pool.
#[derive(Clone)]
pub struct Client {
    consumer: ConsumerCredentials,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("consumer_key", &self.consumer.key())
            .field("config", &self.config)
            .field("authorized", &self.is_authorized())
            .finish()
    }
}

impl Client {
    /// Create an unauthorized client from consumer credentials
    ///
    /// No network I/O happens until an endpoint is called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fanfou_client::Client;
    ///
    /// let client = Client::new_with_oauth("consumer-key", "consumer-secret");
    /// assert!(!client.is_authorized());
    /// ```
    pub fn new_with_oauth(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self::with_config(
            ConsumerCredentials::new(consumer_key, consumer_secret),
            ClientConfig::default(),
        )
    }

    /// Create an unauthorized client with custom configuration
    pub fn with_config(consumer: ConsumerCredentials, config: ClientConfig) -> Self {
        Self {
            consumer,
            config,
            transport: None,
        }
    }

    /// Attach an access token and build the signing transport
    ///
    /// Fails with [`Error::Auth`] when any credential is empty or the HTTP
    /// client cannot be built.
    pub fn authorize(mut self, token: AccessToken) -> Result<Self> {
        let signer = OAuthSigner::new(self.consumer.clone(), token)?;
        let transport = SignedTransport::new(self.config.clone(), signer)?;
        tracing::debug!(base_url = %self.config.base_url, "client authorized");
        self.transport = Some(Arc::new(transport));
        Ok(self)
    }

    /// Replace the transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Whether a transport is attached
    pub fn is_authorized(&self) -> bool {
        self.transport.is_some()
    }

    /// Get the consumer credentials
    pub fn consumer(&self) -> &ConsumerCredentials {
        &self.consumer
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET request carrying every set parameter
    pub(crate) async fn get<T>(&self, path: &str, params: &ReqParams) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.send(ApiRequest::get(path).params(params.pairs())).await
    }

    /// Send a url-encoded POST request carrying every set parameter
    pub(crate) async fn post<T>(&self, path: &str, params: &ReqParams) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).params(params.pairs())).await
    }

    /// Send a multipart POST with `file` attached under `field`
    pub(crate) async fn upload<T>(
        &self,
        path: &str,
        field: &str,
        file: &Path,
        params: &ReqParams,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path).params(params.pairs()).file(field, file);
        self.send(request).await
    }

    async fn send<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| Error::Auth("no access token attached - call authorize first".into()))?;

        let path = request.path.clone();
        let response = transport.execute(request).await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "request failed");
            e
        })?;

        classify(response)
    }
}
