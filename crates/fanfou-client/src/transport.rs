//! HTTP transport
//!
//! [`Transport`] is the seam between endpoint methods and the network. The
//! production implementation, [`SignedTransport`], signs each request with
//! OAuth 1.0a and sends it with reqwest. Tests swap in their own.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::Client as ReqwestClient;
use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::oauth::OAuthSigner;
use crate::request::{ApiRequest, HttpMethod, RawResponse};
use crate::{Error, Result};

/// Sends an [`ApiRequest`] and returns the unclassified response
///
/// Implementations return `Err` only when no response was received; every
/// HTTP status, including errors, comes back as a [`RawResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// OAuth-signing transport over reqwest
#[derive(Debug, Clone)]
pub struct SignedTransport {
    http: ReqwestClient,
    config: ClientConfig,
    signer: OAuthSigner,
}

impl SignedTransport {
    /// Build the HTTP client for `config` and bind it to `signer`
    pub fn new(config: ClientConfig, signer: OAuthSigner) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Auth(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            signer,
        })
    }
}

#[async_trait]
impl Transport for SignedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.config.endpoint_url(&request.path);

        // Multipart parts are not part of the signature base string
        let signed: &[(String, String)] = if request.is_multipart() {
            &[]
        } else {
            &request.params
        };
        let authorization = self.signer.sign(request.method.as_str(), &url, signed)?;

        let mut req = match request.method {
            HttpMethod::Get => self.http.get(&url).query(&request.params),
            HttpMethod::Post => self.http.post(&url),
        };

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }
        req = req.header(AUTHORIZATION, authorization);

        if request.method == HttpMethod::Post {
            req = if request.is_multipart() {
                req.multipart(multipart_form(&request).await?)
            } else {
                req.form(&request.params)
            };
        }

        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            multipart = request.is_multipart(),
            "sending Fanfou API request"
        );

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(key.to_string(), value_str.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {e}")))?;

        tracing::debug!(status, bytes = body.len(), path = %request.path, "received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

async fn multipart_form(request: &ApiRequest) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in &request.params {
        form = form.text(key.clone(), value.clone());
    }

    for (field, path) in &request.files {
        let contents = tokio::fs::read(path).await.map_err(|e| {
            Error::Validation(format!("cannot read {field} file {}: {e}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| field.clone());
        form = form.part(field.clone(), Part::bytes(contents).file_name(file_name));
    }

    Ok(form)
}
