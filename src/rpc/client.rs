// file: src/rpc/client.rs
// version: 1.0.0
// guid: c47e0b93-2a6f-4d18-b5c9-e80a14f3d672

//! HTTP transport for XML-RPC calls

use super::{decode_response, encode_call, Value};
use crate::config::EndpointConfig;
use crate::{Result, SwitchError};
use reqwest::header::CONTENT_TYPE;
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Issues a single remote call and returns the peer's value
#[async_trait::async_trait]
pub trait RpcTransport: Send + Sync {
    /// Call `method` with positional `params`
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value>;
}

/// XML-RPC over HTTP POST.
///
/// Idle connections are never pooled, so each call owns exactly one
/// connection which is closed once the response has been read.
pub struct XmlRpcClient {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl XmlRpcClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        endpoint.validate()?;
        let timeout = endpoint.timeout();

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SwitchError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: endpoint.url()?,
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> SwitchError {
        if err.is_timeout() {
            return SwitchError::Timeout(self.timeout.as_secs());
        }

        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        SwitchError::connection(detail)
    }
}

#[async_trait::async_trait]
impl RpcTransport for XmlRpcClient {
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value> {
        let body = encode_call(method, params);
        debug!("POST {} method={}", self.url, method);
        trace!("Request body: {}", body);

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SwitchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            SwitchError::malformed(format!("response body is not valid UTF-8: {}", e))
        })?;
        trace!("Response body: {}", text);

        decode_response(text)
    }
}
