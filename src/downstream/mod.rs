//! Downstream HTTP clients for the customer and item services
//!
//! Both services are addressed by numeric id only. The customer call
//! forwards the caller's credential verbatim; the item call carries none.
//! An authorization rejection is kept distinct from every other failure
//! mode so the aggregator can classify it separately.

use crate::core::auth::Credential;
use crate::core::model::{Customer, Item};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a downstream call
#[derive(Debug, Error)]
pub enum DownstreamError {
    /// The service rejected the forwarded credential (401/403)
    #[error("downstream service rejected the credential")]
    Unauthorized,

    /// The service reported no record for this id
    #[error("downstream record {id} not found")]
    NotFound { id: i64 },

    /// The response body could not be parsed into the expected shape
    #[error("malformed downstream payload: {message}")]
    InvalidPayload { message: String },

    /// Transport failure, timeout, or an unexpected status
    #[error("downstream service unavailable: {message}")]
    Unavailable { message: String },
}

/// Contract consumed by the aggregator for downstream lookups
#[async_trait]
pub trait DownstreamClient: Send + Sync {
    /// Resolve a customer by id, forwarding the caller's credential
    async fn get_customer(&self, id: i64, credential: &Credential)
        -> Result<Customer, DownstreamError>;

    /// Resolve an item by id
    async fn get_item(&self, id: i64) -> Result<Item, DownstreamError>;
}

/// Reqwest-backed downstream client
///
/// Every call carries a bounded timeout so a stalled downstream cannot hold
/// an inbound request open indefinitely.
pub struct HttpDownstreamClient {
    http: reqwest::Client,
    customer_base_url: String,
    item_base_url: String,
}

impl HttpDownstreamClient {
    pub fn new(
        customer_base_url: impl Into<String>,
        item_base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            customer_base_url: trim_trailing_slash(customer_base_url.into()),
            item_base_url: trim_trailing_slash(item_base_url.into()),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: String,
        id: i64,
        credential: Option<&str>,
    ) -> Result<T, DownstreamError> {
        let mut request = self.http.get(&url);
        if let Some(value) = credential {
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "downstream call failed");
            DownstreamError::Unavailable {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DownstreamError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(DownstreamError::NotFound { id });
        }
        if !status.is_success() {
            return Err(DownstreamError::Unavailable {
                message: format!("unexpected status {status} from {url}"),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DownstreamError::InvalidPayload {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl DownstreamClient for HttpDownstreamClient {
    async fn get_customer(
        &self,
        id: i64,
        credential: &Credential,
    ) -> Result<Customer, DownstreamError> {
        let url = format!("{}/customers/{}", self.customer_base_url, id);
        self.fetch(url, id, credential.value()).await
    }

    async fn get_item(&self, id: i64) -> Result<Item, DownstreamError> {
        let url = format!("{}/item/{}", self.item_base_url, id);
        self.fetch(url, id, None).await
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
