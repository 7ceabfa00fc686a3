// Responsible for all communication with the restaurants REST backend.

use crate::app::store::RestaurantStore;
use crate::domain::{Restaurant, RestaurantDraft, RestaurantId};
use crate::infra::config::{ClientConfig, RouteStyle, COLLECTION_PATH};
use crate::transport::http::types::Envelope;
use crate::transport::http::TransportError;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the `/restaurants` collection.
#[derive(Debug, Clone)]
pub struct RestaurantClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestaurantClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Reuses an existing connection pool.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/restaurants`
    pub fn collection_url(&self) -> Result<Url, TransportError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.config.base_url().to_string()))?
            .pop_if_empty()
            .push(COLLECTION_PATH);
        Ok(url)
    }

    /// `{base}/restaurants/{id}`, used by delete (and update in path style).
    pub fn item_url(&self, id: &RestaurantId) -> Result<Url, TransportError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.config.base_url().to_string()))?
            .push(id.as_str());
        Ok(url)
    }

    pub fn update_url(&self, id: &RestaurantId) -> Result<Url, TransportError> {
        match self.config.route_style() {
            RouteStyle::Legacy => {
                let mut url = self.collection_url()?;
                url.query_pairs_mut().append_pair("id", id.as_str());
                Ok(url)
            }
            RouteStyle::Path => self.item_url(id),
        }
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn send(&self, op: &'static str, request: RequestBuilder) -> Result<String, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!(op, status = status.as_u16(), "backend rejected request");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        tracing::debug!(op, status = status.as_u16(), bytes = body.len(), "backend responded");
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_inner())
}

/// Decodes the record echoed by a successful write.
///
/// The write already happened, so a body that is not a record (empty, or
/// `{ "message": "..." }`) is an acknowledgement rather than a failure.
fn decode_written(op: &'static str, body: &str) -> Option<Restaurant> {
    if body.trim().is_empty() {
        return None;
    }
    match decode::<Restaurant>(body) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!(op, error = %e, "response body is not a record, treating as acknowledgement");
            None
        }
    }
}

#[async_trait]
impl RestaurantStore for RestaurantClient {
    async fn list_all(&self) -> Result<Vec<Restaurant>, TransportError> {
        let url = self.collection_url()?;
        let body = self.send("list", self.http.get(url)).await?;
        decode(&body)
    }

    async fn create(&self, draft: &RestaurantDraft) -> Result<Option<Restaurant>, TransportError> {
        let url = self.collection_url()?;
        let body = self.send("create", self.http.post(url).json(draft)).await?;
        Ok(decode_written("create", &body))
    }

    async fn update(
        &self,
        id: &RestaurantId,
        draft: &RestaurantDraft,
    ) -> Result<Option<Restaurant>, TransportError> {
        let url = self.update_url(id)?;
        let body = self.send("update", self.http.put(url).json(draft)).await?;
        Ok(decode_written("update", &body))
    }

    async fn delete(&self, id: &RestaurantId) -> Result<(), TransportError> {
        let url = self.item_url(id)?;
        self.send("delete", self.http.delete(url)).await?;
        Ok(())
    }
}
