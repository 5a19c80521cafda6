//! HTTP gateway to the event service

use super::common::*;
use log::{debug, info};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use workqueue::{
    ClientConfig, ConsumerBulkRegistration, EventCreation, JsonObject, TransportError,
    WorkQueueError,
};

pub struct EventGateway {
    client: reqwest::Client,
    host: String,
    cancel: CancellationToken,
}

impl EventGateway {
    pub fn new(client: reqwest::Client, host: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            client,
            host: host.into(),
            cancel,
        }
    }

    /// Build a gateway with a client honoring `config.timeout`.
    pub fn from_config(
        config: &ClientConfig,
        host: impl Into<String>,
        cancel: CancellationToken,
    ) -> Result<Self, WorkQueueError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TransportError::ClientSetup {
            reason: e.to_string(),
        })?;
        Ok(Self::new(client, host, cancel))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.host, path)
    }

    /// Send `payload` as a JSON body and read the whole response.
    ///
    /// Any status code is returned as an [`ApiResponse`]; only serialization, transport and
    /// cancellation failures are errors. Nothing is retried.
    #[tracing::instrument(level = "debug", skip(self, payload))]
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        payload: &T,
    ) -> Result<ApiResponse, WorkQueueError> {
        let body = serde_json::to_vec(payload)?;

        let request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let exchange = async {
            let response = self
                .client
                .execute(request)
                .await
                .map_err(|e| TransportError::RequestFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;
            let status = response.status().as_u16();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| TransportError::ResponseRead {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;
            Ok::<_, TransportError>(ApiResponse {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        };

        let response = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                info!("Request to {url} cancelled");
                return Err(TransportError::Cancelled { url: url.to_string() }.into());
            }
            result = exchange => result?,
        };

        debug!("{url} responded with status {}", response.status);
        Ok(response)
    }

    pub async fn create_event(&self, payload: &EventCreation) -> Result<ApiResponse, WorkQueueError> {
        let url = self.endpoint(CREATE_EVENT_PATH);
        self.send_json(Method::POST, &url, payload).await
    }

    pub async fn register_consumer(
        &self,
        payload: &JsonObject,
    ) -> Result<ApiResponse, WorkQueueError> {
        let url = self.endpoint(REGISTER_CONSUMER_PATH);
        self.send_json(Method::POST, &url, payload).await
    }

    pub async fn register_trigger(
        &self,
        payload: &ConsumerBulkRegistration,
    ) -> Result<ApiResponse, WorkQueueError> {
        let url = self.endpoint(REGISTER_TRIGGER_PATH);
        self.send_json(Method::POST, &url, payload).await
    }

    pub async fn publish_test_event(
        &self,
        payload: &JsonObject,
    ) -> Result<ApiResponse, WorkQueueError> {
        let url = self.endpoint(PUBLISH_TEST_EVENT_PATH);
        self.send_json(Method::POST, &url, payload).await
    }
}
