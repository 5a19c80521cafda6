//! Request payloads sent to the event service

use crate::error::WorkQueueError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Team owner stamped on events registered from this tool.
pub const TEAM_OWNER: &str = "CLI";

/// Untyped JSON object forwarded as-is by `add-consumer` and `test-producer`.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCreation {
    pub event_name: String,
    pub service_name: String,
    pub repo_url: String,
    pub team_owner: String,
}

impl EventCreation {
    pub fn new(
        event_name: impl Into<String>,
        service_name: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            service_name: service_name.into(),
            repo_url: repo_url.into(),
            team_owner: TEAM_OWNER.to_string(),
        }
    }
}

/// An event together with the triggers that consume it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerBulkRegistration {
    pub name: String,
    pub service_name: String,
    pub repo_url: String,
    pub team_owner: String,
    pub triggers: Vec<Trigger>,
}

/// Webhook target invoked when the event fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trigger {
    pub service_name: String,
    #[serde(rename = "type")]
    pub trigger_type: String,
    pub host: String,
    pub path: String,
    pub headers: HashMap<String, String>,
}

/// Read `path` and decode its JSON content into `T`.
pub fn load_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, WorkQueueError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| WorkQueueError::from_io_error(e, &display))?;
    debug!("Loaded {} bytes from '{display}'", content.len());
    serde_json::from_str(&content).map_err(|e| WorkQueueError::from_decode_error(e, &display))
}

/// Load a consumer registration file. The content must decode as a
/// [`ConsumerBulkRegistration`]; the raw object is what gets forwarded.
pub fn load_consumer_registration(path: impl AsRef<Path>) -> Result<JsonObject, WorkQueueError> {
    let path = path.as_ref();
    let object: JsonObject = load_json_file(path)?;
    ConsumerBulkRegistration::deserialize(&serde_json::Value::Object(object.clone()))
        .map_err(|e| WorkQueueError::from_decode_error(e, &path.display().to_string()))?;
    Ok(object)
}
