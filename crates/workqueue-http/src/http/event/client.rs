//! Event command handlers

use super::cli::EventCommand;
use crate::http::common::ApiResponse;
use crate::http::gateway::EventGateway;
use log::info;
use workqueue::payload::{load_consumer_registration, load_json_file};
use workqueue::{ConsumerBulkRegistration, JsonObject, WorkQueueError};

/// Load whatever input `command` needs and send it. Input problems abort before any
/// request is made.
pub async fn handle_event_command(
    gateway: &EventGateway,
    command: EventCommand,
) -> Result<ApiResponse, WorkQueueError> {
    info!("Running '{}' against {}", command.name(), gateway.host());
    match command {
        EventCommand::AddEvent(payload) => gateway.create_event(&payload).await,
        EventCommand::AddConsumer { json_file } => {
            let payload = load_consumer_registration(&json_file)?;
            gateway.register_consumer(&payload).await
        }
        EventCommand::TestProducer { json_file } => {
            let payload: JsonObject = load_json_file(&json_file)?;
            gateway.publish_test_event(&payload).await
        }
        EventCommand::RegisterTrigger { json_file } => {
            let payload: ConsumerBulkRegistration = load_json_file(&json_file)?;
            info!(
                "Registering {} trigger(s) for event '{}'",
                payload.triggers.len(),
                payload.name
            );
            gateway.register_trigger(&payload).await
        }
    }
}
