pub mod config;
pub mod error;
pub mod payload;
pub mod telemetry;

pub use config::ClientConfig;
pub use error::{TransportError, UsageError, WorkQueueError};
pub use payload::{ConsumerBulkRegistration, EventCreation, JsonObject, TEAM_OWNER, Trigger};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};
