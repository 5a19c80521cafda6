//! Event subcommands and the flags each one requires

use crate::http::flags::FlagParser;
use std::path::PathBuf;
use workqueue::{EventCreation, UsageError, WorkQueueError};

// =============================================================================
// EVENT SUBCOMMANDS
// =============================================================================

pub const ADD_EVENT: &str = "add-event";
pub const ADD_CONSUMER: &str = "add-consumer";
pub const TEST_PRODUCER: &str = "test-producer";
pub const REGISTER_TRIGGER: &str = "register-trigger";

pub const NAME_FLAG: &str = "--name";
pub const SERVICE_NAME_FLAG: &str = "--serviceName";
pub const REPO_URL_FLAG: &str = "--repoUrl";
pub const JSON_FILE_FLAG: &str = "--json_file";

#[derive(Debug, Clone, PartialEq)]
pub enum EventCommand {
    AddEvent(EventCreation),
    AddConsumer { json_file: PathBuf },
    TestProducer { json_file: PathBuf },
    RegisterTrigger { json_file: PathBuf },
}

impl EventCommand {
    /// Resolve `subcommand` and pull its required flags out of `flags`.
    pub fn from_flags(subcommand: &str, flags: &FlagParser) -> Result<Self, WorkQueueError> {
        match subcommand {
            ADD_EVENT => {
                let name = flags.flag(NAME_FLAG);
                let service_name = flags.flag(SERVICE_NAME_FLAG);
                let repo_url = flags.flag(REPO_URL_FLAG);
                match (name, service_name, repo_url) {
                    (Some(name), Some(service_name), Some(repo_url)) => Ok(EventCommand::AddEvent(
                        EventCreation::new(name, service_name, repo_url),
                    )),
                    _ => Err(UsageError::MissingFlags {
                        flags: vec![NAME_FLAG, SERVICE_NAME_FLAG, REPO_URL_FLAG],
                    }
                    .into()),
                }
            }
            ADD_CONSUMER => Ok(EventCommand::AddConsumer {
                json_file: required_json_file(flags)?,
            }),
            TEST_PRODUCER => Ok(EventCommand::TestProducer {
                json_file: required_json_file(flags)?,
            }),
            REGISTER_TRIGGER => Ok(EventCommand::RegisterTrigger {
                json_file: required_json_file(flags)?,
            }),
            other => Err(UsageError::UnknownSubcommand {
                subcommand: other.to_string(),
            }
            .into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventCommand::AddEvent(_) => ADD_EVENT,
            EventCommand::AddConsumer { .. } => ADD_CONSUMER,
            EventCommand::TestProducer { .. } => TEST_PRODUCER,
            EventCommand::RegisterTrigger { .. } => REGISTER_TRIGGER,
        }
    }
}

fn required_json_file(flags: &FlagParser) -> Result<PathBuf, WorkQueueError> {
    flags.flag(JSON_FILE_FLAG).map(PathBuf::from).ok_or_else(|| {
        UsageError::MissingFlags {
            flags: vec![JSON_FILE_FLAG],
        }
        .into()
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
