//! Command dispatch and reporting for the workqueue CLI

use super::common::ApiResponse;
use super::event::{EventCommand, handle_event_command};
use super::flags::{FlagParser, HOST_FLAG};
use super::gateway::EventGateway;
use log::debug;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use workqueue::config::{DEFAULT_HOST, HOST_ENV, TIMEOUT_ENV};
use workqueue::{ClientConfig, UsageError, WorkQueueError};

pub const EVENT_COMMAND: &str = "event";
pub const PROGRAM_NAME: &str = "workqueue";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// INVOCATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    Version,
    Event { host: String, command: EventCommand },
}

/// What a successful run has to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Usage,
    Version,
    Response(ApiResponse),
}

pub fn parse_invocation(
    flags: &FlagParser,
    config: &ClientConfig,
) -> Result<Invocation, WorkQueueError> {
    let command = flags.command().ok_or(UsageError::MissingCommand)?;
    match command {
        EVENT_COMMAND => parse_event_invocation(flags, config),
        "version" | "--version" | "-v" => Ok(Invocation::Version),
        "help" | "--help" | "-h" => Ok(Invocation::Help),
        other => Err(UsageError::UnknownCommand {
            command: other.to_string(),
        }
        .into()),
    }
}

fn parse_event_invocation(
    flags: &FlagParser,
    config: &ClientConfig,
) -> Result<Invocation, WorkQueueError> {
    let missing_subcommand = || UsageError::MissingSubcommand {
        command: EVENT_COMMAND.to_string(),
    };
    if flags.len() < 3 {
        return Err(missing_subcommand().into());
    }

    let host = flags.global_flag(HOST_FLAG, &config.default_host).to_string();
    let subcommand = flags.subcommand().ok_or_else(missing_subcommand)?;
    let command = EventCommand::from_flags(subcommand, flags)?;
    debug!("Dispatching '{subcommand}' to {host}");
    Ok(Invocation::Event { host, command })
}

// =============================================================================
// EXECUTION
// =============================================================================

pub async fn run_invocation(
    invocation: Invocation,
    config: &ClientConfig,
    cancel: CancellationToken,
) -> Result<Report, WorkQueueError> {
    match invocation {
        Invocation::Help => Ok(Report::Usage),
        Invocation::Version => Ok(Report::Version),
        Invocation::Event { host, command } => {
            let gateway = EventGateway::from_config(config, host, cancel)?;
            handle_event_command(&gateway, command)
                .await
                .map(Report::Response)
        }
    }
}

/// Parse and run one invocation.
pub async fn execute(
    flags: &FlagParser,
    config: &ClientConfig,
    cancel: CancellationToken,
) -> Result<Report, WorkQueueError> {
    let invocation = parse_invocation(flags, config)?;
    run_invocation(invocation, config, cancel).await
}

// =============================================================================
// REPORTING
// =============================================================================

pub fn write_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    let p = PROGRAM_NAME;
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "  {p} event [--host <host>] add-event --name <name> --serviceName <service> --repoUrl <url>"
    )?;
    writeln!(out, "  {p} event [--host <host>] add-consumer --json_file <file>")?;
    writeln!(out, "  {p} event [--host <host>] test-producer --json_file <file>")?;
    writeln!(out, "  {p} event [--host <host>] register-trigger --json_file <file>")?;
    writeln!(out, "  {p} version | --version | -v")?;
    writeln!(out, "  {p} help | --help | -h")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  {HOST_ENV:<24}default host (default: {DEFAULT_HOST})")?;
    writeln!(out, "  {TIMEOUT_ENV:<24}request timeout in seconds (default: none)")?;
    writeln!(out, "  {:<24}log filter, written to stderr (default: warn)", "RUST_LOG")
}

/// Print the outcome of a run and return the process exit code.
pub fn report<W: Write>(result: Result<Report, WorkQueueError>, out: &mut W) -> u8 {
    let (written, code) = match result {
        Ok(Report::Usage) => (write_usage(out), 0),
        Ok(Report::Version) => (writeln!(out, "{PROGRAM_NAME} {VERSION}"), 0),
        // A non-2xx answer is reported but is not a failure of the tool itself
        Ok(Report::Response(response)) => (writeln!(out, "{response}"), 0),
        Err(error) => {
            let mut written = writeln!(out, "Error: {error}");
            if written.is_ok() && error.shows_usage() {
                written = write_usage(out);
            }
            (written, error.exit_code())
        }
    };
    if let Err(e) = written {
        debug!("Failed to write report: {e}");
    }
    code
}

// =============================================================================
// UNIT TESTS
// =============================================================================
