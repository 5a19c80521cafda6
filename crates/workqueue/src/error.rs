use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkQueueError {
    Usage(UsageError),
    FileRead { path: String, reason: String },
    Decode { path: String, reason: String },
    Serialization { reason: String },
    Transport(TransportError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    MissingCommand,
    UnknownCommand { command: String },
    MissingSubcommand { command: String },
    UnknownSubcommand { subcommand: String },
    MissingFlags { flags: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    ClientSetup { reason: String },
    InvalidRequest { url: String, reason: String },
    RequestFailed { url: String, reason: String },
    ResponseRead { url: String, reason: String },
    Cancelled { url: String },
}

impl fmt::Display for WorkQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkQueueError::Usage(err) => write!(f, "{err}"),
            WorkQueueError::FileRead { path, reason } => {
                write!(f, "failed to read JSON file '{path}': {reason}")
            }
            WorkQueueError::Decode { path, reason } => {
                write!(f, "failed to parse JSON file '{path}': {reason}")
            }
            WorkQueueError::Serialization { reason } => {
                write!(f, "failed to marshal payload: {reason}")
            }
            WorkQueueError::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingCommand => write!(f, "missing command"),
            UsageError::UnknownCommand { command } => write!(f, "unknown command: {command}"),
            UsageError::MissingSubcommand { command } => {
                write!(f, "missing subcommand for '{command}'")
            }
            UsageError::UnknownSubcommand { subcommand } => {
                write!(f, "unknown subcommand: {subcommand}")
            }
            UsageError::MissingFlags { flags } => {
                let verb = if flags.len() == 1 { "is" } else { "are" };
                write!(f, "{} {verb} required", join_flags(flags))
            }
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ClientSetup { reason } => {
                write!(f, "failed to set up HTTP client: {reason}")
            }
            TransportError::InvalidRequest { url, reason } => {
                write!(f, "failed to create request for {url}: {reason}")
            }
            TransportError::RequestFailed { url, reason } => {
                write!(f, "failed to make request to {url}: {reason}")
            }
            TransportError::ResponseRead { url, reason } => {
                write!(f, "failed to read response from {url}: {reason}")
            }
            TransportError::Cancelled { url } => write!(f, "request to {url} was cancelled"),
        }
    }
}

impl std::error::Error for WorkQueueError {}
impl std::error::Error for UsageError {}
impl std::error::Error for TransportError {}

/// "--a", "--a and --b", "--a, --b, and --c"
fn join_flags(flags: &[&str]) -> String {
    match flags {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

impl WorkQueueError {
    /// Process exit code for this error class. Usage problems get 2, everything else 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            WorkQueueError::Usage(_) => 2,
            WorkQueueError::FileRead { .. }
            | WorkQueueError::Decode { .. }
            | WorkQueueError::Serialization { .. }
            | WorkQueueError::Transport(_) => 1,
        }
    }

    /// Whether the usage text should accompany the error line.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            WorkQueueError::Usage(
                UsageError::MissingCommand
                    | UsageError::UnknownCommand { .. }
                    | UsageError::MissingSubcommand { .. }
                    | UsageError::UnknownSubcommand { .. }
            )
        )
    }

    pub fn from_io_error(e: std::io::Error, path: &str) -> Self {
        WorkQueueError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_decode_error(e: impl fmt::Display, path: &str) -> Self {
        WorkQueueError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        }
    }
}

impl From<UsageError> for WorkQueueError {
    fn from(err: UsageError) -> Self {
        WorkQueueError::Usage(err)
    }
}

impl From<TransportError> for WorkQueueError {
    fn from(err: TransportError) -> Self {
        WorkQueueError::Transport(err)
    }
}

impl From<serde_json::Error> for WorkQueueError {
    fn from(err: serde_json::Error) -> Self {
        WorkQueueError::Serialization {
            reason: err.to_string(),
        }
    }
}
