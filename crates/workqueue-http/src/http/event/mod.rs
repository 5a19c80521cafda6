pub mod cli;
pub mod client;

pub use cli::EventCommand;
pub use client::handle_event_command;
