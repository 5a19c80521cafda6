pub mod cli;
pub mod common;
pub mod event;
pub mod flags;
pub mod gateway;

pub use common::*;
pub use flags::FlagParser;
pub use gateway::EventGateway;
