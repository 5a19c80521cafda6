//! Command-line client for the event registration service

pub mod http;

pub use http::*;
