//! Endpoint paths and response types shared by the CLI and the gateway

use std::fmt;

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const CREATE_EVENT_PATH: &str = "/event/create";
pub const REGISTER_CONSUMER_PATH: &str = "/event/consumer";
pub const REGISTER_TRIGGER_PATH: &str = "/event/register";
pub const PUBLISH_TEST_EVENT_PATH: &str = "/event/publisher";

/// Join `host` and an endpoint `path`, dropping trailing slashes on the host.
pub fn endpoint_url(host: &str, path: &str) -> String {
    format!("{}{path}", host.trim_end_matches('/'))
}

// =============================================================================
// RESPONSES
// =============================================================================

/// A response the service actually sent, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(f, "✅ Success! Response: {}", self.body)
        } else {
            write!(
                f,
                "❌ Error! Status: {}, Response: {}",
                self.status, self.body
            )
        }
    }
}
