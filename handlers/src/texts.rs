//! Fixed user-facing texts, button labels and callback payloads.

pub const WELCOME: &str = "Welcome! Join the queue or enter your access code to continue.";

pub const JOIN_QUEUE_LABEL: &str = "Join Queue";
pub const JOIN_QUEUE_DATA: &str = "join_queue";

pub const ENTER_CODE_LABEL: &str = "Enter Access Code";
pub const ENTER_CODE_DATA: &str = "enter_code";

pub const ENTER_CODE_PROMPT: &str = "Please enter your access code:";

pub const ACCESS_GRANTED: &str = "Access granted! Welcome aboard.";
pub const ACCESS_DENIED: &str = "Invalid access code.";

/// Compared case-insensitively against the user's reply.
pub const ACCESS_CODE: &str = "bullish";

pub fn received_command(name: &str) -> String {
    format!("Received command: /{}", name)
}
