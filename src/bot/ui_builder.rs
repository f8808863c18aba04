//! UI Builder module for the fixed user-facing strings, keyboards and reports

use serde_json::{json, Value};

/// Greeting sent in response to the start command
pub const WELCOME_TEXT: &str = "👋 Send me messages containing Telegram invite links \
and I will collect them. Public usernames and private invites are both recognized; \
every link is kept once, no matter how often it is posted.";

/// Label on the single inline button attached to the welcome message
pub const STATUS_BUTTON_LABEL: &str = "📋 Collector status";

/// Opaque payload carried by the status button; echoed back in callback updates
pub const STATUS_BUTTON_PAYLOAD: &str = "collector_status";

/// Transient notice used to close callback interactions
pub const CALLBACK_ACK_TEXT: &str = "Collector is running";

/// Create the inline keyboard attached to the welcome message.
///
/// One labeled button with an opaque payload; the remote client renders it,
/// nothing in it is interpreted locally.
pub fn create_welcome_keyboard() -> Value {
    json!({
        "inline_keyboard": [[
            { "text": STATUS_BUTTON_LABEL, "callback_data": STATUS_BUTTON_PAYLOAD }
        ]]
    })
}

/// Format the confirmation sent after links were extracted from a message.
///
/// The count is the number of links detected in that message, not the number
/// that survived dedup.
pub fn format_link_report(count: usize) -> String {
    if count == 1 {
        "🔗 Collected 1 invite link.".to_string()
    } else {
        format!("🔗 Collected {count} invite links.")
    }
}
