//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `dispatcher`: routes fetched update batches in delivery order
//! - `message_handler`: handles the start command and link-bearing messages
//! - `callback_handler`: acknowledges inline keyboard callback queries
//! - `ui_builder`: fixed strings, keyboards and report formatting

pub mod callback_handler;
pub mod dispatcher;
pub mod message_handler;
pub mod ui_builder;

// Re-export the dispatcher and handler entry points
pub use dispatcher::UpdateDispatcher;
pub use callback_handler::handle_callback;
pub use message_handler::{handle_message, START_COMMAND};

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{create_welcome_keyboard, format_link_report, CALLBACK_ACK_TEXT, WELCOME_TEXT};
