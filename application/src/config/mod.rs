//! Application-level configuration.
//!
//! - [`SessionParams`]: chat session control (bot name, exit words, history file)

pub mod session_params;

pub use session_params::{DEFAULT_EXIT_COMMANDS, DEFAULT_HISTORY_FILE, SessionParams};
