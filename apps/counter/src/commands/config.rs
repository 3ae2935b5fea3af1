//! # Config Commands
//!
//! Shows the active counter configuration.

use tracing::debug;

use crate::error::AppError;
use crate::state::CounterConfig;

/// The configuration as pretty JSON.
pub fn show_config(config: &CounterConfig) -> Result<String, AppError> {
    debug!("config command");

    serde_json::to_string_pretty(config).map_err(|e| AppError::internal(e.to_string()))
}
