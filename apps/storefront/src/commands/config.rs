//! # Config Commands
//!
//! Read-only access to the storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Returns the active configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
