//! # Config Commands
//!
//! Tauri commands for retrieving application configuration.

use tauri::State;
use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (window title, currency display)
/// - Help page contact details
#[tauri::command]
pub fn get_config(config: State<'_, AppConfig>) -> AppConfig {
    debug!("get_config command");
    (*config).clone()
}

/// Formats cents with the configured currency symbol.
#[tauri::command]
pub fn format_currency(config: State<'_, AppConfig>, cents: i64) -> String {
    config.format_currency(cents)
}
