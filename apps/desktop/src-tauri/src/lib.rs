//! # RestaurantOS Desktop Library
//!
//! Configures and runs the Tauri app hosting the RestaurantOS shell.
//!
//! ## Module Organization
//! ```text
//! restaurantos_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── events.rs       ◄─── shell:* event emission
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── shell.rs    ◄─── Shell (navigation, transitions, toasts)
//! │   ├── cart.rs     ◄─── Cart provider
//! │   └── config.rs   ◄─── Configuration loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── shell.rs    ◄─── Frame, view selection, transitions
//! │   ├── quick_action.rs ◄─ Topbar quick actions
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod events;
pub mod state;

use std::sync::Arc;

use restaurantos_core::Shell;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use events::TauriShellEmitter;
use state::{AppConfig, CartState, ShellState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, debug for restaurantos crates (RUST_LOG overrides) │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • RESTAURANTOS_* env > config.toml > defaults                       │
/// │     • Invalid config logs a warning and falls back to defaults          │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ShellState: dashboard, not loaded, emits to this app              │
/// │     • CartState: empty cart shared by every view                        │
/// │     • AppConfig: read-only                                              │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting RestaurantOS Desktop");

    let config = AppConfig::load_or_default(None);
    info!(store = %config.store_name, "Configuration loaded");

    let result = tauri::Builder::default()
        .setup(move |app| {
            let emitter = Arc::new(TauriShellEmitter::new(app.handle().clone()));
            let shell = Shell::with_options(config.shell_options());

            app.manage(ShellState::with_emitter(shell, emitter));
            app.manage(CartState::new());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Shell commands
            commands::shell::get_shell_frame,
            commands::shell::get_view_registry,
            commands::shell::shell_mounted,
            commands::shell::select_view,
            commands::shell::navigate_to_pos,
            commands::shell::complete_exit_transition,
            commands::shell::complete_enter_transition,
            // Quick actions
            commands::quick_action::dispatch_quick_action,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Config commands
            commands::config::get_config,
            commands::config::format_currency,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!(error = %e, "Tauri application exited with an error");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=restaurantos_desktop_lib=trace` - Trace the desktop layer only
/// - Default: `info,restaurantos=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,restaurantos=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
