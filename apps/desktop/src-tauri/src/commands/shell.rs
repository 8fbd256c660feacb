//! # Shell Commands
//!
//! Tauri commands for the shell chrome and the content region.
//!
//! ## Frontend Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App mounts ──────────────► shell_mounted()          (root fades in)    │
//! │                                                                         │
//! │  Sidebar click ───────────► select_view(view)        (lit immediately)  │
//! │  Topbar POS / cart badge ─► navigate_to_pos(source)                     │
//! │                                                                         │
//! │  Old screen faded out ────► complete_exit_transition(mountKey)          │
//! │  New screen faded in ─────► complete_enter_transition(mountKey)         │
//! │                                                                         │
//! │  Every command returns the fresh ShellFrame; draw it as-is.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these commands can fail.

use restaurantos_core::{NavigationSource, Screen, ShellFrame};
use tauri::State;
use tracing::debug;

use crate::state::{CartState, ShellState};

/// Renders the current frame with the shared cart's totals.
fn render(shell: &ShellState, cart: &CartState) -> ShellFrame {
    let totals = cart.totals();
    shell.frame(&totals)
}

/// Gets the current shell frame.
#[tauri::command]
pub fn get_shell_frame(shell: State<'_, ShellState>, cart: State<'_, CartState>) -> ShellFrame {
    debug!("get_shell_frame command");
    render(&shell, &cart)
}

/// Lists every screen in sidebar order.
#[tauri::command]
pub fn get_view_registry(shell: State<'_, ShellState>) -> Vec<Screen> {
    debug!("get_view_registry command");
    shell.screens()
}

/// Reports that the frontend finished its first mount.
#[tauri::command]
pub fn shell_mounted(shell: State<'_, ShellState>, cart: State<'_, CartState>) -> ShellFrame {
    debug!("shell_mounted command");
    shell.mount_complete();
    render(&shell, &cart)
}

/// Selects a view by identifier.
///
/// ## Arguments
/// * `view` - View identifier (`"kds"`, `"settings"`, ...). Unknown values
///   select the dashboard.
/// * `source` - Who asked (default: sidebar)
#[tauri::command]
pub fn select_view(
    shell: State<'_, ShellState>,
    cart: State<'_, CartState>,
    view: String,
    source: Option<NavigationSource>,
) -> ShellFrame {
    let source = source.unwrap_or(NavigationSource::Sidebar);
    debug!(view = %view, ?source, "select_view command");

    shell.select_view(&view, source);
    render(&shell, &cart)
}

/// The topbar's POS button and the floating cart indicator.
#[tauri::command]
pub fn navigate_to_pos(
    shell: State<'_, ShellState>,
    cart: State<'_, CartState>,
    source: Option<NavigationSource>,
) -> ShellFrame {
    let source = source.unwrap_or(NavigationSource::Topbar);
    debug!(?source, "navigate_to_pos command");

    shell.navigate_to_pos(source);
    render(&shell, &cart)
}

/// The outgoing screen finished its exit animation.
#[tauri::command]
pub fn complete_exit_transition(
    shell: State<'_, ShellState>,
    cart: State<'_, CartState>,
    mount_key: u64,
) -> ShellFrame {
    debug!(mount_key, "complete_exit_transition command");
    shell.exit_complete(mount_key);
    render(&shell, &cart)
}

/// The incoming screen finished its enter animation.
#[tauri::command]
pub fn complete_enter_transition(
    shell: State<'_, ShellState>,
    cart: State<'_, CartState>,
    mount_key: u64,
) -> ShellFrame {
    debug!(mount_key, "complete_enter_transition command");
    shell.enter_complete(mount_key);
    render(&shell, &cart)
}
