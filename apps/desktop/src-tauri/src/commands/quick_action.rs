//! # Quick Action Commands
//!
//! The topbar's named actions.
//!
//! ```text
//! invoke('dispatch_quick_action', { action: 'new-order' })
//!     │
//!     ├──► shell:navigated     { from, to: "pos", source: "quickAction" }
//!     ├──► shell:notification  { severity: "success", message: "Opening POS..." }
//!     └──► returns ShellFrame
//! ```

use restaurantos_core::{QuickAction, ShellFrame};
use tauri::State;
use tracing::debug;

use crate::state::{CartState, ShellState};

/// Runs a quick action. Unknown actions return the unchanged frame.
#[tauri::command]
pub fn dispatch_quick_action(
    shell: State<'_, ShellState>,
    cart: State<'_, CartState>,
    action: QuickAction,
) -> ShellFrame {
    debug!(action = %action, "dispatch_quick_action command");

    shell.dispatch(&action);
    let totals = cart.totals();
    shell.frame(&totals)
}
