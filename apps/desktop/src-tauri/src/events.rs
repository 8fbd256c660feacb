//! # Shell Events
//!
//! Pushes shell changes to the frontend without waiting for it to poll.
//!
//! ## Event Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  Rust                                Frontend (React)                    │
//! │  ────                                ────────────────                    │
//! │                                                                          │
//! │  ShellState::dispatch ──┐            import { listen }                   │
//! │                         │              from '@tauri-apps/api/event';     │
//! │  drain notifications    │                                                │
//! │         │               │            listen('shell:notification', e =>   │
//! │         ▼               ▼              toast[e.payload.severity](        │
//! │  ShellEventEmitter ──► emit ──────►      e.payload.message));            │
//! │                                                                          │
//! │                                      listen('shell:navigated', e =>      │
//! │                                        refreshFrame());                  │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```

use restaurantos_core::{NavigationChange, Notification};
use tauri::{AppHandle, Emitter};
use tracing::{debug, error};

/// Event name for toasts.
pub const NOTIFICATION_EVENT: &str = "shell:notification";

/// Event name for accepted view changes.
pub const NAVIGATED_EVENT: &str = "shell:navigated";

/// Sink for shell events (implemented by the Tauri integration).
pub trait ShellEventEmitter: Send + Sync {
    /// Emits one toast.
    fn emit_notification(&self, notification: &Notification);

    /// Emits a navigation that changed the active view.
    fn emit_navigated(&self, change: &NavigationChange);
}

/// No-op event emitter for testing.
pub struct NoOpEmitter;

impl ShellEventEmitter for NoOpEmitter {
    fn emit_notification(&self, _notification: &Notification) {}
    fn emit_navigated(&self, _change: &NavigationChange) {}
}

/// Emits shell events to every webview of the app.
#[derive(Clone)]
pub struct TauriShellEmitter {
    app_handle: AppHandle,
}

impl TauriShellEmitter {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ShellEventEmitter for TauriShellEmitter {
    fn emit_notification(&self, notification: &Notification) {
        if let Err(e) = self.app_handle.emit(NOTIFICATION_EVENT, notification) {
            error!(?e, "Failed to emit shell:notification event");
            return;
        }
        debug!(
            id = %notification.id,
            severity = ?notification.severity,
            "Emitted shell:notification"
        );
    }

    fn emit_navigated(&self, change: &NavigationChange) {
        if let Err(e) = self.app_handle.emit(NAVIGATED_EVENT, change) {
            error!(?e, "Failed to emit shell:navigated event");
            return;
        }
        debug!(from = %change.from, to = %change.to, "Emitted shell:navigated");
    }
}
