//! # Shell State
//!
//! Owns the one [`Shell`] of the app and publishes what each mutation
//! produced (navigation changes, toasts) through a [`ShellEventEmitter`].
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command ──► lock ──► Shell::select_view / dispatch / ...               │
//! │                         │                                               │
//! │                         ├──► NavigationChange                           │
//! │                         └──► drain_notifications()                      │
//! │              unlock ◄───┘                                               │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  emit shell:navigated (only if the view changed)                        │
//! │  emit shell:notification (one per toast, FIFO)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events are emitted after the lock is released, so a listener calling
//! back into a command never waits on this mutex.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use restaurantos_core::{
    CartTotals, DispatchOutcome, NavigationChange, NavigationSource, Notification, QuickAction,
    Screen, Shell, ShellFrame, TransitionEvent, ViewId,
};
use tracing::{debug, info, warn};

use crate::events::{NoOpEmitter, ShellEventEmitter};

/// Shell state managed by Tauri.
pub struct ShellState {
    shell: Arc<Mutex<Shell>>,
    emitter: Arc<dyn ShellEventEmitter>,
}

impl ShellState {
    /// Shell state that publishes nothing.
    pub fn new(shell: Shell) -> Self {
        Self::with_emitter(shell, Arc::new(NoOpEmitter))
    }

    pub fn with_emitter(shell: Shell, emitter: Arc<dyn ShellEventEmitter>) -> Self {
        ShellState {
            shell: Arc::new(Mutex::new(shell)),
            emitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shell> {
        // Shell has no partial-update states; a poisoned guard is usable.
        self.shell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the shell.
    pub fn with_shell<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Shell) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the shell, then publishes
    /// whatever it queued.
    fn with_shell_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Shell) -> R,
    {
        let (result, toasts) = {
            let mut shell = self.lock();
            let result = f(&mut shell);
            (result, shell.drain_notifications())
        };
        self.publish_notifications(&toasts);
        result
    }

    fn publish_notifications(&self, toasts: &[Notification]) {
        for toast in toasts {
            self.emitter.emit_notification(toast);
        }
    }

    fn publish_navigation(&self, change: &NavigationChange) {
        if change.changed() {
            info!(from = %change.from, to = %change.to, source = ?change.source, "View changed");
            self.emitter.emit_navigated(change);
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    pub fn frame(&self, cart: &CartTotals) -> ShellFrame {
        self.with_shell(|s| s.render(cart))
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.with_shell(|s| s.registry().screens().cloned().collect())
    }

    /// First mount of the frontend. Later calls are no-ops.
    pub fn mount_complete(&self) -> bool {
        let flipped = self.with_shell_mut(|s| s.mount_complete());
        if flipped {
            info!("Shell loaded");
        }
        flipped
    }

    /// Selects a view by its identifier. Unknown identifiers select the
    /// dashboard.
    pub fn select_view(&self, raw: &str, source: NavigationSource) -> NavigationChange {
        if raw.parse::<ViewId>().is_err() {
            warn!(view = %raw, "Unknown view identifier, falling back to dashboard");
        }
        let change = self.with_shell_mut(|s| s.select_view_str(raw, source));
        self.publish_navigation(&change);
        change
    }

    pub fn navigate_to_pos(&self, source: NavigationSource) -> NavigationChange {
        let change = self.with_shell_mut(|s| s.navigate_to_pos(source));
        self.publish_navigation(&change);
        change
    }

    pub fn dispatch(&self, action: &QuickAction) -> DispatchOutcome {
        let outcome = self.with_shell_mut(|s| s.dispatch(action));
        if outcome.is_noop() {
            debug!(action = %action, "Quick action not recognized, ignoring");
        }
        if let Some(change) = &outcome.navigation {
            self.publish_navigation(change);
        }
        outcome
    }

    pub fn exit_complete(&self, mount_key: u64) -> TransitionEvent {
        let event = self.with_shell_mut(|s| s.exit_complete(mount_key));
        if event == TransitionEvent::Ignored {
            debug!(mount_key, "Stale exit completion ignored");
        }
        event
    }

    pub fn enter_complete(&self, mount_key: u64) -> TransitionEvent {
        let event = self.with_shell_mut(|s| s.enter_complete(mount_key));
        if event == TransitionEvent::Ignored {
            debug!(mount_key, "Stale enter completion ignored");
        }
        event
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Shell::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restaurantos_core::Severity;

    #[derive(Default)]
    struct RecordingEmitter {
        notifications: Mutex<Vec<Notification>>,
        navigations: Mutex<Vec<NavigationChange>>,
    }

    impl ShellEventEmitter for RecordingEmitter {
        fn emit_notification(&self, notification: &Notification) {
            self.notifications.lock().unwrap().push(notification.clone());
        }

        fn emit_navigated(&self, change: &NavigationChange) {
            self.navigations.lock().unwrap().push(*change);
        }
    }

    fn recorded() -> (ShellState, Arc<RecordingEmitter>) {
        let emitter = Arc::new(RecordingEmitter::default());
        let state = ShellState::with_emitter(Shell::new(), emitter.clone());
        (state, emitter)
    }

    #[test]
    fn test_new_order_emits_navigation_and_toast() {
        let (state, emitter) = recorded();

        state.dispatch(&QuickAction::NewOrder);

        let navs = emitter.navigations.lock().unwrap();
        assert_eq!(navs.len(), 1);
        assert_eq!(navs[0].to, ViewId::Pos);
        assert_eq!(navs[0].source, NavigationSource::QuickAction);

        let toasts = emitter.notifications.lock().unwrap();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
    }

    #[test]
    fn test_toasts_are_delivered_once() {
        let (state, emitter) = recorded();

        state.dispatch(&QuickAction::OpenDrawer);
        let frame = state.frame(&CartTotals::default());

        assert!(frame.pending_notifications.is_empty());
        assert_eq!(emitter.notifications.lock().unwrap().len(), 1);
        assert!(emitter.navigations.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reselecting_active_view_emits_nothing() {
        let (state, emitter) = recorded();

        let change = state.select_view("dashboard", NavigationSource::Sidebar);

        assert!(!change.changed());
        assert!(emitter.navigations.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_view_falls_back() {
        let (state, emitter) = recorded();
        state.select_view("orders", NavigationSource::Sidebar);

        let change = state.select_view("tables", NavigationSource::Sidebar);

        assert_eq!(change.to, ViewId::Dashboard);
        assert_eq!(emitter.navigations.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_transition_round_trip() {
        let state = ShellState::default();
        state.mount_complete();
        state.enter_complete(0);
        state.navigate_to_pos(NavigationSource::Topbar);

        assert_eq!(state.enter_complete(0), TransitionEvent::Ignored);
        assert!(matches!(
            state.exit_complete(0),
            TransitionEvent::Mounted {
                view: ViewId::Pos,
                ..
            }
        ));
        assert_eq!(state.enter_complete(1), TransitionEvent::Settled);

        let frame = state.frame(&CartTotals::default());
        assert!(frame.is_loaded);
        assert!(frame.cart_indicator.is_none());
    }
}
