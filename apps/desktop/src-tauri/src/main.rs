//! # RestaurantOS Desktop Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RestaurantOS Desktop                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                    React Frontend                          │  │  │
//! │  │  │  • Sidebar / Topbar     • Content region                   │  │  │
//! │  │  │  • Toaster              • Floating cart indicator          │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │             invoke('command') / listen('shell:*')                │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► logging, config, state, command registration     │  │
//! │  │  commands/ ──► select_view, dispatch_quick_action, add_to_cart  │  │
//! │  │  state/ ─────► ShellState, CartState, AppConfig                 │  │
//! │  │  events.rs ──► shell:navigated, shell:notification              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The actual setup is in lib.rs for better testability
    restaurantos_desktop_lib::run();
}
