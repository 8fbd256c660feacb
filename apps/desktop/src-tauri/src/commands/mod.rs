//! # Tauri Commands Module
//!
//! All commands exposed to the React frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── shell.rs         ◄─── Frame, view selection, transition events
//! ├── quick_action.rs  ◄─── Topbar quick actions
//! ├── cart.rs          ◄─── Cart manipulation
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  React Frontend                                                         │
//! │  ──────────────                                                         │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const frame = await invoke('select_view', {                            │
//! │    view: 'kds',                                                         │
//! │    source: 'sidebar'                                                    │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn select_view(                                                        │
//! │      shell: State<'_, ShellState>,  ◄── Injected by Tauri               │
//! │      cart: State<'_, CartState>,    ◄── Injected by Tauri               │
//! │      view: String,                  ◄── From invoke params              │
//! │      source: Option<NavigationSource>,                                  │
//! │  ) -> ShellFrame                                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  React receives: ShellFrame                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod quick_action;
pub mod shell;
