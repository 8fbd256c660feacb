//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs. The cart is its own
//! managed type so it outlives every view switch and is reachable from any
//! view's commands without going through the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(shell_state);                                       │   │
//! │  │  app.manage(cart_state);                                        │   │
//! │  │  app.manage(config);                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  ShellState  │  │  CartState   │  │    AppConfig     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │    Shell     │  │    Cart      │  │  support contacts│              │
//! │  │  >> + events │  │  >>          │  │  toast settings  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Cart totals are read and released before the shell is locked.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod shell;

pub use cart::CartState;
pub use config::{AppConfig, ConfigError, ConfigResult, CONFIG_PATH_ENV};
pub use shell::ShellState;
