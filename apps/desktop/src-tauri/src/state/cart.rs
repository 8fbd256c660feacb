//! # Cart State
//!
//! The cart provider: one cart for the whole app, readable and writable
//! from any view's commands. Lives outside [`super::ShellState`] so view
//! switches never touch it.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Tap menu item ──────────► add_to_cart() ───────► lines.push(line)      │
//! │  Change quantity ────────► update_cart_item() ──► lines[i].qty = n      │
//! │  Remove line ────────────► remove_from_cart() ──► lines.remove(i)       │
//! │  Clear ──────────────────► clear_cart() ────────► lines.clear()         │
//! │                                                                         │
//! │  Any view ───────────────► get_shell_frame() ───► totals() (read only)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use restaurantos_core::{Cart, CartTotals};

/// Tauri-managed cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&item, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.lock())
    }

    /// Snapshot for the shell's cart indicator.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(Cart::totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restaurantos_core::{CoreError, MenuItem};

    fn fries() -> MenuItem {
        MenuItem {
            id: "fries".to_string(),
            name: "Fries".to_string(),
            price_cents: 450,
            tax_rate_bps: 1000,
        }
    }

    #[test]
    fn test_clones_share_one_cart() {
        let provider = CartState::new();
        let pos_view = provider.clone();

        pos_view
            .with_cart_mut(|c| c.add_item(&fries(), 2))
            .unwrap();

        let totals = provider.totals();
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 900);
        assert_eq!(totals.tax_cents, 90);
        assert_eq!(totals.total_cents, 990);
    }

    #[test]
    fn test_errors_pass_through() {
        let provider = CartState::new();
        let result = provider.with_cart_mut(|c| c.remove_item("fries"));
        assert!(matches!(result, Err(CoreError::ItemNotInCart(_))));
        assert!(provider.with_cart(Cart::is_empty));
    }
}
