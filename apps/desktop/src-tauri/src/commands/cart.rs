//! # Cart Commands
//!
//! Tauri commands for cart manipulation. Any view may call these; the
//! cart is shared across the whole app and survives view switches.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐                                          │
//! │  │  Empty   │────►│ In Cart  │──── cart indicator shows totals          │
//! │  │  Cart    │     │          │     on every view except POS             │
//! │  └──────────┘     └──────────┘                                          │
//! │       ▲                │                                                │
//! │       │           add_to_cart                                           │
//! │       │           update_cart_item                                      │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       └─── clear_cart ─┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use restaurantos_core::{Cart, CartLine, CartTotals, MenuItem};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a menu item to the cart.
///
/// ## Behavior
/// - If item already in cart: quantity increases
/// - If item not in cart: added as new line
/// - Price is frozen at time of adding
///
/// ## Arguments
/// * `item` - The menu item as shown on the POS screen
/// * `quantity` - Quantity to add (default: 1)
#[tauri::command]
pub fn add_to_cart(
    cart: State<'_, CartState>,
    item: MenuItem,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(item_id = %item.id, quantity, "add_to_cart command");

    let response = cart.with_cart_mut(|c| {
        c.add_item(&item, quantity)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })?;

    info!(
        item_id = %item.id,
        lines = response.totals.item_count,
        "Item added to cart"
    );
    Ok(response)
}

/// Updates the quantity of a cart line. Quantity 0 removes it.
#[tauri::command]
pub fn update_cart_item(
    cart: State<'_, CartState>,
    item_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(&item_id, quantity)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}

/// Removes a line from the cart.
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    item_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(&item_id)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}

/// Clears all lines from the cart.
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
