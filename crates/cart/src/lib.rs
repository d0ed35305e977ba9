//! Afroman Cart - Merch cart aggregation.
//!
//! A [`Cart`] is an ordered sequence of [`CartLine`]s keyed by
//! `(merch item, size)`. Adding the same pair twice merges into one line
//! with a higher quantity rather than appending a duplicate. Totals use
//! decimal arithmetic so repeated additions never drift from the 2-decimal
//! currency display.
//!
//! The cart exclusively owns its lines; a single logical actor mutates it
//! in response to discrete UI events, so there is no locking.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use afroman_core::{MerchItem, MerchItemId};

/// One aggregated `(item, size)` entry with a quantity.
///
/// Distinct from individual add events: three taps on "add M black tee"
/// produce one line with quantity 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MerchItem,
    pub size: String,
    /// Always >= 1; a line driven to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// The line subtotal (`unit price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.item.price.times(self.quantity)
    }

    fn matches(&self, item_id: &MerchItemId, size: &str) -> bool {
        self.item.id == *item_id && self.size == size
    }
}

/// The cart: insertion-ordered cart lines with merge-by-key adds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `(item, size)`.
    ///
    /// Increments the existing line for that exact pair, or appends a new
    /// line with quantity 1. The size is caller-supplied and not validated
    /// against `item.sizes` here; that is a UI concern before the call
    /// (see [`MerchItem::offers_size`]).
    pub fn add(&mut self, item: MerchItem, size: impl Into<String>) {
        let size = size.into();
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(&item.id, &size))
        {
            line.quantity += 1;
            debug!(item = %item.id, size, quantity = line.quantity, "cart line incremented");
        } else {
            debug!(item = %item.id, size, "cart line added");
            self.lines.push(CartLine {
                item,
                size,
                quantity: 1,
            });
        }
    }

    /// Remove the line exactly matching `(item_id, size)`, if present.
    pub fn remove(&mut self, item_id: &MerchItemId, size: &str) {
        self.lines.retain(|line| !line.matches(item_id, size));
    }

    /// Set the matching line's quantity to an absolute value.
    ///
    /// A quantity of 0 removes the line. If no line matches, nothing
    /// happens.
    pub fn set_quantity(&mut self, item_id: &MerchItemId, size: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id, size);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(item_id, size))
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit price * quantity` over all lines, in exact decimal
    /// arithmetic.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of all line quantities (badge counter).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The lines in insertion order, for stable display.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
