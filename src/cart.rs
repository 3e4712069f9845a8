//! Cart
//!
//! An ordered store of line items holding at most one entry per product.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    items::{LineItem, NewLineItem},
    pricing::{TotalPriceError, total_price, total_quantity},
    products::ProductId,
    quantity::Quantity,
};

/// Errors raised when a candidate is rejected by [`Cart::add`].
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A candidate's currency differs from the cart currency (product, item currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// A candidate asked for zero units.
    #[error("Product {0} must be added with a positive quantity")]
    InvalidQuantity(ProductId),

    /// A candidate has a price below zero.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    items: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a candidate to the cart.
    ///
    /// When the product is already present its quantity grows by the candidate's quantity and
    /// everything else (name, unit price, position) is kept. Otherwise the candidate is appended.
    /// Quantities never exceed [`Quantity::MAX`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the candidate has a zero quantity, a negative price or a
    /// different currency. The cart is left untouched in that case.
    pub fn add(&mut self, candidate: NewLineItem<'a>) -> Result<(), CartError> {
        self.validate(&candidate)?;

        if let Some(existing) = self.find_mut(&candidate.product) {
            let merged = existing.quantity().saturating_add(candidate.quantity);

            debug!(
                product = %candidate.product,
                from = %existing.quantity(),
                to = %merged,
                "merging cart item"
            );

            existing.set_quantity(merged);

            return Ok(());
        }

        debug!(
            product = %candidate.product,
            quantity = candidate.quantity,
            "appending cart item"
        );

        self.items.push(LineItem::new(
            candidate.product,
            candidate.name,
            candidate.unit_price,
            Quantity::clamped(i64::from(candidate.quantity)),
        ));

        Ok(())
    }

    /// Increase an item's quantity by one, up to [`Quantity::MAX`]. Unknown products are ignored.
    pub fn increase_quantity(&mut self, product: &ProductId) {
        self.update_quantity(product, Quantity::saturating_increment);
    }

    /// Decrease an item's quantity by one, down to zero. Unknown products are ignored.
    ///
    /// An item that reaches zero stays in the cart until it is removed.
    pub fn decrease_quantity(&mut self, product: &ProductId) {
        self.update_quantity(product, Quantity::saturating_decrement);
    }

    /// Remove an item regardless of its quantity. Unknown products are ignored.
    pub fn remove(&mut self, product: &ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.product() != product);

        if self.items.len() < before {
            debug!(%product, "removed cart item");
        } else {
            trace!(%product, "remove ignored, product not in cart");
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        debug!(items = self.items.len(), "clearing cart");

        self.items.clear();
    }

    /// Calculate the total price of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic error.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.items, self.currency)
    }

    /// Sum of all item quantities.
    pub fn total_quantity(&self) -> u32 {
        total_quantity(&self.items)
    }

    /// Get the item for a product.
    pub fn get(&self, product: &ProductId) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.product() == product)
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Get the number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn validate(&self, candidate: &NewLineItem<'a>) -> Result<(), CartError> {
        if candidate.quantity == 0 {
            return Err(CartError::InvalidQuantity(candidate.product.clone()));
        }

        if candidate.unit_price.to_minor_units() < 0 {
            return Err(CartError::NegativePrice(candidate.product.clone()));
        }

        let item_currency = candidate.unit_price.currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                candidate.product.clone(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        Ok(())
    }

    fn find_mut(&mut self, product: &ProductId) -> Option<&mut LineItem<'a>> {
        self.items.iter_mut().find(|item| item.product() == product)
    }

    fn update_quantity(&mut self, product: &ProductId, step: impl FnOnce(Quantity) -> Quantity) {
        let Some(item) = self.find_mut(product) else {
            trace!(%product, "quantity change ignored, product not in cart");
            return;
        };

        let quantity = step(item.quantity());

        debug!(%product, from = %item.quantity(), to = %quantity, "updating cart item quantity");

        item.set_quantity(quantity);
    }
}
