//! Items

use rusty_money::{Money, iso::Currency};

use crate::{products::ProductId, quantity::Quantity};

/// A product the caller wants to put into a cart.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLineItem<'a> {
    /// Product id, the merge key
    pub product: ProductId,

    /// Display name
    pub name: String,

    /// Price of a single unit
    pub unit_price: Money<'a, Currency>,

    /// Units to add
    pub quantity: u32,
}

/// One distinct product held in a cart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    product: ProductId,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: Quantity,
}

impl<'a> LineItem<'a> {
    /// Creates a new line item.
    pub fn new(
        product: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: Quantity,
    ) -> Self {
        Self {
            product,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns the product id of the item
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Returns the display name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured when the item was added
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;

    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = LineItem::new(
            ProductId::from("a"),
            "Burger",
            Money::from_minor(1000, BRL),
            Quantity::clamped(3),
        );

        assert_eq!(item.product().as_str(), "a");
        assert_eq!(item.name(), "Burger");
        assert_eq!(item.unit_price(), &Money::from_minor(1000, BRL));
        assert_eq!(item.quantity().get(), 3);
    }
}
