//! Orders
//!
//! The hand-off shape between a cart and whatever persists and confirms orders.

use std::{error::Error as StdError, fmt};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::Cart,
    cpf::{Cpf, CpfError},
    pricing::{TotalPriceError, has_units, line_total},
    products::ProductId,
    quantity::Quantity,
};

/// Errors raised while building an order from a cart.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// The customer name is blank.
    #[error("customer name is required")]
    MissingName,

    /// The customer CPF is invalid.
    #[error("invalid CPF: {0}")]
    Cpf(#[from] CpfError),

    /// No item in the cart has a positive quantity.
    #[error("cannot place an order without items")]
    EmptyOrder,

    /// The order total could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// How the customer will consume the order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsumptionMethod {
    /// Eaten at the restaurant.
    DineIn,

    /// Taken away.
    Takeaway,
}

impl ConsumptionMethod {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ConsumptionMethod::DineIn => "Dine in",
            ConsumptionMethod::Takeaway => "Takeaway",
        }
    }
}

impl fmt::Display for ConsumptionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order progress as tracked by the kitchen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Received, not started.
    #[default]
    Pending,

    /// Being prepared.
    Preparing,

    /// Ready.
    Finished,
}

impl OrderStatus {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The person placing an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    name: String,
    cpf: Cpf,
}

impl Customer {
    /// Create a customer from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MissingName`] for a blank name and [`OrderError::Cpf`] for an
    /// invalid CPF.
    pub fn new(name: &str, cpf: &str) -> Result<Self, OrderError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(OrderError::MissingName);
        }

        Ok(Self {
            name: name.to_string(),
            cpf: Cpf::parse(cpf)?,
        })
    }

    /// Customer name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer CPF.
    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }
}

/// One product line of an order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine<'a> {
    /// Product id
    pub product: ProductId,

    /// Units ordered, never zero
    pub quantity: Quantity,

    /// Price of a single unit when the product was added to the cart
    pub unit_price: Money<'a, Currency>,
}

/// An order ready to be handed to an [`OrderSubmitter`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRequest<'a> {
    restaurant: String,
    customer: Customer,
    consumption_method: ConsumptionMethod,
    status: OrderStatus,
    lines: SmallVec<[OrderLine<'a>; 8]>,
    total: Money<'a, Currency>,
}

impl<'a> OrderRequest<'a> {
    /// Build an order from the cart contents.
    ///
    /// Items whose quantity was decreased to zero are left out.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] if no item has a positive quantity, or
    /// [`OrderError::TotalPrice`] if the total cannot be calculated.
    pub fn from_cart(
        cart: &Cart<'a>,
        customer: Customer,
        consumption_method: ConsumptionMethod,
        restaurant: impl Into<String>,
    ) -> Result<Self, OrderError> {
        if !has_units(cart.items()) {
            return Err(OrderError::EmptyOrder);
        }

        let mut lines = SmallVec::new();
        let mut total = Money::from_minor(0, cart.currency());

        for item in cart.iter().filter(|item| !item.quantity().is_zero()) {
            total = total
                .add(line_total(item)?)
                .map_err(TotalPriceError::from)?;

            lines.push(OrderLine {
                product: item.product().clone(),
                quantity: item.quantity(),
                unit_price: *item.unit_price(),
            });
        }

        Ok(Self {
            restaurant: restaurant.into(),
            customer,
            consumption_method,
            status: OrderStatus::Pending,
            lines,
            total,
        })
    }

    /// Slug of the restaurant the order is placed at.
    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    /// The person placing the order.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// How the order will be consumed.
    pub fn consumption_method(&self) -> ConsumptionMethod {
        self.consumption_method
    }

    /// Status a new order starts in.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Order lines in cart order.
    pub fn lines(&self) -> &[OrderLine<'a>] {
        &self.lines
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }
}

/// Acknowledgement returned by an [`OrderSubmitter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Identifier assigned to the stored order
    pub order_id: String,
}

/// Persists and confirms orders.
pub trait OrderSubmitter<'a> {
    /// Error reported when an order cannot be accepted.
    type Error: StdError + 'static;

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the order was not accepted.
    fn submit(&mut self, order: OrderRequest<'a>) -> Result<OrderConfirmation, Self::Error>;
}
