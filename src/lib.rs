//! Trolley
//!
//! Trolley is the cart engine behind a restaurant self-service ordering flow: it keeps the
//! products a shopper picked with their quantities, derives totals, tracks whether the cart view
//! is shown, and turns the cart into an order for checkout.

pub mod cart;
pub mod commands;
pub mod cpf;
pub mod items;
pub mod menu;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod quantity;
pub mod session;
pub mod summary;
pub mod utils;
pub mod visibility;
