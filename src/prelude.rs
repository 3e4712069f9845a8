//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    commands::{Command, CommandError, UiEvent, apply},
    cpf::{Cpf, CpfError},
    items::{LineItem, NewLineItem},
    menu::{Menu, MenuError},
    orders::{
        ConsumptionMethod, Customer, OrderConfirmation, OrderError, OrderLine, OrderRequest,
        OrderStatus, OrderSubmitter,
    },
    pricing::TotalPriceError,
    products::{Product, ProductId, ProductLookup},
    quantity::{MAX_QUANTITY, Quantity, clamp_quantity},
    session::{CartContents, CartDisplay, CartEditor, CartSession, CheckoutError},
    summary::{CartSummary, SummaryError},
    visibility::Visibility,
};
