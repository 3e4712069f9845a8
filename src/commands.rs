//! Commands
//!
//! Every change to a [`CartSession`] can be expressed as a [`Command`] and run through
//! [`apply`]. UI layers describe what happened as a [`UiEvent`] and let [`UiEvent::into_command`]
//! decide which command that is.

use thiserror::Error;
use tracing::trace;

use crate::{
    cart::CartError,
    items::NewLineItem,
    products::{ProductId, ProductLookup},
    session::{CartDisplay, CartEditor, CartSession},
};

/// A single state change.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<'a> {
    /// Add or merge a candidate.
    Add(NewLineItem<'a>),

    /// One more unit of a product.
    Increase(ProductId),

    /// One fewer unit of a product.
    Decrease(ProductId),

    /// Drop a product.
    Remove(ProductId),

    /// Drop every product.
    Clear,

    /// Flip cart view visibility.
    Toggle,

    /// Show or hide the cart view.
    SetOpen(bool),
}

/// Apply `command` to `state`, returning the next state.
///
/// # Errors
///
/// Only [`Command::Add`] can fail, with the [`CartError`] from [`CartEditor::add`]. The
/// previous state is dropped in that case; keep a clone if it is still needed.
pub fn apply<'a>(
    mut state: CartSession<'a>,
    command: Command<'a>,
) -> Result<CartSession<'a>, CartError> {
    trace!(?command, "applying cart command");

    match command {
        Command::Add(candidate) => state.add(candidate)?,
        Command::Increase(product) => state.increase_quantity(&product),
        Command::Decrease(product) => state.decrease_quantity(&product),
        Command::Remove(product) => state.remove(&product),
        Command::Clear => state.clear(),
        Command::Toggle => state.toggle(),
        Command::SetOpen(open) => state.set_open(open),
    }

    Ok(state)
}

/// Errors raised while translating UI events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The picked product is not on the menu.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Something the shopper did in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// "Add to cart" on a product page, with the quantity chosen there.
    ProductPicked {
        /// Picked product
        product: ProductId,
        /// Chosen quantity
        quantity: u32,
    },

    /// The "+" button on a cart line.
    QuantityIncreased(ProductId),

    /// The "−" button on a cart line.
    QuantityDecreased(ProductId),

    /// The trash button on a cart line.
    TrashClicked(ProductId),

    /// The cart button in the header.
    CartButtonClicked,

    /// The cart sheet reported a new open state, e.g. the shopper dismissed it.
    CartSheetChanged(bool),

    /// The order was placed.
    OrderFinished,
}

impl UiEvent {
    /// Translate the event into a command.
    ///
    /// Picking a product opens the cart view afterwards in the UI, but that is a separate
    /// [`Command::SetOpen`] issued by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if a picked product cannot be looked up.
    pub fn into_command<'a>(
        self,
        products: &impl ProductLookup<'a>,
    ) -> Result<Command<'a>, CommandError> {
        let command = match self {
            UiEvent::ProductPicked { product, quantity } => {
                let found = products
                    .product(&product)
                    .ok_or(CommandError::UnknownProduct(product))?;

                Command::Add(found.line_item(quantity))
            }
            UiEvent::QuantityIncreased(product) => Command::Increase(product),
            UiEvent::QuantityDecreased(product) => Command::Decrease(product),
            UiEvent::TrashClicked(product) => Command::Remove(product),
            UiEvent::CartButtonClicked => Command::Toggle,
            UiEvent::CartSheetChanged(open) => Command::SetOpen(open),
            UiEvent::OrderFinished => Command::SetOpen(false),
        };

        Ok(command)
    }
}
