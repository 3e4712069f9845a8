//! Cart session
//!
//! [`CartSession`] owns one shopper's cart together with the visibility of the cart view. It is
//! created once per session and passed explicitly to whatever needs it. Consumers should depend
//! on the narrowest capability they use: [`CartContents`] to read, [`CartEditor`] to change
//! items, [`CartDisplay`] to show or hide the cart.

use std::error::Error as StdError;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartError},
    items::{LineItem, NewLineItem},
    orders::{
        ConsumptionMethod, Customer, OrderConfirmation, OrderError, OrderRequest, OrderSubmitter,
    },
    pricing::TotalPriceError,
    products::ProductId,
    visibility::Visibility,
};

/// Errors raised by [`CartSession::checkout`].
#[derive(Debug, Error)]
pub enum CheckoutError<E: StdError + 'static> {
    /// The order could not be built from the cart.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The submitter refused the order.
    #[error("order submission failed")]
    Submit(#[source] E),
}

/// Read access to cart contents and derived totals.
pub trait CartContents<'a> {
    /// Items in first-added order.
    fn items(&self) -> &[LineItem<'a>];

    /// Sum of `unit_price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic error.
    fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError>;

    /// Sum of all quantities.
    fn total_quantity(&self) -> u32;
}

/// Item mutations.
pub trait CartEditor<'a> {
    /// Add or merge a candidate.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the candidate is rejected.
    fn add(&mut self, candidate: NewLineItem<'a>) -> Result<(), CartError>;

    /// One more unit of `product`, up to the maximum.
    fn increase_quantity(&mut self, product: &ProductId);

    /// One fewer unit of `product`, down to zero.
    fn decrease_quantity(&mut self, product: &ProductId);

    /// Drop `product` from the cart.
    fn remove(&mut self, product: &ProductId);
}

/// Cart view visibility.
pub trait CartDisplay {
    /// Check whether the cart view is shown.
    fn is_open(&self) -> bool;

    /// Show a hidden cart or hide a shown one.
    fn toggle(&mut self);

    /// Show or hide the cart.
    fn set_open(&mut self, open: bool);
}

/// One shopper's cart and cart view state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSession<'a> {
    cart: Cart<'a>,
    visibility: Visibility,
}

impl<'a> CartSession<'a> {
    /// Start a session with an empty, closed cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            visibility: Visibility::Closed,
        }
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Current visibility of the cart view.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Remove every item, leaving visibility untouched.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Place an order for the cart contents.
    ///
    /// On success the cart is emptied and the cart view closed. On failure the session is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Order`] if the cart cannot be turned into an order and
    /// [`CheckoutError::Submit`] if the submitter rejects it.
    pub fn checkout<S>(
        &mut self,
        customer: Customer,
        consumption_method: ConsumptionMethod,
        restaurant: &str,
        submitter: &mut S,
    ) -> Result<OrderConfirmation, CheckoutError<S::Error>>
    where
        S: OrderSubmitter<'a>,
    {
        let order = OrderRequest::from_cart(&self.cart, customer, consumption_method, restaurant)?;

        debug!(
            restaurant,
            lines = order.lines().len(),
            total = %order.total(),
            "submitting order"
        );

        let confirmation = submitter.submit(order).map_err(|err| {
            warn!(restaurant, error = %err, "order submission failed");
            CheckoutError::Submit(err)
        })?;

        info!(restaurant, order_id = %confirmation.order_id, "order placed");

        self.cart.clear();
        self.visibility.set_open(false);

        Ok(confirmation)
    }
}

impl<'a> CartContents<'a> for CartSession<'a> {
    fn items(&self) -> &[LineItem<'a>] {
        self.cart.items()
    }

    fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.cart.total()
    }

    fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }
}

impl<'a> CartEditor<'a> for CartSession<'a> {
    fn add(&mut self, candidate: NewLineItem<'a>) -> Result<(), CartError> {
        self.cart.add(candidate)
    }

    fn increase_quantity(&mut self, product: &ProductId) {
        self.cart.increase_quantity(product);
    }

    fn decrease_quantity(&mut self, product: &ProductId) {
        self.cart.decrease_quantity(product);
    }

    fn remove(&mut self, product: &ProductId) {
        self.cart.remove(product);
    }
}

impl CartDisplay for CartSession<'_> {
    fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    fn toggle(&mut self) {
        self.visibility.toggle();

        debug!(open = self.visibility.is_open(), "toggled cart view");
    }

    fn set_open(&mut self, open: bool) {
        self.visibility.set_open(open);
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use super::*;

    const CPF: &str = "529.982.247-25";

    #[derive(Debug)]
    struct Rejected;

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("rejected")
        }
    }

    impl StdError for Rejected {}

    #[derive(Debug, Default)]
    struct RecordingSubmitter {
        accept: bool,
        received: Vec<OrderRequest<'static>>,
    }

    impl OrderSubmitter<'static> for RecordingSubmitter {
        type Error = Rejected;

        fn submit(&mut self, order: OrderRequest<'static>) -> Result<OrderConfirmation, Rejected> {
            if !self.accept {
                return Err(Rejected);
            }

            self.received.push(order);

            Ok(OrderConfirmation {
                order_id: format!("order-{}", self.received.len()),
            })
        }
    }

    fn burger(quantity: u32) -> NewLineItem<'static> {
        NewLineItem {
            product: ProductId::from("burger"),
            name: "Burger".to_string(),
            unit_price: Money::from_minor(1000, BRL),
            quantity,
        }
    }

    fn open_session_with_burgers() -> Result<CartSession<'static>, CartError> {
        let mut session = CartSession::new(BRL);

        session.add(burger(2))?;
        session.set_open(true);

        Ok(session)
    }

    #[test]
    fn new_session_is_empty_and_closed() {
        let session = CartSession::new(BRL);

        assert!(session.items().is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn item_operations_leave_visibility_alone() -> TestResult {
        let mut session = open_session_with_burgers()?;
        let id = ProductId::from("burger");

        session.increase_quantity(&id);
        session.decrease_quantity(&id);
        session.remove(&id);
        session.add(burger(1))?;

        assert!(session.is_open());

        Ok(())
    }

    #[test]
    fn visibility_operations_leave_items_alone() -> TestResult {
        let mut session = open_session_with_burgers()?;
        let before = session.items().to_vec();

        session.toggle();
        session.toggle();
        session.set_open(false);

        assert_eq!(session.items(), before.as_slice());
        assert_eq!(session.visibility(), Visibility::Closed);

        Ok(())
    }

    #[test]
    fn checkout_clears_cart_and_closes_view() -> TestResult {
        let mut session = open_session_with_burgers()?;
        let mut submitter = RecordingSubmitter {
            accept: true,
            ..RecordingSubmitter::default()
        };

        let confirmation = session.checkout(
            Customer::new("Maria", CPF)?,
            ConsumptionMethod::Takeaway,
            "burger-house",
            &mut submitter,
        )?;

        assert_eq!(confirmation.order_id, "order-1");
        assert!(session.cart().is_empty());
        assert!(!session.is_open());

        let order = submitter.received.first().ok_or("no order received")?;
        assert_eq!(order.total(), Money::from_minor(2000, BRL));

        Ok(())
    }

    #[test]
    fn rejected_checkout_keeps_session() -> TestResult {
        let mut session = open_session_with_burgers()?;
        let before = session.clone();
        let mut submitter = RecordingSubmitter::default();

        let result = session.checkout(
            Customer::new("Maria", CPF)?,
            ConsumptionMethod::DineIn,
            "burger-house",
            &mut submitter,
        );

        assert!(matches!(result, Err(CheckoutError::Submit(Rejected))));
        assert_eq!(session, before);

        Ok(())
    }

    #[test]
    fn submit_error_message_leaves_cause_to_source() {
        let err: CheckoutError<Rejected> = CheckoutError::Submit(Rejected);

        assert_eq!(err.to_string(), "order submission failed");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("rejected".to_string())
        );
    }

    #[test]
    fn checkout_of_zeroed_cart_is_rejected() -> TestResult {
        let mut session = CartSession::new(BRL);
        session.add(burger(1))?;
        session.decrease_quantity(&ProductId::from("burger"));

        let mut submitter = RecordingSubmitter {
            accept: true,
            ..RecordingSubmitter::default()
        };

        let result = session.checkout(
            Customer::new("Maria", CPF)?,
            ConsumptionMethod::DineIn,
            "burger-house",
            &mut submitter,
        );

        assert!(matches!(
            result,
            Err(CheckoutError::Order(OrderError::EmptyOrder))
        ));
        assert!(submitter.received.is_empty());
        assert_eq!(session.items().len(), 1);

        Ok(())
    }
}
