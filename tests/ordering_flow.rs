//! Ordering flow against the bundled burger house menu.
//!
//! Picks products through UI events, adjusts the cart, and checks out through a submitter that
//! records what it receives.

use std::{convert::Infallible, path::PathBuf};

use rusty_money::{Money, iso::BRL};
use testresult::TestResult;

use trolley::prelude::*;

#[derive(Debug, Default)]
struct RecordingSubmitter<'a> {
    orders: Vec<OrderRequest<'a>>,
}

impl<'a> OrderSubmitter<'a> for RecordingSubmitter<'a> {
    type Error = Infallible;

    fn submit(&mut self, order: OrderRequest<'a>) -> Result<OrderConfirmation, Infallible> {
        self.orders.push(order);

        Ok(OrderConfirmation {
            order_id: format!("order-{}", self.orders.len()),
        })
    }
}

fn menu() -> Result<Menu<'static>, MenuError> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("menus")
        .join("burger-house.yml");

    Menu::load(path)
}

fn pick(id: &str, quantity: u32) -> UiEvent {
    UiEvent::ProductPicked {
        product: ProductId::from(id),
        quantity,
    }
}

#[test]
fn bundled_menu_loads() -> TestResult {
    let menu = menu()?;

    assert_eq!(menu.len(), 8);
    assert_eq!(menu.currency(), BRL);

    Ok(())
}

#[test]
fn pick_adjust_and_check_out() -> TestResult {
    let menu = menu()?;

    let events = [
        pick("classic-burger", 2),
        pick("fries", 1),
        pick("classic-burger", 1),
        pick("cola", 2),
        UiEvent::QuantityIncreased(ProductId::from("fries")),
        UiEvent::QuantityDecreased(ProductId::from("cola")),
        UiEvent::TrashClicked(ProductId::from("cola")),
        UiEvent::CartButtonClicked,
    ];

    let mut session = CartSession::new(menu.currency());

    for event in events {
        session = apply(session, event.into_command(&menu)?)?;
    }

    // 3 × 39.90 + 2 × 12.50
    assert_eq!(session.total()?, Money::from_minor(14_470, BRL));
    assert_eq!(session.total_quantity(), 5);
    assert!(session.is_open());

    let mut submitter = RecordingSubmitter::default();

    let confirmation = session.checkout(
        Customer::new("Maria Silva", "529.982.247-25")?,
        ConsumptionMethod::DineIn,
        "burger-house",
        &mut submitter,
    )?;

    assert_eq!(confirmation.order_id, "order-1");
    assert!(session.items().is_empty());
    assert!(!session.is_open());

    let order = submitter.orders.first().ok_or("order not submitted")?;
    let lines: Vec<(&str, u8)> = order
        .lines()
        .iter()
        .map(|line| (line.product.as_str(), line.quantity.get()))
        .collect();

    assert_eq!(lines, vec![("classic-burger", 3), ("fries", 2)]);
    assert_eq!(order.total(), Money::from_minor(14_470, BRL));
    assert_eq!(order.status(), OrderStatus::Pending);
    assert_eq!(order.customer().cpf().to_string(), "529.982.247-25");

    Ok(())
}

#[test]
fn invalid_customer_blocks_checkout() -> TestResult {
    let menu = menu()?;
    let session = apply(
        CartSession::new(menu.currency()),
        pick("sundae", 1).into_command(&menu)?,
    )?;

    let customer = Customer::new("Maria Silva", "123.456.789-00");

    assert!(matches!(customer, Err(OrderError::Cpf(CpfError::CheckDigit))));
    assert_eq!(session.total_quantity(), 1);

    Ok(())
}

#[test]
fn summary_renders_picked_items() -> TestResult {
    let menu = menu()?;
    let session = apply(
        CartSession::new(menu.currency()),
        pick("milkshake", 2).into_command(&menu)?,
    )?;

    let rendered = CartSummary::new(session.cart()).render()?;

    assert!(rendered.contains("Vanilla Milkshake"), "got:\n{rendered}");

    Ok(())
}
