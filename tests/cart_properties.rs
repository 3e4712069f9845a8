//! Cart behaviour observed through the public session API.
//!
//! Walks the documented cart rules end to end: merge-on-add, append order, quantity bounds,
//! silent handling of unknown products, derived totals and the independence of the cart view
//! from cart contents.

use rusty_money::{Money, iso::BRL};
use testresult::TestResult;

use trolley::prelude::*;

fn candidate(id: &str, name: &str, minor: i64, quantity: u32) -> NewLineItem<'static> {
    NewLineItem {
        product: ProductId::from(id),
        name: name.to_string(),
        unit_price: Money::from_minor(minor, BRL),
        quantity,
    }
}

fn snapshot(session: &CartSession<'_>) -> Vec<(String, u8)> {
    session
        .items()
        .iter()
        .map(|item| (item.product().to_string(), item.quantity().get()))
        .collect()
}

#[test]
fn repeated_adds_merge_into_first_position() -> TestResult {
    let mut session = CartSession::new(BRL);

    session.add(candidate("A", "Burger", 1000, 2))?;
    session.add(candidate("B", "Fries", 500, 1))?;
    session.add(candidate("A", "Burger", 1000, 3))?;

    assert_eq!(
        snapshot(&session),
        vec![("A".to_string(), 5), ("B".to_string(), 1)]
    );
    assert_eq!(session.total()?, Money::from_minor(5500, BRL));
    assert_eq!(session.total_quantity(), 6);

    Ok(())
}

#[test]
fn quantities_stay_within_bounds() -> TestResult {
    let mut session = CartSession::new(BRL);
    let a = ProductId::from("A");
    let b = ProductId::from("B");

    session.add(candidate("A", "Burger", 1000, 99))?;
    session.add(candidate("B", "Fries", 500, 1))?;

    for _ in 0..5 {
        session.increase_quantity(&a);
        session.decrease_quantity(&b);
    }

    session.add(candidate("A", "Burger", 1000, 10))?;

    assert_eq!(
        snapshot(&session),
        vec![("A".to_string(), MAX_QUANTITY), ("B".to_string(), 0)]
    );

    Ok(())
}

#[test]
fn unknown_products_change_nothing() -> TestResult {
    let mut session = CartSession::new(BRL);
    session.add(candidate("A", "Burger", 1000, 2))?;
    let before = session.clone();
    let ghost = ProductId::from("nonexistent");

    session.increase_quantity(&ghost);
    session.decrease_quantity(&ghost);
    session.remove(&ghost);

    assert_eq!(session, before);

    Ok(())
}

#[test]
fn removing_twice_equals_removing_once() -> TestResult {
    let mut session = CartSession::new(BRL);
    let a = ProductId::from("A");

    session.add(candidate("A", "Burger", 1000, 2))?;
    session.add(candidate("B", "Fries", 500, 1))?;

    session.remove(&a);
    let once = snapshot(&session);
    session.remove(&a);

    assert_eq!(snapshot(&session), once);
    assert_eq!(once, vec![("B".to_string(), 1)]);

    Ok(())
}

#[test]
fn cart_view_is_independent_of_contents() -> TestResult {
    let mut session = CartSession::new(BRL);
    let a = ProductId::from("A");

    session.toggle();
    session.add(candidate("A", "Burger", 1000, 2))?;
    session.increase_quantity(&a);
    session.decrease_quantity(&a);
    session.remove(&a);
    assert!(session.is_open());

    session.add(candidate("A", "Burger", 1000, 1))?;
    let items = snapshot(&session);

    session.toggle();
    session.set_open(true);
    session.set_open(false);

    assert_eq!(snapshot(&session), items);
    assert_eq!(session.visibility(), Visibility::Closed);

    Ok(())
}

#[test]
fn rejected_candidates_leave_cart_unchanged() -> TestResult {
    let mut session = CartSession::new(BRL);
    session.add(candidate("A", "Burger", 1000, 1))?;
    let before = session.clone();

    let zero = session.add(candidate("A", "Burger", 1000, 0));
    let negative = session.add(candidate("C", "Refund", -100, 1));

    assert!(matches!(zero, Err(CartError::InvalidQuantity(_))));
    assert!(matches!(negative, Err(CartError::NegativePrice(_))));
    assert_eq!(session, before);

    Ok(())
}

#[test]
fn reducer_matches_direct_calls() -> TestResult {
    let commands = vec![
        Command::Add(candidate("A", "Burger", 1000, 2)),
        Command::Add(candidate("B", "Fries", 500, 1)),
        Command::Increase(ProductId::from("A")),
        Command::Toggle,
        Command::Decrease(ProductId::from("B")),
        Command::Remove(ProductId::from("missing")),
    ];

    let reduced = commands
        .into_iter()
        .try_fold(CartSession::new(BRL), apply)?;

    let mut direct = CartSession::new(BRL);
    direct.add(candidate("A", "Burger", 1000, 2))?;
    direct.add(candidate("B", "Fries", 500, 1))?;
    direct.increase_quantity(&ProductId::from("A"));
    direct.toggle();
    direct.decrease_quantity(&ProductId::from("B"));

    assert_eq!(reduced, direct);

    Ok(())
}
