//! Cart Example
//!
//! This example picks products from a menu, prints the cart and optionally places an order.
//!
//! Use `-m` to load a different menu file
//! Use `-a ID=QTY` to pick products (repeatable)
//! Use `-r ID` to remove a picked product
//! Use `--customer NAME --cpf CPF` to check out
//!
//! Set `RUST_LOG=trolley=debug` to watch the cart change.

use std::{convert::Infallible, io};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trolley::{
    commands::{Command, UiEvent, apply},
    menu::Menu,
    orders::{ConsumptionMethod, Customer, OrderConfirmation, OrderRequest, OrderSubmitter},
    products::ProductId,
    session::{CartDisplay, CartSession},
    summary::CartSummary,
    utils::CartDemoArgs,
};

/// Accepts every order and numbers them.
#[derive(Debug, Default)]
struct CountingSubmitter {
    placed: usize,
}

impl<'a> OrderSubmitter<'a> for CountingSubmitter {
    type Error = Infallible;

    #[expect(clippy::print_stdout, reason = "Example code")]
    fn submit(&mut self, order: OrderRequest<'a>) -> Result<OrderConfirmation, Infallible> {
        self.placed += 1;

        println!(
            "\nOrder #{} for {} ({}, CPF {}): {} line(s), {} [{}]",
            self.placed,
            order.customer().name(),
            order.consumption_method(),
            order.customer().cpf(),
            order.lines().len(),
            order.total(),
            order.status(),
        );

        Ok(OrderConfirmation {
            order_id: self.placed.to_string(),
        })
    }
}

/// Cart Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CartDemoArgs::parse();
    let menu = Menu::load(&args.menu)?;

    let mut session = CartSession::new(menu.currency());

    for pick in args.picks {
        session = apply(session, pick.into_command(&menu)?)?;
    }

    for id in args.remove {
        session = apply(session, UiEvent::TrashClicked(ProductId::from(id)).into_command(&menu)?)?;
    }

    session = apply(session, Command::SetOpen(true))?;

    if session.is_open() {
        CartSummary::new(session.cart()).write_to(io::stdout().lock())?;
    }

    if let (Some(name), Some(cpf)) = (args.customer.as_deref(), args.cpf.as_deref()) {
        let method = if args.takeaway {
            ConsumptionMethod::Takeaway
        } else {
            ConsumptionMethod::DineIn
        };

        let mut submitter = CountingSubmitter::default();
        let confirmation = session.checkout(
            Customer::new(name, cpf)?,
            method,
            &args.restaurant,
            &mut submitter,
        )?;

        println!("Placed order {}", confirmation.order_id);
    }

    Ok(())
}
