//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{commands::UiEvent, products::ProductId};

/// Arguments for the cart demo
#[derive(Debug, Parser)]
pub struct CartDemoArgs {
    /// Menu YAML file
    #[clap(short, long, default_value = "fixtures/menus/burger-house.yml")]
    pub menu: PathBuf,

    /// Product to pick, as `ID` or `ID=QUANTITY`; may be repeated
    #[clap(short = 'a', long = "add", value_parser = parse_pick)]
    pub picks: Vec<UiEvent>,

    /// Product to remove after picking; may be repeated
    #[clap(short, long)]
    pub remove: Vec<String>,

    /// Customer name; places an order when given together with `--cpf`
    #[clap(long)]
    pub customer: Option<String>,

    /// Customer CPF
    #[clap(long)]
    pub cpf: Option<String>,

    /// Order for takeaway instead of dining in
    #[clap(long)]
    pub takeaway: bool,

    /// Restaurant slug the order is placed at
    #[clap(long, default_value = "burger-house")]
    pub restaurant: String,
}

/// Parse a `ID` or `ID=QUANTITY` pick into a [`UiEvent::ProductPicked`].
///
/// # Errors
///
/// Returns a message if the id is empty or the quantity is not a number.
pub fn parse_pick(s: &str) -> Result<UiEvent, String> {
    let (id, quantity) = match s.split_once('=') {
        Some((id, quantity)) => (
            id,
            quantity
                .trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid quantity in '{s}': {err}"))?,
        ),
        None => (s, 1),
    };

    let id = id.trim();

    if id.is_empty() {
        return Err(format!("missing product id in '{s}'"));
    }

    Ok(UiEvent::ProductPicked {
        product: ProductId::from(id),
        quantity,
    })
}
