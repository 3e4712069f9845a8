//! Menu
//!
//! An in-memory [`ProductLookup`], optionally loaded from a YAML file shaped like:
//!
//! ```yaml
//! products:
//!   burger:
//!     name: Classic Burger
//!     price: "39.90 BRL"
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{BRL, Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::products::{Product, ProductId, ProductLookup};

/// Menu loading errors
#[derive(Debug, Error)]
pub enum MenuError {
    /// IO error reading the menu file
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The menu file has no products, so its currency is unknown
    #[error("No products in menu; currency unknown")]
    NoCurrency,
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct MenuFile {
    products: FxHashMap<String, ProductEntry>,
}

/// Product entry in YAML
#[derive(Debug, Deserialize)]
struct ProductEntry {
    name: String,

    /// e.g. "39.90 BRL"
    price: String,
}

/// Products available to order, all priced in one currency.
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    products: FxHashMap<ProductId, Product<'a>>,
    currency: &'static Currency,
}

impl<'a> Menu<'a> {
    /// Create an empty menu.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: FxHashMap::default(),
            currency,
        }
    }

    /// Load a menu from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if products use different
    /// currencies.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading menu");

        Self::from_yaml(&contents)
    }

    /// Parse a menu from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price cannot be parsed or is negative, the
    /// menu is empty, or products use different currencies.
    pub fn from_yaml(yaml: &str) -> Result<Self, MenuError> {
        let file: MenuFile = serde_norway::from_str(yaml)?;

        let mut entries = file
            .products
            .into_iter()
            .map(|(id, entry)| {
                let (minor_units, currency) = parse_price(&entry.price)?;
                Ok::<_, MenuError>((id, entry.name, minor_units, currency))
            })
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let currency = entries
            .first()
            .map(|&(_, _, _, currency)| currency)
            .ok_or(MenuError::NoCurrency)?;

        let mut menu = Self::new(currency);

        for (id, name, minor_units, price_currency) in entries {
            menu.insert(Product::new(id, name, Money::from_minor(minor_units, price_currency)))?;
        }

        Ok(menu)
    }

    /// Add or replace a product.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidPrice`] if the price is negative and
    /// [`MenuError::CurrencyMismatch`] if the product is priced in another currency.
    pub fn insert(&mut self, product: Product<'a>) -> Result<(), MenuError> {
        let currency = product.price.currency();

        if product.price.to_minor_units() < 0 {
            return Err(MenuError::InvalidPrice(format!(
                "{} has a negative price: {}",
                product.id, product.price
            )));
        }

        if currency != self.currency {
            return Err(MenuError::CurrencyMismatch(
                self.currency.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            ));
        }

        self.products.insert(product.id.clone(), product);

        Ok(())
    }

    /// Products sorted by id.
    pub fn products(&self) -> Vec<&Product<'a>> {
        let mut products: Vec<_> = self.products.values().collect();

        products.sort_by(|a, b| a.id.cmp(&b.id));

        products
    }

    /// Get the number of products on the menu.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the menu has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the menu.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'a> ProductLookup<'a> for Menu<'a> {
    fn product(&self, id: &ProductId) -> Option<&Product<'a>> {
        self.products.get(id)
    }
}

/// Parse price string (e.g., "39.90 BRL") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), MenuError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(MenuError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| MenuError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| MenuError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "BRL" => BRL,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(MenuError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
