//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{items::LineItem, quantity::Quantity};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The total does not fit into the minor unit range.
    #[error("total price overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `unit_price × quantity` for a single item.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product does not fit into the minor unit range.
pub fn line_total<'a>(item: &LineItem<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let unit_price = item.unit_price();

    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(item.quantity()))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Calculates the total price of a list of items, starting from zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: A line total or the running sum overflowed.
/// - [`TotalPriceError::Money`]: An item is priced in a different currency.
pub fn total_price<'a>(
    items: &[LineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            Ok(acc.add(line_total(item)?)?)
        })
}

/// Sums the quantities of a list of items.
pub fn total_quantity(items: &[LineItem<'_>]) -> u32 {
    items
        .iter()
        .map(|item| u32::from(item.quantity()))
        .sum()
}

/// Check whether any item in the list has a non-zero quantity.
pub fn has_units(items: &[LineItem<'_>]) -> bool {
    items.iter().any(|item| item.quantity() > Quantity::ZERO)
}
