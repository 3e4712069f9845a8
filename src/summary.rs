//! Cart summary
//!
//! Renders a cart as a table of lines followed by its totals.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{TotalPriceError, line_total},
};

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating a line or cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes a [`Cart`] as a table.
#[derive(Debug, Clone, Copy)]
pub struct CartSummary<'c, 'a> {
    cart: &'c Cart<'a>,
}

impl<'c, 'a> CartSummary<'c, 'a> {
    /// Create a summary of `cart`.
    pub fn new(cart: &'c Cart<'a>) -> Self {
        Self { cart }
    }

    /// Render the summary into a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a total cannot be calculated.
    pub fn render(&self) -> Result<String, SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

        for (idx, item) in self.cart.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                item.name().to_string(),
                item.unit_price().to_string(),
                item.quantity().to_string(),
                line_total(item)?.to_string(),
            ]);
        }

        builder.push_record([
            String::new(),
            "Total".to_string(),
            String::new(),
            self.cart.total_quantity().to_string(),
            self.cart.total()?.to_string(),
        ]);

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        // Separates the item rows from the totals row.
        theme.insert_horizontal_line(self.cart.len() + 1, separator);

        table.with(theme);
        table.modify(Columns::new(2..5), Alignment::right());
        table.modify(Rows::last(), Alignment::right());
        table.modify(Columns::first(), Alignment::left());

        Ok(table.to_string())
    }

    /// Write the summary followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a total cannot be calculated or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        writeln!(out, "{}", self.render()?)?;

        Ok(())
    }
}
