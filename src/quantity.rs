//! Quantities
//!
//! Every quantity held by a cart lives in the closed range `0..=99`.

use std::fmt;

/// Largest quantity a single line item can hold.
pub const MAX_QUANTITY: u8 = 99;

/// Bounds `value` to `0..=MAX_QUANTITY`.
pub fn clamp_quantity(value: i64) -> u8 {
    // The clamp guarantees the value fits, so the fallback is unreachable.
    u8::try_from(value.clamp(0, i64::from(MAX_QUANTITY))).unwrap_or(MAX_QUANTITY)
}

/// A bounded line item quantity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u8);

impl Quantity {
    /// No units.
    pub const ZERO: Self = Self(0);

    /// A single unit.
    pub const ONE: Self = Self(1);

    /// The upper bound.
    pub const MAX: Self = Self(MAX_QUANTITY);

    /// Creates a quantity, clamping `value` into range.
    pub fn clamped(value: i64) -> Self {
        Self(clamp_quantity(value))
    }

    /// Returns the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Check whether this quantity holds no units.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One more unit, stopping at [`Quantity::MAX`].
    #[must_use]
    pub fn saturating_increment(self) -> Self {
        self.saturating_add(1)
    }

    /// One fewer unit, stopping at [`Quantity::ZERO`].
    #[must_use]
    pub fn saturating_decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Adds `units`, stopping at [`Quantity::MAX`].
    #[must_use]
    pub fn saturating_add(self, units: u32) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(units))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        u32::from(quantity.0)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        i64::from(quantity.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
