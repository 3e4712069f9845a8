//! Cart visibility

/// Whether the cart view is presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The cart view is hidden.
    #[default]
    Closed,

    /// The cart view is shown.
    Open,
}

impl Visibility {
    /// Check whether the cart view is shown.
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    /// Flips the state in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Sets the state explicitly.
    pub fn set_open(&mut self, open: bool) {
        *self = Visibility::from(open);
    }
}

impl From<bool> for Visibility {
    fn from(open: bool) -> Self {
        if open {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }
}
