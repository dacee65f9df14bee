//! Tri-state digits for sum-of-products terms.
use std::fmt;

/// A single digit of a [`Term`][crate::Term]: fixed to `0`, fixed to `1`, or unconstrained.
///
/// A don't-care digit matches both input values for its position. Using a dedicated third
/// variant instead of `Option<bool>` keeps the don't-care case explicit at every match site
/// and avoids spreading an ambient sentinel value through the code base.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Trit {
    /// The digit requires the corresponding input bit to be `0`.
    Zero = 0,
    /// The digit requires the corresponding input bit to be `1`.
    One = 1,
    /// The digit matches either input bit value.
    DontCare = 2,
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
            Self::DontCare => write!(f, "X"),
        }
    }
}

impl From<bool> for Trit {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl Trit {
    /// Returns the fixed value of this digit, or `None` for a don't-care.
    #[inline(always)]
    pub fn definite(self) -> Option<bool> {
        match self {
            Self::Zero => Some(false),
            Self::One => Some(true),
            Self::DontCare => None,
        }
    }

    /// Returns `true` when this digit is fixed to either value.
    #[inline(always)]
    pub fn is_definite(self) -> bool {
        self != Self::DontCare
    }

    /// Returns whether this digit accepts the given input bit.
    ///
    /// Don't-care digits accept both values.
    #[inline(always)]
    pub fn matches(self, bit: bool) -> bool {
        match self.definite() {
            Some(value) => value == bit,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching() {
        assert!(Trit::Zero.matches(false));
        assert!(!Trit::Zero.matches(true));
        assert!(Trit::One.matches(true));
        assert!(!Trit::One.matches(false));
        assert!(Trit::DontCare.matches(false));
        assert!(Trit::DontCare.matches(true));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}{}{}", Trit::Zero, Trit::One, Trit::DontCare), "01X");
    }
}
