//! Ward numbers.
//!
//! The municipality is divided into wards numbered 1 through 9. Every
//! ward-wise survey row carries one of these; anything outside the range is
//! rejected at the boundary rather than checked ad hoc in each caller.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest valid ward number.
pub const MIN_WARD: i16 = 1;
/// Highest valid ward number.
pub const MAX_WARD: i16 = 9;

/// A validated ward number in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WardNumber(i16);

impl WardNumber {
    /// Validate a raw ward number.
    pub fn new(raw: i16) -> Result<Self, CoreError> {
        if (MIN_WARD..=MAX_WARD).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(CoreError::Validation(format!(
                "ward number must be between {MIN_WARD} and {MAX_WARD}, got {raw}"
            )))
        }
    }

    /// The raw ward number.
    pub fn get(self) -> i16 {
        self.0
    }

    /// All valid ward numbers in ascending order.
    pub fn all() -> impl Iterator<Item = WardNumber> {
        (MIN_WARD..=MAX_WARD).map(WardNumber)
    }
}

impl std::fmt::Display for WardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i16> for WardNumber {
    type Error = CoreError;

    fn try_from(raw: i16) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for n in 1..=9 {
            assert!(WardNumber::new(n).is_ok(), "ward {n} should be valid");
        }
    }

    #[test]
    fn rejects_zero_and_ten() {
        assert!(WardNumber::new(0).is_err());
        assert!(WardNumber::new(10).is_err());
        assert!(WardNumber::new(-3).is_err());
    }

    #[test]
    fn all_yields_nine_wards() {
        let wards: Vec<_> = WardNumber::all().collect();
        assert_eq!(wards.len(), 9);
        assert_eq!(wards[0].get(), 1);
        assert_eq!(wards[8].get(), 9);
    }
}
