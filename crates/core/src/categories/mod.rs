//! Category enums for every survey domain.
//!
//! Each enum variant carries a stable code (stored as `TEXT` in the
//! database and used in JSON payloads) and a Nepali display label used in
//! report narratives, tables, and chart legends. Variant order is the
//! presentation order in reports.

pub mod demographics;
pub mod economics;
pub mod environment;
pub mod infrastructure;
pub mod social;

pub use demographics::{CasteGroup, Religion};
pub use economics::{Occupation, RemittanceAmountGroup, RemittanceExpense};
pub use environment::ToiletType;
pub use infrastructure::{DrinkingWaterSource, RoadStatus};
pub use social::LiteracyStatus;

/// A closed, enumerable set of survey categories.
///
/// The report aggregator zero-fills one bucket per member of [`Self::ALL`],
/// so every category appears in every report even when no row exists for it.
pub trait CategoryGroup: Copy + Eq + std::hash::Hash + 'static {
    /// Every category in presentation order.
    const ALL: &'static [Self];

    /// Stable database/JSON code, e.g. `"HINDU"`.
    fn code(self) -> &'static str;

    /// Nepali display label, e.g. `"हिन्दू"`.
    fn label_np(self) -> &'static str;

    /// Look a category up by its stable code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_unique<C: CategoryGroup>() {
        let mut seen = std::collections::HashSet::new();
        for c in C::ALL {
            assert!(seen.insert(c.code()), "duplicate code {}", c.code());
        }
    }

    fn assert_roundtrip<C: CategoryGroup + std::fmt::Debug>() {
        for c in C::ALL {
            assert_eq!(C::from_code(c.code()), Some(*c));
        }
        assert_eq!(C::from_code("NO_SUCH_CODE"), None);
    }

    #[test]
    fn codes_are_unique_per_group() {
        assert_codes_unique::<Religion>();
        assert_codes_unique::<CasteGroup>();
        assert_codes_unique::<Occupation>();
        assert_codes_unique::<RemittanceExpense>();
        assert_codes_unique::<RemittanceAmountGroup>();
        assert_codes_unique::<RoadStatus>();
        assert_codes_unique::<DrinkingWaterSource>();
        assert_codes_unique::<LiteracyStatus>();
        assert_codes_unique::<ToiletType>();
    }

    #[test]
    fn codes_roundtrip_through_from_code() {
        assert_roundtrip::<Religion>();
        assert_roundtrip::<CasteGroup>();
        assert_roundtrip::<Occupation>();
        assert_roundtrip::<RemittanceExpense>();
        assert_roundtrip::<RemittanceAmountGroup>();
        assert_roundtrip::<RoadStatus>();
        assert_roundtrip::<DrinkingWaterSource>();
        assert_roundtrip::<LiteracyStatus>();
        assert_roundtrip::<ToiletType>();
    }
}
