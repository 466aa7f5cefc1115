//! Hardcoded sample datasets.
//!
//! These are the survey figures baked into source, one module per domain.
//! Each ward-wise table is a list of `(ward_number, category, value)`
//! tuples; the `(ward, category)` pair is the natural key, so no pair may
//! repeat within a dataset (covered by tests below).

pub mod demographics;
pub mod economics;
pub mod environment;
pub mod governance;
pub mod infrastructure;
pub mod social;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use palika_core::{ward, CategoryGroup};

    fn assert_dataset_valid<C: CategoryGroup>(name: &str, records: &[(i16, C, i64)]) {
        let mut keys = HashSet::new();
        for (ward_number, category, value) in records {
            assert!(
                (ward::MIN_WARD..=ward::MAX_WARD).contains(ward_number),
                "{name}: ward {ward_number} out of range"
            );
            assert!(*value >= 0, "{name}: negative value for ward {ward_number}");
            assert!(
                keys.insert((*ward_number, category.code())),
                "{name}: duplicate natural key ({ward_number}, {})",
                category.code()
            );
        }
    }

    #[test]
    fn every_ward_dataset_has_unique_natural_keys() {
        assert_dataset_valid("religion", super::demographics::WARD_RELIGION_POPULATION);
        assert_dataset_valid("caste", super::demographics::WARD_CASTE_POPULATION);
        assert_dataset_valid("occupation", super::economics::WARD_MAJOR_OCCUPATION);
        assert_dataset_valid(
            "remittance-expenses",
            super::economics::WARD_REMITTANCE_EXPENSES,
        );
        assert_dataset_valid(
            "remittance-amount-group",
            super::economics::WARD_REMITTANCE_AMOUNT_GROUP,
        );
        assert_dataset_valid("road-status", super::infrastructure::WARD_ROAD_STATUS);
        assert_dataset_valid(
            "drinking-water",
            super::infrastructure::WARD_DRINKING_WATER_SOURCE,
        );
        assert_dataset_valid("literacy", super::social::WARD_LITERACY_STATUS);
        assert_dataset_valid("toilet-type", super::environment::WARD_TOILET_TYPE);
    }

    #[test]
    fn hindu_ward_populations_sum_to_the_published_total() {
        use palika_core::categories::Religion;

        let sum: i64 = super::demographics::WARD_RELIGION_POPULATION
            .iter()
            .filter(|(_, religion, _)| *religion == Religion::Hindu)
            .map(|(_, _, population)| population)
            .sum();
        assert_eq!(sum, 45931);
    }

    #[test]
    fn governance_listings_have_unique_keys() {
        let mut reps = HashSet::new();
        for (full_name, position, ..) in super::governance::ELECTED_REPRESENTATIVES {
            assert!(reps.insert((*full_name, *position)), "duplicate rep {full_name}");
        }
        let mut orgs = HashSet::new();
        for (name, ..) in super::governance::CIVIL_ORGANIZATIONS {
            assert!(orgs.insert(*name), "duplicate organization {name}");
        }
    }
}
