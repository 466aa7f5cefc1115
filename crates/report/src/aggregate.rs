//! The enum-keyed zero-filled accumulator shared by every processor.
//!
//! Every subsection follows the same algorithm: zero-fill one bucket per
//! category, fold rows into buckets and a running total, then compute
//! percentages with a zero-total guard. This module is that algorithm,
//! written once and parameterized by the category enum.

use std::collections::BTreeMap;

use serde::Serialize;

use palika_charts::ChartEntry;
use palika_core::CategoryGroup;
use palika_db::models::ward_category::WardCategoryRow;

/// One category's count and share of the total.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    pub code: &'static str,
    pub label_np: &'static str,
    pub count: i64,
    pub percentage: f64,
}

/// The per-ward version of the municipality-level buckets.
#[derive(Debug, Clone, Serialize)]
pub struct WardBreakdown {
    pub ward_number: i16,
    pub total: i64,
    pub buckets: Vec<Bucket>,
}

/// Aggregated counts for one subsection: municipality-level buckets plus
/// the same breakdown per ward that has data.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAggregate {
    pub total: i64,
    pub buckets: Vec<Bucket>,
    pub wards: Vec<WardBreakdown>,
}

impl CategoryAggregate {
    /// The `n` largest non-zero buckets, largest first. Ties keep
    /// presentation order.
    pub fn top_n(&self, n: usize) -> Vec<&Bucket> {
        let mut non_zero: Vec<&Bucket> = self.buckets.iter().filter(|b| b.count > 0).collect();
        non_zero.sort_by(|a, b| b.count.cmp(&a.count));
        non_zero.truncate(n);
        non_zero
    }

    /// Non-zero buckets as chart entries, in presentation order.
    pub fn chart_entries(&self) -> Vec<ChartEntry> {
        self.buckets
            .iter()
            .filter(|b| b.count > 0)
            .map(|b| ChartEntry::new(b.label_np, b.count))
            .collect()
    }
}

/// Fold rows into a [`CategoryAggregate`] over every category of `C`.
///
/// Rows whose category code does not belong to `C` are skipped with a
/// warning; missing categories stay at zero. When the total is zero every
/// percentage is zero.
pub fn aggregate_rows<C: CategoryGroup>(rows: &[WardCategoryRow]) -> CategoryAggregate {
    let mut totals = vec![0i64; C::ALL.len()];
    let mut per_ward: BTreeMap<i16, Vec<i64>> = BTreeMap::new();

    for row in rows {
        let Some(idx) = C::ALL.iter().position(|c| c.code() == row.category) else {
            tracing::warn!(category = %row.category, "skipping row with unknown category code");
            continue;
        };
        totals[idx] += row.value;
        per_ward
            .entry(row.ward_number)
            .or_insert_with(|| vec![0i64; C::ALL.len()])
            [idx] += row.value;
    }

    CategoryAggregate {
        total: totals.iter().sum(),
        buckets: make_buckets::<C>(&totals),
        wards: per_ward
            .into_iter()
            .map(|(ward_number, counts)| WardBreakdown {
                ward_number,
                total: counts.iter().sum(),
                buckets: make_buckets::<C>(&counts),
            })
            .collect(),
    }
}

fn make_buckets<C: CategoryGroup>(counts: &[i64]) -> Vec<Bucket> {
    let total: i64 = counts.iter().sum();
    C::ALL
        .iter()
        .zip(counts)
        .map(|(category, &count)| Bucket {
            code: category.code(),
            label_np: category.label_np(),
            count,
            percentage: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;
    use palika_core::categories::Religion;

    #[test]
    fn zero_fills_every_category() {
        let agg = aggregate_rows::<Religion>(&[]);
        assert_eq!(agg.total, 0);
        assert_eq!(agg.buckets.len(), Religion::ALL.len());
        assert!(agg.buckets.iter().all(|b| b.count == 0));
        assert!(agg.wards.is_empty());
    }

    #[test]
    fn percentages_are_all_zero_when_total_is_zero() {
        let agg = aggregate_rows::<Religion>(&[row(1, "HINDU", 0)]);
        assert_eq!(agg.total, 0);
        assert!(agg.buckets.iter().all(|b| b.percentage == 0.0));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let rows = vec![
            row(1, "HINDU", 700),
            row(1, "BUDDHIST", 200),
            row(2, "HINDU", 50),
            row(2, "KIRANT", 53),
        ];
        let agg = aggregate_rows::<Religion>(&rows);
        assert_eq!(agg.total, 1003);
        let sum: f64 = agg.buckets.iter().map(|b| b.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "got {sum}");
        for ward in &agg.wards {
            let ward_sum: f64 = ward.buckets.iter().map(|b| b.percentage).sum();
            assert!((ward_sum - 100.0).abs() < 1e-9, "ward {}: {ward_sum}", ward.ward_number);
        }
    }

    #[test]
    fn rows_for_the_same_category_accumulate() {
        let rows = vec![row(1, "HINDU", 10), row(2, "HINDU", 15)];
        let agg = aggregate_rows::<Religion>(&rows);
        let hindu = agg.buckets.iter().find(|b| b.code == "HINDU").unwrap();
        assert_eq!(hindu.count, 25);
        assert_eq!(agg.wards.len(), 2);
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let rows = vec![row(1, "HINDU", 10), row(1, "NOT_A_RELIGION", 99)];
        let agg = aggregate_rows::<Religion>(&rows);
        assert_eq!(agg.total, 10);
    }

    #[test]
    fn top_n_orders_by_count_and_drops_zeroes() {
        let rows = vec![
            row(1, "BUDDHIST", 30),
            row(1, "HINDU", 100),
            row(1, "KIRANT", 60),
        ];
        let agg = aggregate_rows::<Religion>(&rows);
        let top: Vec<&str> = agg.top_n(2).iter().map(|b| b.code).collect();
        assert_eq!(top, vec!["HINDU", "KIRANT"]);
        assert_eq!(agg.top_n(10).len(), 3);
    }

    #[test]
    fn chart_entries_keep_presentation_order() {
        let rows = vec![row(1, "BUDDHIST", 30), row(1, "HINDU", 10)];
        let agg = aggregate_rows::<Religion>(&rows);
        let entries = agg.chart_entries();
        assert_eq!(entries.len(), 2);
        // Hindu precedes Buddhist in the enum regardless of counts.
        assert_eq!(entries[0].label, "हिन्दू");
    }
}
