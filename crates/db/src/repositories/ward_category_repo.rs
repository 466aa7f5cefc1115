//! Generic repository over the ward-wise survey tables.
//!
//! All nine tables share the `(ward_number, category, value)` shape, so one
//! repository parameterized by a [`WardCategoryTable`] descriptor replaces
//! nine near-identical copies. The category and value columns are aliased
//! in every query so results land in the shared [`WardCategoryRow`].
//!
//! Methods take `impl PgExecutor` so callers can pass either the pool or an
//! open transaction (the seed commands wrap a whole dataset in one
//! transaction for all-or-nothing semantics).

use std::marker::PhantomData;

use sqlx::PgExecutor;

use crate::models::ward_category::{CategorySum, WardCategoryRow, WardCategoryTable};

/// CRUD and aggregate queries for one ward-wise table.
pub struct WardCategoryRepo<T: WardCategoryTable> {
    _table: PhantomData<T>,
}

impl<T: WardCategoryTable> WardCategoryRepo<T> {
    fn columns() -> String {
        format!(
            "id, ward_number, {cat} AS category, {val} AS value, created_at, updated_at",
            cat = T::CATEGORY_COLUMN,
            val = T::VALUE_COLUMN,
        )
    }

    /// Insert or update the row for `(ward_number, category)`, returning it.
    ///
    /// Re-running with identical data is a no-op apart from `updated_at`.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        ward_number: i16,
        category: &str,
        value: i64,
    ) -> Result<WardCategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (ward_number, {cat}, {val})
             VALUES ($1, $2, $3)
             ON CONFLICT (ward_number, {cat})
             DO UPDATE SET {val} = EXCLUDED.{val}, updated_at = NOW()
             RETURNING {columns}",
            table = T::TABLE,
            cat = T::CATEGORY_COLUMN,
            val = T::VALUE_COLUMN,
            columns = Self::columns(),
        );
        sqlx::query_as::<_, WardCategoryRow>(&query)
            .bind(ward_number)
            .bind(category)
            .bind(value)
            .fetch_one(executor)
            .await
    }

    /// List every row ordered by ward then category.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<WardCategoryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM {table} ORDER BY ward_number, {cat}",
            columns = Self::columns(),
            table = T::TABLE,
            cat = T::CATEGORY_COLUMN,
        );
        sqlx::query_as::<_, WardCategoryRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Sum values per category across all wards.
    pub async fn sum_by_category<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<CategorySum>, sqlx::Error> {
        let query = format!(
            "SELECT {cat} AS category, SUM({val})::BIGINT AS total
             FROM {table} GROUP BY {cat} ORDER BY {cat}",
            cat = T::CATEGORY_COLUMN,
            val = T::VALUE_COLUMN,
            table = T::TABLE,
        );
        sqlx::query_as::<_, CategorySum>(&query)
            .fetch_all(executor)
            .await
    }

    /// Number of rows in the table.
    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {table}", table = T::TABLE);
        let row: (i64,) = sqlx::query_as(&query).fetch_one(executor).await?;
        Ok(row.0)
    }

    /// Delete every row, returning how many were removed.
    pub async fn clear<'e, E: PgExecutor<'e>>(executor: E) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {table}", table = T::TABLE);
        let result = sqlx::query(&query).execute(executor).await?;
        Ok(result.rows_affected())
    }
}
