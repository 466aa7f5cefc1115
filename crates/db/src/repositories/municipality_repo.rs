//! Repository for the `municipality_wide_religion_population` table.

use sqlx::PgExecutor;

use crate::models::municipality::MunicipalityWideReligionPopulation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, religion, population, created_at, updated_at";

/// Queries for the municipality-wide religion aggregate.
pub struct MunicipalityReligionRepo;

impl MunicipalityReligionRepo {
    /// Insert or replace the aggregate row for one religion.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        religion: &str,
        population: i64,
    ) -> Result<MunicipalityWideReligionPopulation, sqlx::Error> {
        let query = format!(
            "INSERT INTO municipality_wide_religion_population (religion, population)
             VALUES ($1, $2)
             ON CONFLICT (religion)
             DO UPDATE SET population = EXCLUDED.population, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MunicipalityWideReligionPopulation>(&query)
            .bind(religion)
            .bind(population)
            .fetch_one(executor)
            .await
    }

    /// Find the aggregate row for one religion code.
    pub async fn find_by_religion<'e, E: PgExecutor<'e>>(
        executor: E,
        religion: &str,
    ) -> Result<Option<MunicipalityWideReligionPopulation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM municipality_wide_religion_population WHERE religion = $1"
        );
        sqlx::query_as::<_, MunicipalityWideReligionPopulation>(&query)
            .bind(religion)
            .fetch_optional(executor)
            .await
    }

    /// List all aggregate rows ordered by population, largest first.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<MunicipalityWideReligionPopulation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM municipality_wide_religion_population
             ORDER BY population DESC, religion"
        );
        sqlx::query_as::<_, MunicipalityWideReligionPopulation>(&query)
            .fetch_all(executor)
            .await
    }

    /// Delete every aggregate row, returning how many were removed.
    pub async fn clear<'e, E: PgExecutor<'e>>(executor: E) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM municipality_wide_religion_population")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
