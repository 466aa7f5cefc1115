//! Repositories for the governance listing tables.

use sqlx::PgExecutor;

use crate::models::governance::{
    CivilOrganization, CreateCivilOrganization, CreateElectedRepresentative,
    ElectedRepresentative,
};

const REPRESENTATIVE_COLUMNS: &str =
    "id, full_name, position, ward_number, party, phone, created_at, updated_at";

/// Queries for the `elected_representatives` table.
pub struct ElectedRepresentativeRepo;

impl ElectedRepresentativeRepo {
    /// Insert or update a representative by `(full_name, position)`.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateElectedRepresentative,
    ) -> Result<ElectedRepresentative, sqlx::Error> {
        let query = format!(
            "INSERT INTO elected_representatives (full_name, position, ward_number, party, phone)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (full_name, position)
             DO UPDATE SET ward_number = EXCLUDED.ward_number,
                           party = EXCLUDED.party,
                           phone = EXCLUDED.phone,
                           updated_at = NOW()
             RETURNING {REPRESENTATIVE_COLUMNS}"
        );
        sqlx::query_as::<_, ElectedRepresentative>(&query)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(input.ward_number)
            .bind(&input.party)
            .bind(&input.phone)
            .fetch_one(executor)
            .await
    }

    /// List all representatives, municipality-level officials first.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<ElectedRepresentative>, sqlx::Error> {
        let query = format!(
            "SELECT {REPRESENTATIVE_COLUMNS} FROM elected_representatives
             ORDER BY ward_number NULLS FIRST, position, full_name"
        );
        sqlx::query_as::<_, ElectedRepresentative>(&query)
            .fetch_all(executor)
            .await
    }

    /// Delete every representative, returning how many were removed.
    pub async fn clear<'e, E: PgExecutor<'e>>(executor: E) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM elected_representatives")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}

const ORGANIZATION_COLUMNS: &str = "id, name, kind, ward_number, created_at, updated_at";

/// Queries for the `civil_organizations` table.
pub struct CivilOrganizationRepo;

impl CivilOrganizationRepo {
    /// Insert or update an organization by name.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateCivilOrganization,
    ) -> Result<CivilOrganization, sqlx::Error> {
        let query = format!(
            "INSERT INTO civil_organizations (name, kind, ward_number)
             VALUES ($1, $2, $3)
             ON CONFLICT (name)
             DO UPDATE SET kind = EXCLUDED.kind,
                           ward_number = EXCLUDED.ward_number,
                           updated_at = NOW()
             RETURNING {ORGANIZATION_COLUMNS}"
        );
        sqlx::query_as::<_, CivilOrganization>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(input.ward_number)
            .fetch_one(executor)
            .await
    }

    /// List all organizations grouped by kind.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<CivilOrganization>, sqlx::Error> {
        let query = format!(
            "SELECT {ORGANIZATION_COLUMNS} FROM civil_organizations
             ORDER BY kind, name"
        );
        sqlx::query_as::<_, CivilOrganization>(&query)
            .fetch_all(executor)
            .await
    }

    /// Delete every organization, returning how many were removed.
    pub async fn clear<'e, E: PgExecutor<'e>>(executor: E) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM civil_organizations")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
