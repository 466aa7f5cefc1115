//! Seeds the elected representatives and civil organizations listings.

use palika_core::WardNumber;
use palika_db::models::governance::{CreateCivilOrganization, CreateElectedRepresentative};
use palika_db::repositories::{CivilOrganizationRepo, ElectedRepresentativeRepo};
use palika_db::DbPool;

use crate::cli::SeedArgs;
use crate::data::governance::{CIVIL_ORGANIZATIONS, ELECTED_REPRESENTATIVES};
use crate::runner::{print_outcome, SeedError, SeedOutcome};

pub async fn run(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    for (_, _, ward_number, _, _) in ELECTED_REPRESENTATIVES {
        if let Some(ward) = ward_number {
            WardNumber::new(*ward)?;
        }
    }
    for (_, _, ward_number) in CIVIL_ORGANIZATIONS {
        if let Some(ward) = ward_number {
            WardNumber::new(*ward)?;
        }
    }

    if args.dry_run {
        print_outcome(&SeedOutcome {
            dataset: "representatives",
            cleared: 0,
            written: ELECTED_REPRESENTATIVES.len(),
            dry_run: true,
        });
        print_outcome(&SeedOutcome {
            dataset: "organizations",
            cleared: 0,
            written: CIVIL_ORGANIZATIONS.len(),
            dry_run: true,
        });
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    let (cleared_reps, cleared_orgs) = if args.clear {
        (
            ElectedRepresentativeRepo::clear(&mut *tx).await?,
            CivilOrganizationRepo::clear(&mut *tx).await?,
        )
    } else {
        (0, 0)
    };

    for (full_name, position, ward_number, party, phone) in ELECTED_REPRESENTATIVES {
        let input = CreateElectedRepresentative {
            full_name: (*full_name).to_string(),
            position: (*position).to_string(),
            ward_number: *ward_number,
            party: party.map(str::to_string),
            phone: phone.map(str::to_string),
        };
        ElectedRepresentativeRepo::upsert(&mut *tx, &input).await?;
    }
    for (name, kind, ward_number) in CIVIL_ORGANIZATIONS {
        let input = CreateCivilOrganization {
            name: (*name).to_string(),
            kind: (*kind).to_string(),
            ward_number: *ward_number,
        };
        CivilOrganizationRepo::upsert(&mut *tx, &input).await?;
    }
    tx.commit().await?;

    print_outcome(&SeedOutcome {
        dataset: "representatives",
        cleared: cleared_reps,
        written: ELECTED_REPRESENTATIVES.len(),
        dry_run: false,
    });
    print_outcome(&SeedOutcome {
        dataset: "organizations",
        cleared: cleared_orgs,
        written: CIVIL_ORGANIZATIONS.len(),
        dry_run: false,
    });
    Ok(())
}
