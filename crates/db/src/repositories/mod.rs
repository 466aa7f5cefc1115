//! Repositories: all SQL lives here.

pub mod governance_repo;
pub mod municipality_repo;
pub mod ward_category_repo;

pub use governance_repo::{CivilOrganizationRepo, ElectedRepresentativeRepo};
pub use municipality_repo::MunicipalityReligionRepo;
pub use ward_category_repo::WardCategoryRepo;
