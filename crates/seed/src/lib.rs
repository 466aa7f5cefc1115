//! Seed commands for the municipal profile database.
//!
//! One subcommand per survey domain, each loading a hardcoded sample
//! dataset (real survey figures baked into source) via transactional
//! upserts. `all` fans out over every domain; `charts` exports the section
//! charts as SVG/PNG files.

pub mod cli;
pub mod commands;
pub mod data;
pub mod runner;
