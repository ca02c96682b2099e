//! Wire-level records exchanged with the marketplace backend.
//!
//! Records are deliberately lenient; converting them into domain types is
//! where validation and normalisation happen.

pub mod category;
pub mod config;
pub mod plan;
pub mod subscription;
