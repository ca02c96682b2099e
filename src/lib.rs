//! Core library exports for the classifieds posting gate.
//!
//! The `data` feature exposes the domain model, wire records and the snapshot
//! repository. The `server` feature adds the service layer, form validation
//! and the Actix-web routes used by the HTTP binary.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
