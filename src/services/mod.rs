pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod availability;
pub mod categories;
