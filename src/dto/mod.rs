pub mod availability;
pub mod categories;
