pub mod category;
pub mod category_group;
pub mod plan;
pub mod quota;
pub mod subscription;
pub mod types;
