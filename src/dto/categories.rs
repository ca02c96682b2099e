use serde::Serialize;

use crate::domain::category::CategoryNode;

/// Category summary returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    /// Names from the root down to this category, inclusive.
    pub path: Vec<String>,
    pub is_leaf: bool,
}

impl CategoryDto {
    /// Build a DTO from a breadcrumb chain ending at the category itself.
    pub fn from_path(path: &[&CategoryNode]) -> Option<Self> {
        let node = path.last()?;
        Some(Self {
            id: node.id.as_str().to_string(),
            name: node.name.as_str().to_string(),
            path: path.iter().map(|n| n.name.as_str().to_string()).collect(),
            is_leaf: node.is_leaf(),
        })
    }
}
