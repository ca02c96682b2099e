//! Category families whose members are interchangeable for plan coverage.

use crate::domain::types::CategoryKey;

/// Alias family a category name may belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Property,
    Motor,
}

/// Lower-cased members of each group.
const GROUPS: &[(CategoryGroup, &[&str])] = &[
    (
        CategoryGroup::Property,
        &[
            "property for sale",
            "property for rent",
            "properties",
            "properties for sale",
            "properties for rent",
            "real estate",
        ],
    ),
    (
        CategoryGroup::Motor,
        &["motors", "motor", "cars", "vehicles", "auto", "motorcycles"],
    ),
];

impl CategoryGroup {
    /// Group the category belongs to, if any.
    pub fn resolve(category: &CategoryKey) -> Option<Self> {
        GROUPS
            .iter()
            .find(|(_, members)| members.contains(&category.as_str()))
            .map(|(group, _)| *group)
    }

    /// Lower-cased member names.
    pub fn members(self) -> &'static [&'static str] {
        GROUPS
            .iter()
            .find(|(group, _)| *group == self)
            .map(|(_, members)| *members)
            .unwrap_or_default()
    }
}
