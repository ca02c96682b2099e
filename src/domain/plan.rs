use serde::{Deserialize, Serialize};

use crate::domain::category_group::CategoryGroup;
use crate::domain::types::{AdType, CategoryKey, CategoryName, TypeConstraintError};

/// Ad type and category a user wants to post into.
///
/// The category's alias group is resolved once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingTarget {
    pub ad_type: AdType,
    pub category: CategoryKey,
    pub group: Option<CategoryGroup>,
}

impl PostingTarget {
    pub fn new(ad_type: AdType, category: CategoryKey) -> Self {
        let group = CategoryGroup::resolve(&category);
        Self {
            ad_type,
            category,
            group,
        }
    }

    /// Convenience constructor from raw strings.
    pub fn parse(ad_type: &str, category: &str) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(AdType::new(ad_type)?, CategoryKey::new(category)?))
    }

    /// Target for a category node's display name.
    pub fn for_category(ad_type: AdType, name: &CategoryName) -> Self {
        Self::new(ad_type, name.key())
    }
}

/// Subscription plan as published in the plan catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub ad_type: AdType,
    /// Categories the plan is limited to; empty means every category of the type.
    pub categories: Vec<CategoryKey>,
    pub is_active: bool,
}

impl Plan {
    pub fn new(ad_type: AdType) -> Self {
        Self {
            ad_type,
            categories: Vec::new(),
            is_active: true,
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryKey>) -> Self {
        self.categories = categories;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the plan applies to posting into `target`.
    ///
    /// The plan type must match; then the plan either lists no categories,
    /// lists the target category itself, or lists any member of the target's
    /// alias group.
    pub fn covers(&self, target: &PostingTarget) -> bool {
        if self.ad_type != target.ad_type {
            return false;
        }
        if self.categories.is_empty() {
            return true;
        }
        self.categories.iter().any(|category| {
            *category == target.category
                || target
                    .group
                    .is_some_and(|group| CategoryGroup::resolve(category) == Some(group))
        })
    }
}
