use serde::{Deserialize, Serialize};

use crate::domain::plan::Plan;
use crate::domain::types::{AdType, CategoryKey, TypeConstraintError};

/// Plan as returned by the plans endpoint or embedded in a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    #[serde(rename = "type")]
    pub ad_type: String,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<PlanRecord> for Plan {
    type Error = TypeConstraintError;

    fn try_from(record: PlanRecord) -> Result<Self, Self::Error> {
        let ad_type = AdType::new(record.ad_type)?;
        let entries = record.categories.unwrap_or_default();
        let listed = !entries.is_empty();
        let categories: Vec<CategoryKey> = entries
            .into_iter()
            .filter_map(|name| match CategoryKey::new(name) {
                Ok(key) => Some(key),
                Err(e) => {
                    log::warn!("Dropping category entry from {ad_type} plan: {e}");
                    None
                }
            })
            .collect();

        // An empty list covers every category, so a list whose entries were
        // all blank must not collapse into one.
        if listed && categories.is_empty() {
            return Err(TypeConstraintError::EmptyString("category"));
        }

        Ok(Plan {
            ad_type,
            categories,
            is_active: record.is_active.unwrap_or(false),
        })
    }
}
