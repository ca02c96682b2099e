use serde::{Deserialize, Serialize};

use crate::domain::plan::Plan;
use crate::domain::subscription::{AdCounters, Subscription};
use crate::domain::types::SubscriptionStatus;
use crate::models::plan::PlanRecord;

/// Subscription as returned by the user subscriptions endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    #[serde(default)]
    pub plan: Option<PlanRecord>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ads_available: Option<i64>,
    #[serde(default)]
    pub ads_used: Option<i64>,
    #[serde(default)]
    pub featured_ads_available: Option<i64>,
    #[serde(default)]
    pub featured_ads_used: Option<i64>,
}

impl From<SubscriptionRecord> for Subscription {
    fn from(record: SubscriptionRecord) -> Self {
        let plan = record.plan.and_then(|plan| match Plan::try_from(plan) {
            Ok(plan) => Some(plan),
            Err(e) => {
                log::warn!("Ignoring malformed subscription plan: {e}");
                None
            }
        });

        Self {
            plan,
            is_active: record.is_active.unwrap_or(false),
            status: record
                .status
                .map(SubscriptionStatus::from)
                .unwrap_or_else(|| SubscriptionStatus::Other(String::new())),
            counters: AdCounters {
                ads_available: record.ads_available.unwrap_or(0),
                ads_used: record.ads_used.unwrap_or(0),
                featured_ads_available: record.featured_ads_available.unwrap_or(0),
                featured_ads_used: record.featured_ads_used.unwrap_or(0),
            },
        }
    }
}
