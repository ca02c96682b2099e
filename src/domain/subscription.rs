use serde::{Deserialize, Serialize};

use crate::domain::plan::Plan;
use crate::domain::types::SubscriptionStatus;

/// Raw posting counters of one subscription.
///
/// Values are kept exactly as the backend reported them, including
/// negatives; remaining quota is clamped when read.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdCounters {
    pub ads_available: i64,
    pub ads_used: i64,
    pub featured_ads_available: i64,
    pub featured_ads_used: i64,
}

fn remaining(available: i64, used: i64) -> u64 {
    u64::try_from(available.saturating_sub(used)).unwrap_or(0)
}

impl AdCounters {
    /// Normal ads left, never below zero.
    pub fn normal_remaining(&self) -> u64 {
        remaining(self.ads_available, self.ads_used)
    }

    /// Featured ads left, never below zero.
    pub fn featured_remaining(&self) -> u64 {
        remaining(self.featured_ads_available, self.featured_ads_used)
    }
}

/// A user's subscription to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    /// `None` when the backend sent no usable plan; such subscriptions never match.
    pub plan: Option<Plan>,
    pub is_active: bool,
    pub status: SubscriptionStatus,
    pub counters: AdCounters,
}

impl Subscription {
    /// Whether quota may be drawn from this subscription at all.
    pub fn is_usable(&self) -> bool {
        self.is_active && self.status.is_usable()
    }
}
