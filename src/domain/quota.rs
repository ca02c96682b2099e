//! Ad-posting quota resolution.
//!
//! Everything here is a pure function of its arguments: callers pass the
//! subscription and plan snapshots they hold and act on the returned values.

use serde::{Deserialize, Serialize};

use crate::domain::plan::{Plan, PostingTarget};
use crate::domain::subscription::Subscription;

/// Remaining quota for a posting target, summed over qualifying subscriptions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdAvailability {
    pub normal_available: u64,
    pub featured_available: u64,
    pub can_post: bool,
    pub can_feature: bool,
}

impl AdAvailability {
    fn from_totals(normal_available: u64, featured_available: u64) -> Self {
        Self {
            normal_available,
            featured_available,
            can_post: normal_available > 0,
            can_feature: featured_available > 0,
        }
    }
}

/// Aggregate the quota of every usable subscription whose plan covers `target`.
pub fn get_availability(subscriptions: &[Subscription], target: &PostingTarget) -> AdAvailability {
    let (normal, featured) = subscriptions
        .iter()
        .filter(|subscription| subscription.is_usable())
        .filter(|subscription| {
            subscription
                .plan
                .as_ref()
                .is_some_and(|plan| plan.covers(target))
        })
        .fold((0u64, 0u64), |(normal, featured), subscription| {
            (
                normal.saturating_add(subscription.counters.normal_remaining()),
                featured.saturating_add(subscription.counters.featured_remaining()),
            )
        });

    AdAvailability::from_totals(normal, featured)
}

/// Whether any active catalog plan covers `target`.
///
/// `None` means the catalog has not been loaded yet and yields `true`, so a
/// transient loading state never marks a paid category as free. The quota
/// check still runs against whatever subscriptions the caller holds.
pub fn plans_exist_for_category(all_plans: Option<&[Plan]>, target: &PostingTarget) -> bool {
    match all_plans {
        None => true,
        Some(plans) => plans
            .iter()
            .any(|plan| plan.is_active && plan.covers(target)),
    }
}

/// Outcome of the posting gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostingDecision {
    Allowed,
    BlockedNormal,
    BlockedFeatured,
}

/// Upsell dialog flavour a UI shows for a blocked decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UpsellVariant {
    Normal,
    Featured,
}

impl PostingDecision {
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }

    pub fn upsell_variant(self) -> Option<UpsellVariant> {
        match self {
            Self::Allowed => None,
            Self::BlockedNormal => Some(UpsellVariant::Normal),
            Self::BlockedFeatured => Some(UpsellVariant::Featured),
        }
    }
}

/// Decide whether a normal or featured ad may be posted into `target`.
///
/// Categories without any active plan are free to post to and skip the
/// quota check entirely.
pub fn check_availability(
    all_plans: Option<&[Plan]>,
    subscriptions: &[Subscription],
    target: &PostingTarget,
    is_featured: bool,
) -> PostingDecision {
    if !plans_exist_for_category(all_plans, target) {
        return PostingDecision::Allowed;
    }

    let availability = get_availability(subscriptions, target);
    if is_featured && !availability.can_feature {
        PostingDecision::BlockedFeatured
    } else if !is_featured && !availability.can_post {
        PostingDecision::BlockedNormal
    } else {
        PostingDecision::Allowed
    }
}
