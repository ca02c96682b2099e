use serde::Serialize;

use crate::domain::quota::{AdAvailability, PostingDecision, UpsellVariant};

/// Remaining quota for a posting target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityDto {
    pub ad_type: String,
    pub category: String,
    #[serde(flatten)]
    pub availability: AdAvailability,
}

/// Result of the posting gate, ready for a UI to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingCheckDto {
    pub category_id: String,
    pub category: String,
    pub featured: bool,
    pub decision: PostingDecision,
    pub allowed: bool,
    /// Dialog flavour to show when the post is blocked.
    pub upsell: Option<UpsellVariant>,
}
