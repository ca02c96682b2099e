use crate::domain::category::find_category;
use crate::domain::plan::PostingTarget;
use crate::domain::quota::{check_availability, get_availability};
use crate::dto::availability::{AvailabilityDto, PostingCheckDto};
use crate::forms::availability::{AvailabilityPayload, PostingCheckPayload};
use crate::repository::{CategoryReader, PlanReader, SubscriptionReader};

use super::{ServiceError, ServiceResult};

/// Remaining normal and featured quota of a user for a posting target.
pub fn show_availability<R>(
    payload: AvailabilityPayload,
    repo: &R,
) -> ServiceResult<AvailabilityDto>
where
    R: SubscriptionReader,
{
    let subscriptions = match repo.list_subscriptions(&payload.user_id) {
        Ok(subscriptions) => subscriptions,
        Err(e) => {
            log::error!("Failed to list subscriptions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let availability = get_availability(&subscriptions, &payload.target);

    Ok(AvailabilityDto {
        ad_type: payload.target.ad_type.to_string(),
        category: payload.target.category.to_string(),
        availability,
    })
}

/// Gate an attempt to post into the category identified by `category_id`.
///
/// The category is resolved through the tree and its name drives plan
/// coverage. A plan catalog that cannot be read is treated as not loaded.
pub fn check_posting<R>(payload: PostingCheckPayload, repo: &R) -> ServiceResult<PostingCheckDto>
where
    R: CategoryReader + PlanReader + SubscriptionReader,
{
    let tree = repo.list_category_tree().map_err(|e| {
        log::error!("Failed to load category tree: {e}");
        ServiceError::Internal
    })?;

    let category =
        find_category(&tree, payload.category_id.as_str()).ok_or(ServiceError::NotFound)?;
    let target = PostingTarget::for_category(payload.ad_type, &category.name);

    let plans = match repo.list_plans() {
        Ok(plans) => plans,
        Err(e) => {
            log::warn!("Plan catalog unavailable, applying quota gate: {e}");
            None
        }
    };

    let subscriptions = repo.list_subscriptions(&payload.user_id).map_err(|e| {
        log::error!("Failed to list subscriptions: {e}");
        ServiceError::Internal
    })?;

    let decision = check_availability(
        plans.as_deref(),
        &subscriptions,
        &target,
        payload.featured,
    );
    log::debug!(
        "Posting check for user {} in {} ({}): {:?}",
        payload.user_id,
        category.name,
        target.ad_type,
        decision
    );

    Ok(PostingCheckDto {
        category_id: category.id.to_string(),
        category: category.name.to_string(),
        featured: payload.featured,
        decision,
        allowed: decision.is_allowed(),
        upsell: decision.upsell_variant(),
    })
}
