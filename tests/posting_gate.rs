use pushkind_classifieds::domain::category::find_category;
use pushkind_classifieds::domain::plan::PostingTarget;
use pushkind_classifieds::domain::quota::{
    PostingDecision, check_availability, get_availability, plans_exist_for_category,
};
use pushkind_classifieds::domain::types::{AdType, CategoryId, UserId};
use pushkind_classifieds::forms::availability::PostingCheckPayload;
use pushkind_classifieds::repository::{CategoryReader, PlanReader, SubscriptionReader};
use pushkind_classifieds::services::availability::check_posting;

mod common;

fn seller() -> UserId {
    UserId::new("seller").expect("valid user id")
}

fn target(ad_type: &str, category: &str) -> PostingTarget {
    PostingTarget::parse(ad_type, category).expect("valid posting target")
}

#[test]
fn finds_root_and_nested_categories() {
    let snapshot = common::TestSnapshot::new(&common::marketplace_document());
    let tree = snapshot
        .repository()
        .list_category_tree()
        .expect("tree should load");

    assert_eq!(find_category(&tree, "A").expect("root").name, "Property");
    assert_eq!(find_category(&tree, "C").expect("nested").name, "Rooms");
    assert!(find_category(&tree, "Z").is_none());
    assert!(find_category(&[], "X").is_none());
}

#[test]
fn aggregates_matching_subscriptions_and_skips_unusable_ones() {
    let snapshot = common::TestSnapshot::new(&common::marketplace_document());
    let subscriptions = snapshot
        .repository()
        .list_subscriptions(&seller())
        .expect("subscriptions should load");

    let availability = get_availability(&subscriptions, &target("Ads", "Electronics"));
    assert_eq!(availability.normal_available, 5);
    assert!(availability.can_post);
    assert_eq!(availability.featured_available, 0);
    assert!(!availability.can_feature);
}

#[test]
fn property_alias_contributes_clamped_quota() {
    let snapshot = common::TestSnapshot::new(&common::marketplace_document());
    let subscriptions = snapshot
        .repository()
        .list_subscriptions(&seller())
        .expect("subscriptions should load");

    let availability = get_availability(&subscriptions, &target("Ads", "Property for Rent"));
    assert_eq!(availability.normal_available, 0);
    assert_eq!(availability.featured_available, 1);
    assert!(!availability.can_post);
    assert!(availability.can_feature);
}

#[test]
fn categories_without_active_plans_bypass_the_gate() {
    let snapshot = common::TestSnapshot::new(&common::marketplace_document());
    let plans = snapshot
        .repository()
        .list_plans()
        .expect("plans should load");
    let collectibles = target("Ads", "Collectibles");

    assert!(!plans_exist_for_category(plans.as_deref(), &collectibles));
    assert_eq!(
        check_availability(plans.as_deref(), &[], &collectibles, false),
        PostingDecision::Allowed
    );
}

#[test]
fn unloaded_catalog_reports_plans_as_existing() {
    let mut document = common::marketplace_document();
    document["plans"] = serde_json::Value::Null;
    let snapshot = common::TestSnapshot::new(&document);
    let plans = snapshot
        .repository()
        .list_plans()
        .expect("plans should load");

    assert!(plans.is_none());
    assert!(plans_exist_for_category(
        plans.as_deref(),
        &target("Ads", "Collectibles")
    ));
}

#[test]
fn posting_check_resolves_category_by_id() {
    let snapshot = common::TestSnapshot::new(&common::marketplace_document());
    let repo = snapshot.repository();

    let payload = |category_id: &str, featured: bool| PostingCheckPayload {
        user_id: seller(),
        ad_type: AdType::new("Ads").expect("valid type"),
        category_id: CategoryId::new(category_id).expect("valid category id"),
        featured,
    };

    let rent = check_posting(payload("B", false), &repo).expect("check should succeed");
    assert_eq!(rent.decision, PostingDecision::BlockedNormal);

    let rent_featured = check_posting(payload("B", true), &repo).expect("check should succeed");
    assert_eq!(rent_featured.decision, PostingDecision::Allowed);

    let electronics_featured =
        check_posting(payload("E", true), &repo).expect("check should succeed");
    assert_eq!(
        electronics_featured.decision,
        PostingDecision::BlockedFeatured
    );

    let rooms = check_posting(payload("C", false), &repo).expect("check should succeed");
    assert!(rooms.allowed);
}
