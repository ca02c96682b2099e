use crate::domain::category::CategoryNode;
use crate::domain::plan::Plan;
use crate::domain::subscription::Subscription;
use crate::domain::types::UserId;

pub mod errors;
pub mod snapshot;

pub use errors::{RepositoryError, RepositoryResult};
pub use snapshot::SnapshotRepository;

/// Read-only access to the category tree.
pub trait CategoryReader {
    /// Return the root categories with their nested children.
    fn list_category_tree(&self) -> RepositoryResult<Vec<CategoryNode>>;
}

/// Read-only access to the system-wide plan catalog.
pub trait PlanReader {
    /// Return every known plan, or `None` while the catalog is not loaded.
    fn list_plans(&self) -> RepositoryResult<Option<Vec<Plan>>>;
}

/// Read-only access to per-user subscriptions.
pub trait SubscriptionReader {
    /// List the subscriptions of `user_id`; unknown users have none.
    fn list_subscriptions(&self, user_id: &UserId) -> RepositoryResult<Vec<Subscription>>;
}
