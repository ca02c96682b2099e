use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::category::CategoryNode;
use crate::domain::plan::Plan;
use crate::domain::subscription::Subscription;
use crate::domain::types::UserId;
use crate::models::category::CategoryRecord;
use crate::models::plan::PlanRecord;
use crate::models::subscription::SubscriptionRecord;
use crate::repository::{CategoryReader, PlanReader, RepositoryResult, SubscriptionReader};

/// JSON document a snapshot is loaded from.
///
/// `plans` may be `null` or absent to model a catalog that has not loaded.
#[derive(Debug, Default, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    categories: Vec<CategoryRecord>,
    #[serde(default)]
    plans: Option<Vec<PlanRecord>>,
    #[serde(default)]
    subscriptions: HashMap<String, Vec<SubscriptionRecord>>,
}

/// Repository serving an immutable, in-memory snapshot of backend data.
///
/// Readers hand out clones, so every caller works on its own copy and no
/// state is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRepository {
    categories: Vec<CategoryNode>,
    plans: Option<Vec<Plan>>,
    subscriptions: HashMap<UserId, Vec<Subscription>>,
}

impl SnapshotRepository {
    /// Build a repository from already validated domain data.
    pub fn new(
        categories: Vec<CategoryNode>,
        plans: Option<Vec<Plan>>,
        subscriptions: HashMap<UserId, Vec<Subscription>>,
    ) -> Self {
        Self {
            categories,
            plans,
            subscriptions,
        }
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Read and parse a snapshot file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let repo = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded snapshot from {}: {} root categories, {} users",
            path.as_ref().display(),
            repo.categories.len(),
            repo.subscriptions.len()
        );
        Ok(repo)
    }

    fn from_document(document: SnapshotDocument) -> RepositoryResult<Self> {
        let categories = document
            .categories
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CategoryNode>, _>>()?;

        let plans = document.plans.map(|plans| {
            plans
                .into_iter()
                .filter_map(|record| match Plan::try_from(record) {
                    Ok(plan) => Some(plan),
                    Err(e) => {
                        log::warn!("Skipping malformed catalog plan: {e}");
                        None
                    }
                })
                .collect::<Vec<Plan>>()
        });

        let subscriptions = document
            .subscriptions
            .into_iter()
            .map(|(user_id, records)| -> RepositoryResult<(UserId, Vec<Subscription>)> {
                let user_id = UserId::new(user_id)?;
                let records = records.into_iter().map(Subscription::from).collect();
                Ok((user_id, records))
            })
            .collect::<RepositoryResult<HashMap<_, _>>>()?;

        Ok(Self::new(categories, plans, subscriptions))
    }
}

impl CategoryReader for SnapshotRepository {
    fn list_category_tree(&self) -> RepositoryResult<Vec<CategoryNode>> {
        Ok(self.categories.clone())
    }
}

impl PlanReader for SnapshotRepository {
    fn list_plans(&self) -> RepositoryResult<Option<Vec<Plan>>> {
        Ok(self.plans.clone())
    }
}

impl SubscriptionReader for SnapshotRepository {
    fn list_subscriptions(&self, user_id: &UserId) -> RepositoryResult<Vec<Subscription>> {
        Ok(self.subscriptions.get(user_id).cloned().unwrap_or_default())
    }
}
