use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryNode;
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Identifier as sent by the backend, which may use numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl TryFrom<RawId> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: RawId) -> Result<Self, Self::Error> {
        match value {
            RawId::Number(number) => CategoryId::new(number.to_string()),
            RawId::Text(text) => CategoryId::new(text),
        }
    }
}

/// Category tree node as returned by the categories endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    #[serde(alias = "_id")]
    pub id: RawId,
    pub name: String,
    #[serde(default)]
    pub children: Option<Vec<CategoryRecord>>,
}

impl TryFrom<CategoryRecord> for CategoryNode {
    type Error = TypeConstraintError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let children = record
            .children
            .unwrap_or_default()
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CategoryNode>, _>>()?;

        Ok(CategoryNode::new(record.id.try_into()?, CategoryName::new(record.name)?)
            .with_children(children))
    }
}
