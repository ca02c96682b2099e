use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::plan::PostingTarget;
use crate::domain::types::{AdType, CategoryId, CategoryKey, TypeConstraintError, UserId};

#[derive(Deserialize, Validate)]
pub struct AvailabilityForm {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub ad_type: String,
    #[validate(length(min = 1))]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityPayload {
    pub user_id: UserId,
    pub target: PostingTarget,
}

#[derive(Debug, Error)]
pub enum AvailabilityFormError {
    #[error("Availability query validation failed: {0}")]
    Validation(String),
    #[error("Availability query contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AvailabilityFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AvailabilityFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AvailabilityForm> for AvailabilityPayload {
    type Error = AvailabilityFormError;

    fn try_from(value: AvailabilityForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            user_id: UserId::new(value.user_id)?,
            target: PostingTarget::new(
                AdType::new(value.ad_type)?,
                CategoryKey::new(value.category)?,
            ),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct PostingCheckForm {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub ad_type: String,
    #[validate(length(min = 1))]
    pub category_id: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostingCheckPayload {
    pub user_id: UserId,
    pub ad_type: AdType,
    pub category_id: CategoryId,
    pub featured: bool,
}

#[derive(Debug, Error)]
pub enum PostingCheckFormError {
    #[error("Posting check validation failed: {0}")]
    Validation(String),
    #[error("Posting check contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for PostingCheckFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for PostingCheckFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<PostingCheckForm> for PostingCheckPayload {
    type Error = PostingCheckFormError;

    fn try_from(value: PostingCheckForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            user_id: UserId::new(value.user_id)?,
            ad_type: AdType::new(value.ad_type)?,
            category_id: CategoryId::new(value.category_id)?,
            featured: value.featured,
        })
    }
}
