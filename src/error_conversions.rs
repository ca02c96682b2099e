//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::availability::{AvailabilityFormError, PostingCheckFormError};
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<AvailabilityFormError> for ServiceError {
        fn from(val: AvailabilityFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<PostingCheckFormError> for ServiceError {
        fn from(val: PostingCheckFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
