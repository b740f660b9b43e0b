// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roomkeep::CoreError;
use roomkeep_domain::{ErrorKind, RuleSetError, ValidationError};
use roomkeep_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and
/// represent the service contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request collides with existing state.
    Conflict {
        /// The type of resource involved.
        resource_type: String,
        /// A human-readable description of the collision.
        message: String,
    },
    /// A business rule refused the operation.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The backing store failed.
    Persistence {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::Validation,
            Self::ResourceNotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::DomainRuleViolation { .. } => ErrorKind::PolicyViolation,
            Self::Persistence { .. } => ErrorKind::Persistence,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Persistence { message } => write!(f, "Storage error: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a validation error into an API error.
#[must_use]
pub fn translate_validation_error(err: ValidationError) -> ApiError {
    ApiError::InvalidInput {
        field: err.field.as_str().to_string(),
        message: err.reason,
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::Validation(validation) => translate_validation_error(validation),
        CoreError::RoomNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message,
        },
        CoreError::ReservationNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message,
        },
        CoreError::DuplicateReservation { .. } => ApiError::Conflict {
            resource_type: String::from("Reservation"),
            message,
        },
        CoreError::RoomUnavailable { .. } => ApiError::Conflict {
            resource_type: String::from("Room"),
            message,
        },
        CoreError::CancellationNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("cancel_future_stays_only"),
            message,
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    let message: String = err.to_string();
    match err {
        PersistenceError::DuplicateReservation { .. }
        | PersistenceError::IdentityMismatch { .. } => ApiError::Conflict {
            resource_type: String::from("Reservation"),
            message,
        },
        PersistenceError::ReservationNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message,
        },
        PersistenceError::Io { .. }
        | PersistenceError::EmptySource { .. }
        | PersistenceError::NoRoomsLoaded { .. }
        | PersistenceError::MalformedRecord { .. } => ApiError::Persistence { message },
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        translate_validation_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

impl From<RuleSetError> for ApiError {
    fn from(err: RuleSetError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}
