// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Coarse classification shared by every error type in the workspace.
///
/// Callers branch on the kind instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field failed its format or semantic rule.
    Validation,
    /// A referenced room or reservation does not exist.
    NotFound,
    /// Duplicate identity, or a room already booked for the requested dates.
    Conflict,
    /// A business rule refused the operation (e.g. late cancellation).
    PolicyViolation,
    /// Backing-store failure or an unreadable persisted record.
    Persistence,
    /// Anything else: misconfiguration, poisoned locks.
    Internal,
}

impl ErrorKind {
    /// Returns a stable lowercase name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::PolicyViolation => "policy_violation",
            Self::Persistence => "persistence",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every validated input field, for both rooms and reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RoomId,
    RoomName,
    RoomType,
    DailyRate,
    Capacity,
    FurnitureDescription,
    NationalId,
    FullName,
    Birthdate,
    Gender,
    PhoneNumber,
    DesiredRoomId,
    RentalDays,
    StartDate,
    CoTenantName,
    /// A `MM/yyyy` reporting month.
    BillingMonth,
}

impl Field {
    /// Returns the field name as it appears in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoomId => "room ID",
            Self::RoomName => "room name",
            Self::RoomType => "room type",
            Self::DailyRate => "daily rate",
            Self::Capacity => "capacity",
            Self::FurnitureDescription => "furniture description",
            Self::NationalId => "national ID",
            Self::FullName => "full name",
            Self::Birthdate => "birthdate",
            Self::Gender => "gender",
            Self::PhoneNumber => "phone number",
            Self::DesiredRoomId => "desired room ID",
            Self::RentalDays => "number of rental days",
            Self::StartDate => "start date",
            Self::CoTenantName => "co-tenant name",
            Self::BillingMonth => "month",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first field that failed validation while constructing an entity.
///
/// Construction is all-or-nothing: when this error is returned no entity
/// was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed.
    pub field: Field,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Validation errors are always of kind [`ErrorKind::Validation`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// A pattern in a [`RulePatterns`](crate::RulePatterns) set did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetError {
    /// Name of the offending rule.
    pub rule: &'static str,
    /// Compiler message from the regex engine.
    pub message: String,
}

impl RuleSetError {
    /// Rule-set errors are configuration problems.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }
}

impl std::fmt::Display for RuleSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid pattern for rule '{}': {}", self.rule, self.message)
    }
}

impl std::error::Error for RuleSetError {}
