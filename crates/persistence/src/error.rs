// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::ErrorKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The backing store could not be read or written.
    Io {
        /// Where the store lives.
        origin: String,
        /// The underlying I/O message.
        message: String,
    },
    /// The store held no records at all.
    EmptySource {
        /// Where the store lives.
        origin: String,
    },
    /// A room import finished without a single usable record.
    NoRoomsLoaded {
        /// Where the store lives.
        origin: String,
        /// How many records were rejected.
        failed: usize,
    },
    /// A record could not be decoded during a strict load.
    MalformedRecord {
        /// Where the store lives.
        origin: String,
        /// 1-based line number of the record.
        line_number: usize,
        /// Why the record was rejected.
        reason: String,
    },
    /// A reservation with this national ID is already stored.
    DuplicateReservation {
        /// The duplicated national ID.
        national_id: String,
    },
    /// No reservation with this national ID is stored.
    ReservationNotFound {
        /// The national ID as requested.
        national_id: String,
    },
    /// A replacement carries a different national ID than the one it replaces.
    IdentityMismatch {
        /// The national ID being replaced.
        national_id: String,
        /// The national ID on the replacement.
        replacement: String,
    },
}

impl PersistenceError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. }
            | Self::EmptySource { .. }
            | Self::NoRoomsLoaded { .. }
            | Self::MalformedRecord { .. } => ErrorKind::Persistence,
            Self::DuplicateReservation { .. } | Self::IdentityMismatch { .. } => {
                ErrorKind::Conflict
            }
            Self::ReservationNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { origin, message } => write!(f, "I/O error on {origin}: {message}"),
            Self::EmptySource { origin } => write!(f, "No records found in {origin}"),
            Self::NoRoomsLoaded { origin, failed } => {
                write!(
                    f,
                    "No rooms could be loaded from {origin} ({failed} records rejected)"
                )
            }
            Self::MalformedRecord {
                origin,
                line_number,
                reason,
            } => write!(f, "Malformed record at {origin}:{line_number}: {reason}"),
            Self::DuplicateReservation { national_id } => {
                write!(
                    f,
                    "A reservation for national ID '{national_id}' already exists"
                )
            }
            Self::ReservationNotFound { national_id } => {
                write!(f, "No reservation found for national ID '{national_id}'")
            }
            Self::IdentityMismatch {
                national_id,
                replacement,
            } => write!(
                f,
                "Cannot replace reservation '{national_id}' with one for '{replacement}'"
            ),
        }
    }
}

impl std::error::Error for PersistenceError {}
