// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::{ErrorKind, ValidationError, format_date};
use time::Date;

/// Errors raised while deciding availability or applying a booking command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An input failed entity validation.
    Validation(ValidationError),
    /// The referenced room is not in the inventory.
    RoomNotFound {
        /// The room ID as requested.
        room_id: String,
    },
    /// No reservation has the given national ID.
    ReservationNotFound {
        /// The national ID as requested.
        national_id: String,
    },
    /// A reservation with this national ID already exists.
    DuplicateReservation {
        /// The duplicated national ID.
        national_id: String,
    },
    /// The room is already booked for at least one requested night.
    RoomUnavailable {
        /// The requested room.
        room_id: String,
        /// First requested night.
        first_night: Date,
        /// Last requested night.
        last_night: Date,
        /// The reservation holding an overlapping night.
        conflicting_id: String,
    },
    /// Cancellation is only allowed before the stay starts.
    CancellationNotAllowed {
        /// The reservation that was asked to be cancelled.
        national_id: String,
        /// Its check-in date.
        start_date: Date,
        /// The date the cancellation was attempted.
        today: Date,
    },
}

impl CoreError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::RoomNotFound { .. } | Self::ReservationNotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateReservation { .. } | Self::RoomUnavailable { .. } => {
                ErrorKind::Conflict
            }
            Self::CancellationNotAllowed { .. } => ErrorKind::PolicyViolation,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::RoomNotFound { room_id } => write!(f, "Room '{room_id}' not found"),
            Self::ReservationNotFound { national_id } => {
                write!(f, "No reservation found for national ID '{national_id}'")
            }
            Self::DuplicateReservation { national_id } => {
                write!(
                    f,
                    "A reservation for national ID '{national_id}' already exists"
                )
            }
            Self::RoomUnavailable {
                room_id,
                first_night,
                last_night,
                conflicting_id,
            } => {
                write!(
                    f,
                    "Room '{room_id}' is not available from {} to {}: overlaps reservation '{conflicting_id}'",
                    format_date(*first_night),
                    format_date(*last_night)
                )
            }
            Self::CancellationNotAllowed {
                national_id,
                start_date,
                today,
            } => {
                write!(
                    f,
                    "Reservation '{national_id}' starting {} cannot be cancelled on {}: only future stays can be cancelled",
                    format_date(*start_date),
                    format_date(*today)
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
