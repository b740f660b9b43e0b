// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::{NationalId, Reservation};

/// The write a caller must commit after [`apply`](crate::apply) accepts a command.
///
/// `apply` only reads; committing the transition is the repository's job
/// and must happen against the same snapshot `apply` saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Add a reservation.
    Insert(Reservation),
    /// Replace the reservation stored under `national_id`.
    Replace {
        /// Identity of the stored reservation.
        national_id: NationalId,
        /// The new value.
        replacement: Reservation,
    },
    /// Remove the reservation stored under `national_id`.
    Remove {
        /// Identity of the stored reservation.
        national_id: NationalId,
    },
}

impl Transition {
    /// The national ID the transition touches.
    #[must_use]
    pub const fn national_id(&self) -> &NationalId {
        match self {
            Self::Insert(reservation) => reservation.national_id(),
            Self::Replace { national_id, .. } | Self::Remove { national_id } => national_id,
        }
    }
}
