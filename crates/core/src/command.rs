// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::Reservation;

/// A requested change to the reservation book, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new, already-validated reservation.
    Book {
        /// The reservation to add.
        reservation: Reservation,
    },
    /// Replace every field of an existing reservation.
    Amend {
        /// The national ID of the reservation being replaced.
        national_id: String,
        /// The validated replacement; must carry the same national ID.
        replacement: Reservation,
    },
    /// Cancel a reservation before the guest arrives.
    Cancel {
        /// The national ID of the reservation to cancel.
        national_id: String,
    },
}
