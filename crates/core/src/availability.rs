// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room availability.
//!
//! Pure functions over a snapshot of rooms and reservations. Callers that
//! act on the answer must hold the snapshot stable until they commit.

use roomkeep_domain::{Field, Reservation, Room, StayRange, ValidationError};
use time::Date;

use crate::error::CoreError;

/// Looks up a room by ID, ignoring case.
#[must_use]
pub fn find_room<'a>(rooms: &'a [Room], room_id: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.room_id().matches(room_id))
}

/// Returns the first reservation that blocks the requested stay, if any.
///
/// Only reservations for `room_id` are considered, and the reservation
/// whose national ID equals `exclude` is skipped so that an amendment does
/// not conflict with itself.
///
/// # Errors
///
/// Returns an error if:
/// - The room is not in `rooms`
/// - `rental_days` is zero or the stay overflows the calendar
pub fn find_conflict<'a>(
    rooms: &[Room],
    reservations: &'a [Reservation],
    room_id: &str,
    start_date: Date,
    rental_days: u32,
    exclude: Option<&str>,
) -> Result<Option<&'a Reservation>, CoreError> {
    if find_room(rooms, room_id).is_none() {
        return Err(CoreError::RoomNotFound {
            room_id: room_id.to_string(),
        });
    }

    let requested: StayRange = StayRange::new(start_date, rental_days).ok_or_else(|| {
        ValidationError::new(
            Field::RentalDays,
            format!("'{rental_days}' is not a bookable number of days"),
        )
    })?;

    Ok(reservations.iter().find(|reservation| {
        reservation.desired_room_id().matches(room_id)
            && !exclude.is_some_and(|id| reservation.national_id().matches(id))
            && reservation.stay().overlaps(&requested)
    }))
}

/// Whether the room is free for every night of the requested stay.
///
/// # Errors
///
/// Same as [`find_conflict`].
pub fn is_available(
    rooms: &[Room],
    reservations: &[Reservation],
    room_id: &str,
    start_date: Date,
    rental_days: u32,
    exclude: Option<&str>,
) -> Result<bool, CoreError> {
    find_conflict(rooms, reservations, room_id, start_date, rental_days, exclude)
        .map(|conflict| conflict.is_none())
}

/// Rooms free for a one-night stay starting `today`, ordered by room ID.
#[must_use]
pub fn vacant_rooms<'a>(
    rooms: &'a [Room],
    reservations: &[Reservation],
    today: Date,
) -> Vec<&'a Room> {
    let mut vacant: Vec<&Room> = rooms
        .iter()
        .filter(|room| {
            matches!(
                find_conflict(rooms, reservations, room.room_id().as_str(), today, 1, None),
                Ok(None)
            )
        })
        .collect();
    vacant.sort_by(|a, b| a.room_id().cmp(b.room_id()));
    vacant
}
