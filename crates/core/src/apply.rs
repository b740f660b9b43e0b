// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::{Field, Reservation, Room, ValidationError};
use time::Date;

use crate::availability::find_conflict;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::Transition;

/// Decides whether a command may be applied to the current reservation book.
///
/// # Arguments
///
/// * `rooms` - The room inventory snapshot
/// * `reservations` - The reservation snapshot
/// * `command` - The requested change
/// * `today` - The date the request is made
///
/// # Returns
///
/// The write to commit. Nothing is mutated here.
///
/// # Errors
///
/// Returns an error if:
/// - A booking reuses an existing national ID
/// - The target room does not exist
/// - The room is taken for any requested night
/// - The reservation to amend or cancel does not exist
/// - An amendment tries to change the national ID
/// - A cancellation is requested on or after the check-in date
pub fn apply(
    rooms: &[Room],
    reservations: &[Reservation],
    command: Command,
    today: Date,
) -> Result<Transition, CoreError> {
    match command {
        Command::Book { reservation } => {
            if find_reservation(reservations, reservation.national_id().as_str()).is_some() {
                return Err(CoreError::DuplicateReservation {
                    national_id: reservation.national_id().to_string(),
                });
            }

            ensure_available(rooms, reservations, &reservation, None)?;
            Ok(Transition::Insert(reservation))
        }
        Command::Amend {
            national_id,
            replacement,
        } => {
            let existing: &Reservation = find_reservation(reservations, &national_id)
                .ok_or(CoreError::ReservationNotFound { national_id })?;

            if replacement.national_id() != existing.national_id() {
                return Err(CoreError::Validation(ValidationError::new(
                    Field::NationalId,
                    format!(
                        "an amendment cannot change the national ID from '{}' to '{}'",
                        existing.national_id(),
                        replacement.national_id()
                    ),
                )));
            }

            ensure_available(
                rooms,
                reservations,
                &replacement,
                Some(existing.national_id().as_str()),
            )?;
            Ok(Transition::Replace {
                national_id: existing.national_id().clone(),
                replacement,
            })
        }
        Command::Cancel { national_id } => {
            let existing: &Reservation = find_reservation(reservations, &national_id)
                .ok_or(CoreError::ReservationNotFound { national_id })?;

            if existing.start_date() <= today {
                return Err(CoreError::CancellationNotAllowed {
                    national_id: existing.national_id().to_string(),
                    start_date: existing.start_date(),
                    today,
                });
            }

            Ok(Transition::Remove {
                national_id: existing.national_id().clone(),
            })
        }
    }
}

fn find_reservation<'a>(reservations: &'a [Reservation], national_id: &str) -> Option<&'a Reservation> {
    reservations
        .iter()
        .find(|reservation| reservation.national_id().matches(national_id))
}

fn ensure_available(
    rooms: &[Room],
    reservations: &[Reservation],
    candidate: &Reservation,
    exclude: Option<&str>,
) -> Result<(), CoreError> {
    let room_id: &str = candidate.desired_room_id().as_str();
    let conflict: Option<&Reservation> = find_conflict(
        rooms,
        reservations,
        room_id,
        candidate.start_date(),
        candidate.rental_days(),
        exclude,
    )?;

    match conflict {
        Some(existing) => Err(CoreError::RoomUnavailable {
            room_id: room_id.to_string(),
            first_night: candidate.start_date(),
            last_night: candidate.end_date(),
            conflicting_id: existing.national_id().to_string(),
        }),
        None => Ok(()),
    }
}
