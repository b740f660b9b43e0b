// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep::CoreError;
use roomkeep_domain::{ErrorKind, Field, ValidationError};
use roomkeep_persistence::PersistenceError;
use time::macros::date;

use crate::{
    ApiError, translate_core_error, translate_persistence_error, translate_validation_error,
};

#[test]
fn test_validation_error_names_field() {
    let err: ApiError = translate_validation_error(ValidationError::new(
        Field::PhoneNumber,
        "'123' is not a valid 10-digit mobile number",
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'phone number': '123' is not a valid 10-digit mobile number"
    );
}

#[test]
fn test_core_errors_keep_their_kind() {
    let cases: Vec<(CoreError, ErrorKind)> = vec![
        (
            CoreError::RoomNotFound {
                room_id: String::from("Q1"),
            },
            ErrorKind::NotFound,
        ),
        (
            CoreError::DuplicateReservation {
                national_id: String::from("123456789012"),
            },
            ErrorKind::Conflict,
        ),
        (
            CoreError::RoomUnavailable {
                room_id: String::from("R1"),
                first_night: date!(2024 - 06 - 12),
                last_night: date!(2024 - 06 - 13),
                conflicting_id: String::from("111111111111"),
            },
            ErrorKind::Conflict,
        ),
        (
            CoreError::CancellationNotAllowed {
                national_id: String::from("111111111111"),
                start_date: date!(2024 - 06 - 10),
                today: date!(2024 - 06 - 10),
            },
            ErrorKind::PolicyViolation,
        ),
    ];

    for (core, kind) in cases {
        assert_eq!(core.kind(), kind);
        assert_eq!(translate_core_error(core).kind(), kind);
    }
}

#[test]
fn test_unavailable_room_message_is_preserved() {
    let err: ApiError = translate_core_error(CoreError::RoomUnavailable {
        room_id: String::from("R1"),
        first_night: date!(2024 - 06 - 12),
        last_night: date!(2024 - 06 - 13),
        conflicting_id: String::from("111111111111"),
    });
    assert_eq!(
        err,
        ApiError::Conflict {
            resource_type: String::from("Room"),
            message: String::from(
                "Room 'R1' is not available from 12/06/2024 to 13/06/2024: overlaps reservation '111111111111'"
            ),
        }
    );
}

#[test]
fn test_persistence_errors_translate() {
    let io: ApiError = translate_persistence_error(PersistenceError::Io {
        origin: String::from("data/rooms.txt"),
        message: String::from("permission denied"),
    });
    assert_eq!(io.kind(), ErrorKind::Persistence);
    assert_eq!(
        io.to_string(),
        "Storage error: I/O error on data/rooms.txt: permission denied"
    );

    let missing: ApiError = PersistenceError::ReservationNotFound {
        national_id: String::from("123456789012"),
    }
    .into();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
}
