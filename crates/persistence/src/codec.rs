// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between persisted lines and validated entities.
//!
//! Room lines: `roomID;name;type;dailyRate;capacity;furniture` (6 fields).
//! Reservation lines: `nationalID,fullName,birthdate,gender,phone,roomID,days,startDate,coTenant`
//! (9 fields, dates as `dd/MM/yyyy`).

use csv::{ReaderBuilder, StringRecord, Trim};
use roomkeep_domain::{
    ABSENT_CO_TENANT, Reservation, ReservationDetails, Room, RoomDetails, ValidationError,
    ValidationRules, format_date,
};

/// Number of fields in a room line.
pub const ROOM_FIELDS: usize = 6;

/// Number of fields in a reservation line.
pub const RESERVATION_FIELDS: usize = 9;

const ROOM_DELIMITER: u8 = b';';
const RESERVATION_DELIMITER: u8 = b',';

/// Why a single line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line could not be split into fields.
    Unreadable(String),
    /// The line has the wrong number of fields.
    FieldCount {
        /// Fields the format requires.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },
    /// A field failed validation.
    Invalid(ValidationError),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(msg) => write!(f, "unreadable record: {msg}"),
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

fn split_record(line: &str, delimiter: u8, expected: usize) -> Result<Vec<String>, RecordError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record: StringRecord = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|err| RecordError::Unreadable(err.to_string()))?;

    if record.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: record.len(),
        });
    }

    Ok(record.iter().map(str::to_string).collect())
}

/// Decodes and validates a room line.
///
/// # Errors
///
/// Returns an error if the line does not have exactly six fields or any
/// field fails validation.
pub fn decode_room(line: &str, rules: &ValidationRules) -> Result<Room, RecordError> {
    let mut fields = split_record(line, ROOM_DELIMITER, ROOM_FIELDS)?.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let details: RoomDetails = RoomDetails {
        room_id: next(),
        name: next(),
        room_type: next(),
        daily_rate: next(),
        capacity: next(),
        furniture_description: next(),
    };
    Ok(Room::new(&details, rules)?)
}

/// Decodes and validates a reservation line.
///
/// Date rules relative to today are not applied; stored bookings are allowed
/// to lie in the past.
///
/// # Errors
///
/// Returns an error if the line does not have exactly nine fields or any
/// field fails validation.
pub fn decode_reservation(line: &str, rules: &ValidationRules) -> Result<Reservation, RecordError> {
    let mut fields = split_record(line, RESERVATION_DELIMITER, RESERVATION_FIELDS)?.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let mut details: ReservationDetails = ReservationDetails {
        national_id: next(),
        full_name: next(),
        birthdate: next(),
        gender: next(),
        phone_number: next(),
        desired_room_id: next(),
        rental_days: next(),
        start_date: next(),
        co_tenant_name: next(),
    };
    if details.co_tenant_name.eq_ignore_ascii_case(ABSENT_CO_TENANT) {
        details.co_tenant_name.clear();
    }
    Ok(Reservation::restore(&details, rules)?)
}

/// Encodes a reservation as a single line.
#[must_use]
pub fn encode_reservation(reservation: &Reservation) -> String {
    let fields: [String; RESERVATION_FIELDS] = [
        reservation.national_id().to_string(),
        reservation.full_name().to_string(),
        format_date(reservation.birthdate()),
        reservation.gender().to_string(),
        reservation.phone_number().to_string(),
        reservation.desired_room_id().to_string(),
        reservation.rental_days().to_string(),
        format_date(reservation.start_date()),
        reservation.co_tenant_name().unwrap_or_default().to_string(),
    ];
    fields.join(",")
}
