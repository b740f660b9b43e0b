// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use roomkeep::MonthlyRevenueLine;
use roomkeep_domain::{Reservation, ReservationDetails, Room, format_date};
use roomkeep_persistence::{ImportSummary, RecordFailure};

use crate::format::format_amount;

/// API request carrying raw reservation fields, as typed by an operator.
///
/// Dates are `dd/MM/yyyy`. An empty co-tenant name means none.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReservationRequest {
    /// The guest's national ID.
    pub national_id: String,
    /// The guest's full name.
    pub full_name: String,
    /// The guest's birthdate.
    pub birthdate: String,
    /// `male` or `female`.
    pub gender: String,
    /// The guest's mobile number.
    pub phone_number: String,
    /// The room to book.
    pub room_id: String,
    /// Number of nights.
    pub rental_days: String,
    /// Check-in date.
    pub start_date: String,
    /// Optional co-tenant.
    #[serde(default)]
    pub co_tenant_name: String,
}

impl ReservationRequest {
    /// Converts the request into raw domain details, keeping `national_id`
    /// as the identity.
    #[must_use]
    pub fn to_details(&self, national_id: &str) -> ReservationDetails {
        ReservationDetails {
            national_id: national_id.to_string(),
            full_name: self.full_name.clone(),
            birthdate: self.birthdate.clone(),
            gender: self.gender.clone(),
            phone_number: self.phone_number.clone(),
            desired_room_id: self.room_id.clone(),
            rental_days: self.rental_days.clone(),
            start_date: self.start_date.clone(),
            co_tenant_name: self.co_tenant_name.clone(),
        }
    }
}

/// A room as presented to callers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoomView {
    /// The room ID.
    pub room_id: String,
    /// The room name.
    pub name: String,
    /// The room category.
    pub room_type: String,
    /// Price per night.
    pub daily_rate: f64,
    /// Number of guests the room sleeps.
    pub capacity: u32,
    /// Furniture summary.
    pub furniture_description: String,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.room_id().to_string(),
            name: room.name().to_string(),
            room_type: room.room_type().to_string(),
            daily_rate: room.daily_rate(),
            capacity: room.capacity(),
            furniture_description: room.furniture_description().to_string(),
        }
    }
}

/// A reservation as presented to callers. Dates are `dd/MM/yyyy`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReservationView {
    pub national_id: String,
    pub full_name: String,
    pub birthdate: String,
    pub gender: String,
    pub phone_number: String,
    pub room_id: String,
    pub rental_days: u32,
    /// Check-in date.
    pub start_date: String,
    /// Last night of the stay.
    pub end_date: String,
    /// The morning after the last night, when it exists in the calendar.
    pub check_out: Option<String>,
    pub co_tenant_name: Option<String>,
}

impl From<&Reservation> for ReservationView {
    fn from(reservation: &Reservation) -> Self {
        Self {
            national_id: reservation.national_id().to_string(),
            full_name: reservation.full_name().to_string(),
            birthdate: format_date(reservation.birthdate()),
            gender: reservation.gender().to_string(),
            phone_number: reservation.phone_number().to_string(),
            room_id: reservation.desired_room_id().to_string(),
            rental_days: reservation.rental_days(),
            start_date: format_date(reservation.start_date()),
            end_date: format_date(reservation.end_date()),
            check_out: reservation.stay().check_out().map(format_date),
            co_tenant_name: reservation.co_tenant_name().map(str::to_string),
        }
    }
}

/// A reservation together with the room it books.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReservationDetailView {
    /// The reservation.
    pub reservation: ReservationView,
    /// The booked room, or `None` if it left the inventory.
    pub room: Option<RoomView>,
}

/// A record skipped by a room import.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportFailureView {
    /// 1-based line number.
    pub line_number: usize,
    /// Why the record was skipped.
    pub reason: String,
}

impl From<&RecordFailure> for ImportFailureView {
    fn from(failure: &RecordFailure) -> Self {
        Self {
            line_number: failure.line_number,
            reason: failure.reason.clone(),
        }
    }
}

/// API response for a room import.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportRoomsResponse {
    /// Rooms loaded.
    pub loaded: usize,
    /// Records skipped.
    pub failed: usize,
    /// Details for each skipped record.
    pub failures: Vec<ImportFailureView>,
}

impl From<&ImportSummary> for ImportRoomsResponse {
    fn from(summary: &ImportSummary) -> Self {
        Self {
            loaded: summary.loaded,
            failed: summary.failed,
            failures: summary.failures.iter().map(ImportFailureView::from).collect(),
        }
    }
}

/// Revenue earned by one room in a month.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoomRevenueView {
    pub room_id: String,
    pub name: String,
    pub room_type: String,
    pub amount: f64,
    /// `amount` rounded with thousands separators.
    pub formatted_amount: String,
}

impl From<&MonthlyRevenueLine<'_>> for RoomRevenueView {
    fn from(line: &MonthlyRevenueLine<'_>) -> Self {
        Self {
            room_id: line.room.room_id().to_string(),
            name: line.room.name().to_string(),
            room_type: line.room.room_type().to_string(),
            amount: line.amount,
            formatted_amount: format_amount(line.amount),
        }
    }
}

/// API response for a monthly revenue report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthlyRevenueResponse {
    /// The month, as `MM/yyyy`.
    pub month: String,
    /// Rooms that earned revenue, ordered by room ID.
    pub rooms: Vec<RoomRevenueView>,
    /// Sum over all listed rooms.
    pub total: f64,
    /// `total` rounded with thousands separators.
    pub formatted_total: String,
}

/// API response for revenue by room type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoomTypeRevenueResponse {
    /// The normalized room type.
    pub room_type: String,
    /// Total revenue.
    pub amount: f64,
    /// `amount` rounded with thousands separators.
    pub formatted_amount: String,
}
