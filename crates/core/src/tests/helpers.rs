// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::{
    Reservation, ReservationDetails, Room, RoomDetails, ValidationRules, format_date,
};
use time::Date;
use time::macros::date;

pub fn create_test_rules() -> ValidationRules {
    ValidationRules::standard().unwrap()
}

pub const fn create_test_today() -> Date {
    date!(2024 - 06 - 01)
}

pub fn create_test_room(room_id: &str, room_type: &str, daily_rate: f64) -> Room {
    let details: RoomDetails = RoomDetails {
        room_id: String::from(room_id),
        name: format!("Room {room_id}"),
        room_type: String::from(room_type),
        daily_rate: daily_rate.to_string(),
        capacity: String::from("2"),
        furniture_description: String::from("Twin beds"),
    };
    Room::new(&details, &create_test_rules()).unwrap()
}

/// Builds a reservation without the date rules relative to today.
pub fn create_test_reservation(
    national_id: &str,
    room_id: &str,
    start_date: Date,
    rental_days: u32,
) -> Reservation {
    let details: ReservationDetails = ReservationDetails {
        national_id: String::from(national_id),
        full_name: String::from("Tran Minh Khoa"),
        birthdate: String::from("01/01/1985"),
        gender: String::from("Male"),
        phone_number: String::from("0987654321"),
        desired_room_id: String::from(room_id),
        rental_days: rental_days.to_string(),
        start_date: format_date(start_date),
        co_tenant_name: String::new(),
    };
    Reservation::restore(&details, &create_test_rules()).unwrap()
}

/// Room `R1` at 100 per day with reservation `X` occupying 10-12 June 2024.
pub fn create_scenario() -> (Vec<Room>, Vec<Reservation>) {
    let rooms: Vec<Room> = vec![
        create_test_room("R1", "Standard", 100.0),
        create_test_room("R2", "Suite", 200.0),
    ];
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "111111111111",
        "R1",
        date!(2024 - 06 - 10),
        3,
    )];
    (rooms, reservations)
}
