// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::Date;
use time::macros::date;

use crate::{ReservationDetails, RoomDetails, ValidationRules};

pub fn create_test_rules() -> ValidationRules {
    ValidationRules::standard().unwrap()
}

pub const fn create_test_today() -> Date {
    date!(2024 - 06 - 01)
}

pub fn create_test_room_details() -> RoomDetails {
    RoomDetails {
        room_id: String::from("r101"),
        name: String::from("Garden View"),
        room_type: String::from("deluxe"),
        daily_rate: String::from("120.5"),
        capacity: String::from("2"),
        furniture_description: String::from("1 King bed, 1 desk"),
    }
}

pub fn create_test_reservation_details() -> ReservationDetails {
    ReservationDetails {
        national_id: String::from("123456789012"),
        full_name: String::from("nguyen  van an"),
        birthdate: String::from("15/03/1990"),
        gender: String::from("MALE"),
        phone_number: String::from("0912345678"),
        desired_room_id: String::from("r101"),
        rental_days: String::from("3"),
        start_date: String::from("10/06/2024"),
        co_tenant_name: String::new(),
    }
}
