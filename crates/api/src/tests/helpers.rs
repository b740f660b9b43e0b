// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use roomkeep_domain::ValidationRules;
use roomkeep_persistence::MemoryStore;
use time::Date;
use time::macros::date;

use crate::{FixedClock, HotelService, ReservationRequest};

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

pub type TestService = HotelService<MemoryStore, FixedClock>;

pub fn create_test_rules() -> ValidationRules {
    ValidationRules::standard().unwrap()
}

pub const fn create_test_today() -> Date {
    date!(2024 - 06 - 01)
}

pub fn create_room_store() -> MemoryStore {
    MemoryStore::from_text(
        "R1;Garden View;Standard;100;2;Twin beds\n\
         R2;Sky Suite;Suite;200;4;King bed and sofa\n\
         S3;Sea Suite;suite;200;3;King bed\n",
    )
}

pub fn create_reservation_store() -> MemoryStore {
    MemoryStore::from_text(
        "111111111111,Tran Minh,15/03/1990,Male,0912345678,R1,3,10/06/2024,\n",
    )
}

pub fn create_test_service_on(today: Date) -> TestService {
    let (service, _) = HotelService::open(
        create_room_store(),
        create_reservation_store(),
        create_test_rules(),
        FixedClock::new(today),
    )
    .unwrap();
    service
}

pub fn create_test_service() -> TestService {
    create_test_service_on(create_test_today())
}

pub fn create_test_request(
    national_id: &str,
    room_id: &str,
    start_date: &str,
    rental_days: &str,
) -> ReservationRequest {
    ReservationRequest {
        national_id: String::from(national_id),
        full_name: String::from("le thi hoa"),
        birthdate: String::from("20/11/1988"),
        gender: String::from("FEMALE"),
        phone_number: String::from("0387654321"),
        room_id: String::from(room_id),
        rental_days: String::from(rental_days),
        start_date: String::from(start_date),
        co_tenant_name: String::new(),
    }
}

/// A directory under the system temp directory unique to this test.
pub fn create_test_dir() -> PathBuf {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir: PathBuf =
        std::env::temp_dir().join(format!("roomkeep_api_test_{}_{id}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
