// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::ErrorKind;
use time::macros::date;

use super::helpers::{TestService, create_test_service, create_test_service_on};
use crate::{ApiError, RoomView};

fn room_ids(rooms: &[RoomView]) -> Vec<&str> {
    rooms.iter().map(|room| room.room_id.as_str()).collect()
}

#[test]
fn test_list_rooms_orders_by_id() {
    let service: TestService = create_test_service();

    let rooms: Vec<RoomView> = service.list_rooms().unwrap();
    assert_eq!(room_ids(&rooms), vec!["R1", "R2", "S3"]);
    assert_eq!(rooms[2].room_type, "Suite");
}

#[test]
fn test_vacant_rooms_skip_occupied_rooms() {
    let service: TestService = create_test_service_on(date!(2024 - 06 - 12));
    assert_eq!(
        room_ids(&service.vacant_rooms().unwrap()),
        vec!["R2", "S3"]
    );

    let after_checkout: TestService = create_test_service_on(date!(2024 - 06 - 13));
    assert_eq!(
        room_ids(&after_checkout.vacant_rooms().unwrap()),
        vec!["R1", "R2", "S3"]
    );
}

#[test]
fn test_check_availability() {
    let service: TestService = create_test_service();

    assert!(!service.check_availability("r1", "12/06/2024", "2").unwrap());
    assert!(service.check_availability("R1", "13/06/2024", "2").unwrap());

    let err: ApiError = service
        .check_availability("Q1", "13/06/2024", "2")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err: ApiError = service
        .check_availability("R1", "13/06/2024", "0")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_import_rooms_reports_summary() {
    let service: TestService = create_test_service();

    let summary = service.import_rooms().unwrap();
    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.failed, 0);
}
