// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use roomkeep_domain::ErrorKind;
use roomkeep_persistence::{FileStore, MemoryStore};

use super::helpers::{create_test_dir, create_test_request, create_test_rules, create_test_today};
use crate::{ApiError, FixedClock, HotelService, ImportRoomsResponse};

type FileService = HotelService<FileStore, FixedClock>;

fn open_service(dir: &std::path::Path) -> (FileService, ImportRoomsResponse) {
    HotelService::open(
        FileStore::new(dir.join("rooms.txt")),
        FileStore::new(dir.join("reservations.txt")),
        create_test_rules(),
        FixedClock::new(create_test_today()),
    )
    .unwrap()
}

#[test]
fn test_saved_reservations_survive_reopen() {
    let dir: PathBuf = create_test_dir();
    std::fs::write(
        dir.join("rooms.txt"),
        "R1;Garden View;Standard;100;2;Twin beds\nbroken line\n",
    )
    .unwrap();

    let (service, summary) = open_service(&dir);
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.failures[0].line_number, 2);
    assert!(service.list_reservations().unwrap().is_empty());

    service
        .create_reservation(&create_test_request("222222222222", "R1", "20/06/2024", "2"))
        .unwrap();
    assert_eq!(service.save().unwrap(), 1);

    let (reopened, _) = open_service(&dir);
    let names: Vec<String> = reopened
        .list_reservations()
        .unwrap()
        .into_iter()
        .map(|view| view.national_id)
        .collect();
    assert_eq!(names, vec!["222222222222"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_open_without_room_file_fails() {
    let dir: PathBuf = create_test_dir();

    let err: ApiError = HotelService::open(
        FileStore::new(dir.join("rooms.txt")),
        FileStore::new(dir.join("reservations.txt")),
        create_test_rules(),
        FixedClock::new(create_test_today()),
    )
    .err()
    .unwrap();
    assert_eq!(err.kind(), ErrorKind::Persistence);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_open_with_malformed_reservation_fails() {
    let err: ApiError = HotelService::open(
        MemoryStore::from_text("R1;Garden View;Standard;100;2;Twin beds"),
        MemoryStore::from_text("111111111111,Too,Short"),
        create_test_rules(),
        FixedClock::new(create_test_today()),
    )
    .err()
    .unwrap();
    assert!(matches!(err, ApiError::Persistence { .. }));
}
