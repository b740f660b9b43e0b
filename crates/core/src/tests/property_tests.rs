// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use proptest::prelude::*;
use roomkeep_domain::{Reservation, Room, RoomType};
use time::macros::date;
use time::{Date, Duration};

use super::helpers::{create_test_reservation, create_test_room, create_test_today};
use crate::{Command, Transition, apply, find_conflict, revenue_by_room_type};

const ROOM_IDS: [&str; 3] = ["A1", "B2", "C3"];

fn base_date() -> Date {
    date!(2024 - 07 - 01)
}

fn night_offsets(offset: i64, days: u32) -> std::ops::Range<i64> {
    offset..offset + i64::from(days)
}

fn create_rooms() -> Vec<Room> {
    vec![
        create_test_room("A1", "Standard", 80.0),
        create_test_room("B2", "Suite", 250.0),
        create_test_room("C3", "Suite", 310.0),
    ]
}

fn national_id_for(index: usize) -> String {
    format!("{:012}", index + 1)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// A conflict is reported exactly when some night is shared.
    #[test]
    fn conflict_matches_shared_nights(
        existing_offset in 0i64..40,
        existing_days in 1u32..10,
        requested_offset in 0i64..40,
        requested_days in 1u32..10,
    ) {
        let rooms: Vec<Room> = create_rooms();
        let reservations: Vec<Reservation> = vec![create_test_reservation(
            "111111111111",
            "A1",
            base_date() + Duration::days(existing_offset),
            existing_days,
        )];

        let shares_night: bool = night_offsets(existing_offset, existing_days)
            .any(|night| night_offsets(requested_offset, requested_days).contains(&night));
        let conflict: Option<&Reservation> = find_conflict(
            &rooms,
            &reservations,
            "A1",
            base_date() + Duration::days(requested_offset),
            requested_days,
            None,
        )
        .unwrap();

        prop_assert_eq!(conflict.is_some(), shares_night);
    }

    /// Applying any sequence of bookings never double-books a room night.
    #[test]
    fn booked_sequences_never_overlap(
        requests in prop::collection::vec((0usize..3, 0i64..30, 1u32..6), 1..25)
    ) {
        let rooms: Vec<Room> = create_rooms();
        let mut reservations: Vec<Reservation> = Vec::new();

        for (index, (room, offset, days)) in requests.into_iter().enumerate() {
            let candidate: Reservation = create_test_reservation(
                &national_id_for(index),
                ROOM_IDS[room],
                base_date() + Duration::days(offset),
                days,
            );
            let command: Command = Command::Book { reservation: candidate };
            if let Ok(Transition::Insert(accepted)) =
                apply(&rooms, &reservations, command, create_test_today())
            {
                reservations.push(accepted);
            }
        }

        for (i, left) in reservations.iter().enumerate() {
            for right in &reservations[i + 1..] {
                prop_assert_ne!(left.national_id(), right.national_id());
                if left.desired_room_id() == right.desired_room_id() {
                    prop_assert!(!left.stay().overlaps(&right.stay()));
                }
            }
        }
    }

    /// Type revenue equals the direct sum of rate times days.
    #[test]
    fn type_revenue_matches_direct_sum(
        stays in prop::collection::vec((0usize..3, 1u32..15), 0..20)
    ) {
        let rooms: Vec<Room> = create_rooms();
        let reservations: Vec<Reservation> = stays
            .iter()
            .enumerate()
            .map(|(index, (room, days))| {
                create_test_reservation(
                    &national_id_for(index),
                    ROOM_IDS[*room],
                    base_date() + Duration::days(i64::try_from(index).unwrap() * 20),
                    *days,
                )
            })
            .collect();

        let expected: f64 = stays
            .iter()
            .filter(|(room, _)| *room > 0)
            .map(|(room, days)| rooms[*room].daily_rate() * f64::from(*days))
            .sum();
        let total: f64 = revenue_by_room_type(&rooms, &reservations, RoomType::Suite);

        prop_assert!((total - expected).abs() < 1e-6);
    }
}
