// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomkeep_domain::{BillingMonth, Reservation, Room, RoomType};
use time::Month;
use time::macros::date;

use super::helpers::{create_test_reservation, create_test_room};
use crate::{
    MonthlyRevenueLine, RoomTypeRevenue, monthly_revenue, monthly_revenue_report,
    revenue_by_all_room_types, revenue_by_room_type,
};

fn create_inventory() -> Vec<Room> {
    vec![
        create_test_room("S1", "Suite", 200.0),
        create_test_room("S2", "suite", 200.0),
        create_test_room("D1", "Deluxe", 150.0),
    ]
}

#[test]
fn test_revenue_by_room_type_sums_days_times_rate() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("111111111111", "S1", date!(2024 - 06 - 10), 2),
        create_test_reservation("222222222222", "S2", date!(2024 - 07 - 10), 3),
        create_test_reservation("333333333333", "D1", date!(2024 - 06 - 10), 4),
    ];

    let total: f64 = revenue_by_room_type(&rooms, &reservations, RoomType::Suite);
    assert!((total - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn test_revenue_by_room_type_skips_dangling_room_references() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("111111111111", "S1", date!(2024 - 06 - 10), 2),
        create_test_reservation("222222222222", "X9", date!(2024 - 06 - 10), 5),
    ];

    let total: f64 = revenue_by_room_type(&rooms, &reservations, RoomType::Suite);
    assert!((total - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_revenue_by_room_type_is_zero_without_matches() {
    let rooms: Vec<Room> = create_inventory();
    assert!(revenue_by_room_type(&rooms, &[], RoomType::Standard).abs() < f64::EPSILON);
}

#[test]
fn test_revenue_by_all_room_types_covers_every_type() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "111111111111",
        "D1",
        date!(2024 - 06 - 10),
        2,
    )];

    let totals: Vec<RoomTypeRevenue> = revenue_by_all_room_types(&rooms, &reservations);
    assert_eq!(totals.len(), 4);
    assert_eq!(totals[0].room_type, RoomType::Deluxe);
    assert!((totals[0].amount - 300.0).abs() < f64::EPSILON);
    assert!(totals[1..].iter().all(|total| total.amount.abs() < f64::EPSILON));
}

#[test]
fn test_monthly_revenue_counts_stays_starting_in_month() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("111111111111", "S1", date!(2024 - 06 - 29), 5),
        create_test_reservation("222222222222", "S1", date!(2024 - 07 - 01), 1),
        create_test_reservation("333333333333", "S1", date!(2023 - 06 - 15), 1),
        create_test_reservation("444444444444", "S2", date!(2024 - 06 - 15), 1),
    ];
    let june: BillingMonth = BillingMonth::new(2024, Month::June);

    let amount: f64 = monthly_revenue(&rooms[0], &reservations, june);
    assert!((amount - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn test_monthly_report_lists_earning_rooms_by_id() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("111111111111", "S2", date!(2024 - 06 - 02), 1),
        create_test_reservation("222222222222", "D1", date!(2024 - 06 - 03), 2),
    ];

    let lines: Vec<MonthlyRevenueLine<'_>> =
        monthly_revenue_report(&rooms, &reservations, BillingMonth::new(2024, Month::June));
    let ids: Vec<&str> = lines
        .iter()
        .map(|line| line.room.room_id().as_str())
        .collect();
    assert_eq!(ids, vec!["D1", "S2"]);
    assert!((lines[0].amount - 300.0).abs() < f64::EPSILON);
    assert!((lines[1].amount - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_monthly_report_is_empty_for_quiet_month() {
    let rooms: Vec<Room> = create_inventory();
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "111111111111",
        "S2",
        date!(2024 - 06 - 02),
        1,
    )];

    assert!(
        monthly_revenue_report(&rooms, &reservations, BillingMonth::new(2024, Month::May))
            .is_empty()
    );
}
