// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Revenue aggregation.
//!
//! A reservation is worth `rental_days * daily_rate` of the room it books,
//! attributed entirely to the month it starts in.

use roomkeep_domain::{BillingMonth, Reservation, Room, RoomType};

use crate::availability::find_room;

/// One row of a monthly revenue report.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenueLine<'a> {
    /// The room earning the revenue.
    pub room: &'a Room,
    /// Sum of charges for stays in this room starting in the month.
    pub amount: f64,
}

/// Total for one room type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTypeRevenue {
    /// The room type.
    pub room_type: RoomType,
    /// Sum of charges over all reservations of rooms of this type.
    pub amount: f64,
}

/// Revenue earned by `room` from stays that start in `month`.
#[must_use]
pub fn monthly_revenue(room: &Room, reservations: &[Reservation], month: BillingMonth) -> f64 {
    reservations
        .iter()
        .filter(|reservation| {
            reservation.desired_room_id().matches(room.room_id().as_str())
                && month.contains(reservation.start_date())
        })
        .map(|reservation| room.charge_for(reservation.rental_days()))
        .sum()
}

/// Revenue earned by every room of `room_type`.
///
/// A reservation whose room is no longer in the inventory contributes
/// nothing.
#[must_use]
pub fn revenue_by_room_type(
    rooms: &[Room],
    reservations: &[Reservation],
    room_type: RoomType,
) -> f64 {
    reservations
        .iter()
        .filter_map(|reservation| {
            find_room(rooms, reservation.desired_room_id().as_str())
                .filter(|room| room.room_type() == room_type)
                .map(|room| room.charge_for(reservation.rental_days()))
        })
        .sum()
}

/// Totals for all room types, in [`RoomType::ALL`] order.
#[must_use]
pub fn revenue_by_all_room_types(
    rooms: &[Room],
    reservations: &[Reservation],
) -> Vec<RoomTypeRevenue> {
    RoomType::ALL
        .into_iter()
        .map(|room_type| RoomTypeRevenue {
            room_type,
            amount: revenue_by_room_type(rooms, reservations, room_type),
        })
        .collect()
}

/// Per-room revenue for `month`, ordered by room ID.
///
/// Rooms that earned nothing in the month are left out.
#[must_use]
pub fn monthly_revenue_report<'a>(
    rooms: &'a [Room],
    reservations: &[Reservation],
    month: BillingMonth,
) -> Vec<MonthlyRevenueLine<'a>> {
    let mut lines: Vec<MonthlyRevenueLine<'a>> = rooms
        .iter()
        .map(|room| MonthlyRevenueLine {
            room,
            amount: monthly_revenue(room, reservations, month),
        })
        .filter(|line| line.amount > 0.0)
        .collect();
    lines.sort_by(|a, b| a.room.room_id().cmp(b.room.room_id()));
    lines
}
