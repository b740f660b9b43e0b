// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of service responses.

use std::fmt::Write;

use roomkeep_api::{
    ImportRoomsResponse, MonthlyRevenueResponse, ReservationDetailView, ReservationView,
    RoomTypeRevenueResponse, RoomView, format_amount,
};

pub fn rooms(rooms: &[RoomView]) -> String {
    if rooms.is_empty() {
        return String::from("No rooms.\n");
    }

    let mut out: String = format!(
        "{:<6} {:<25} {:<9} {:>10} {:>8}  {}\n",
        "ID", "Name", "Type", "Rate", "Capacity", "Furniture"
    );
    for room in rooms {
        let _ = writeln!(
            out,
            "{:<6} {:<25} {:<9} {:>10} {:>8}  {}",
            room.room_id,
            room.name,
            room.room_type,
            format_amount(room.daily_rate),
            room.capacity,
            room.furniture_description
        );
    }
    out
}

pub fn reservations(reservations: &[ReservationView]) -> String {
    if reservations.is_empty() {
        return String::from("No reservations.\n");
    }

    let mut out: String = format!(
        "{:<12} {:<25} {:<6} {:<10} {:>4}  {}\n",
        "National ID", "Name", "Room", "Check-in", "Days", "Co-tenant"
    );
    for reservation in reservations {
        let _ = writeln!(
            out,
            "{:<12} {:<25} {:<6} {:<10} {:>4}  {}",
            reservation.national_id,
            reservation.full_name,
            reservation.room_id,
            reservation.start_date,
            reservation.rental_days,
            reservation.co_tenant_name.as_deref().unwrap_or("-")
        );
    }
    out
}

pub fn reservation(view: &ReservationView) -> String {
    let mut out: String = String::new();
    let _ = writeln!(out, "National ID:  {}", view.national_id);
    let _ = writeln!(out, "Full name:    {}", view.full_name);
    let _ = writeln!(out, "Birthdate:    {}", view.birthdate);
    let _ = writeln!(out, "Gender:       {}", view.gender);
    let _ = writeln!(out, "Phone:        {}", view.phone_number);
    let _ = writeln!(out, "Room:         {}", view.room_id);
    let _ = writeln!(out, "Check-in:     {}", view.start_date);
    let _ = writeln!(out, "Nights:       {}", view.rental_days);
    let _ = writeln!(out, "Last night:   {}", view.end_date);
    let _ = writeln!(
        out,
        "Check-out:    {}",
        view.check_out.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "Co-tenant:    {}",
        view.co_tenant_name.as_deref().unwrap_or("-")
    );
    out
}

pub fn detail(detail: &ReservationDetailView) -> String {
    let mut out: String = reservation(&detail.reservation);
    match &detail.room {
        Some(room) => {
            let _ = writeln!(
                out,
                "Room details: {} ({}, {} per night, sleeps {})",
                room.name,
                room.room_type,
                format_amount(room.daily_rate),
                room.capacity
            );
        }
        None => out.push_str("Room details: room no longer in inventory\n"),
    }
    out
}

pub fn import(summary: &ImportRoomsResponse) -> String {
    let mut out: String = format!(
        "Imported {} rooms, skipped {} records.\n",
        summary.loaded, summary.failed
    );
    for failure in &summary.failures {
        let _ = writeln!(out, "  line {}: {}", failure.line_number, failure.reason);
    }
    out
}

pub fn monthly_revenue(report: &MonthlyRevenueResponse) -> String {
    if report.rooms.is_empty() {
        return format!("No revenue in {}.\n", report.month);
    }

    let mut out: String = format!("Revenue for {}\n", report.month);
    for room in &report.rooms {
        let _ = writeln!(
            out,
            "{:<6} {:<25} {:<9} {:>12}",
            room.room_id, room.name, room.room_type, room.formatted_amount
        );
    }
    let _ = writeln!(out, "{:<42} {:>12}", "Total", report.formatted_total);
    out
}

pub fn room_type_revenue(totals: &[RoomTypeRevenueResponse]) -> String {
    let mut out: String = String::new();
    for total in totals {
        let _ = writeln!(out, "{:<9} {:>12}", total.room_type, total.formatted_amount);
    }
    out
}
