// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod availability;
mod command;
mod error;
mod revenue;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use availability::{find_conflict, find_room, is_available, vacant_rooms};
pub use command::Command;
pub use error::CoreError;
pub use revenue::{
    MonthlyRevenueLine, RoomTypeRevenue, monthly_revenue, monthly_revenue_report,
    revenue_by_all_room_types, revenue_by_room_type,
};
pub use state::Transition;
