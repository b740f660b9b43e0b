// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for hotel room inventory and guest reservations.
//!
//! Every entity in this crate is validated when it is constructed. A
//! `Room` or `Reservation` value that exists is always well-formed and
//! normalized; there are no setters.

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

mod error;
mod parse;
mod reservation;
mod room;
mod rules;
mod types;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, Field, RuleSetError, ValidationError};
pub use parse::{
    DATE_FORMAT, format_date, parse_date, parse_positive_count, parse_positive_rate, title_case,
};
pub use reservation::{ABSENT_CO_TENANT, Reservation, ReservationDetails};
pub use room::{Room, RoomDetails};
pub use rules::{RulePatterns, ValidationRules};
pub use types::{BillingMonth, Gender, NationalId, RoomId, RoomType, StayRange};
