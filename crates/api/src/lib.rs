// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service boundary for the roomkeep hotel reservation system.
//!
//! [`HotelService`] is the caller layer over the room and reservation
//! repositories. It turns raw requests into validated entities, runs the
//! booking policy, commits the result and shapes responses. Errors from
//! every lower layer are translated into [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod error;
mod format;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ApiError, translate_core_error, translate_persistence_error, translate_validation_error,
};
pub use format::format_amount;
pub use request_response::{
    ImportFailureView, ImportRoomsResponse, MonthlyRevenueResponse, ReservationDetailView,
    ReservationRequest, ReservationView, RoomRevenueView, RoomTypeRevenueResponse, RoomView,
};
pub use service::HotelService;
