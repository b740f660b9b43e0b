// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat-file persistence for rooms and reservations.
//!
//! Each collection lives in a line-oriented text store, one record per line.
//! The room inventory is imported tolerantly: bad records are skipped and
//! reported. Reservations are loaded strictly: one bad record aborts the
//! whole load.
//!
//! Storage is reached only through the [`LineStore`] trait, so repositories
//! work the same over a [`FileStore`] or a [`MemoryStore`].

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

mod codec;
mod error;
mod reservations;
mod rooms;
mod store;

#[cfg(test)]
mod tests;

pub use codec::{
    RESERVATION_FIELDS, ROOM_FIELDS, RecordError, decode_reservation, decode_room,
    encode_reservation,
};
pub use error::PersistenceError;
pub use reservations::ReservationRepository;
pub use rooms::{ImportSummary, RecordFailure, RoomRepository};
pub use store::{FileStore, LineStore, MemoryStore};
