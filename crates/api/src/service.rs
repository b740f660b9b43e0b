// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The hotel service: the caller layer over both repositories.
//!
//! Both repositories sit behind a single `RwLock`. Reads share the lock.
//! Every write holds the write guard from validation through the
//! availability check to the commit, so no other write can slip in
//! between deciding and applying.

use std::str::FromStr;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use roomkeep::{
    Command, CoreError, MonthlyRevenueLine, RoomTypeRevenue, Transition, apply, is_available,
    monthly_revenue_report, revenue_by_all_room_types, revenue_by_room_type, vacant_rooms,
};
use roomkeep_domain::{
    BillingMonth, Field, Reservation, RoomType, ValidationRules, parse_date, parse_positive_count,
};
use roomkeep_persistence::{ImportSummary, LineStore, ReservationRepository, RoomRepository};
use time::Date;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{
    ApiError, translate_core_error, translate_persistence_error, translate_validation_error,
};
use crate::format::format_amount;
use crate::request_response::{
    ImportRoomsResponse, MonthlyRevenueResponse, ReservationDetailView, ReservationRequest,
    ReservationView, RoomRevenueView, RoomTypeRevenueResponse, RoomView,
};

struct Inventory<S> {
    rooms: RoomRepository<S>,
    reservations: ReservationRepository<S>,
}

/// Hotel operations over a room inventory and a reservation book.
pub struct HotelService<S, C> {
    inventory: RwLock<Inventory<S>>,
    rules: ValidationRules,
    clock: C,
}

fn rejected(operation: &str, err: CoreError) -> ApiError {
    warn!(operation, kind = %err.kind(), error = %err, "Request rejected");
    translate_core_error(err)
}

impl<S: LineStore, C: Clock> HotelService<S, C> {
    /// Creates a service over already-populated repositories.
    pub fn new(
        rooms: RoomRepository<S>,
        reservations: ReservationRepository<S>,
        rules: ValidationRules,
        clock: C,
    ) -> Self {
        Self {
            inventory: RwLock::new(Inventory {
                rooms,
                reservations,
            }),
            rules,
            clock,
        }
    }

    /// Imports the room inventory and loads the reservation book.
    ///
    /// # Arguments
    ///
    /// * `room_store` - Where the room inventory lives
    /// * `reservation_store` - Where reservations live
    /// * `rules` - The validation rule set for every entity
    /// * `clock` - Source of today's date
    ///
    /// # Errors
    ///
    /// Returns an error if the room import fails or any stored reservation
    /// is malformed.
    pub fn open(
        room_store: S,
        reservation_store: S,
        rules: ValidationRules,
        clock: C,
    ) -> Result<(Self, ImportRoomsResponse), ApiError> {
        let mut rooms: RoomRepository<S> = RoomRepository::new(room_store, rules.clone());
        let summary: ImportSummary = rooms.import().map_err(translate_persistence_error)?;
        let reservations: ReservationRepository<S> =
            ReservationRepository::open(reservation_store, rules.clone())
                .map_err(translate_persistence_error)?;

        Ok((
            Self::new(rooms, reservations, rules, clock),
            ImportRoomsResponse::from(&summary),
        ))
    }

    /// Today's date according to the service clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inventory<S>>, ApiError> {
        self.inventory.read().map_err(|_| ApiError::Internal {
            message: String::from("inventory lock poisoned"),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inventory<S>>, ApiError> {
        self.inventory.write().map_err(|_| ApiError::Internal {
            message: String::from("inventory lock poisoned"),
        })
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    /// Re-imports the room inventory from its store, replacing it wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is empty, unreadable, or yields no room.
    pub fn import_rooms(&self) -> Result<ImportRoomsResponse, ApiError> {
        let mut inventory = self.write()?;
        let summary: ImportSummary = inventory
            .rooms
            .import()
            .map_err(translate_persistence_error)?;
        Ok(ImportRoomsResponse::from(&summary))
    }

    /// All rooms ordered by room ID.
    ///
    /// # Errors
    ///
    /// Returns an error only if the inventory lock is poisoned.
    pub fn list_rooms(&self) -> Result<Vec<RoomView>, ApiError> {
        let inventory = self.read()?;
        Ok(inventory
            .rooms
            .list()
            .into_iter()
            .map(RoomView::from)
            .collect())
    }

    /// Rooms with no guest tonight, ordered by room ID.
    ///
    /// # Errors
    ///
    /// Returns an error only if the inventory lock is poisoned.
    pub fn vacant_rooms(&self) -> Result<Vec<RoomView>, ApiError> {
        let today: Date = self.clock.today();
        let inventory = self.read()?;
        Ok(vacant_rooms(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            today,
        )
        .into_iter()
        .map(RoomView::from)
        .collect())
    }

    /// Whether `room_id` is free for `rental_days` nights from `start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or day count do not parse, or the room
    /// does not exist.
    pub fn check_availability(
        &self,
        room_id: &str,
        start_date: &str,
        rental_days: &str,
    ) -> Result<bool, ApiError> {
        let start_date: Date =
            parse_date(Field::StartDate, start_date).map_err(translate_validation_error)?;
        let rental_days: u32 = parse_positive_count(Field::RentalDays, rental_days)
            .map_err(translate_validation_error)?;

        let inventory = self.read()?;
        is_available(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            room_id.trim(),
            start_date,
            rental_days,
            None,
        )
        .map_err(translate_core_error)
    }

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------

    /// All reservations ordered by guest name.
    ///
    /// # Errors
    ///
    /// Returns an error only if the inventory lock is poisoned.
    pub fn list_reservations(&self) -> Result<Vec<ReservationView>, ApiError> {
        let inventory = self.read()?;
        Ok(inventory
            .reservations
            .list()
            .into_iter()
            .map(ReservationView::from)
            .collect())
    }

    /// One reservation and the room it books.
    ///
    /// # Errors
    ///
    /// Returns an error if no reservation has `national_id`.
    pub fn find_reservation(&self, national_id: &str) -> Result<ReservationDetailView, ApiError> {
        let inventory = self.read()?;
        let reservation: &Reservation =
            inventory
                .reservations
                .get(national_id.trim())
                .ok_or_else(|| {
                    translate_core_error(CoreError::ReservationNotFound {
                        national_id: national_id.trim().to_string(),
                    })
                })?;

        Ok(ReservationDetailView {
            reservation: ReservationView::from(reservation),
            room: inventory
                .rooms
                .get(reservation.desired_room_id().as_str())
                .map(RoomView::from),
        })
    }

    /// Books a room.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the room does not exist, the
    /// national ID is already booked, or the room is taken on any requested
    /// night.
    pub fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationView, ApiError> {
        let today: Date = self.clock.today();
        let mut inventory = self.write()?;

        let reservation: Reservation =
            Reservation::new(&request.to_details(&request.national_id), &self.rules, today)
                .map_err(translate_validation_error)?;
        let view: ReservationView = ReservationView::from(&reservation);

        let transition: Transition = apply(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            Command::Book { reservation },
            today,
        )
        .map_err(|err| rejected("create_reservation", err))?;
        inventory
            .reservations
            .commit(transition)
            .map_err(translate_persistence_error)?;

        info!(
            national_id = %view.national_id,
            room_id = %view.room_id,
            start_date = %view.start_date,
            rental_days = view.rental_days,
            "Reservation created"
        );
        Ok(view)
    }

    /// Replaces every field of an existing reservation. The national ID
    /// stays `national_id` regardless of the request.
    ///
    /// # Errors
    ///
    /// Returns an error if no reservation has `national_id`, a field is
    /// invalid, the room does not exist, or another booking holds one of
    /// the requested nights.
    pub fn update_reservation(
        &self,
        national_id: &str,
        request: &ReservationRequest,
    ) -> Result<ReservationView, ApiError> {
        let today: Date = self.clock.today();
        let mut inventory = self.write()?;

        let stored_id: String = inventory
            .reservations
            .get(national_id.trim())
            .map(|reservation| reservation.national_id().to_string())
            .ok_or_else(|| {
                rejected(
                    "update_reservation",
                    CoreError::ReservationNotFound {
                        national_id: national_id.trim().to_string(),
                    },
                )
            })?;

        let replacement: Reservation =
            Reservation::new(&request.to_details(&stored_id), &self.rules, today)
                .map_err(translate_validation_error)?;
        let view: ReservationView = ReservationView::from(&replacement);

        let transition: Transition = apply(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            Command::Amend {
                national_id: stored_id,
                replacement,
            },
            today,
        )
        .map_err(|err| rejected("update_reservation", err))?;
        inventory
            .reservations
            .commit(transition)
            .map_err(translate_persistence_error)?;

        info!(
            national_id = %view.national_id,
            room_id = %view.room_id,
            start_date = %view.start_date,
            rental_days = view.rental_days,
            "Reservation updated"
        );
        Ok(view)
    }

    /// Cancels a reservation whose stay has not started yet.
    ///
    /// # Errors
    ///
    /// Returns an error if no reservation has `national_id`, or its start
    /// date is today or earlier.
    pub fn cancel_reservation(&self, national_id: &str) -> Result<ReservationView, ApiError> {
        let today: Date = self.clock.today();
        let mut inventory = self.write()?;

        let transition: Transition = apply(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            Command::Cancel {
                national_id: national_id.trim().to_string(),
            },
            today,
        )
        .map_err(|err| rejected("cancel_reservation", err))?;

        let view: ReservationView = inventory
            .reservations
            .get(transition.national_id().as_str())
            .map(ReservationView::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("cancelled reservation vanished before commit"),
            })?;
        inventory
            .reservations
            .commit(transition)
            .map_err(translate_persistence_error)?;

        info!(national_id = %view.national_id, "Reservation cancelled");
        Ok(view)
    }

    /// Writes the reservation book to its store and returns how many
    /// reservations were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self) -> Result<usize, ApiError> {
        let mut inventory = self.write()?;
        inventory
            .reservations
            .save()
            .map_err(translate_persistence_error)?;
        Ok(inventory.reservations.len())
    }

    // ------------------------------------------------------------------
    // Revenue
    // ------------------------------------------------------------------

    /// Revenue per room for stays starting in `month` (`MM/yyyy`).
    ///
    /// # Errors
    ///
    /// Returns an error if `month` does not parse.
    pub fn monthly_revenue_report(&self, month: &str) -> Result<MonthlyRevenueResponse, ApiError> {
        let month: BillingMonth = BillingMonth::parse(month).map_err(translate_validation_error)?;

        let inventory = self.read()?;
        let lines: Vec<MonthlyRevenueLine<'_>> = monthly_revenue_report(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            month,
        );
        let total: f64 = lines.iter().map(|line| line.amount).sum();

        Ok(MonthlyRevenueResponse {
            month: month.to_string(),
            rooms: lines.iter().map(RoomRevenueView::from).collect(),
            total,
            formatted_total: format_amount(total),
        })
    }

    /// Revenue over every reservation of rooms of `room_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if `room_type` is not a known category.
    pub fn revenue_by_room_type(
        &self,
        room_type: &str,
    ) -> Result<RoomTypeRevenueResponse, ApiError> {
        let room_type: RoomType =
            RoomType::from_str(room_type.trim()).map_err(translate_validation_error)?;

        let inventory = self.read()?;
        let amount: f64 = revenue_by_room_type(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
            room_type,
        );

        Ok(RoomTypeRevenueResponse {
            room_type: room_type.to_string(),
            amount,
            formatted_amount: format_amount(amount),
        })
    }

    /// Revenue for every room type, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the inventory lock is poisoned.
    pub fn revenue_by_all_room_types(&self) -> Result<Vec<RoomTypeRevenueResponse>, ApiError> {
        let inventory = self.read()?;
        let totals: Vec<RoomTypeRevenue> = revenue_by_all_room_types(
            inventory.rooms.as_slice(),
            inventory.reservations.as_slice(),
        );

        Ok(totals
            .into_iter()
            .map(|total| RoomTypeRevenueResponse {
                room_type: total.room_type.to_string(),
                amount: total.amount,
                formatted_amount: format_amount(total.amount),
            })
            .collect())
    }
}
