// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use roomkeep::Transition;
use roomkeep_domain::{Reservation, ValidationRules};
use tracing::{debug, info};

use crate::codec::{decode_reservation, encode_reservation};
use crate::error::PersistenceError;
use crate::store::LineStore;

/// Owns the reservation collection.
///
/// The repository enforces identity uniqueness only. Room existence,
/// availability and the cancellation policy are the caller's concern.
#[derive(Debug)]
pub struct ReservationRepository<S> {
    store: S,
    rules: ValidationRules,
    reservations: Vec<Reservation>,
}

impl<S: LineStore> ReservationRepository<S> {
    /// Creates an empty repository over `store`.
    pub const fn new(store: S, rules: ValidationRules) -> Self {
        Self {
            store,
            rules,
            reservations: Vec::new(),
        }
    }

    /// Creates a repository and loads whatever `store` holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or any record is malformed.
    pub fn open(store: S, rules: ValidationRules) -> Result<Self, PersistenceError> {
        let mut repository: Self = Self::new(store, rules);
        repository.reload()?;
        Ok(repository)
    }

    /// Replaces the collection with the content of the backing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or any record is malformed.
    pub fn reload(&mut self) -> Result<usize, PersistenceError> {
        let lines: Vec<String> = self.store.read_lines()?;
        self.load(&lines)
    }

    /// Replaces the collection with `records`, all or nothing.
    ///
    /// Blank lines are ignored. Any malformed record, or a national ID that
    /// appears twice, aborts the load and leaves the collection untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::MalformedRecord`] naming the first bad line.
    pub fn load<L: AsRef<str>>(&mut self, records: &[L]) -> Result<usize, PersistenceError> {
        let mut reservations: Vec<Reservation> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            let line: &str = record.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |reason: String| PersistenceError::MalformedRecord {
                origin: self.store.origin(),
                line_number: index + 1,
                reason,
            };
            let reservation: Reservation =
                decode_reservation(line, &self.rules).map_err(|err| malformed(err.to_string()))?;
            if !seen.insert(reservation.national_id().to_string()) {
                return Err(malformed(format!(
                    "duplicate national ID '{}'",
                    reservation.national_id()
                )));
            }
            reservations.push(reservation);
        }

        info!(
            origin = %self.store.origin(),
            loaded = reservations.len(),
            "Loaded reservations"
        );
        self.reservations = reservations;
        Ok(self.reservations.len())
    }

    /// All reservations ordered by full name, ignoring case.
    #[must_use]
    pub fn list(&self) -> Vec<&Reservation> {
        let mut reservations: Vec<&Reservation> = self.reservations.iter().collect();
        reservations.sort_by_cached_key(|reservation| reservation.full_name().to_lowercase());
        reservations
    }

    /// Looks up a reservation by national ID, ignoring case.
    #[must_use]
    pub fn get(&self, national_id: &str) -> Option<&Reservation> {
        self.position(national_id)
            .map(|index| &self.reservations[index])
    }

    /// Adds a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DuplicateReservation`] if the national ID
    /// is already stored.
    pub fn add(&mut self, reservation: Reservation) -> Result<(), PersistenceError> {
        if self.position(reservation.national_id().as_str()).is_some() {
            return Err(PersistenceError::DuplicateReservation {
                national_id: reservation.national_id().to_string(),
            });
        }

        debug!(national_id = %reservation.national_id(), "Adding reservation");
        self.reservations.push(reservation);
        Ok(())
    }

    /// Replaces every field of the reservation stored under `national_id`,
    /// returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::ReservationNotFound`] if nothing is stored
    /// under `national_id`, or [`PersistenceError::IdentityMismatch`] if the
    /// replacement carries another national ID.
    pub fn update(
        &mut self,
        national_id: &str,
        replacement: Reservation,
    ) -> Result<Reservation, PersistenceError> {
        let index: usize =
            self.position(national_id)
                .ok_or_else(|| PersistenceError::ReservationNotFound {
                    national_id: national_id.to_string(),
                })?;
        if !replacement.national_id().matches(national_id) {
            return Err(PersistenceError::IdentityMismatch {
                national_id: national_id.to_string(),
                replacement: replacement.national_id().to_string(),
            });
        }

        debug!(national_id, "Replacing reservation");
        Ok(std::mem::replace(&mut self.reservations[index], replacement))
    }

    /// Removes the reservation stored under `national_id`, if any.
    pub fn remove(&mut self, national_id: &str) -> Option<Reservation> {
        let index: usize = self.position(national_id)?;
        debug!(national_id, "Removing reservation");
        Some(self.reservations.remove(index))
    }

    /// Applies a transition produced by the booking policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition refers to a reservation that
    /// does not exist, or inserts one that already does.
    pub fn commit(&mut self, transition: Transition) -> Result<(), PersistenceError> {
        match transition {
            Transition::Insert(reservation) => self.add(reservation),
            Transition::Replace {
                national_id,
                replacement,
            } => self
                .update(national_id.as_str(), replacement)
                .map(|_| ()),
            Transition::Remove { national_id } => self
                .remove(national_id.as_str())
                .map(|_| ())
                .ok_or_else(|| PersistenceError::ReservationNotFound {
                    national_id: national_id.to_string(),
                }),
        }
    }

    /// Writes the whole collection to the backing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let lines: Vec<String> = self.reservations.iter().map(encode_reservation).collect();
        self.store.write_lines(&lines)?;
        info!(origin = %self.store.origin(), saved = lines.len(), "Saved reservations");
        Ok(())
    }

    /// The collection in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Number of reservations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Whether no reservation is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, national_id: &str) -> Option<usize> {
        self.reservations
            .iter()
            .position(|reservation| reservation.national_id().matches(national_id))
    }
}
