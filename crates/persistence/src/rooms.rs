// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use roomkeep_domain::{Room, ValidationRules};
use tracing::{info, warn};

use crate::codec::decode_room;
use crate::error::PersistenceError;
use crate::store::LineStore;

/// A record skipped during a tolerant import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// Why the record was skipped.
    pub reason: String,
}

/// Outcome of a room import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rooms committed.
    pub loaded: usize,
    /// Records skipped.
    pub failed: usize,
    /// One entry per skipped record, in source order.
    pub failures: Vec<RecordFailure>,
}

/// Owns the room inventory.
///
/// Rooms only enter the repository through a bulk import, which replaces
/// the whole collection.
#[derive(Debug)]
pub struct RoomRepository<S> {
    store: S,
    rules: ValidationRules,
    rooms: Vec<Room>,
}

impl<S: LineStore> RoomRepository<S> {
    /// Creates an empty repository over `store`.
    pub const fn new(store: S, rules: ValidationRules) -> Self {
        Self {
            store,
            rules,
            rooms: Vec::new(),
        }
    }

    /// Reads every record from the backing store and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, holds no records, or
    /// yields no valid room.
    pub fn import(&mut self) -> Result<ImportSummary, PersistenceError> {
        let lines: Vec<String> = self.store.read_lines()?;
        self.load(&lines)
    }

    /// Replaces the inventory with the valid records in `records`.
    ///
    /// Each record is decoded on its own. Records that fail to decode, or
    /// repeat a room ID already accepted in this batch, are skipped and
    /// reported in the summary. Blank lines are ignored. The previous
    /// inventory is kept when the load fails.
    ///
    /// # Errors
    ///
    /// Returns an error if `records` holds no non-blank line or no record
    /// could be loaded.
    pub fn load<L: AsRef<str>>(&mut self, records: &[L]) -> Result<ImportSummary, PersistenceError> {
        let origin: String = self.store.origin();
        let mut rooms: Vec<Room> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut summary: ImportSummary = ImportSummary::default();
        let mut non_blank: usize = 0;

        for (index, record) in records.iter().enumerate() {
            let line: &str = record.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            non_blank += 1;

            let line_number: usize = index + 1;
            let outcome: Result<Room, String> =
                decode_room(line, &self.rules).map_err(|err| err.to_string());
            let outcome: Result<Room, String> = outcome.and_then(|room| {
                if seen.insert(room.room_id().to_string()) {
                    Ok(room)
                } else {
                    Err(format!("duplicate room ID '{}'", room.room_id()))
                }
            });

            match outcome {
                Ok(room) => rooms.push(room),
                Err(reason) => {
                    warn!(origin = %origin, line_number, reason = %reason, "Skipping room record");
                    summary.failures.push(RecordFailure {
                        line_number,
                        reason,
                    });
                }
            }
        }

        if non_blank == 0 {
            return Err(PersistenceError::EmptySource { origin });
        }

        summary.loaded = rooms.len();
        summary.failed = summary.failures.len();
        if summary.loaded == 0 {
            return Err(PersistenceError::NoRoomsLoaded {
                origin,
                failed: summary.failed,
            });
        }

        info!(
            origin = %origin,
            loaded = summary.loaded,
            failed = summary.failed,
            "Imported rooms"
        );
        self.rooms = rooms;
        Ok(summary)
    }

    /// All rooms ordered by room ID.
    #[must_use]
    pub fn list(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().collect();
        rooms.sort_by(|a, b| a.room_id().cmp(b.room_id()));
        rooms
    }

    /// Looks up a room by its normalized (upper-case) ID.
    #[must_use]
    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.room_id().as_str() == room_id)
    }

    /// The inventory in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
