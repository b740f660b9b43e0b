// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{Field, ValidationError};
use crate::parse::{parse_positive_count, parse_positive_rate};
use crate::rules::ValidationRules;
use crate::types::{RoomId, RoomType};

/// Raw room fields, exactly as read from a record or typed by an operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDetails {
    pub room_id: String,
    pub name: String,
    pub room_type: String,
    pub daily_rate: String,
    pub capacity: String,
    pub furniture_description: String,
}

/// A bookable room in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    room_id: RoomId,
    name: String,
    room_type: RoomType,
    daily_rate: f64,
    capacity: u32,
    furniture_description: String,
}

impl Room {
    /// Validates raw fields and builds a room.
    ///
    /// Fields are checked in record order; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first invalid field.
    pub fn new(details: &RoomDetails, rules: &ValidationRules) -> Result<Self, ValidationError> {
        let room_id: RoomId = RoomId::parse(&details.room_id, Field::RoomId, rules)?;

        let name: &str = details.name.trim();
        if !rules.room_name().is_match(name) {
            return Err(ValidationError::new(
                Field::RoomName,
                format!("'{name}' must be 2-25 letters, digits or spaces"),
            ));
        }

        let room_type: RoomType = details.room_type.parse()?;
        let daily_rate: f64 = parse_positive_rate(Field::DailyRate, &details.daily_rate)?;
        let capacity: u32 = parse_positive_count(Field::Capacity, &details.capacity)?;

        let furniture_description: &str = details.furniture_description.trim();
        if !rules.furniture_description().is_match(furniture_description) {
            return Err(ValidationError::new(
                Field::FurnitureDescription,
                format!("'{furniture_description}' must be 2-25 characters"),
            ));
        }

        Ok(Self {
            room_id,
            name: name.to_string(),
            room_type,
            daily_rate,
            capacity,
            furniture_description: furniture_description.to_string(),
        })
    }

    #[must_use]
    pub const fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    #[must_use]
    pub const fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn furniture_description(&self) -> &str {
        &self.furniture_description
    }

    /// The charge for a stay of `days` days in this room.
    #[must_use]
    pub fn charge_for(&self, days: u32) -> f64 {
        f64::from(days) * self.daily_rate
    }
}
