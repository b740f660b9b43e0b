// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration, Month};

use crate::error::{Field, ValidationError};
use crate::rules::ValidationRules;

/// A room identifier: a letter followed by digits, stored upper-case.
///
/// The same type names a room in the inventory and the room a
/// reservation asks for; only the reported field differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Validates and normalizes a room ID.
    ///
    /// # Arguments
    ///
    /// * `value` - Raw input, trimmed before validation
    /// * `field` - Which field to blame on failure (`RoomId` or `DesiredRoomId`)
    /// * `rules` - The active rule set
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not match the room ID rule.
    pub fn parse(
        value: &str,
        field: Field,
        rules: &ValidationRules,
    ) -> Result<Self, ValidationError> {
        let trimmed: &str = value.trim();
        if !rules.room_id().is_match(trimmed) {
            return Err(ValidationError::new(
                field,
                format!("'{trimmed}' must be a letter followed by up to four digits"),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Returns the normalized (upper-case) ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw text.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guest's national ID (exactly twelve digits under the standard rules).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NationalId(String);

impl NationalId {
    /// Validates a national ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not match the national ID rule.
    pub fn parse(value: &str, rules: &ValidationRules) -> Result<Self, ValidationError> {
        let trimmed: &str = value.trim();
        if !rules.national_id().is_match(trimmed) {
            return Err(ValidationError::new(
                Field::NationalId,
                format!("'{trimmed}' must be exactly 12 digits"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw text.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomType {
    Deluxe,
    Standard,
    Superior,
    Suite,
}

impl RoomType {
    /// Every room type, in display order.
    pub const ALL: [Self; 4] = [Self::Deluxe, Self::Standard, Self::Superior, Self::Suite];

    /// Returns the title-cased name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deluxe => "Deluxe",
            Self::Standard => "Standard",
            Self::Superior => "Superior",
            Self::Suite => "Suite",
        }
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|room_type| room_type.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::new(
                    Field::RoomType,
                    format!("'{trimmed}' must be one of Deluxe, Standard, Superior or Suite"),
                )
            })
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guest gender as recorded on the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the title-cased name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("male") {
            Ok(Self::Male)
        } else if trimmed.eq_ignore_ascii_case("female") {
            Ok(Self::Female)
        } else {
            Err(ValidationError::new(
                Field::Gender,
                format!("'{trimmed}' must be Male or Female"),
            ))
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive range of occupied nights: `[first_night, last_night]`.
///
/// A stay of `n` days starting on `d` occupies `d ..= d + (n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayRange {
    first_night: Date,
    last_night: Date,
}

impl StayRange {
    /// Builds the range for a stay of `days` days starting on `start`.
    ///
    /// Returns `None` for a zero-day stay or when the last night falls
    /// outside the supported calendar.
    #[must_use]
    pub fn new(start: Date, days: u32) -> Option<Self> {
        let extra: i64 = i64::from(days.checked_sub(1)?);
        let last_night: Date = start.checked_add(Duration::days(extra))?;
        Some(Self {
            first_night: start,
            last_night,
        })
    }

    /// The first occupied night (check-in date).
    #[must_use]
    pub const fn first_night(&self) -> Date {
        self.first_night
    }

    /// The last occupied night.
    #[must_use]
    pub const fn last_night(&self) -> Date {
        self.last_night
    }

    /// The morning the guest leaves, one day after the last night.
    #[must_use]
    pub fn check_out(&self) -> Option<Date> {
        self.last_night.next_day()
    }

    /// Two stays overlap unless one ends before the other begins.
    ///
    /// Sharing a single night counts as an overlap; a stay that ends the
    /// night before another starts does not.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.last_night < other.first_night || self.first_night > other.last_night)
    }
}

/// A reporting month (`MM/yyyy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingMonth {
    year: i32,
    month: Month,
}

impl BillingMonth {
    /// Creates a billing month from its parts.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses `MM/yyyy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a month number and a four-digit year.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed: &str = value.trim();
        let invalid = || {
            ValidationError::new(
                Field::BillingMonth,
                format!("'{trimmed}' must be in MM/yyyy format"),
            )
        };

        let (month_text, year_text) = trimmed.split_once('/').ok_or_else(invalid)?;
        if year_text.len() != 4 || !year_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let month_number: u8 = month_text.parse().map_err(|_| invalid())?;
        let month: Month = Month::try_from(month_number).map_err(|_| invalid())?;
        let year: i32 = year_text.parse().map_err(|_| invalid())?;

        Ok(Self { year, month })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Whether `date` falls in this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:04}", u8::from(self.month), self.year)
    }
}
