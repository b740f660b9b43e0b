// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

use crate::error::{Field, ValidationError};
use crate::parse::{parse_date, parse_positive_count, title_case};
use crate::rules::ValidationRules;
use crate::types::{Gender, NationalId, RoomId, StayRange};

/// Literal older record files wrote for a missing co-tenant. Never a valid name.
pub const ABSENT_CO_TENANT: &str = "None";

/// Raw reservation fields, exactly as read from a record or typed by an operator.
///
/// Dates are `dd/MM/yyyy`. An empty `co_tenant_name` means no co-tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDetails {
    pub national_id: String,
    pub full_name: String,
    pub birthdate: String,
    pub gender: String,
    pub phone_number: String,
    pub desired_room_id: String,
    pub rental_days: String,
    pub start_date: String,
    pub co_tenant_name: String,
}

/// A guest together with their booking.
///
/// The guest's national ID is the reservation's identity. Values are
/// immutable; an amendment builds a new `Reservation` and replaces the
/// stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    national_id: NationalId,
    full_name: String,
    birthdate: Date,
    gender: Gender,
    phone_number: String,
    desired_room_id: RoomId,
    rental_days: u32,
    stay: StayRange,
    co_tenant_name: Option<String>,
}

impl Reservation {
    /// Validates a new booking.
    ///
    /// Applies every format rule plus the date rules relative to `today`:
    /// the birthdate may not be after today and the stay must start
    /// strictly after today.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first invalid field.
    pub fn new(
        details: &ReservationDetails,
        rules: &ValidationRules,
        today: Date,
    ) -> Result<Self, ValidationError> {
        Self::build(details, rules, Some(today))
    }

    /// Rebuilds a reservation from a persisted record.
    ///
    /// Format rules apply; the date rules relative to today do not, so
    /// bookings that have started or ended stay loadable.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first invalid field.
    pub fn restore(
        details: &ReservationDetails,
        rules: &ValidationRules,
    ) -> Result<Self, ValidationError> {
        Self::build(details, rules, None)
    }

    fn build(
        details: &ReservationDetails,
        rules: &ValidationRules,
        today: Option<Date>,
    ) -> Result<Self, ValidationError> {
        let national_id: NationalId = NationalId::parse(&details.national_id, rules)?;

        let full_name: &str = details.full_name.trim();
        if !rules.person_name().is_match(full_name) {
            return Err(ValidationError::new(
                Field::FullName,
                format!("'{full_name}' must be 2-25 letters or spaces"),
            ));
        }

        let birthdate: Date = parse_date(Field::Birthdate, &details.birthdate)?;
        if today.is_some_and(|today| birthdate > today) {
            return Err(ValidationError::new(
                Field::Birthdate,
                "must not be after today",
            ));
        }

        let gender: Gender = details.gender.parse()?;

        let phone_number: &str = details.phone_number.trim();
        if !rules.phone_number().is_match(phone_number) {
            return Err(ValidationError::new(
                Field::PhoneNumber,
                format!("'{phone_number}' is not a valid 10-digit mobile number"),
            ));
        }

        let desired_room_id: RoomId =
            RoomId::parse(&details.desired_room_id, Field::DesiredRoomId, rules)?;
        let rental_days: u32 = parse_positive_count(Field::RentalDays, &details.rental_days)?;

        let start_date: Date = parse_date(Field::StartDate, &details.start_date)?;
        if today.is_some_and(|today| start_date <= today) {
            return Err(ValidationError::new(
                Field::StartDate,
                "must be after today",
            ));
        }
        let stay: StayRange = StayRange::new(start_date, rental_days).ok_or_else(|| {
            ValidationError::new(
                Field::RentalDays,
                "stay runs past the supported calendar range",
            )
        })?;

        let co_tenant: &str = details.co_tenant_name.trim();
        if !rules.co_tenant_name().is_match(co_tenant) {
            return Err(ValidationError::new(
                Field::CoTenantName,
                format!("'{co_tenant}' must be at most 25 letters or spaces"),
            ));
        }
        if co_tenant.eq_ignore_ascii_case(ABSENT_CO_TENANT) {
            return Err(ValidationError::new(
                Field::CoTenantName,
                format!("'{co_tenant}' is reserved for an absent co-tenant"),
            ));
        }
        let co_tenant_name: Option<String> = Some(title_case(co_tenant)).filter(|n| !n.is_empty());

        Ok(Self {
            national_id,
            full_name: title_case(full_name),
            birthdate,
            gender,
            phone_number: phone_number.to_string(),
            desired_room_id,
            rental_days,
            stay,
            co_tenant_name,
        })
    }

    #[must_use]
    pub const fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub const fn birthdate(&self) -> Date {
        self.birthdate
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[must_use]
    pub const fn desired_room_id(&self) -> &RoomId {
        &self.desired_room_id
    }

    #[must_use]
    pub const fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// The check-in date.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.stay.first_night()
    }

    /// The last occupied night: `start_date + rental_days - 1`.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.stay.last_night()
    }

    #[must_use]
    pub const fn stay(&self) -> StayRange {
        self.stay
    }

    #[must_use]
    pub fn co_tenant_name(&self) -> Option<&str> {
        self.co_tenant_name.as_deref()
    }
}
