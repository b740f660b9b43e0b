// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing helpers shared by the entity constructors, the text codec,
//! and the command-line front end.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{Field, ValidationError};

/// The `dd/MM/yyyy` calendar date format used for input and persistence.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

/// Parses a `dd/MM/yyyy` date.
///
/// # Errors
///
/// Returns a `ValidationError` on `field` if the text is not a real calendar date.
pub fn parse_date(field: Field, value: &str) -> Result<Date, ValidationError> {
    let trimmed: &str = value.trim();
    Date::parse(trimmed, DATE_FORMAT).map_err(|err| {
        ValidationError::new(
            field,
            format!("'{trimmed}' is not a valid dd/MM/yyyy date ({err})"),
        )
    })
}

/// Formats a date as `dd/MM/yyyy`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parses a strictly positive whole number (capacity, rental days).
///
/// # Errors
///
/// Returns a `ValidationError` on `field` for anything that is not an integer >= 1.
pub fn parse_positive_count(field: Field, value: &str) -> Result<u32, ValidationError> {
    let trimmed: &str = value.trim();
    let digits_only: bool = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());
    match trimmed.parse::<u32>() {
        Ok(count) if digits_only && count > 0 => Ok(count),
        _ => Err(ValidationError::new(
            field,
            format!("'{trimmed}' must be a positive integer"),
        )),
    }
}

/// Parses a strictly positive, finite real number (daily rate).
///
/// # Errors
///
/// Returns a `ValidationError` on `field` for non-numbers, zero, negatives,
/// infinities and NaN.
pub fn parse_positive_rate(field: Field, value: &str) -> Result<f64, ValidationError> {
    let trimmed: &str = value.trim();
    match trimmed.parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err(ValidationError::new(
            field,
            format!("'{trimmed}' must be a positive number"),
        )),
    }
}

/// Title-cases a phrase: every word capitalized, the rest lower-cased,
/// runs of whitespace collapsed to a single space.
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}
