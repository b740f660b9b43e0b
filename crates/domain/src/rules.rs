// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use regex::Regex;

use crate::error::RuleSetError;

/// Uncompiled pattern strings for every text rule.
///
/// `RulePatterns::default()` is the standard rule set. A deployment that
/// needs different formats (another country's phone prefixes, longer room
/// IDs) builds its own value and compiles it with [`ValidationRules::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePatterns {
    /// Guest national ID.
    pub national_id: String,
    /// Guest full name.
    pub person_name: String,
    /// Optional co-tenant name; must accept the empty string.
    pub co_tenant_name: String,
    /// Local mobile phone number.
    pub phone_number: String,
    /// Room ID, also used for a reservation's desired room.
    pub room_id: String,
    /// Room display name.
    pub room_name: String,
    /// Room furniture description.
    pub furniture_description: String,
}

impl Default for RulePatterns {
    fn default() -> Self {
        Self {
            national_id: String::from(r"^[0-9]{12}$"),
            person_name: String::from(r"^[A-Za-z[:space:]]{2,25}$"),
            co_tenant_name: String::from(r"^[A-Za-z[:space:]]{0,25}$"),
            phone_number: String::from(
                r"^0(3[2-9]|5[689]|7[06789]|8[0-689]|9[0-46-9])[0-9]{7}$",
            ),
            room_id: String::from(r"^[A-Za-z][0-9]{0,4}$"),
            room_name: String::from(r"^[A-Za-z0-9[:space:]]{2,25}$"),
            furniture_description: String::from(r"^[^;\r\n]{2,25}$"),
        }
    }
}

/// A compiled rule set passed to entity constructors.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    national_id: Regex,
    person_name: Regex,
    co_tenant_name: Regex,
    phone_number: Regex,
    room_id: Regex,
    room_name: Regex,
    furniture_description: Regex,
}

impl ValidationRules {
    /// Compiles a rule set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that fails to compile.
    pub fn new(patterns: &RulePatterns) -> Result<Self, RuleSetError> {
        Ok(Self {
            national_id: compile("national_id", &patterns.national_id)?,
            person_name: compile("person_name", &patterns.person_name)?,
            co_tenant_name: compile("co_tenant_name", &patterns.co_tenant_name)?,
            phone_number: compile("phone_number", &patterns.phone_number)?,
            room_id: compile("room_id", &patterns.room_id)?,
            room_name: compile("room_name", &patterns.room_name)?,
            furniture_description: compile(
                "furniture_description",
                &patterns.furniture_description,
            )?,
        })
    }

    /// Compiles the standard rule set.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in patterns are broken.
    pub fn standard() -> Result<Self, RuleSetError> {
        Self::new(&RulePatterns::default())
    }

    pub(crate) const fn national_id(&self) -> &Regex {
        &self.national_id
    }

    pub(crate) const fn person_name(&self) -> &Regex {
        &self.person_name
    }

    pub(crate) const fn co_tenant_name(&self) -> &Regex {
        &self.co_tenant_name
    }

    pub(crate) const fn phone_number(&self) -> &Regex {
        &self.phone_number
    }

    pub(crate) const fn room_id(&self) -> &Regex {
        &self.room_id
    }

    pub(crate) const fn room_name(&self) -> &Regex {
        &self.room_name
    }

    pub(crate) const fn furniture_description(&self) -> &Regex {
        &self.furniture_description
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, RuleSetError> {
    Regex::new(pattern).map_err(|err| RuleSetError {
        rule,
        message: err.to_string(),
    })
}
