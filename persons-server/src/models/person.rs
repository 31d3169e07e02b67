//! Person record and its add/edit inputs
//!
//! One flat record covers every shape of person the server handles:
//! name/age, phone and address, login credentials. Unused columns stay null.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Age from which `can_drink` is true (inclusive)
pub const DRINKING_AGE: i32 = 18;

/// Person record as stored in the `persons` table
///
/// Serializes with the column names, which is what `GET /persons` returns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub mail: Option<String>,
    /// Stored and compared in plaintext. Not safe for real credentials.
    pub password: Option<String>,
}

/// Derived address, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl Person {
    /// `age >= 18`; a person without an age cannot drink.
    pub fn can_drink(&self) -> bool {
        self.age.is_some_and(|age| age >= DRINKING_AGE)
    }

    /// Street and city grouped together, or `None` when both are unset.
    pub fn address(&self) -> Option<Address> {
        if self.street.is_none() && self.city.is_none() {
            return None;
        }
        Some(Address {
            street: self.street.clone(),
            city: self.city.clone(),
        })
    }
}

/// Full set of writable columns, used for insert and full-row update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

impl NewPerson {
    /// Check the constraints an add must satisfy.
    ///
    /// # Rules
    /// - `name` must be non-empty
    /// - `age`, when given, must not be negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        check_age(self.age)
    }
}

/// Partial update for an existing person
///
/// Every field is optional. See [`PersonPatch::apply`] for how absent and
/// falsy values are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

impl PersonPatch {
    /// Merge the patch over `current`, producing the full row to write back.
    ///
    /// A value only replaces the current one when it is truthy: an empty
    /// string or an age of `0` counts as not provided and the stored value
    /// is kept. Clients depend on this, so an explicit presence check must
    /// not replace it.
    pub fn apply(&self, current: &Person) -> Result<NewPerson, ValidationError> {
        check_age(self.age)?;

        Ok(NewPerson {
            name: truthy_text(&self.name).unwrap_or_else(|| current.name.clone()),
            age: truthy_age(self.age).or(current.age),
            phone: truthy_text(&self.phone).or_else(|| current.phone.clone()),
            street: truthy_text(&self.street).or_else(|| current.street.clone()),
            city: truthy_text(&self.city).or_else(|| current.city.clone()),
            mail: truthy_text(&self.mail).or_else(|| current.mail.clone()),
            password: truthy_text(&self.password).or_else(|| current.password.clone()),
        })
    }
}

fn truthy_text(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
}

fn truthy_age(value: Option<i32>) -> Option<i32> {
    value.filter(|age| *age != 0)
}

fn check_age(age: Option<i32>) -> Result<(), ValidationError> {
    match age {
        Some(value) if value < 0 => Err(ValidationError::Negative { field: "age", value }),
        _ => Ok(()),
    }
}
