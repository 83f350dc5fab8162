//! People and the pets they own.
//!
//! A [`Person`] pairs immutable identity (names and birthday) with an
//! exclusively-owned, insertion-ordered list of [`Pet`]s. The list starts
//! empty, grows only through [`Person::add_pet`], and is read back in the
//! same order through [`Person::pets`], which is the order the report
//! renderer uses.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use menagerie::{Person, Pet};
//!
//! let birthday = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
//! let mut scott = Person::new("Scott", "Hanselman", birthday);
//! scott.add_pet(Pet::dog("Fred"));
//! scott.add_pet(Pet::dog("Barney"));
//!
//! assert_eq!(scott.describe(), "Human (Scott Hanselman)");
//! assert_eq!(scott.pets().len(), 2);
//! assert_eq!(scott.pets()[0].name(), "Fred");
//! ```

use crate::Pet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A human with a first name, last name, birthday, and an owned list of pets.
///
/// Identity fields are fixed at construction and never validated: empty
/// names and any valid calendar date are accepted. The pet list is the only
/// mutable state, and [`Person::add_pet`] is its only mutation path; callers
/// see it read-only as a slice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first: String,
    last: String,
    birthday: NaiveDate,
    // Never absent: a missing field deserializes to the empty list
    #[serde(default)]
    pets: Vec<Pet>,
}

impl Person {
    /// Creates a person with no pets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use menagerie::Person;
    ///
    /// let birthday = NaiveDate::from_ymd_opt(1986, 1, 1).unwrap();
    /// let david = Person::new("David", "Fowler", birthday);
    /// assert!(david.pets().is_empty());
    /// ```
    pub fn new(first: impl Into<String>, last: impl Into<String>, birthday: NaiveDate) -> Self {
        Person {
            first: first.into(),
            last: last.into(),
            birthday,
            pets: Vec::new(),
        }
    }

    /// Appends a pet to the end of this person's pet list.
    ///
    /// Insertion order is preserved and is the order pets are rendered in.
    /// There is no duplicate check; adding an identical pet twice produces
    /// two entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use menagerie::{Person, Pet};
    ///
    /// let birthday = NaiveDate::from_ymd_opt(1986, 1, 1).unwrap();
    /// let mut david = Person::new("David", "Fowler", birthday);
    /// david.add_pet(Pet::cat("Beyonce"));
    /// assert_eq!(david.pets()[0].name(), "Beyonce");
    /// ```
    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// Returns the person's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first
    }

    /// Returns the person's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last
    }

    /// Returns the person's birthday.
    #[must_use]
    pub const fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Returns this person's pets in insertion order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Returns the person's display line: `Human (<First> <Last>)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Human ({} {})", self.first, self.last)
    }
}
