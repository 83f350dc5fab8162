//! The pet hierarchy: a closed set of species and the pets that carry them.
//!
//! This module provides the two core types of the pet side of the model:
//!
//! - [`Species`]: a closed enum over the supported pet kinds (Dog, Cat)
//! - [`Pet`]: a named animal of one species
//!
//! The species set is fixed at design time. Each species maps to a display
//! label and a sound through pure, total functions, so a pet's rendered line
//! is fully determined at construction.
//!
//! ## Examples
//!
//! ```rust
//! use menagerie::{Pet, Species};
//!
//! let fred = Pet::dog("Fred");
//! assert_eq!(fred.species(), Species::Dog);
//! assert_eq!(fred.sound(), "bark");
//! assert_eq!(fred.describe(), "Fred and I am a Dog and I bark");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One concrete kind of pet.
///
/// The variant set is closed: `Dog` and `Cat` are the only species the model
/// knows about, and a pet's species never changes after construction.
///
/// # Examples
///
/// ```rust
/// use menagerie::Species;
///
/// assert_eq!(Species::Dog.sound(), "bark");
/// assert_eq!(Species::Cat.sound(), "meow");
/// assert_eq!(Species::Dog.label(), "Dog");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Returns the sound this species makes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menagerie::Species;
    ///
    /// assert_eq!(Species::Cat.sound(), "meow");
    /// ```
    #[must_use]
    pub const fn sound(&self) -> &'static str {
        match self {
            Species::Dog => "bark",
            Species::Cat => "meow",
        }
    }

    /// Returns the display label of this species (`"Dog"` or `"Cat"`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = Error;

    /// Parses a species name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menagerie::Species;
    ///
    /// assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
    /// assert_eq!("CAT".parse::<Species>().unwrap(), Species::Cat);
    /// assert!("ferret".parse::<Species>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            other => Err(Error::unknown_species(other)),
        }
    }
}

/// A named animal of one [`Species`].
///
/// Both fields are fixed at construction; a pet never changes its name or
/// species. Names are accepted as-is with no validation (the empty string is
/// a legal, if unhelpful, pet name).
///
/// # Examples
///
/// ```rust
/// use menagerie::{Pet, Species};
///
/// let beyonce = Pet::cat("Beyonce");
/// assert_eq!(beyonce.name(), "Beyonce");
/// assert_eq!(beyonce.describe(), "Beyonce and I am a Cat and I meow");
///
/// // The explicit constructor is equivalent to the shorthands
/// assert_eq!(Pet::new(Species::Cat, "Beyonce"), beyonce);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    name: String,
    species: Species,
}

impl Pet {
    /// Creates a pet of the given species.
    pub fn new(species: Species, name: impl Into<String>) -> Self {
        Pet {
            name: name.into(),
            species,
        }
    }

    /// Creates a dog. Shorthand for `Pet::new(Species::Dog, name)`.
    pub fn dog(name: impl Into<String>) -> Self {
        Pet::new(Species::Dog, name)
    }

    /// Creates a cat. Shorthand for `Pet::new(Species::Cat, name)`.
    pub fn cat(name: impl Into<String>) -> Self {
        Pet::new(Species::Cat, name)
    }

    /// Returns the pet's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pet's species.
    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Returns the sound this pet makes (`"bark"` or `"meow"`).
    #[must_use]
    pub const fn sound(&self) -> &'static str {
        self.species.sound()
    }

    /// Returns the pet's self-description line:
    /// `<name> and I am a <Dog|Cat> and I <bark|meow>`.
    ///
    /// This is the exact text the report renderer emits (indented) beneath
    /// the owning person's line.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and I am a {} and I {}",
            self.name,
            self.species.label(),
            self.species.sound()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_sounds_and_labels() {
        assert_eq!(Species::Dog.sound(), "bark");
        assert_eq!(Species::Cat.sound(), "meow");
        assert_eq!(Species::Dog.label(), "Dog");
        assert_eq!(Species::Cat.label(), "Cat");
        assert_eq!(Species::Dog.to_string(), "Dog");
    }

    #[test]
    fn test_describe_lines() {
        assert_eq!(
            Pet::dog("Fred").describe(),
            "Fred and I am a Dog and I bark"
        );
        assert_eq!(
            Pet::cat("Beyonce").describe(),
            "Beyonce and I am a Cat and I meow"
        );
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let pet = Pet::dog("");
        assert_eq!(pet.name(), "");
        assert_eq!(pet.describe(), " and I am a Dog and I bark");
    }

    #[test]
    fn test_describe_is_idempotent() {
        let pet = Pet::cat("Whiskers");
        assert_eq!(pet.describe(), pet.describe());
    }

    #[test]
    fn test_species_from_str() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("Dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("CAT".parse::<Species>().unwrap(), Species::Cat);

        let err = "hamster".parse::<Species>().unwrap_err();
        assert!(err.to_string().contains("hamster"));
    }
}
