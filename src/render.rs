//! Report rendering.
//!
//! This module provides the [`Renderer`] that turns people and their pets
//! into the indented text report.
//!
//! ## Output shape
//!
//! Each person contributes one line, followed by one indented line per pet
//! in insertion order:
//!
//! ```text
//! Human (Scott Hanselman)
//!     Fred and I am a Dog and I bark
//!     Barney and I am a Dog and I bark
//! ```
//!
//! Rendering is pure over its input: the same roster always produces the
//! same text, and a person with no pets produces exactly one line.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use menagerie::{render, Person, Pet};
//!
//! let birthday = NaiveDate::from_ymd_opt(1986, 1, 1).unwrap();
//! let mut david = Person::new("David", "Fowler", birthday);
//! david.add_pet(Pet::cat("Beyonce"));
//!
//! let report = render(&[david]);
//! assert_eq!(
//!     report,
//!     "Human (David Fowler)\n    Beyonce and I am a Cat and I meow\n"
//! );
//! ```
//!
//! ## Direct renderer usage
//!
//! For finer control, drive the renderer directly:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use menagerie::{Person, Renderer, RenderOptions};
//!
//! let birthday = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
//! let scott = Person::new("Scott", "Hanselman", birthday);
//!
//! let mut renderer = Renderer::new(RenderOptions::default());
//! renderer.person(&scott);
//! assert_eq!(renderer.into_inner(), "Human (Scott Hanselman)\n");
//! ```

use crate::{Person, Pet, RenderOptions};

/// The roster renderer.
///
/// Accumulates report lines into an owned buffer. Created via
/// [`Renderer::new`] with render options; consumed with
/// [`Renderer::into_inner`].
pub struct Renderer {
    output: String,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        // Pre-allocate with reasonable capacity to reduce reallocations
        // 256 bytes covers a handful of people with a few pets each
        Renderer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Emits the full report for a roster, people in input order.
    pub fn roster(&mut self, people: &[Person]) {
        for person in people {
            self.person(person);
        }
    }

    /// Emits one person line followed by an indented line per pet, in
    /// insertion order.
    pub fn person(&mut self, person: &Person) {
        self.write_line(0, &person.describe());
        for pet in person.pets() {
            self.pet(pet);
        }
    }

    /// Emits a single indented pet line.
    pub fn pet(&mut self, pet: &Pet) {
        self.write_line(self.options.indent, &pet.describe());
    }

    fn write_line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
