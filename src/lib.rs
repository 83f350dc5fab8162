//! # menagerie
//!
//! A small library modeling people and the pets they own, with a renderer
//! that turns a roster into a fixed, human-readable indented text report.
//!
//! ## The model
//!
//! - [`Species`]: a closed set of pet kinds (Dog, Cat), each mapping to a
//!   display label and a sound
//! - [`Pet`]: a named animal of one species, fixed at construction
//! - [`Person`]: immutable identity (names, birthday) plus an exclusively
//!   owned, insertion-ordered list of pets
//! - [`Renderer`]: pure display composition from a roster to report text
//!
//! ## Key properties
//!
//! - **Total core**: construction, `add_pet`, and in-memory rendering cannot
//!   fail; errors exist only at the I/O and parsing boundaries
//! - **Stable ordering**: people render in input order, pets in insertion
//!   order, with no reordering or deduplication
//! - **Serde Compatible**: every model type derives `Serialize` and
//!   `Deserialize`, with birthdays handled by chrono's serde support
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! menagerie = "0.1"
//! chrono = "0.4"
//! ```
//!
//! ### Building and rendering a roster
//!
//! ```rust
//! use chrono::NaiveDate;
//! use menagerie::{render, Person, Pet};
//!
//! let mut scott = Person::new(
//!     "Scott",
//!     "Hanselman",
//!     NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
//! );
//! scott.add_pet(Pet::dog("Fred"));
//! scott.add_pet(Pet::dog("Barney"));
//!
//! let mut david = Person::new(
//!     "David",
//!     "Fowler",
//!     NaiveDate::from_ymd_opt(1986, 1, 1).unwrap(),
//! );
//! david.add_pet(Pet::cat("Beyonce"));
//!
//! let report = render(&[scott, david]);
//! assert_eq!(
//!     report,
//!     concat!(
//!         "Human (Scott Hanselman)\n",
//!         "    Fred and I am a Dog and I bark\n",
//!         "    Barney and I am a Dog and I bark\n",
//!         "Human (David Fowler)\n",
//!         "    Beyonce and I am a Cat and I meow\n",
//!     )
//! );
//! ```
//!
//! ### Building pet lists with the pets! macro
//!
//! ```rust
//! use menagerie::{pets, Pet};
//!
//! let pets = pets![dog "Fred", dog "Barney", cat "Beyonce"];
//! assert_eq!(pets.len(), 3);
//! assert_eq!(pets[0], Pet::dog("Fred"));
//! ```
//!
//! ## Demos
//!
//! See the `demos/` directory for runnable programs:
//!
//! - **`roster.rs`** - The reference roster rendered to stdout
//! - **`custom_indent.rs`** - Customizing the pet-line indent
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod options;
pub mod person;
pub mod pet;
pub mod render;

pub use error::{Error, Result};
pub use options::RenderOptions;
pub use person::Person;
pub use pet::{Pet, Species};
pub use render::Renderer;

use std::io;

/// Renders a roster of people and their pets to report text with default
/// options.
///
/// Each person contributes one `Human (<First> <Last>)` line followed by one
/// four-space-indented line per pet, in insertion order. Every line is
/// newline-terminated.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use menagerie::{render, Person, Pet};
///
/// let mut david = Person::new(
///     "David",
///     "Fowler",
///     NaiveDate::from_ymd_opt(1986, 1, 1).unwrap(),
/// );
/// david.add_pet(Pet::cat("Beyonce"));
///
/// let report = render(&[david]);
/// assert!(report.starts_with("Human (David Fowler)\n"));
/// ```
#[must_use]
pub fn render(people: &[Person]) -> String {
    render_with_options(people, RenderOptions::default())
}

/// Renders a roster to report text with custom options.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use menagerie::{render_with_options, Person, Pet, RenderOptions};
///
/// let mut david = Person::new(
///     "David",
///     "Fowler",
///     NaiveDate::from_ymd_opt(1986, 1, 1).unwrap(),
/// );
/// david.add_pet(Pet::cat("Beyonce"));
///
/// let options = RenderOptions::new().with_indent(2);
/// let report = render_with_options(&[david], options);
/// assert!(report.contains("\n  Beyonce"));
/// ```
#[must_use]
pub fn render_with_options(people: &[Person], options: RenderOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.roster(people);
    renderer.into_inner()
}

/// Renders a roster to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use menagerie::{render_to_writer, Person};
///
/// let scott = Person::new(
///     "Scott",
///     "Hanselman",
///     NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
/// );
///
/// let mut buffer = Vec::new();
/// render_to_writer(&mut buffer, &[scott]).unwrap();
/// assert_eq!(buffer, b"Human (Scott Hanselman)\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_writer<W>(writer: W, people: &[Person]) -> Result<()>
where
    W: io::Write,
{
    render_to_writer_with_options(writer, people, RenderOptions::default())
}

/// Renders a roster to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_writer_with_options<W>(
    mut writer: W,
    people: &[Person],
    options: RenderOptions,
) -> Result<()>
where
    W: io::Write,
{
    let report = render_with_options(people, options);
    writer
        .write_all(report.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
