//! The reference roster: two people and their pets, rendered to stdout.
//!
//! Run with: cargo run --example roster

use chrono::NaiveDate;
use menagerie::{render_to_writer, Person, Pet};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let mut scott = Person::new(
        "Scott",
        "Hanselman",
        NaiveDate::from_ymd_opt(1970, 1, 1).ok_or("invalid date")?,
    );
    scott.add_pet(Pet::dog("Fred"));
    scott.add_pet(Pet::dog("Barney"));

    let mut david = Person::new(
        "David",
        "Fowler",
        NaiveDate::from_ymd_opt(1986, 1, 1).ok_or("invalid date")?,
    );
    david.add_pet(Pet::cat("Beyonce"));

    render_to_writer(io::stdout(), &[scott, david])?;

    Ok(())
}
