//! Customizing the report layout with RenderOptions.
//!
//! Run with: cargo run --example custom_indent

use chrono::NaiveDate;
use menagerie::{pets, render_with_options, Person, RenderOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut scott = Person::new(
        "Scott",
        "Hanselman",
        NaiveDate::from_ymd_opt(1970, 1, 1).ok_or("invalid date")?,
    );
    for pet in pets![dog "Fred", dog "Barney", cat "Beyonce"] {
        scott.add_pet(pet);
    }
    let people = [scott];

    // Default format (four-space indent)
    println!("Default (4 spaces):");
    println!("{}", render_with_options(&people, RenderOptions::new()));

    // Wide indent
    println!("Wide (8 spaces):");
    let wide = RenderOptions::new().with_indent(8);
    println!("{}", render_with_options(&people, wide));

    // Flat output (no indent at all)
    println!("Flat (no indent):");
    let flat = RenderOptions::new().with_indent(0);
    println!("{}", render_with_options(&people, flat));

    Ok(())
}
