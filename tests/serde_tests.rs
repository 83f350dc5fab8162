use chrono::NaiveDate;
use menagerie::{Person, Pet, Species};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_species_serializes_as_label() {
    assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"Dog\"");
    assert_eq!(serde_json::to_string(&Species::Cat).unwrap(), "\"Cat\"");
}

#[test]
fn test_pet_roundtrip() {
    let pet = Pet::dog("Fred");
    let json = serde_json::to_string(&pet).unwrap();
    let back: Pet = serde_json::from_str(&json).unwrap();
    assert_eq!(pet, back);
}

#[test]
fn test_person_roundtrip_preserves_pet_order() {
    let mut person = Person::new("Scott", "Hanselman", date(1970, 1, 1));
    person.add_pet(Pet::dog("Fred"));
    person.add_pet(Pet::cat("Whiskers"));
    person.add_pet(Pet::dog("Barney"));

    let json = serde_json::to_string(&person).unwrap();
    let back: Person = serde_json::from_str(&json).unwrap();

    assert_eq!(person, back);
    let names: Vec<&str> = back.pets().iter().map(Pet::name).collect();
    assert_eq!(names, vec!["Fred", "Whiskers", "Barney"]);
}

#[test]
fn test_birthday_roundtrips_as_calendar_date() {
    let person = Person::new("David", "Fowler", date(1986, 1, 1));
    let json = serde_json::to_string(&person).unwrap();
    assert!(json.contains("1986-01-01"));

    let back: Person = serde_json::from_str(&json).unwrap();
    assert_eq!(back.birthday(), date(1986, 1, 1));
}

#[test]
fn test_missing_pets_field_deserializes_to_empty_list() {
    let json = r#"{"first":"Scott","last":"Hanselman","birthday":"1970-01-01"}"#;
    let person: Person = serde_json::from_str(json).unwrap();
    assert!(person.pets().is_empty());
}

#[test]
fn test_roster_roundtrip() {
    let mut scott = Person::new("Scott", "Hanselman", date(1970, 1, 1));
    scott.add_pet(Pet::dog("Fred"));
    let david = Person::new("David", "Fowler", date(1986, 1, 1));

    let people = vec![scott, david];
    let json = serde_json::to_string(&people).unwrap();
    let back: Vec<Person> = serde_json::from_str(&json).unwrap();
    assert_eq!(people, back);
}
