#[macro_export]
macro_rules! pets {
    // Handle empty list
    () => {
        ::std::vec::Vec::<$crate::Pet>::new()
    };

    // Handle one or more `<species> <name>` entries, where <species> is a
    // per-variant constructor name (`dog` or `cat`)
    ($($species:ident $name:expr),+ $(,)?) => {
        vec![$($crate::Pet::$species($name)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::Pet;

    #[test]
    fn test_pets_macro_empty() {
        let pets = pets![];
        assert!(pets.is_empty());
    }

    #[test]
    fn test_pets_macro_single() {
        assert_eq!(pets![dog "Fred"], vec![Pet::dog("Fred")]);
        assert_eq!(pets![cat "Beyonce"], vec![Pet::cat("Beyonce")]);
    }

    #[test]
    fn test_pets_macro_mixed() {
        let pets = pets![dog "Fred", dog "Barney", cat "Beyonce"];
        assert_eq!(
            pets,
            vec![Pet::dog("Fred"), Pet::dog("Barney"), Pet::cat("Beyonce")]
        );
    }

    #[test]
    fn test_pets_macro_trailing_comma() {
        let pets = pets![dog "Fred", cat "Beyonce",];
        assert_eq!(pets.len(), 2);
    }
}
