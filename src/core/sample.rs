use crate::core::{Bike, Car, Person};

/// The person the demonstration program encodes and decodes.
pub fn sample_person() -> Person {
    Person {
        name: "Immo".to_string(),
        transport_modes: vec![
            Some(
                Bike {
                    brand: "Specialized".to_string(),
                    weight_kg: 7.6,
                    size: 56,
                }
                .into(),
            ),
            Some(
                Car {
                    brand: "BMW".to_string(),
                    weight_kg: 1823.2,
                    doors: 4,
                }
                .into(),
            ),
        ],
    }
}
