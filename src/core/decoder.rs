//! Discriminator-driven decoding of transport modes.
//!
//! Every value bound into a `TransportMode` slot goes through [`decode_transport_mode`]: the
//! `Kind` key picks the variant, then serde populates that variant's fields from the same object.
//! `Kind` itself is read, never stored.

use crate::core::{Bike, Car, ModeKind, Person, TransportMode};
use crate::utils::error::{HierarchyError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Reads the discriminator of a JSON object and maps it onto a known variant.
///
/// Anything that is not an object with a string `Kind` naming a known variant is
/// [`HierarchyError::UnknownVariant`].
pub fn resolve_kind(value: &Value) -> Result<ModeKind> {
    let kind = value.get(ModeKind::KEY).and_then(Value::as_str);

    kind.and_then(ModeKind::from_discriminator)
        .ok_or_else(|| HierarchyError::UnknownVariant {
            kind: kind.map(str::to_string),
            object: value.to_string(),
        })
}

/// Builds the concrete variant named by the object's `Kind`.
///
/// `null` decodes to `None`. A value that is not an object, and fields of the wrong type
/// (`Size` given as a string, ...), are reported by serde unchanged. Absent fields keep their
/// zero value.
pub fn decode_transport_mode(value: Value) -> Result<Option<TransportMode>> {
    if value.is_null() {
        tracing::debug!("null mode of transportation");
        return Ok(None);
    }

    // anything but an object fails here with serde's own invalid-type error
    let value = Value::Object(Map::deserialize(value)?);

    let kind = resolve_kind(&value)?;
    tracing::debug!(%kind, "resolved mode of transportation");

    let mode = match kind {
        ModeKind::Bike => TransportMode::Bike(Bike::deserialize(value)?),
        ModeKind::Car => TransportMode::Car(Car::deserialize(value)?),
    };

    Ok(Some(mode))
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match decode_transport_mode(value) {
            Ok(Some(mode)) => Ok(mode),
            Ok(None) => Err(D::Error::custom(
                "expected a mode of transportation, found null",
            )),
            Err(HierarchyError::MalformedDocument(e)) => Err(D::Error::custom(e)),
            Err(e) => Err(D::Error::custom(e)),
        }
    }
}

/// Person as it sits on the wire, before any transport mode is resolved.
#[derive(Deserialize)]
struct PersonDocument {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "ModeOfTransportations", default)]
    transport_modes: Option<Vec<Value>>,
}

/// Decodes a person document.
///
/// Syntax and shape errors of the document itself surface as
/// [`HierarchyError::MalformedDocument`] with their position. Transport modes are then decoded
/// in order and the first failing element stops decoding, whatever the kind of failure.
pub fn decode_person(text: &str) -> Result<Person> {
    let document: PersonDocument = serde_json::from_str(text)?;

    let transport_modes = document
        .transport_modes
        .unwrap_or_default()
        .into_iter()
        .map(decode_transport_mode)
        .collect::<Result<Vec<_>>>()?;

    let person = Person {
        name: document.name,
        transport_modes,
    };

    tracing::debug!(
        name = %person.name,
        modes = person.transport_modes.len(),
        "decoded person"
    );

    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bike_discriminator_yields_bike() {
        let mode = decode_transport_mode(json!({
            "Kind": "Bike",
            "Brand": "Giant",
            "WeightInKilograms": 9.25,
            "Size": 54
        }))
        .unwrap();

        assert_eq!(
            mode,
            Some(TransportMode::Bike(Bike {
                brand: "Giant".to_string(),
                weight_kg: 9.25,
                size: 54,
            }))
        );
    }

    #[test]
    fn test_car_discriminator_yields_car() {
        let mode = decode_transport_mode(json!({
            "Brand": "Fiat",
            "Kind": "Car",
            "WeightInKilograms": 980.5,
            "NumberOfDoors": 3
        }))
        .unwrap()
        .unwrap();

        assert_eq!(mode.kind(), ModeKind::Car);
        let TransportMode::Car(car) = mode else {
            panic!("expected a car");
        };
        assert_eq!(car.doors, 3);
        assert_eq!(car.brand, "Fiat");
    }

    #[test]
    fn test_null_is_no_value() {
        assert_eq!(decode_transport_mode(Value::Null).unwrap(), None);
    }

    #[test]
    fn test_unknown_discriminator_is_rejected() {
        let err = decode_transport_mode(json!({ "Kind": "Scooter", "Brand": "Xiaomi" }))
            .unwrap_err();

        match err {
            HierarchyError::UnknownVariant { kind, object } => {
                assert_eq!(kind.as_deref(), Some("Scooter"));
                assert!(object.contains("Scooter"));
                assert!(object.contains("Xiaomi"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_discriminator_is_rejected() {
        let err = decode_transport_mode(json!({ "Brand": "Giant" })).unwrap_err();
        match err {
            HierarchyError::UnknownVariant { kind, object } => {
                assert_eq!(kind, None);
                assert_eq!(object, r#"{"Brand":"Giant"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_discriminator_is_rejected() {
        let err = decode_transport_mode(json!({ "Kind": 1, "Brand": "Giant" })).unwrap_err();
        assert!(err.is_unknown_variant());
    }

    #[test]
    fn test_non_object_is_a_library_error() {
        for value in [json!(5), json!("Bike"), json!([{ "Kind": "Bike" }])] {
            match decode_transport_mode(value).unwrap_err() {
                HierarchyError::MalformedDocument(e) => {
                    assert!(e.is_data());
                    assert!(e.to_string().contains("expected a map"), "{e}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_known_kind_with_bad_fields_is_a_library_error() {
        let err = decode_transport_mode(json!({ "Kind": "Bike", "Brand": "Giant", "Size": "L" }))
            .unwrap_err();
        assert!(matches!(err, HierarchyError::MalformedDocument(_)));
    }

    #[test]
    fn test_serde_hook_is_used_for_typed_slots() {
        let modes: Vec<Option<TransportMode>> = serde_json::from_value(json!([
            { "Kind": "Car", "Brand": "BMW", "WeightInKilograms": 1823.2, "NumberOfDoors": 4 },
            null
        ]))
        .unwrap();

        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0].as_ref().map(TransportMode::kind), Some(ModeKind::Car));
        assert!(modes[1].is_none());
    }

    #[test]
    fn test_serde_hook_reports_unknown_variant() {
        let err = serde_json::from_value::<TransportMode>(json!({ "Kind": "Boat" })).unwrap_err();
        assert!(err.to_string().contains("Unexpected mode of transportation"));
    }

    #[test]
    fn test_decode_person_surfaces_unknown_variant() {
        let text = r#"{
            "Name": "Immo",
            "ModeOfTransportations": [
                { "Kind": "Bike", "Brand": "Specialized", "WeightInKilograms": 7.6, "Size": 56 },
                { "Kind": "Scooter", "Brand": "Xiaomi", "WeightInKilograms": 12.5 }
            ]
        }"#;

        match decode_person(text).unwrap_err() {
            HierarchyError::UnknownVariant { kind, object } => {
                assert_eq!(kind.as_deref(), Some("Scooter"));
                assert!(object.contains("Xiaomi"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_person_surfaces_syntax_errors() {
        let err = decode_person(r#"{ "Name": "Immo", "#).unwrap_err();
        match err {
            HierarchyError::MalformedDocument(e) => assert!(e.is_eof() || e.is_syntax()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_person_without_modes() {
        let person = decode_person(r#"{ "Name": "Solo" }"#).unwrap();
        assert!(person.transport_modes.is_empty());

        let person = decode_person(r#"{ "Name": "Solo", "ModeOfTransportations": null }"#).unwrap();
        assert!(person.transport_modes.is_empty());
    }

    #[test]
    fn test_serde_hook_does_not_double_prefix() {
        let err = serde_json::from_value::<TransportMode>(json!({ "Kind": "Car", "NumberOfDoors": "four" }))
            .unwrap_err();
        assert!(!err.to_string().contains("Malformed document"), "{err}");
    }

    #[test]
    fn test_name_shape_error_wins_over_later_unknown_kind() {
        let text = r#"{ "Name": 42, "ModeOfTransportations": [ { "Kind": "Scooter" } ] }"#;
        match decode_person(text).unwrap_err() {
            HierarchyError::MalformedDocument(e) => {
                assert!(e.is_data());
                assert_eq!(e.line(), 1);
                assert!(e.column() > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_failing_element_is_reported() {
        let text = r#"{ "Name": "Immo", "ModeOfTransportations": [
            { "Kind": "Bike", "Size": "L" },
            { "Kind": "Scooter" }
        ] }"#;
        let err = decode_person(text).unwrap_err();
        assert!(matches!(err, HierarchyError::MalformedDocument(_)), "{err:?}");
        assert_eq!(err.to_string().matches("Malformed document").count(), 1);
    }
}
