use serde::{Deserialize, Serialize};
use std::fmt;

/// A person and the ways they get around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name")]
    pub name: String,

    /// `null` entries are kept as `None` so they survive a round trip.
    #[serde(rename = "ModeOfTransportations", default, deserialize_with = "null_as_empty")]
    pub transport_modes: Vec<Option<TransportMode>>,
}

/// Closed set of transportation variants.
///
/// Serializing writes the variant name under `Kind` next to the variant's own fields. The tag has
/// no storage slot: it is derived from the enum variant on the way out and consumed by
/// [`crate::core::decoder`] on the way in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Kind")]
pub enum TransportMode {
    Bike(Bike),
    Car(Car),
}

/// Missing keys leave the field at its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bike {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "WeightInKilograms", deserialize_with = "finite_weight")]
    pub weight_kg: f32,
    #[serde(rename = "Size")]
    pub size: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "WeightInKilograms", deserialize_with = "finite_weight")]
    pub weight_kg: f32,
    #[serde(rename = "NumberOfDoors")]
    pub doors: i32,
}

/// Discriminator values understood on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Bike,
    Car,
}

impl ModeKind {
    /// JSON key carrying the discriminator.
    pub const KEY: &'static str = "Kind";

    /// Fixed lookup from discriminator text to variant. Matching is exact and case-sensitive.
    pub fn from_discriminator(kind: &str) -> Option<Self> {
        match kind {
            "Car" => Some(ModeKind::Car),
            "Bike" => Some(ModeKind::Bike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Bike => "Bike",
            ModeKind::Car => "Car",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            TransportMode::Bike(_) => ModeKind::Bike,
            TransportMode::Car(_) => ModeKind::Car,
        }
    }

    pub fn brand(&self) -> &str {
        match self {
            TransportMode::Bike(bike) => &bike.brand,
            TransportMode::Car(car) => &car.brand,
        }
    }

    pub fn weight_kg(&self) -> f32 {
        match self {
            TransportMode::Bike(bike) => bike.weight_kg,
            TransportMode::Car(car) => car.weight_kg,
        }
    }
}

impl From<Bike> for TransportMode {
    fn from(bike: Bike) -> Self {
        TransportMode::Bike(bike)
    }
}

impl From<Car> for TransportMode {
    fn from(car: Car) -> Self {
        TransportMode::Car(car)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Option<TransportMode>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Option<TransportMode>>>::deserialize(deserializer)?.unwrap_or_default())
}

// Narrowing to f32 must not overflow to infinity: the encoder would write that back as `null`.
fn finite_weight<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let weight = f64::deserialize(deserializer)?;
    let narrowed = weight as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(serde::de::Error::custom(format!(
            "weight {} is out of range for WeightInKilograms",
            weight
        )))
    }
}
