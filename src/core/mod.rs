pub mod decoder;
pub mod encoder;
pub mod printer;
pub mod sample;

pub use crate::domain::model::{Bike, Car, ModeKind, Person, TransportMode};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
