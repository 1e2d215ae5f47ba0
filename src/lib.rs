pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, OutputSettings};
pub use crate::core::decoder::{decode_person, decode_transport_mode};
pub use crate::core::encoder::{encode_person, Encoder};
pub use crate::core::printer::{render_person, HierarchyPrinter};
pub use crate::domain::model::{Bike, Car, ModeKind, Person, TransportMode};
pub use crate::utils::error::{HierarchyError, Result};
