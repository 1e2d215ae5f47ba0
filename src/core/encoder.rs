use crate::core::{ConfigProvider, Person};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

pub const DEFAULT_JSON_INDENT: usize = 2;

/// Writes a [`Person`] as indented JSON. Each transport mode carries its `Kind` tag.
#[derive(Debug, Clone)]
pub struct Encoder {
    indent: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::with_indent(DEFAULT_JSON_INDENT)
    }
}

impl Encoder {
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: vec![b' '; width],
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_indent(config.json_indent())
    }

    pub fn encode(&self, person: &Person) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        person.serialize(&mut serializer)?;

        tracing::debug!(
            name = %person.name,
            modes = person.transport_modes.len(),
            bytes = buffer.len(),
            "encoded person"
        );

        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

/// Encodes with the default two-space indent.
pub fn encode_person(person: &Person) -> Result<String> {
    Encoder::default().encode(person)
}
