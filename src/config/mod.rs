#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::encoder::DEFAULT_JSON_INDENT;
use crate::core::printer::DEFAULT_TREE_INDENT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use toml_config::TomlConfig;

pub const MIN_INDENT: usize = 1;
pub const MAX_INDENT: usize = 8;

/// Output settings after merging command line, TOML file and defaults, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub json_indent: usize,
    pub tree_indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            json_indent: DEFAULT_JSON_INDENT,
            tree_indent: DEFAULT_TREE_INDENT,
        }
    }
}

impl OutputSettings {
    pub fn resolve(
        json_indent: Option<usize>,
        tree_indent: Option<usize>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let output = file.map(|config| &config.output);

        Self {
            json_indent: json_indent
                .or_else(|| output.and_then(|o| o.json_indent))
                .unwrap_or(defaults.json_indent),
            tree_indent: tree_indent
                .or_else(|| output.and_then(|o| o.tree_indent))
                .unwrap_or(defaults.tree_indent),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig, file: Option<&TomlConfig>) -> Self {
        Self::resolve(cli.json_indent, cli.tree_indent, file)
    }
}

impl ConfigProvider for OutputSettings {
    fn json_indent(&self) -> usize {
        self.json_indent
    }

    fn tree_indent(&self) -> usize {
        self.tree_indent
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<()> {
        validate_range("json_indent", self.json_indent, MIN_INDENT, MAX_INDENT)?;
        validate_range("tree_indent", self.tree_indent, MIN_INDENT, MAX_INDENT)?;
        Ok(())
    }
}
