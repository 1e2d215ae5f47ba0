use crate::utils::error::{HierarchyError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_indent: Option<usize>,
    pub tree_indent: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HierarchyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HierarchyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(width) = self.output.json_indent {
            validate_range("output.json_indent", width, super::MIN_INDENT, super::MAX_INDENT)?;
        }
        if let Some(width) = self.output.tree_indent {
            validate_range("output.tree_indent", width, super::MIN_INDENT, super::MAX_INDENT)?;
        }
        Ok(())
    }
}
