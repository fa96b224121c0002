use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

#[derive(Clone, PartialEq, Eq, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub source_type: Option<SourceType>,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
}

impl Config {
    /// Format of the script: the explicit `source_type`, else the input
    /// file's extension, else the default.
    pub fn source_type(&self) -> SourceType {
        self.source_type
            .or_else(|| self.input.as_deref().map(SourceType::from_path))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[cfg(feature = "json")]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl Default for SourceType {
    fn default() -> Self {
        #[cfg(feature = "json")]
        {
            Self::Json
        }
        #[cfg(not(feature = "json"))]
        {
            Self::Yaml
        }
    }
}

pub const SOURCE_TYPE_NAMES: &[&str] = &[
    #[cfg(feature = "json")]
    "json",
    #[cfg(feature = "yaml")]
    "yaml",
];

impl SourceType {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            #[cfg(feature = "json")]
            "json" => Self::Json,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::Yaml,
            _ => bail!("unknown source type {}", s),
        })
    }

    /// Make a new [`SourceType`] from a given extension.
    pub fn from_extension(s: &str) -> Option<Self> {
        match s {
            #[cfg(feature = "json")]
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    #[cfg(feature = "json")]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

pub const OUTPUT_FORMAT_NAMES: &[&str] = &[
    "text",
    #[cfg(feature = "json")]
    "json",
    #[cfg(feature = "yaml")]
    "yaml",
];

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "text" => Self::Text,
            #[cfg(feature = "json")]
            "json" => Self::Json,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::Yaml,
            _ => bail!("unknown output format {}", s),
        })
    }
}
