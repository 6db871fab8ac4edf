//! Viewer options with TOML preset support.
//!
//! Display, color and sequence-row settings are consolidated here.
//! Options serialize to/from TOML so named presets can live in a
//! directory of `.toml` files.

mod colors;
mod display;
mod sequence;

use std::path::Path;

pub use colors::ColorOptions;
pub use display::{DisplayOptions, RadiiMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sequence::SequenceOptions;

use crate::error::BioViewError;
use crate::visualization::VisualizationConfiguration;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Atom sizing and color mode.
    pub display: DisplayOptions,
    /// Palette overrides.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Sequence row styles.
    pub sequence: SequenceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BioViewError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BioViewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BioViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BioViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Radii and color mode selected by the display options.
    #[must_use]
    pub fn visualization_configuration(&self) -> VisualizationConfiguration {
        VisualizationConfiguration::new(
            self.display.atom_radii(),
            self.display.color_by,
        )
    }
}
