use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which atom attribute drives per-atom coloring.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProteinColorByOption {
    /// Color by chemical element.
    #[default]
    Element,
    /// Each subunit gets its own palette color.
    Subunit,
    /// Color by amino acid type.
    Residue,
}

impl ProteinColorByOption {
    /// Every option in picker order.
    pub const ALL: [Self; 3] = [Self::Element, Self::Subunit, Self::Residue];

    /// Label shown in pickers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::Subunit => "Subunit",
            Self::Residue => "Residue",
        }
    }

    /// Keyboard shortcut selecting this option.
    #[must_use]
    pub fn shortcut_key(self) -> char {
        match self {
            Self::Element => '1',
            Self::Subunit => '2',
            Self::Residue => '3',
        }
    }

    /// Inverse of [`Self::shortcut_key`].
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.shortcut_key() == key)
    }
}
