use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sequence::{SequenceKind, SequenceRowStyle};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sequence", inline)]
#[serde(default)]
/// Row styles for the sequence panel.
pub struct SequenceOptions {
    /// Style of nucleotide rows. Keys missing from a partial table keep
    /// the nucleotide preset values.
    #[schemars(title = "Nucleotide Rows")]
    #[serde(deserialize_with = "SequenceRowStyle::deserialize_nucleotide")]
    pub nucleotide: SequenceRowStyle,
    /// Style of protein rows.
    #[schemars(title = "Protein Rows")]
    pub protein: SequenceRowStyle,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            nucleotide: SequenceRowStyle::nucleotide(),
            protein: SequenceRowStyle::protein(),
        }
    }
}

impl SequenceOptions {
    /// Style for rows of `kind`.
    #[must_use]
    pub fn style(&self, kind: SequenceKind) -> &SequenceRowStyle {
        match kind {
            SequenceKind::Nucleotide => &self.nucleotide,
            SequenceKind::Protein => &self.protein,
        }
    }
}
