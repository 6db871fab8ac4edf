use serde::{Deserialize, Serialize};

use super::Protein;

/// Whether a file holds a single structure or a sequence of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProteinFileKind {
    /// One model.
    StaticStructure,
    /// Several models or configurations (NMR ensembles, trajectories).
    DynamicStructure,
}

/// Metadata read from a structure file's header records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinFileInfo {
    /// RCSB PDB identifier.
    pub pdb_id: Option<String>,
    /// Human-readable description (PDB `TITLE`).
    pub description: Option<String>,
    /// Authors (PDB `AUTHOR`).
    pub authors: Option<String>,
    /// 1-based line numbers of records that could not be parsed.
    pub warning_lines: Vec<usize>,
}

/// A parsed structure file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinFile {
    /// Static or dynamic.
    pub kind: ProteinFileKind,
    /// File stem.
    pub name: String,
    /// File extension without the dot.
    pub extension: String,
    /// Models in file order. Never empty.
    pub models: Vec<Protein>,
    /// Header metadata.
    pub info: ProteinFileInfo,
    /// Size of the source text in bytes.
    pub byte_size: Option<u64>,
}

impl ProteinFile {
    /// Wrap parsed models, picking the kind from the model count.
    #[must_use]
    pub fn new(models: Vec<Protein>, info: ProteinFileInfo) -> Self {
        let kind = if models.len() > 1 {
            ProteinFileKind::DynamicStructure
        } else {
            ProteinFileKind::StaticStructure
        };
        Self {
            kind,
            name: String::new(),
            extension: String::new(),
            models,
            info,
            byte_size: None,
        }
    }

    /// The first (or only) model.
    #[must_use]
    pub fn first_model(&self) -> Option<&Protein> {
        self.models.first()
    }

    /// Number of models.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
