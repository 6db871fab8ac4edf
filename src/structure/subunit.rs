use std::ops::Range;

use serde::{Deserialize, Serialize};

/// What a subunit's atoms belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubunitKind {
    /// A polymer chain closed by a `TER` record.
    Chain,
    /// Atoms trailing the last chain (ligands, ions, cofactors).
    NonChain,
    /// The file gave no chain boundaries.
    Unknown,
}

/// Contiguous run of atoms inside a [`Protein`](super::Protein).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinSubunit {
    /// Position of this subunit among its protein's subunits.
    pub index_in_protein: usize,
    /// Chain, non-chain, or unknown.
    pub kind: SubunitKind,
    /// Number of atoms.
    pub atom_count: usize,
    /// Offset of the first atom in the parent atom arrays.
    pub start_index: usize,
}

impl ProteinSubunit {
    /// Create a subunit descriptor.
    #[must_use]
    pub fn new(
        index_in_protein: usize,
        kind: SubunitKind,
        atom_count: usize,
        start_index: usize,
    ) -> Self {
        Self {
            index_in_protein,
            kind,
            atom_count,
            start_index,
        }
    }

    /// Range of this subunit's atoms in the parent atom arrays.
    #[must_use]
    pub fn atom_range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.atom_count
    }

    /// Human-readable name: `Subunit A`..`Subunit Z`, then numbered.
    #[must_use]
    pub fn name(&self) -> String {
        match self.kind {
            SubunitKind::NonChain => "Non-chain atoms".to_owned(),
            SubunitKind::Chain | SubunitKind::Unknown => {
                if self.index_in_protein < 26 {
                    let letter =
                        char::from(b'A' + self.index_in_protein as u8);
                    format!("Subunit {letter}")
                } else {
                    format!("Subunit {}", self.index_in_protein)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let first = ProteinSubunit::new(0, SubunitKind::Chain, 10, 0);
        assert_eq!(first.name(), "Subunit A");
        let last = ProteinSubunit::new(25, SubunitKind::Unknown, 1, 0);
        assert_eq!(last.name(), "Subunit Z");
        let many = ProteinSubunit::new(30, SubunitKind::Chain, 1, 0);
        assert_eq!(many.name(), "Subunit 30");
        let ligands = ProteinSubunit::new(2, SubunitKind::NonChain, 4, 0);
        assert_eq!(ligands.name(), "Non-chain atoms");
    }

    #[test]
    fn atom_range_spans_count() {
        let subunit = ProteinSubunit::new(1, SubunitKind::Chain, 5, 12);
        assert_eq!(subunit.atom_range(), 12..17);
    }
}
