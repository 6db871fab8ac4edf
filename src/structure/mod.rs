//! Molecular structure model: elements, residues, chains, subunits,
//! secondary structure, proteins, and the files that carry them.

mod chain;
mod composition;
mod element;
mod file;
mod protein;
mod residue;
mod secondary;
mod subunit;

pub use chain::ChainId;
pub use composition::{
    ChainComposition, ElementComposition, ResidueComposition,
};
pub use element::AtomElement;
pub use file::{ProteinFile, ProteinFileInfo, ProteinFileKind};
pub use protein::{Atom, BoundingSphere, ChainSequence, Protein};
pub use residue::{Residue, ResidueClass};
pub use secondary::{SecondaryStructure, SecondaryStructureSegment};
pub use subunit::{ProteinSubunit, SubunitKind};

#[cfg(test)]
pub(crate) use protein::tests::atom as test_atom;
