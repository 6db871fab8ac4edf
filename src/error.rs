//! Crate-level error types.

use std::fmt;

use crate::parser::{CifParseError, PdbParseError, XyzParseError};

/// Errors produced by the bioview crate.
#[derive(Debug)]
pub enum BioViewError {
    /// PDB file could not be turned into a structure.
    Pdb(PdbParseError),
    /// mmCIF file could not be turned into a structure.
    Cif(CifParseError),
    /// XYZ file could not be turned into a structure.
    Xyz(XyzParseError),
    /// File extension does not map to a known structure format.
    UnsupportedFormat(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Structure download failure.
    Fetch(String),
}

impl fmt::Display for BioViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdb(e) => write!(f, "PDB parse error: {e}"),
            Self::Cif(e) => write!(f, "mmCIF parse error: {e}"),
            Self::Xyz(e) => write!(f, "XYZ parse error: {e}"),
            Self::UnsupportedFormat(ext) => {
                write!(f, "unsupported structure format: {ext:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
        }
    }
}

impl std::error::Error for BioViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pdb(e) => Some(e),
            Self::Cif(e) => Some(e),
            Self::Xyz(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PdbParseError> for BioViewError {
    fn from(e: PdbParseError) -> Self {
        Self::Pdb(e)
    }
}

impl From<CifParseError> for BioViewError {
    fn from(e: CifParseError) -> Self {
        Self::Cif(e)
    }
}

impl From<XyzParseError> for BioViewError {
    fn from(e: XyzParseError) -> Self {
        Self::Xyz(e)
    }
}

impl From<std::io::Error> for BioViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
