//! Structure file parsers.
//!
//! [`parse_file`] picks a parser from the file extension, reads the file,
//! and fills in the file-level metadata of the resulting
//! [`ProteinFile`].

mod cif;
mod pdb;
mod xyz;

use std::path::Path;

pub use cif::{parse_cif, CifParseError};
pub use pdb::{parse_pdb, PdbParseError, LINE_BLOCK_SIZE};
pub use xyz::{parse_xyz, XyzParseError};

#[cfg(test)]
pub(crate) use pdb::tests::two_chain_pdb as test_pdb;

use crate::error::BioViewError;
use crate::structure::ProteinFile;

/// Supported structure text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    /// Protein Data Bank fixed-column format.
    Pdb,
    /// PDBx/mmCIF tables.
    Cif,
    /// Plain element + coordinates format.
    Xyz,
}

impl StructureFormat {
    /// Map a file extension (without dot, any case) to a format.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdb" | "ent" => Some(Self::Pdb),
            "cif" | "mmcif" => Some(Self::Cif),
            "xyz" => Some(Self::Xyz),
            _ => None,
        }
    }
}

/// Parse structure text in the given format.
pub fn parse_str(
    text: &str,
    format: StructureFormat,
) -> Result<ProteinFile, BioViewError> {
    let mut file = match format {
        StructureFormat::Pdb => parse_pdb(text)?,
        StructureFormat::Cif => parse_cif(text)?,
        StructureFormat::Xyz => parse_xyz(text)?,
    };
    file.byte_size = Some(text.len() as u64);
    Ok(file)
}

/// Read and parse a structure file, choosing the parser by extension.
pub fn parse_file(path: &Path) -> Result<ProteinFile, BioViewError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_owned();
    let format = StructureFormat::from_extension(&extension)
        .ok_or_else(|| BioViewError::UnsupportedFormat(extension.clone()))?;

    log::debug!("reading {} as {format:?}", path.display());
    let text = std::fs::read_to_string(path)?;
    let mut file = parse_str(&text, format)?;

    file.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_owned();
    file.extension = extension;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn extension_mapping() {
        assert_eq!(
            StructureFormat::from_extension("PDB"),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_extension("ent"),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_extension("xyz"),
            Some(StructureFormat::Xyz)
        );
        assert_eq!(
            StructureFormat::from_extension("CIF"),
            Some(StructureFormat::Cif)
        );
        assert_eq!(StructureFormat::from_extension("gro"), None);
    }

    #[test]
    fn parse_file_records_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.xyz");
        let text = "O 0 0 0\nH 1 0 0\n";
        std::fs::File::create(&path)
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();

        let file = parse_file(&path).unwrap();
        assert_eq!(file.name, "water");
        assert_eq!(file.extension, "xyz");
        assert_eq!(file.byte_size, Some(text.len() as u64));
    }

    #[test]
    fn cif_file_is_parsed_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1abc.cif");
        let text = "data_1ABC\nloop_\n_atom_site.type_symbol\n\
                    _atom_site.Cartn_x\n_atom_site.Cartn_y\n_atom_site.Cartn_z\n\
                    C 0.0 0.0 0.0\nN 1.0 0.0 0.0\n";
        std::fs::write(&path, text).unwrap();

        let file = parse_file(&path).unwrap();
        assert_eq!(file.extension, "cif");
        assert_eq!(file.info.pdb_id.as_deref(), Some("1ABC"));
        assert_eq!(file.first_model().unwrap().atom_count(), 2);

        let empty = dir.path().join("empty.cif");
        std::fs::write(&empty, "data_EMPTY\n").unwrap();
        assert!(matches!(
            parse_file(&empty),
            Err(BioViewError::Cif(CifParseError::EmptyStructure))
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = parse_file(Path::new("model.gro")).unwrap_err();
        assert!(matches!(err, BioViewError::UnsupportedFormat(ext) if ext == "gro"));
    }
}
