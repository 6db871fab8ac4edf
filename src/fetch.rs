//! Download PDB entries from RCSB, caching them on disk.

use std::path::{Path, PathBuf};

use crate::error::BioViewError;

const RCSB_DOWNLOAD_URL: &str = "https://files.rcsb.org/download";

/// Whether `input` looks like a four-character PDB identifier.
#[must_use]
pub fn is_pdb_id(input: &str) -> bool {
    input.len() == 4 && input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Fetch `<id>.pdb` into `dir` unless it is already there, and return the
/// local path.
pub fn download_pdb(id: &str, dir: &Path) -> Result<PathBuf, BioViewError> {
    let pdb_id = id.to_lowercase();
    let local_path = dir.join(format!("{pdb_id}.pdb"));
    if local_path.exists() {
        log::debug!("using cached {}", local_path.display());
        return Ok(local_path);
    }

    std::fs::create_dir_all(dir)?;

    let url = format!("{RCSB_DOWNLOAD_URL}/{}.pdb", pdb_id.to_uppercase());
    log::info!("Downloading {} from RCSB...", pdb_id.to_uppercase());

    let content = ureq::get(&url)
        .call()
        .map_err(|e| BioViewError::Fetch(format!("{pdb_id}: {e}")))?
        .into_body()
        .read_to_string()
        .map_err(|e| BioViewError::Fetch(format!("reading {pdb_id}: {e}")))?;

    std::fs::write(&local_path, &content)?;
    log::info!("Downloaded to {}", local_path.display());
    Ok(local_path)
}

/// Turn a command-line argument into a structure file path: an existing
/// path is returned as is, a PDB id is downloaded into `dir`.
pub fn resolve_structure_path(
    input: &str,
    dir: &Path,
) -> Result<PathBuf, BioViewError> {
    let path = Path::new(input);
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    if is_pdb_id(input) {
        return download_pdb(input, dir);
    }
    Err(BioViewError::Fetch(format!(
        "file not found and not a valid PDB code: {input}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdb_ids() {
        assert!(is_pdb_id("1ubq"));
        assert!(is_pdb_id("4HHB"));
        assert!(!is_pdb_id("1ub"));
        assert!(!is_pdb_id("1ub-"));
        assert!(!is_pdb_id("1ubq.pdb"));
    }

    #[test]
    fn existing_path_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("model.xyz");
        std::fs::write(&file, "").unwrap();
        let resolved =
            resolve_structure_path(file.to_str().unwrap(), dir.path()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn cached_download_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("1abc.pdb");
        std::fs::write(&cached, "END").unwrap();
        assert_eq!(resolve_structure_path("1ABC", dir.path()).unwrap(), cached);
    }

    #[test]
    fn unknown_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve_structure_path("no/such/file.pdb", dir.path()),
            Err(BioViewError::Fetch(_))
        ));
    }
}
