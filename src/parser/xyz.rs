//! Free-format XYZ parser (`<element> <x> <y> <z>` per line).
//!
//! Any line that is not an atom line (the atom count, a comment, a blank)
//! closes the configuration being read, so concatenated frames become
//! separate models.

use std::fmt;

use glam::Vec3;

use crate::structure::{
    Atom, AtomElement, ChainId, Protein, ProteinFile, ProteinFileInfo,
    ProteinSubunit, SubunitKind,
};

const ATOM_LINE_FIELDS: usize = 4;

/// Errors raised while reading an XYZ file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XyzParseError {
    /// No line described an atom.
    EmptyStructure,
}

impl fmt::Display for XyzParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStructure => write!(f, "file contains no atoms"),
        }
    }
}

impl std::error::Error for XyzParseError {}

#[derive(Default)]
struct Configuration {
    atoms: Vec<Atom>,
    energy: Option<f32>,
}

/// Parse XYZ text into a [`ProteinFile`], one model per configuration.
pub fn parse_xyz(text: &str) -> Result<ProteinFile, XyzParseError> {
    let mut configurations = vec![Configuration::default()];

    for line in text.lines() {
        let Some(current) = configurations.last_mut() else {
            continue;
        };
        if let Some(energy) = parse_energy(line) {
            current.energy = Some(energy);
        }
        match parse_atom(line) {
            Some(atom) => current.atoms.push(atom),
            None => {
                if !current.atoms.is_empty() {
                    configurations.push(Configuration::default());
                }
            }
        }
    }

    let models: Vec<Protein> = configurations
        .into_iter()
        .filter(|c| !c.atoms.is_empty())
        .map(|c| {
            let subunit = ProteinSubunit::new(
                0,
                SubunitKind::Unknown,
                c.atoms.len(),
                0,
            );
            Protein::new(&c.atoms, vec![subunit]).with_energy(c.energy)
        })
        .collect();

    if models.is_empty() {
        return Err(XyzParseError::EmptyStructure);
    }
    log::info!("parsed XYZ: {} configuration(s)", models.len());

    Ok(ProteinFile::new(models, ProteinFileInfo::default()))
}

fn parse_atom(line: &str) -> Option<Atom> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < ATOM_LINE_FIELDS {
        return None;
    }
    let x = fields[1].parse::<f32>().ok()?;
    let y = fields[2].parse::<f32>().ok()?;
    let z = fields[3].parse::<f32>().ok()?;
    Some(Atom {
        position: Vec3::new(x, y, z),
        element: AtomElement::from_symbol(fields[0]),
        residue: None,
        residue_id: 0,
        chain: ChainId::DEFAULT,
    })
}

/// Reads `energy=<value>` anywhere in a line, ignoring case and spaces.
fn parse_energy(line: &str) -> Option<f32> {
    let normalized: String = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let (_, value) = normalized.split_once("energy=")?;
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e')))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
