//! Fixed-column PDB parser.
//!
//! Lines are split into blocks of [`LINE_BLOCK_SIZE`] and decoded in
//! parallel; the decoded records are then walked in file order to cut
//! models at `ENDMDL` and subunits at `TER`. `HELIX` and `SHEET` ranges are
//! applied to every model once all records are read.

use std::fmt;
use std::ops::Range;

use glam::Vec3;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice};

use crate::structure::{
    Atom, AtomElement, ChainId, Protein, ProteinFile, ProteinFileInfo,
    ProteinSubunit, Residue, SecondaryStructure, SecondaryStructureSegment,
    SubunitKind,
};

/// Lines decoded per parallel task.
pub const LINE_BLOCK_SIZE: usize = 1024;

/// Shortest `ATOM`/`HETATM` line that still carries the element column.
const EXPECTED_LINE_LENGTH: usize = 78;

/// Width of the record name plus continuation field in `TITLE`/`AUTHOR`.
const TEXT_RECORD_PREFIX: usize = 10;

const HEADER_PDB_ID: Range<usize> = 62..66;

mod columns {
    use std::ops::Range;

    pub(super) const ATOM_NAME: Range<usize> = 12..16;
    pub(super) const RES_NAME: Range<usize> = 17..20;
    pub(super) const CHAIN_ID: usize = 21;
    pub(super) const RES_SEQ: Range<usize> = 22..26;
    pub(super) const X: Range<usize> = 30..38;
    pub(super) const Y: Range<usize> = 38..46;
    pub(super) const Z: Range<usize> = 46..54;
    pub(super) const ELEMENT: Range<usize> = 76..78;

    pub(super) const HELIX_CHAIN: usize = 19;
    pub(super) const HELIX_START: Range<usize> = 21..25;
    pub(super) const HELIX_END: Range<usize> = 33..37;

    pub(super) const SHEET_CHAIN: usize = 21;
    pub(super) const SHEET_START: Range<usize> = 22..26;
    pub(super) const SHEET_END: Range<usize> = 33..37;
}

/// Errors raised while reading a PDB file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdbParseError {
    /// Atom record shorter than the expected fixed-column width.
    UnexpectedLineLength {
        /// 1-based line number.
        line: usize,
    },
    /// Residue sequence number is missing or not an integer.
    MissingResidueId {
        /// 1-based line number.
        line: usize,
    },
    /// A coordinate field could not be read as a number.
    InvalidAtomCoordinates {
        /// 1-based line number.
        line: usize,
    },
    /// `HELIX` or `SHEET` record without a readable residue range.
    InvalidSecondaryStructure {
        /// 1-based line number.
        line: usize,
    },
    /// The file contains no usable atoms.
    EmptyStructure,
}

impl fmt::Display for PdbParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedLineLength { line } => {
                write!(f, "line {line}: atom record is too short")
            }
            Self::MissingResidueId { line } => {
                write!(f, "line {line}: missing residue sequence number")
            }
            Self::InvalidAtomCoordinates { line } => {
                write!(f, "line {line}: invalid atom coordinates")
            }
            Self::InvalidSecondaryStructure { line } => {
                write!(f, "line {line}: unreadable helix or sheet range")
            }
            Self::EmptyStructure => write!(f, "file contains no atoms"),
        }
    }
}

impl std::error::Error for PdbParseError {}

/// Decoded line, tagged with its 1-based line number where order matters.
#[derive(Debug)]
enum Record {
    Header(String),
    Title(String),
    Author(String),
    Atom(Atom),
    Secondary(SecondaryStructureSegment),
    SubunitEnd,
    ModelEnd,
    Warning(PdbParseError),
}

/// Parse PDB text into a [`ProteinFile`].
///
/// Malformed atom records are skipped and reported through
/// [`ProteinFileInfo::warning_lines`]; only a file without any atom is an
/// error.
pub fn parse_pdb(text: &str) -> Result<ProteinFile, PdbParseError> {
    let lines: Vec<&str> = text.lines().collect();

    let records: Vec<(usize, Record)> = lines
        .par_chunks(LINE_BLOCK_SIZE)
        .enumerate()
        .flat_map_iter(|(block, chunk)| {
            let first_line = block * LINE_BLOCK_SIZE + 1;
            chunk.iter().enumerate().filter_map(move |(offset, line)| {
                let line_number = first_line + offset;
                parse_line(line, line_number).map(|r| (line_number, r))
            })
        })
        .collect();

    let mut assembler = ModelAssembler::default();
    let mut info = ProteinFileInfo::default();
    let mut segments = Vec::new();

    for (line_number, record) in records {
        match record {
            Record::Header(id) => {
                if info.pdb_id.is_none() && !id.is_empty() {
                    info.pdb_id = Some(id);
                }
            }
            Record::Title(text) => append_text(&mut info.description, &text),
            Record::Author(text) => append_text(&mut info.authors, &text),
            Record::Atom(atom) => assembler.push_atom(atom),
            Record::Secondary(segment) => segments.push(segment),
            Record::SubunitEnd => assembler.end_subunit(),
            Record::ModelEnd => assembler.end_model(),
            Record::Warning(err) => {
                log::debug!("skipping PDB record: {err}");
                info.warning_lines.push(line_number);
            }
        }
    }

    let mut models = assembler.finish();
    if models.is_empty() {
        return Err(PdbParseError::EmptyStructure);
    }
    if !segments.is_empty() {
        log::debug!("applying {} helix/sheet ranges", segments.len());
        models = models
            .into_iter()
            .map(|model| model.with_secondary_structure(&segments))
            .collect();
    }
    if !info.warning_lines.is_empty() {
        log::warn!(
            "{} PDB records could not be parsed",
            info.warning_lines.len()
        );
    }
    log::info!(
        "parsed PDB: {} model(s), {} atoms in first model",
        models.len(),
        models[0].atom_count()
    );

    Ok(ProteinFile::new(models, info))
}

fn parse_line(line: &str, line_number: usize) -> Option<Record> {
    if line.starts_with("ATOM") || line.starts_with("HETATM") {
        return match parse_atom(line, line_number) {
            Ok(Some(atom)) => Some(Record::Atom(atom)),
            Ok(None) => None,
            Err(err) => Some(Record::Warning(err)),
        };
    }
    if line.starts_with("HELIX") {
        return Some(secondary_record(
            line,
            line_number,
            SecondaryStructure::Helix,
        ));
    }
    if line.starts_with("SHEET") {
        return Some(secondary_record(
            line,
            line_number,
            SecondaryStructure::Sheet,
        ));
    }
    if line.starts_with("TER") {
        return Some(Record::SubunitEnd);
    }
    if line.starts_with("ENDMDL") {
        return Some(Record::ModelEnd);
    }
    if line.starts_with("HEADER") {
        let id = line.get(HEADER_PDB_ID).unwrap_or("").replace(' ', "");
        return Some(Record::Header(id));
    }
    if line.starts_with("TITLE") {
        return Some(Record::Title(text_record(line)));
    }
    if line.starts_with("AUTHOR") {
        return Some(Record::Author(text_record(line)));
    }
    None
}

/// Decode an `ATOM`/`HETATM` line. Water returns `Ok(None)`.
fn parse_atom(
    line: &str,
    line_number: usize,
) -> Result<Option<Atom>, PdbParseError> {
    if line.len() < EXPECTED_LINE_LENGTH || !line.is_ascii() {
        return Err(PdbParseError::UnexpectedLineLength { line: line_number });
    }

    let res_name = line[columns::RES_NAME].trim();
    if res_name == "HOH" {
        return Ok(None);
    }

    let residue_id = line[columns::RES_SEQ]
        .trim()
        .parse::<i32>()
        .map_err(|_| PdbParseError::MissingResidueId { line: line_number })?;

    let coordinate = |range: Range<usize>| {
        line[range].trim().parse::<f32>().map_err(|_| {
            PdbParseError::InvalidAtomCoordinates { line: line_number }
        })
    };
    let position = Vec3::new(
        coordinate(columns::X)?,
        coordinate(columns::Y)?,
        coordinate(columns::Z)?,
    );

    let element_field = line[columns::ELEMENT].trim();
    let element = if element_field.is_empty() {
        element_from_atom_name(&line[columns::ATOM_NAME])
    } else {
        AtomElement::from_symbol(element_field)
    };

    let chain = line[columns::CHAIN_ID..]
        .chars()
        .next()
        .map_or(ChainId::DEFAULT, ChainId::new);

    Ok(Some(Atom {
        position,
        element,
        residue: Residue::from_code(res_name),
        residue_id,
        chain,
    }))
}

fn secondary_record(
    line: &str,
    line_number: usize,
    kind: SecondaryStructure,
) -> Record {
    let (chain_column, start, end) = match kind {
        SecondaryStructure::Helix => {
            (columns::HELIX_CHAIN, columns::HELIX_START, columns::HELIX_END)
        }
        _ => (columns::SHEET_CHAIN, columns::SHEET_START, columns::SHEET_END),
    };
    let residue = |range: Range<usize>| {
        line.get(range).and_then(|field| field.trim().parse::<i32>().ok())
    };
    let chain = line
        .get(chain_column..=chain_column)
        .and_then(|field| field.chars().next());

    match (chain, residue(start), residue(end)) {
        (Some(chain), Some(start), Some(end)) => Record::Secondary(
            SecondaryStructureSegment::new(kind, ChainId::new(chain), start, end),
        ),
        _ => Record::Warning(PdbParseError::InvalidSecondaryStructure {
            line: line_number,
        }),
    }
}

/// Older files leave the element column blank; the first letter of the
/// atom name is the element for every atom a protein contains.
fn element_from_atom_name(name: &str) -> AtomElement {
    name.trim_start_matches(|c: char| c.is_ascii_digit() || c == ' ')
        .get(..1)
        .map_or(AtomElement::Unknown, AtomElement::from_symbol)
}

fn text_record(line: &str) -> String {
    line.get(TEXT_RECORD_PREFIX..)
        .unwrap_or("")
        .trim_end()
        .to_owned()
}

fn append_text(field: &mut Option<String>, text: &str) {
    match field {
        Some(existing) => existing.push_str(text),
        None => *field = Some(text.to_owned()),
    }
}

/// Walks atom, `TER`, and `ENDMDL` records in order and cuts them into
/// models and subunits.
#[derive(Default)]
struct ModelAssembler {
    models: Vec<Protein>,
    atoms: Vec<Atom>,
    subunits: Vec<ProteinSubunit>,
    subunit_start: usize,
    saw_subunit_end: bool,
}

impl ModelAssembler {
    fn push_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    fn end_subunit(&mut self) {
        self.saw_subunit_end = true;
        self.close_subunit(SubunitKind::Chain);
    }

    fn close_subunit(&mut self, kind: SubunitKind) {
        let count = self.atoms.len() - self.subunit_start;
        if count == 0 {
            return;
        }
        self.subunits.push(ProteinSubunit::new(
            self.subunits.len(),
            kind,
            count,
            self.subunit_start,
        ));
        self.subunit_start = self.atoms.len();
    }

    fn end_model(&mut self) {
        let trailing_kind = if self.saw_subunit_end {
            SubunitKind::NonChain
        } else {
            SubunitKind::Unknown
        };
        self.close_subunit(trailing_kind);

        if !self.atoms.is_empty() {
            let subunits = std::mem::take(&mut self.subunits);
            self.models.push(Protein::new(&self.atoms, subunits));
        }
        self.atoms.clear();
        self.subunits.clear();
        self.subunit_start = 0;
        self.saw_subunit_end = false;
    }

    fn finish(mut self) -> Vec<Protein> {
        self.end_model();
        self.models
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Format an atom record with every fixed column in place.
    pub(crate) fn atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: i32,
        pos: [f32; 3],
        element: &str,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4} {res_name:>3} {chain}{res_seq:>4}    \
             {:>8.3}{:>8.3}{:>8.3}  1.00  0.00          {element:>2}",
            pos[0], pos[1], pos[2]
        )
    }

    pub(crate) fn two_chain_pdb() -> String {
        [
            "HEADER    HYDROLASE                               01-JAN-00   1ABC              ".to_owned(),
            "TITLE     CRYSTAL STRUCTURE OF A".to_owned(),
            "TITLE    2 SMALL PROTEIN   ".to_owned(),
            "AUTHOR    A.AUTHOR,B.AUTHOR".to_owned(),
            atom_line(1, "N", "MET", 'A', 1, [0.0, 0.0, 0.0], "N"),
            atom_line(2, "CA", "MET", 'A', 1, [1.0, 0.0, 0.0], "C"),
            atom_line(3, "CA", "GLY", 'A', 2, [2.0, 0.0, 0.0], "C"),
            "TER       4      GLY A   2".to_owned(),
            atom_line(5, "CA", "LYS", 'B', 1, [0.0, 1.0, 0.0], "C"),
            atom_line(6, "O", "HOH", 'B', 50, [0.0, 2.0, 0.0], "O"),
            "TER       7      LYS B   1".to_owned(),
            atom_line(8, "ZN", "ZN", 'B', 101, [5.0, 5.0, 5.0], "ZN")
                .replacen("ATOM  ", "HETATM", 1),
            "END".to_owned(),
        ]
        .join("\n")
    }

    #[test]
    fn parses_header_records() {
        let file = parse_pdb(&two_chain_pdb()).unwrap();
        assert_eq!(file.info.pdb_id.as_deref(), Some("1ABC"));
        assert_eq!(
            file.info.description.as_deref(),
            Some("CRYSTAL STRUCTURE OF A SMALL PROTEIN")
        );
        assert_eq!(file.info.authors.as_deref(), Some("A.AUTHOR,B.AUTHOR"));
        assert!(file.info.warning_lines.is_empty());
    }

    #[test]
    fn splits_subunits_at_ter_and_skips_water() {
        let file = parse_pdb(&two_chain_pdb()).unwrap();
        assert_eq!(file.model_count(), 1);
        let protein = file.first_model().unwrap();
        assert_eq!(protein.atom_count(), 5);

        let kinds: Vec<_> =
            protein.subunits().iter().map(|s| (s.kind, s.atom_count)).collect();
        assert_eq!(
            kinds,
            vec![
                (SubunitKind::Chain, 3),
                (SubunitKind::Chain, 1),
                (SubunitKind::NonChain, 1),
            ]
        );
        assert_eq!(protein.elements()[4], AtomElement::Zinc);
        assert_eq!(protein.positions()[1], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn helix_and_sheet_records_mark_atoms() {
        let helix = format!(
            "HELIX  {:>3} {:>3} {:>3} {} {:>4}  {:>3} {} {:>4}",
            1, "H1", "MET", 'A', 1, "GLY", 'A', 2
        );
        let sheet = format!(
            "SHEET  {:>3} {:>3}{:>2} {:>3} {}{:>4}  {:>3} {}{:>4}",
            1, "S1", 1, "LYS", 'B', 1, "LYS", 'B', 1
        );
        let text = format!("{helix}\n{sheet}\nHELIX    2\n{}", two_chain_pdb());
        let file = parse_pdb(&text).unwrap();
        assert_eq!(file.info.warning_lines, vec![3]);

        let protein = file.first_model().unwrap();
        assert_eq!(
            protein.secondary_structure(),
            &[
                SecondaryStructure::Helix,
                SecondaryStructure::Helix,
                SecondaryStructure::Helix,
                SecondaryStructure::Sheet,
                SecondaryStructure::NonChain,
            ]
        );
    }

    #[test]
    fn without_helix_records_residues_are_loops() {
        let file = parse_pdb(&two_chain_pdb()).unwrap();
        let protein = file.first_model().unwrap();
        assert_eq!(protein.secondary_structure()[0], SecondaryStructure::Loop);
        assert_eq!(protein.secondary_structure()[4], SecondaryStructure::NonChain);
    }

    #[test]
    fn sequences_from_parsed_file() {
        let file = parse_pdb(&two_chain_pdb()).unwrap();
        let sequences = file.first_model().unwrap().chain_sequences();
        let strings: Vec<_> =
            sequences.iter().map(|s| s.sequence.as_str()).collect();
        assert_eq!(strings, vec!["MG", "K"]);
    }

    #[test]
    fn no_ter_gives_single_unknown_subunit() {
        let text = [
            atom_line(1, "CA", "ALA", 'A', 1, [0.0, 0.0, 0.0], "C"),
            atom_line(2, "CA", "ALA", 'A', 2, [1.0, 0.0, 0.0], "C"),
        ]
        .join("\n");
        let file = parse_pdb(&text).unwrap();
        let protein = file.first_model().unwrap();
        assert_eq!(protein.subunit_count(), 1);
        assert_eq!(protein.subunits()[0].kind, SubunitKind::Unknown);
    }

    #[test]
    fn endmdl_splits_models() {
        let model = atom_line(1, "CA", "ALA", 'A', 1, [0.0, 0.0, 0.0], "C");
        let text = format!(
            "MODEL        1\n{model}\nENDMDL\nMODEL        2\n{model}\n{model}\nENDMDL\n"
        );
        let file = parse_pdb(&text).unwrap();
        assert_eq!(file.model_count(), 2);
        assert_eq!(file.models[1].atom_count(), 2);
        assert_eq!(
            file.kind,
            crate::structure::ProteinFileKind::DynamicStructure
        );
    }

    #[test]
    fn malformed_atoms_become_warnings() {
        let good = atom_line(1, "CA", "ALA", 'A', 1, [0.0, 0.0, 0.0], "C");
        let bad_coords = good.replacen("   0.000", "   x.xxx", 1);
        let bad_res_seq = good.replacen("A   1", "A    ", 1);
        let text =
            format!("{good}\nATOM      2  CA  ALA\n{bad_coords}\n{bad_res_seq}");
        let file = parse_pdb(&text).unwrap();
        assert_eq!(file.first_model().unwrap().atom_count(), 1);
        assert_eq!(file.info.warning_lines, vec![2, 3, 4]);
    }

    #[test]
    fn blank_element_column_uses_atom_name() {
        let line = atom_line(1, "OG1", "THR", 'A', 1, [0.0, 0.0, 0.0], "  ");
        let file = parse_pdb(&line).unwrap();
        assert_eq!(
            file.first_model().unwrap().elements()[0],
            AtomElement::Oxygen
        );
    }

    #[test]
    fn empty_file_is_an_error() {
        assert_eq!(
            parse_pdb("HEADER    NOTHING\nEND\n"),
            Err(PdbParseError::EmptyStructure)
        );
    }

    #[test]
    fn many_blocks_keep_line_order() {
        let lines: Vec<String> = (0..(LINE_BLOCK_SIZE * 3 + 7))
            .map(|i| {
                atom_line(i + 1, "CA", "ALA", 'A', i as i32, [i as f32, 0.0, 0.0], "C")
            })
            .collect();
        let file = parse_pdb(&lines.join("\n")).unwrap();
        let protein = file.first_model().unwrap();
        assert_eq!(protein.atom_count(), lines.len());
        assert!(protein
            .positions()
            .windows(2)
            .all(|w| w[0].x < w[1].x));
    }
}
