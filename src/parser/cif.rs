//! mmCIF (PDBx) parser.
//!
//! The text is tokenized into `data_` names, `loop_` keywords, tags, and
//! values (quoted strings and `;` text fields included), then grouped into
//! category tables. Single items such as `_entry.id 1ABC` become one-row
//! tables, so looped and unlooped categories read the same way.
//!
//! Atoms come from `_atom_site`. Models are cut where
//! `pdbx_PDB_model_num` changes and subunits where `label_asym_id` changes.
//! Helices and strands come from `_struct_conf` and
//! `_struct_sheet_range`.

use std::borrow::Cow;
use std::fmt;

use glam::Vec3;
use rayon::prelude::{ParallelIterator, ParallelSlice};

use crate::structure::{
    Atom, AtomElement, ChainId, Protein, ProteinFile, ProteinFileInfo,
    ProteinSubunit, Residue, SecondaryStructure, SecondaryStructureSegment,
    SubunitKind,
};

/// Errors raised while reading an mmCIF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CifParseError {
    /// `_atom_site` lacks a column every atom needs.
    MissingColumn(&'static str),
    /// A coordinate value could not be read as a number.
    InvalidAtomCoordinates {
        /// 1-based line number.
        line: usize,
    },
    /// Residue sequence number is not an integer.
    MissingResidueId {
        /// 1-based line number.
        line: usize,
    },
    /// The file contains no usable atoms.
    EmptyStructure,
}

impl fmt::Display for CifParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn(column) => {
                write!(f, "_atom_site has no {column} column")
            }
            Self::InvalidAtomCoordinates { line } => {
                write!(f, "line {line}: invalid atom coordinates")
            }
            Self::MissingResidueId { line } => {
                write!(f, "line {line}: residue sequence number is not an integer")
            }
            Self::EmptyStructure => write!(f, "file contains no atoms"),
        }
    }
}

impl std::error::Error for CifParseError {}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Data(&'a str),
    Loop,
    Tag(&'a str),
    Value(Cow<'a, str>),
}

/// A value with the 1-based line it starts on.
type Field<'a> = (usize, Cow<'a, str>);

/// One category: a `loop_` table, or consecutive unlooped items.
#[derive(Debug, Default)]
struct Table<'a> {
    tags: Vec<&'a str>,
    values: Vec<Field<'a>>,
    looped: bool,
}

impl<'a> Table<'a> {
    fn category(&self) -> &'a str {
        self.tags.first().map_or("", |&tag| category_of(tag))
    }

    /// Column index of `_category.<name>`, ignoring case.
    fn column(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|tag| {
            tag.split_once('.')
                .is_some_and(|(_, field)| field.eq_ignore_ascii_case(name))
        })
    }

    fn rows(&self) -> std::slice::ChunksExact<'_, Field<'a>> {
        self.values.chunks_exact(self.tags.len().max(1))
    }

    /// First row's value of `name`, unless it is `?` or `.`.
    fn first(&self, name: &str) -> Option<&str> {
        let column = self.column(name)?;
        self.values.get(column).and_then(|(_, value)| known(value))
    }
}

#[derive(Debug, Default)]
struct Document<'a> {
    name: Option<&'a str>,
    tables: Vec<Table<'a>>,
    warning_lines: Vec<usize>,
}

impl<'a> Document<'a> {
    fn read(text: &'a str) -> Self {
        let mut document = Self::default();
        let mut tokens = tokenize(text).into_iter().peekable();
        let is_tag = |(_, token): &(usize, Token<'a>)| matches!(token, Token::Tag(_));
        let is_value =
            |(_, token): &(usize, Token<'a>)| matches!(token, Token::Value(_));

        while let Some((line, token)) = tokens.next() {
            match token {
                Token::Data(name) => {
                    if document.name.is_none() {
                        document.name = Some(name);
                    }
                }
                Token::Loop => {
                    let mut table = Table {
                        looped: true,
                        ..Table::default()
                    };
                    while let Some((_, Token::Tag(tag))) = tokens.next_if(is_tag) {
                        table.tags.push(tag);
                    }
                    while let Some((line, Token::Value(value))) =
                        tokens.next_if(is_value)
                    {
                        table.values.push((line, value));
                    }
                    document.push_loop(table);
                }
                Token::Tag(tag) => match tokens.next_if(is_value) {
                    Some((line, Token::Value(value))) => {
                        document.push_item(tag, (line, value));
                    }
                    _ => document.warning_lines.push(line),
                },
                Token::Value(_) => document.warning_lines.push(line),
            }
        }
        document
    }

    fn push_loop(&mut self, mut table: Table<'a>) {
        if table.tags.is_empty() {
            return;
        }
        let complete = table.values.len() - table.values.len() % table.tags.len();
        if let Some((line, _)) = table.values.get(complete) {
            self.warning_lines.push(*line);
            table.values.truncate(complete);
        }
        self.tables.push(table);
    }

    fn push_item(&mut self, tag: &'a str, field: Field<'a>) {
        let category = category_of(tag);
        match self.tables.last_mut() {
            Some(table)
                if !table.looped && table.category().eq_ignore_ascii_case(category) =>
            {
                table.tags.push(tag);
                table.values.push(field);
            }
            _ => self.tables.push(Table {
                tags: vec![tag],
                values: vec![field],
                looped: false,
            }),
        }
    }

    fn tables(&self, category: &'a str) -> impl Iterator<Item = &Table<'a>> {
        self.tables
            .iter()
            .filter(move |table| table.category().eq_ignore_ascii_case(category))
    }

    fn item(&self, category: &'a str, name: &str) -> Option<&str> {
        self.tables(category).find_map(|table| table.first(name))
    }
}

fn category_of(tag: &str) -> &str {
    tag.split_once('.').map_or(tag, |(category, _)| category)
}

/// `?` (unknown) and `.` (inapplicable) carry no value.
fn known(value: &str) -> Option<&str> {
    match value {
        "?" | "." | "" => None,
        value => Some(value),
    }
}

fn tokenize(text: &str) -> Vec<(usize, Token<'_>)> {
    let mut tokens = Vec::new();
    let mut text_field: Option<(usize, String)> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if let Some((start, mut buffer)) = text_field.take() {
            if line.starts_with(';') {
                tokens.push((start, Token::Value(Cow::Owned(buffer))));
            } else {
                let line = line.trim();
                if !buffer.is_empty() && !line.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(line);
                text_field = Some((start, buffer));
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix(';') {
            text_field = Some((line_number, rest.trim().to_owned()));
            continue;
        }
        tokens.extend(line_tokens(line).into_iter().map(|t| (line_number, t)));
    }

    if let Some((start, buffer)) = text_field {
        tokens.push((start, Token::Value(Cow::Owned(buffer))));
    }
    tokens
}

/// Split one line into tokens. A quote only closes a quoted value when
/// whitespace or the line end follows it, so `'O5''` style names survive.
fn line_tokens(line: &str) -> Vec<Token<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if byte.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if byte == b'#' {
            break;
        }
        if byte == b'\'' || byte == b'"' {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len()
                && !(bytes[end] == byte
                    && bytes.get(end + 1).is_none_or(u8::is_ascii_whitespace))
            {
                end += 1;
            }
            tokens.push(Token::Value(Cow::Borrowed(&line[start..end])));
            i = end + 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let word = &line[start..i];
        let data_name = word
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("data_"))
            .and(word.get(5..));
        tokens.push(if let Some(name) = data_name {
            Token::Data(name)
        } else if word.eq_ignore_ascii_case("loop_") {
            Token::Loop
        } else if word.starts_with('_') {
            Token::Tag(word)
        } else {
            Token::Value(Cow::Borrowed(word))
        });
    }
    tokens
}

/// Column positions in an `_atom_site` table.
struct AtomSiteColumns {
    group: Option<usize>,
    symbol: Option<usize>,
    atom_name: Option<usize>,
    residue: Option<usize>,
    chain: Option<usize>,
    subunit: Option<usize>,
    residue_id: Option<usize>,
    model: Option<usize>,
    x: usize,
    y: usize,
    z: usize,
}

impl AtomSiteColumns {
    fn locate(table: &Table<'_>) -> Result<Self, CifParseError> {
        let required = |name: &'static str| {
            table.column(name).ok_or(CifParseError::MissingColumn(name))
        };
        let either = |a: &str, b: &str| table.column(a).or_else(|| table.column(b));
        Ok(Self {
            group: table.column("group_PDB"),
            symbol: table.column("type_symbol"),
            atom_name: either("label_atom_id", "auth_atom_id"),
            residue: either("label_comp_id", "auth_comp_id"),
            chain: either("auth_asym_id", "label_asym_id"),
            subunit: either("label_asym_id", "auth_asym_id"),
            residue_id: either("auth_seq_id", "label_seq_id"),
            model: table.column("pdbx_PDB_model_num"),
            x: required("Cartn_x")?,
            y: required("Cartn_y")?,
            z: required("Cartn_z")?,
        })
    }

    /// Decode one row. Water returns `Ok(None)`.
    fn decode<'r>(
        &self,
        row: &'r [Field<'_>],
    ) -> Result<Option<SiteAtom<'r>>, CifParseError> {
        let line = row.first().map_or(0, |(line, _)| *line);
        let get = move |column: Option<usize>| {
            column
                .and_then(|c| row.get(c))
                .and_then(|(_, value)| known(value))
        };

        let residue_code = get(self.residue).unwrap_or_default();
        if residue_code.eq_ignore_ascii_case("HOH") {
            return Ok(None);
        }

        let coordinate = |column: usize| {
            get(Some(column))
                .and_then(|value| value.parse::<f32>().ok())
                .ok_or(CifParseError::InvalidAtomCoordinates { line })
        };
        let position =
            Vec3::new(coordinate(self.x)?, coordinate(self.y)?, coordinate(self.z)?);

        let residue_id = match get(self.residue_id) {
            Some(value) => value
                .parse::<i32>()
                .map_err(|_| CifParseError::MissingResidueId { line })?,
            None => 0,
        };

        let element = get(self.symbol).map_or_else(
            || {
                get(self.atom_name)
                    .and_then(|name| name.get(..1))
                    .map_or(AtomElement::Unknown, AtomElement::from_symbol)
            },
            AtomElement::from_symbol,
        );

        let chain = get(self.chain)
            .and_then(|id| id.chars().next())
            .map_or(ChainId::DEFAULT, ChainId::new);

        Ok(Some(SiteAtom {
            atom: Atom {
                position,
                element,
                residue: Residue::from_code(residue_code),
                residue_id,
                chain,
            },
            polymer: get(self.group).is_none_or(|group| group.eq_ignore_ascii_case("ATOM")),
            subunit: get(self.subunit).unwrap_or_default(),
            model: get(self.model),
        }))
    }
}

struct SiteAtom<'r> {
    atom: Atom,
    polymer: bool,
    subunit: &'r str,
    model: Option<&'r str>,
}

/// Cuts `_atom_site` rows into models and subunits.
#[derive(Default)]
struct SiteAssembler {
    models: Vec<Protein>,
    atoms: Vec<Atom>,
    subunits: Vec<ProteinSubunit>,
    subunit_start: usize,
    subunit_key: String,
    polymer: bool,
    model: Option<String>,
}

impl SiteAssembler {
    fn push(&mut self, site: &SiteAtom<'_>) {
        if self.model.as_deref() != site.model {
            self.end_model();
            self.model = site.model.map(str::to_owned);
        }
        if self.subunit_key != site.subunit {
            self.close_subunit();
            site.subunit.clone_into(&mut self.subunit_key);
        }
        self.polymer |= site.polymer;
        self.atoms.push(site.atom);
    }

    fn close_subunit(&mut self) {
        let count = self.atoms.len() - self.subunit_start;
        if count > 0 {
            let kind = if self.polymer {
                SubunitKind::Chain
            } else {
                SubunitKind::NonChain
            };
            self.subunits.push(ProteinSubunit::new(
                self.subunits.len(),
                kind,
                count,
                self.subunit_start,
            ));
        }
        self.subunit_start = self.atoms.len();
        self.polymer = false;
    }

    fn end_model(&mut self) {
        self.close_subunit();
        if !self.atoms.is_empty() {
            let subunits = std::mem::take(&mut self.subunits);
            self.models.push(Protein::new(&self.atoms, subunits));
        }
        self.atoms.clear();
        self.subunits.clear();
        self.subunit_start = 0;
        self.subunit_key.clear();
    }

    fn finish(mut self) -> Vec<Protein> {
        self.end_model();
        self.models
    }
}

/// Parse mmCIF text into a [`ProteinFile`].
///
/// Rows that cannot be decoded are skipped and reported through
/// [`ProteinFileInfo::warning_lines`]; a missing coordinate column or a
/// file without atoms is an error.
pub fn parse_cif(text: &str) -> Result<ProteinFile, CifParseError> {
    let document = Document::read(text);
    let mut info = ProteinFileInfo {
        pdb_id: document
            .item("_entry", "id")
            .or(document.name)
            .map(str::to_owned),
        description: document.item("_struct", "title").map(str::to_owned),
        authors: authors(&document),
        warning_lines: document.warning_lines.clone(),
    };

    let mut assembler = SiteAssembler::default();
    for table in document.tables("_atom_site") {
        let columns = AtomSiteColumns::locate(table)?;
        let decoded: Vec<_> = table
            .values
            .par_chunks_exact(table.tags.len())
            .map(|row| (row[0].0, columns.decode(row)))
            .collect();

        for (line, site) in decoded {
            match site {
                Ok(Some(site)) => assembler.push(&site),
                Ok(None) => {}
                Err(err) => {
                    log::debug!("skipping mmCIF row: {err}");
                    info.warning_lines.push(line);
                }
            }
        }
        // each `_atom_site` table is its own model
        assembler.end_model();
    }

    let mut models = assembler.finish();
    if models.is_empty() {
        return Err(CifParseError::EmptyStructure);
    }

    let segments = secondary_segments(&document, &mut info.warning_lines);
    if !segments.is_empty() {
        log::debug!("applying {} helix/sheet ranges", segments.len());
        models = models
            .into_iter()
            .map(|model| model.with_secondary_structure(&segments))
            .collect();
    }

    info.warning_lines.sort_unstable();
    if !info.warning_lines.is_empty() {
        log::warn!(
            "{} mmCIF lines could not be parsed",
            info.warning_lines.len()
        );
    }
    log::info!(
        "parsed mmCIF: {} model(s), {} atoms in first model",
        models.len(),
        models[0].atom_count()
    );

    Ok(ProteinFile::new(models, info))
}

fn authors(document: &Document<'_>) -> Option<String> {
    let names: Vec<&str> = document
        .tables("_audit_author")
        .flat_map(|table| {
            let column = table.column("name");
            table.rows().filter_map(move |row| {
                column
                    .and_then(|c| row.get(c))
                    .and_then(|(_, name)| known(name))
            })
        })
        .collect();
    (!names.is_empty()).then(|| names.join("; "))
}

fn secondary_segments(
    document: &Document<'_>,
    warning_lines: &mut Vec<usize>,
) -> Vec<SecondaryStructureSegment> {
    let mut segments = Vec::new();
    let sources = [
        ("_struct_conf", SecondaryStructure::Helix),
        ("_struct_sheet_range", SecondaryStructure::Sheet),
    ];

    for (category, kind) in sources {
        for table in document.tables(category) {
            let either =
                |a: &str, b: &str| table.column(a).or_else(|| table.column(b));
            let conf_type = table.column("conf_type_id");
            let chain = either("beg_auth_asym_id", "beg_label_asym_id");
            let start = either("beg_auth_seq_id", "beg_label_seq_id");
            let end = either("end_auth_seq_id", "end_label_seq_id");

            for row in table.rows() {
                let get = move |column: Option<usize>| {
                    column
                        .and_then(|c| row.get(c))
                        .and_then(|(_, value)| known(value))
                };
                // `_struct_conf` also lists turns
                if get(conf_type).is_some_and(|t| !t.starts_with("HELX")) {
                    continue;
                }
                let residue = |column| get(column).and_then(|v| v.parse::<i32>().ok());
                match (get(chain).and_then(|c| c.chars().next()), residue(start), residue(end)) {
                    (Some(chain), Some(start), Some(end)) => {
                        segments.push(SecondaryStructureSegment::new(
                            kind,
                            ChainId::new(chain),
                            start,
                            end,
                        ));
                    }
                    _ => warning_lines.push(row[0].0),
                }
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chain_cif() -> String {
        "\
data_1ABC
#
_entry.id   1ABC
#
_struct.entry_id 1ABC
_struct.title    'Crystal structure of a small protein'
#
loop_
_audit_author.name
_audit_author.pdbx_ordinal
'Author, A.' 1
'Author, B.' 2
#
_struct_conf.conf_type_id    HELX_P
_struct_conf.id              HELX_P1
_struct_conf.beg_auth_asym_id A
_struct_conf.beg_auth_seq_id  1
_struct_conf.end_auth_asym_id A
_struct_conf.end_auth_seq_id  2
#
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.type_symbol
_atom_site.label_atom_id
_atom_site.label_comp_id
_atom_site.label_asym_id
_atom_site.label_seq_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.auth_seq_id
_atom_site.auth_asym_id
_atom_site.pdbx_PDB_model_num
ATOM   1 N  N   MET A 1 0.000 0.000 0.000 1 A 1
ATOM   2 C  CA  MET A 1 1.000 0.000 0.000 1 A 1
ATOM   3 C  CA  GLY A 2 2.000 0.000 0.000 2 A 1
ATOM   4 C  CA  LYS B 1 0.000 1.000 0.000 1 B 1
HETATM 5 O  O   HOH D . 0.000 2.000 0.000 50 B 1
HETATM 6 ZN ZN  ZN  C . 5.000 5.000 5.000 101 B 1
#
"
        .to_owned()
    }

    #[test]
    fn reads_entry_title_and_authors() {
        let file = parse_cif(&two_chain_cif()).unwrap();
        assert_eq!(file.info.pdb_id.as_deref(), Some("1ABC"));
        assert_eq!(
            file.info.description.as_deref(),
            Some("Crystal structure of a small protein")
        );
        assert_eq!(file.info.authors.as_deref(), Some("Author, A.; Author, B."));
        assert!(file.info.warning_lines.is_empty());
    }

    #[test]
    fn splits_subunits_by_asym_and_skips_water() {
        let file = parse_cif(&two_chain_cif()).unwrap();
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
        assert_eq!(protein.positions()[2], Vec3::new(2.0, 0.0, 0.0));

        let sequences: Vec<_> = protein
            .chain_sequences()
            .into_iter()
            .map(|s| s.sequence)
            .collect();
        assert_eq!(sequences, vec!["MG", "K"]);
    }

    #[test]
    fn struct_conf_marks_helix() {
        let file = parse_cif(&two_chain_cif()).unwrap();
        assert_eq!(
            file.first_model().unwrap().secondary_structure(),
            &[
                SecondaryStructure::Helix,
                SecondaryStructure::Helix,
                SecondaryStructure::Helix,
                SecondaryStructure::Loop,
                SecondaryStructure::NonChain,
            ]
        );
    }

    #[test]
    fn model_numbers_split_models() {
        let text = "\
data_NMR
loop_
_atom_site.group_PDB
_atom_site.type_symbol
_atom_site.label_comp_id
_atom_site.label_asym_id
_atom_site.label_seq_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.pdbx_PDB_model_num
ATOM C ALA A 1 0.0 0.0 0.0 1
ATOM C ALA A 2 1.0 0.0 0.0 1
ATOM C ALA A 1 0.5 0.0 0.0 2
ATOM C ALA A 2 1.5 0.0 0.0 2
";
        let file = parse_cif(text).unwrap();
        assert_eq!(file.model_count(), 2);
        assert_eq!(file.info.pdb_id.as_deref(), Some("NMR"));
        assert_eq!(file.models[1].positions()[0], Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(file.models[1].subunit_count(), 1);
    }

    #[test]
    fn bad_rows_become_warnings() {
        let text = "\
loop_
_atom_site.type_symbol
_atom_site.label_comp_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
C ALA 0.0 0.0 0.0
C ALA x 0.0 0.0
N ALA 1.0 0.0
";
        let file = parse_cif(text).unwrap();
        assert_eq!(file.first_model().unwrap().atom_count(), 1);
        // line 8 has a bad coordinate, line 9 is an incomplete row
        assert_eq!(file.info.warning_lines, vec![8, 9]);
    }

    #[test]
    fn missing_coordinates_column_is_an_error() {
        let text = "loop_\n_atom_site.type_symbol\n_atom_site.Cartn_x\nC 0.0\n";
        assert_eq!(
            parse_cif(text).unwrap_err(),
            CifParseError::MissingColumn("Cartn_y")
        );
        assert_eq!(
            parse_cif("data_EMPTY\n_entry.id EMPTY\n").unwrap_err(),
            CifParseError::EmptyStructure
        );
    }

    #[test]
    fn tokens_handle_quotes_and_text_fields() {
        let text = "_a.b 'it''s' \"x y\" # comment\n;first\nsecond\n;\nplain";
        assert_eq!(
            tokenize(text),
            vec![
                (1, Token::Tag("_a.b")),
                (1, Token::Value(Cow::Borrowed("it''s"))),
                (1, Token::Value(Cow::Borrowed("x y"))),
                (2, Token::Value(Cow::Owned("first second".to_owned()))),
                (5, Token::Value(Cow::Borrowed("plain"))),
            ]
        );
    }
}
