use serde::{Deserialize, Serialize};

/// Amino acid residue type, grouped by side-chain chemistry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub enum Residue {
    /// Arginine.
    Arg,
    /// Histidine.
    His,
    /// Lysine.
    Lys,
    /// Aspartic acid.
    Asp,
    /// Glutamic acid.
    Glu,
    /// Serine.
    Ser,
    /// Threonine.
    Thr,
    /// Asparagine.
    Asn,
    /// Glutamine.
    Gln,
    /// Cysteine.
    Cys,
    /// Selenocysteine.
    Sec,
    /// Glycine.
    Gly,
    /// Proline.
    Pro,
    /// Alanine.
    Ala,
    /// Valine.
    Val,
    /// Isoleucine.
    Ile,
    /// Leucine.
    Leu,
    /// Methionine.
    Met,
    /// Phenylalanine.
    Phe,
    /// Tyrosine.
    Tyr,
    /// Tryptophan.
    Trp,
}

/// Side-chain chemistry class used for default residue coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    /// Arg, His, Lys.
    PositivelyCharged,
    /// Asp, Glu.
    NegativelyCharged,
    /// Ser, Thr, Asn, Gln.
    PolarUncharged,
    /// Cys, Sec, Gly, Pro.
    Special,
    /// Ala, Val, Ile, Leu, Met, Phe, Tyr, Trp.
    Hydrophobic,
}

impl Residue {
    /// Every residue in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Arg,
        Self::His,
        Self::Lys,
        Self::Asp,
        Self::Glu,
        Self::Ser,
        Self::Thr,
        Self::Asn,
        Self::Gln,
        Self::Cys,
        Self::Sec,
        Self::Gly,
        Self::Pro,
        Self::Ala,
        Self::Val,
        Self::Ile,
        Self::Leu,
        Self::Met,
        Self::Phe,
        Self::Tyr,
        Self::Trp,
    ];

    /// Symbol used in sequences for residues that are not amino acids.
    pub const UNKNOWN_SYMBOL: char = 'X';

    /// Parse an upper-case three-letter PDB residue name.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.three_letter_code() == code.trim())
    }

    /// Parse a one-letter sequence symbol (case-insensitive).
    #[must_use]
    pub fn from_one_letter(symbol: char) -> Option<Self> {
        let symbol = symbol.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.one_letter_code() == symbol)
    }

    /// Index in [`Self::ALL`], used for per-residue color tables.
    #[must_use]
    pub fn table_index(self) -> usize {
        self as usize
    }

    /// Three-letter code as written in PDB files.
    #[must_use]
    pub fn three_letter_code(self) -> &'static str {
        match self {
            Self::Arg => "ARG",
            Self::His => "HIS",
            Self::Lys => "LYS",
            Self::Asp => "ASP",
            Self::Glu => "GLU",
            Self::Ser => "SER",
            Self::Thr => "THR",
            Self::Asn => "ASN",
            Self::Gln => "GLN",
            Self::Cys => "CYS",
            Self::Sec => "SEC",
            Self::Gly => "GLY",
            Self::Pro => "PRO",
            Self::Ala => "ALA",
            Self::Val => "VAL",
            Self::Ile => "ILE",
            Self::Leu => "LEU",
            Self::Met => "MET",
            Self::Phe => "PHE",
            Self::Tyr => "TYR",
            Self::Trp => "TRP",
        }
    }

    /// IUPAC one-letter code.
    #[must_use]
    pub fn one_letter_code(self) -> char {
        match self {
            Self::Arg => 'R',
            Self::His => 'H',
            Self::Lys => 'K',
            Self::Asp => 'D',
            Self::Glu => 'E',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Asn => 'N',
            Self::Gln => 'Q',
            Self::Cys => 'C',
            Self::Sec => 'U',
            Self::Gly => 'G',
            Self::Pro => 'P',
            Self::Ala => 'A',
            Self::Val => 'V',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Tyr => 'Y',
            Self::Trp => 'W',
        }
    }

    /// Full residue name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Arg => "Arginine",
            Self::His => "Histidine",
            Self::Lys => "Lysine",
            Self::Asp => "Aspartic Acid",
            Self::Glu => "Glutamic Acid",
            Self::Ser => "Serine",
            Self::Thr => "Threonine",
            Self::Asn => "Asparagine",
            Self::Gln => "Glutamine",
            Self::Cys => "Cysteine",
            Self::Sec => "Selenocysteine",
            Self::Gly => "Glycine",
            Self::Pro => "Proline",
            Self::Ala => "Alanine",
            Self::Val => "Valine",
            Self::Ile => "Isoleucine",
            Self::Leu => "Leucine",
            Self::Met => "Methionine",
            Self::Phe => "Phenylalanine",
            Self::Tyr => "Tyrosine",
            Self::Trp => "Tryptophan",
        }
    }

    /// Side-chain chemistry class.
    #[must_use]
    pub fn class(self) -> ResidueClass {
        match self {
            Self::Arg | Self::His | Self::Lys => {
                ResidueClass::PositivelyCharged
            }
            Self::Asp | Self::Glu => ResidueClass::NegativelyCharged,
            Self::Ser | Self::Thr | Self::Asn | Self::Gln => {
                ResidueClass::PolarUncharged
            }
            Self::Cys | Self::Sec | Self::Gly | Self::Pro => {
                ResidueClass::Special
            }
            _ => ResidueClass::Hydrophobic,
        }
    }

    /// Whether the side chain is hydrophobic (glycine and proline
    /// included, tyrosine excluded).
    #[must_use]
    pub fn is_hydrophobic(self) -> bool {
        matches!(
            self,
            Self::Ala
                | Self::Val
                | Self::Ile
                | Self::Leu
                | Self::Met
                | Self::Phe
                | Self::Trp
                | Self::Pro
                | Self::Gly
        )
    }

    /// Default RGB color, shared by every residue of the same class.
    #[must_use]
    pub fn default_color(self) -> [f32; 3] {
        match self.class() {
            ResidueClass::PositivelyCharged => [0.2, 0.4, 0.9],
            ResidueClass::NegativelyCharged => [0.9, 0.2, 0.2],
            ResidueClass::PolarUncharged => [0.2, 0.75, 0.4],
            ResidueClass::Special => [0.95, 0.8, 0.25],
            ResidueClass::Hydrophobic => [0.95, 0.6, 0.2],
        }
    }
}
