use serde::{Deserialize, Serialize};

use super::ChainId;

/// Secondary structure of an atom's residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryStructure {
    /// Alpha helix (PDB `HELIX`).
    Helix,
    /// Beta strand (PDB `SHEET`).
    Sheet,
    /// Amino acid outside any helix or sheet.
    Loop,
    /// Not part of an amino acid chain.
    NonChain,
}

impl SecondaryStructure {
    /// Every variant.
    pub const ALL: [Self; 4] = [Self::Helix, Self::Sheet, Self::Loop, Self::NonChain];

    /// Label shown in legends.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Helix => "Helix",
            Self::Sheet => "Sheet",
            Self::Loop => "Loop",
            Self::NonChain => "Non-chain",
        }
    }

    /// Single-character code, DSSP style.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Helix => 'H',
            Self::Sheet => 'E',
            Self::Loop => 'C',
            Self::NonChain => '-',
        }
    }

    /// Default RGB color (display P3).
    #[must_use]
    pub fn default_color(self) -> [f32; 3] {
        match self {
            Self::Helix => [0.423, 0.733, 0.235],
            Self::Sheet => [0.0, 0.590, 1.0],
            Self::Loop => [0.5, 0.5, 0.5],
            Self::NonChain => [0.75, 0.75, 0.75],
        }
    }
}

/// Residue range of one `HELIX` or `SHEET` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryStructureSegment {
    /// Helix or sheet.
    pub kind: SecondaryStructure,
    /// Chain the segment lies in.
    pub chain: ChainId,
    /// First residue number, inclusive.
    pub start: i32,
    /// Last residue number, inclusive.
    pub end: i32,
}

impl SecondaryStructureSegment {
    /// Segment over residues `start..=end` of `chain`. Reversed bounds are
    /// swapped.
    #[must_use]
    pub fn new(kind: SecondaryStructure, chain: ChainId, start: i32, end: i32) -> Self {
        Self {
            kind,
            chain,
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Whether residue `residue_id` of `chain` falls in this segment.
    #[must_use]
    pub fn contains(&self, chain: ChainId, residue_id: i32) -> bool {
        chain == self.chain && (self.start..=self.end).contains(&residue_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_names_are_distinct() {
        for (i, a) in SecondaryStructure::ALL.iter().enumerate() {
            for b in &SecondaryStructure::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(SecondaryStructure::Helix.default_color(), [0.423, 0.733, 0.235]);
    }

    #[test]
    fn segment_bounds_are_inclusive() {
        let segment = SecondaryStructureSegment::new(
            SecondaryStructure::Sheet,
            ChainId::new('B'),
            12,
            9,
        );
        assert_eq!((segment.start, segment.end), (9, 12));
        assert!(segment.contains(ChainId::new('B'), 9));
        assert!(segment.contains(ChainId::new('B'), 12));
        assert!(!segment.contains(ChainId::new('B'), 13));
        assert!(!segment.contains(ChainId::new('A'), 10));
    }
}
