use std::fmt;

use serde::{Deserialize, Serialize};

/// PDB chain identifier (column 22 of an `ATOM` record).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct ChainId(char);

impl ChainId {
    /// Chain assigned to atoms whose record leaves the column blank.
    pub const DEFAULT: Self = Self('A');

    /// Build from the raw chain column. Blank or whitespace maps to
    /// [`Self::DEFAULT`].
    #[must_use]
    pub fn new(raw: char) -> Self {
        if raw.is_whitespace() {
            Self::DEFAULT
        } else {
            Self(raw.to_ascii_uppercase())
        }
    }

    /// The chain character.
    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }

    /// `A..Z` map to `0..26`; digits follow at `26..36`; any other
    /// character maps to `36 +` its code point. Distinct chains never share
    /// an index.
    #[must_use]
    pub fn index(self) -> usize {
        match self.0 {
            c @ 'A'..='Z' => (c as usize) - ('A' as usize),
            c @ '0'..='9' => 26 + (c as usize) - ('0' as usize),
            c => 36 + c as usize,
        }
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_chain_is_default() {
        assert_eq!(ChainId::new(' '), ChainId::DEFAULT);
        assert_eq!(ChainId::new('b').as_char(), 'B');
    }

    #[test]
    fn letter_indices() {
        assert_eq!(ChainId::new('A').index(), 0);
        assert_eq!(ChainId::new('Z').index(), 25);
        assert_eq!(ChainId::new('0').index(), 26);
        assert_eq!(ChainId::new('9').index(), 35);
    }

    #[test]
    fn other_characters_get_distinct_indices() {
        let star = ChainId::new('*').index();
        // code points 42 and 234 differ by a multiple of 64
        let e_circumflex = ChainId::new('ê').index();
        assert_eq!(star, 36 + 42);
        assert_ne!(star, e_circumflex);
        assert!(ChainId::new('#').index() >= 36);
    }
}
