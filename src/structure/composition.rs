//! Atom counts grouped by element, residue, and chain.

use std::ops::AddAssign;

use rustc_hash::FxHashMap;

use super::{AtomElement, ChainId, Residue};

/// Number of atoms of each element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementComposition {
    /// Atom count per element.
    pub counts: FxHashMap<AtomElement, usize>,
    /// Sum of all counts.
    pub total_count: usize,
}

impl ElementComposition {
    /// Count every element in `elements`.
    pub fn from_elements(
        elements: impl IntoIterator<Item = AtomElement>,
    ) -> Self {
        let mut composition = Self::default();
        for element in elements {
            *composition.counts.entry(element).or_insert(0) += 1;
            composition.total_count += 1;
        }
        composition
    }

    /// Atoms of `element` (0 if absent).
    #[must_use]
    pub fn count(&self, element: AtomElement) -> usize {
        self.counts.get(&element).copied().unwrap_or(0)
    }

    /// Atoms belonging to [`AtomElement::IMPORTANT`].
    #[must_use]
    pub fn important_element_count(&self) -> usize {
        AtomElement::IMPORTANT.iter().map(|e| self.count(*e)).sum()
    }
}

impl AddAssign<&Self> for ElementComposition {
    fn add_assign(&mut self, rhs: &Self) {
        for (element, count) in &rhs.counts {
            *self.counts.entry(*element).or_insert(0) += count;
        }
        self.total_count += rhs.total_count;
    }
}

/// Number of atoms belonging to each residue type. Atoms outside any
/// amino acid are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueComposition {
    /// Atom count per residue type.
    pub counts: FxHashMap<Residue, usize>,
    /// Sum of all counts.
    pub total_count: usize,
}

impl ResidueComposition {
    /// Count every known residue in `residues`, skipping `None`.
    pub fn from_residues(
        residues: impl IntoIterator<Item = Option<Residue>>,
    ) -> Self {
        let mut composition = Self::default();
        for residue in residues.into_iter().flatten() {
            *composition.counts.entry(residue).or_insert(0) += 1;
            composition.total_count += 1;
        }
        composition
    }

    /// Atoms of `residue` (0 if absent).
    #[must_use]
    pub fn count(&self, residue: Residue) -> usize {
        self.counts.get(&residue).copied().unwrap_or(0)
    }
}

impl AddAssign<&Self> for ResidueComposition {
    fn add_assign(&mut self, rhs: &Self) {
        for (residue, count) in &rhs.counts {
            *self.counts.entry(*residue).or_insert(0) += count;
        }
        self.total_count += rhs.total_count;
    }
}

/// Number of atoms in each chain, remembering first-seen chain order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainComposition {
    /// Distinct chains in order of first appearance.
    pub unique_chain_ids: Vec<ChainId>,
    /// Atom count per chain.
    pub counts: FxHashMap<ChainId, usize>,
    /// Sum of all counts.
    pub total_count: usize,
}

impl ChainComposition {
    /// Count every chain in `chains`.
    pub fn from_chains(chains: impl IntoIterator<Item = ChainId>) -> Self {
        let mut composition = Self::default();
        for chain in chains {
            let count = composition.counts.entry(chain).or_insert(0);
            if *count == 0 {
                composition.unique_chain_ids.push(chain);
            }
            *count += 1;
            composition.total_count += 1;
        }
        composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_counts_and_important_total() {
        let composition = ElementComposition::from_elements([
            AtomElement::Carbon,
            AtomElement::Carbon,
            AtomElement::Oxygen,
            AtomElement::Iron,
        ]);
        assert_eq!(composition.total_count, 4);
        assert_eq!(composition.count(AtomElement::Carbon), 2);
        assert_eq!(composition.count(AtomElement::Zinc), 0);
        assert_eq!(composition.important_element_count(), 3);
    }

    #[test]
    fn element_merge_adds_counts() {
        let mut a = ElementComposition::from_elements([AtomElement::Carbon]);
        let b = ElementComposition::from_elements([
            AtomElement::Carbon,
            AtomElement::Sulfur,
        ]);
        a += &b;
        assert_eq!(a.total_count, 3);
        assert_eq!(a.count(AtomElement::Carbon), 2);
        assert_eq!(a.count(AtomElement::Sulfur), 1);
    }

    #[test]
    fn residue_composition_skips_unknown() {
        let composition = ResidueComposition::from_residues([
            Some(Residue::Gly),
            None,
            Some(Residue::Gly),
        ]);
        assert_eq!(composition.total_count, 2);
        assert_eq!(composition.count(Residue::Gly), 2);
    }

    #[test]
    fn chain_order_is_first_seen() {
        let composition = ChainComposition::from_chains(
            ['B', 'B', 'A', 'B'].map(ChainId::new),
        );
        assert_eq!(
            composition.unique_chain_ids,
            vec![ChainId::new('B'), ChainId::new('A')]
        );
        assert_eq!(composition.counts[&ChainId::new('B')], 3);
        assert_eq!(composition.total_count, 4);
    }
}
