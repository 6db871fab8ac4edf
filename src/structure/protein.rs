use glam::Vec3;

use super::{
    AtomElement, ChainComposition, ChainId, ElementComposition,
    ProteinSubunit, Residue, ResidueComposition, SecondaryStructure,
    SecondaryStructureSegment, SubunitKind,
};

/// One parsed atom, before it is split into the protein's column arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Cartesian position in angstroms.
    pub position: Vec3,
    /// Chemical element.
    pub element: AtomElement,
    /// Amino acid the atom belongs to, if any.
    pub residue: Option<Residue>,
    /// Residue sequence number from the file (0 when absent).
    pub residue_id: i32,
    /// Owning chain.
    pub chain: ChainId,
}

/// Sphere enclosing every atom of a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Mean atom position.
    pub center: Vec3,
    /// Distance from the center to the farthest atom.
    pub radius: f32,
}

/// One-letter sequence of a single subunit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSequence {
    /// Index of the subunit the sequence was read from.
    pub subunit_index: usize,
    /// Chain of the subunit's first atom.
    pub chain: ChainId,
    /// One symbol per residue, `X` for non amino acid residues.
    pub sequence: String,
}

/// A single structural model: atom columns, subunits, and compositions.
///
/// Atom data is stored column-wise so renderers can upload each array
/// as-is. Subunits index into these arrays through
/// [`ProteinSubunit::atom_range`].
#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    positions: Vec<Vec3>,
    elements: Vec<AtomElement>,
    residues: Vec<Option<Residue>>,
    residue_ids: Vec<i32>,
    chains: Vec<ChainId>,
    secondary_structure: Vec<SecondaryStructure>,
    subunits: Vec<ProteinSubunit>,
    energy: Option<f32>,
    element_composition: ElementComposition,
    residue_composition: ResidueComposition,
    chain_composition: ChainComposition,
}

impl Protein {
    /// Build a model from atoms and the subunits partitioning them.
    ///
    /// Subunits are expected to cover `atoms` contiguously in order, as
    /// the parsers produce them. Subunits reaching past the last atom are
    /// truncated, and those starting past it are dropped.
    ///
    /// Every atom starts as [`SecondaryStructure::Loop`] if it belongs to
    /// an amino acid and [`SecondaryStructure::NonChain`] otherwise.
    #[must_use]
    pub fn new(atoms: &[Atom], subunits: Vec<ProteinSubunit>) -> Self {
        let subunits = fit_subunits(subunits, atoms.len());
        let positions = atoms.iter().map(|a| a.position).collect();
        let elements: Vec<_> = atoms.iter().map(|a| a.element).collect();
        let residues: Vec<_> = atoms.iter().map(|a| a.residue).collect();
        let residue_ids = atoms.iter().map(|a| a.residue_id).collect();
        let chains: Vec<_> = atoms.iter().map(|a| a.chain).collect();
        let secondary_structure = residues
            .iter()
            .map(|r| {
                if r.is_some() {
                    SecondaryStructure::Loop
                } else {
                    SecondaryStructure::NonChain
                }
            })
            .collect();

        let element_composition =
            ElementComposition::from_elements(elements.iter().copied());
        let residue_composition =
            ResidueComposition::from_residues(residues.iter().copied());
        let chain_composition =
            ChainComposition::from_chains(chains.iter().copied());

        Self {
            positions,
            elements,
            residues,
            residue_ids,
            chains,
            secondary_structure,
            subunits,
            energy: None,
            element_composition,
            residue_composition,
            chain_composition,
        }
    }

    /// Attach a configuration energy (XYZ trajectories carry one per
    /// frame).
    #[must_use]
    pub fn with_energy(mut self, energy: Option<f32>) -> Self {
        self.energy = energy;
        self
    }

    /// Number of atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    /// Atom positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Atom elements.
    #[must_use]
    pub fn elements(&self) -> &[AtomElement] {
        &self.elements
    }

    /// Residue of each atom.
    #[must_use]
    pub fn residues(&self) -> &[Option<Residue>] {
        &self.residues
    }

    /// Residue sequence number of each atom.
    #[must_use]
    pub fn residue_ids(&self) -> &[i32] {
        &self.residue_ids
    }

    /// Chain of each atom.
    #[must_use]
    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }

    /// Secondary structure of each atom.
    #[must_use]
    pub fn secondary_structure(&self) -> &[SecondaryStructure] {
        &self.secondary_structure
    }

    /// Mark the amino acid atoms covered by `segments` as helix or sheet.
    ///
    /// An atom is covered when its chain matches and its residue number
    /// lies within the segment's inclusive range. Atoms outside amino
    /// acids keep [`SecondaryStructure::NonChain`].
    #[must_use]
    pub fn with_secondary_structure(
        mut self,
        segments: &[SecondaryStructureSegment],
    ) -> Self {
        for (atom, slot) in self.secondary_structure.iter_mut().enumerate() {
            if self.residues[atom].is_none() {
                continue;
            }
            if let Some(segment) = segments
                .iter()
                .find(|s| s.contains(self.chains[atom], self.residue_ids[atom]))
            {
                *slot = segment.kind;
            }
        }
        self
    }

    /// Subunits in file order.
    #[must_use]
    pub fn subunits(&self) -> &[ProteinSubunit] {
        &self.subunits
    }

    /// Number of subunits.
    #[must_use]
    pub fn subunit_count(&self) -> usize {
        self.subunits.len()
    }

    /// Index of the subunit owning each atom.
    #[must_use]
    pub fn atom_subunit_indices(&self) -> Vec<usize> {
        let mut indices = vec![0; self.atom_count()];
        for (i, subunit) in self.subunits.iter().enumerate() {
            for slot in &mut indices[subunit.atom_range()] {
                *slot = i;
            }
        }
        indices
    }

    /// Positions of the atoms in subunit `index`, `None` if out of range.
    #[must_use]
    pub fn subunit_atoms(&self, index: usize) -> Option<&[Vec3]> {
        let subunit = self.subunits.get(index)?;
        self.positions.get(subunit.atom_range())
    }

    /// Configuration energy, if the file provided one.
    #[must_use]
    pub fn energy(&self) -> Option<f32> {
        self.energy
    }

    /// Element counts.
    #[must_use]
    pub fn element_composition(&self) -> &ElementComposition {
        &self.element_composition
    }

    /// Residue counts.
    #[must_use]
    pub fn residue_composition(&self) -> &ResidueComposition {
        &self.residue_composition
    }

    /// Chain counts.
    #[must_use]
    pub fn chain_composition(&self) -> &ChainComposition {
        &self.chain_composition
    }

    /// Sphere centered on the mean position enclosing every atom.
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        if self.positions.is_empty() {
            return BoundingSphere {
                center: Vec3::ZERO,
                radius: 0.0,
            };
        }
        let center = self.positions.iter().copied().sum::<Vec3>()
            / self.positions.len() as f32;
        let radius = self
            .positions
            .iter()
            .map(|p| p.distance(center))
            .fold(0.0_f32, f32::max);
        BoundingSphere { center, radius }
    }

    /// One-letter sequence per subunit.
    ///
    /// A new symbol starts whenever the residue number or chain changes.
    /// Non-chain subunits and subunits without any amino acid atom are
    /// skipped.
    #[must_use]
    pub fn chain_sequences(&self) -> Vec<ChainSequence> {
        self.subunits
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind != SubunitKind::NonChain)
            .filter_map(|(i, s)| self.subunit_sequence(i, s))
            .collect()
    }

    fn subunit_sequence(
        &self,
        index: usize,
        subunit: &ProteinSubunit,
    ) -> Option<ChainSequence> {
        let range = subunit.atom_range();
        if !self.residues[range.clone()].iter().any(Option::is_some) {
            return None;
        }

        let mut sequence = String::new();
        let mut previous: Option<(ChainId, i32)> = None;
        for atom in range.clone() {
            let key = (self.chains[atom], self.residue_ids[atom]);
            if previous == Some(key) {
                continue;
            }
            previous = Some(key);
            sequence.push(
                self.residues[atom]
                    .map_or(Residue::UNKNOWN_SYMBOL, Residue::one_letter_code),
            );
        }

        Some(ChainSequence {
            subunit_index: index,
            chain: self.chains[range.start],
            sequence,
        })
    }
}

/// Truncate or drop subunits that reach past `atom_count` atoms.
fn fit_subunits(
    subunits: Vec<ProteinSubunit>,
    atom_count: usize,
) -> Vec<ProteinSubunit> {
    subunits
        .into_iter()
        .filter_map(|mut subunit| {
            let available = atom_count.saturating_sub(subunit.start_index);
            if subunit.atom_count > available {
                log::warn!(
                    "subunit {} covers atoms {}..+{} of {atom_count}; truncating",
                    subunit.index_in_protein,
                    subunit.start_index,
                    subunit.atom_count
                );
                subunit.atom_count = available;
            }
            (subunit.atom_count > 0).then_some(subunit)
        })
        .collect()
}
