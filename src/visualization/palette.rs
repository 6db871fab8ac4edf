//! Color palettes and per-atom color assignment.
//!
//! [`FillColor`] is the packed form a color-fill shader consumes: one-hot
//! mode weights plus fixed-size palettes. [`atom_colors`] performs the same
//! selection on the CPU.

use rand::{Rng, SeedableRng};

use super::{ProteinColorByOption, VisualizationConfiguration};
use crate::structure::{AtomElement, Protein, Residue};

/// Slots in the element palette.
pub const MAX_ELEMENT_COLORS: usize = AtomElement::COUNT;
/// Slots in the residue palette.
pub const MAX_RESIDUE_COLORS: usize = Residue::ALL.len();
/// Slots in the subunit palette. Subunits past this reuse colors cyclically.
pub const MAX_SUBUNIT_COLORS: usize = 32;

/// Color for atoms that belong to no amino acid in residue mode.
pub const NON_RESIDUE_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Hand-picked leading subunit colors (display P3 values).
const FIXED_SUBUNIT_COLORS: [[f32; 3]; 8] = [
    [0.0, 177.0 / 255.0, 228.0 / 255.0],
    [199.0 / 255.0, 0.0, 156.0 / 255.0],
    [194.0 / 255.0, 104.0 / 255.0, 1.0 / 255.0],
    [27.0 / 255.0, 170.0 / 255.0, 0.0],
    [0.917, 0.085, 0.183],
    [0.225, 0.129, 0.650],
    [0.894, 0.682, 0.203],
    [0.216, 0.945, 0.657],
];

/// Per-element, per-residue, and per-subunit RGB palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Indexed by [`AtomElement::table_index`].
    pub element_colors: Vec<[f32; 3]>,
    /// Indexed by [`Residue::table_index`].
    pub residue_colors: Vec<[f32; 3]>,
    /// Indexed by subunit position.
    pub subunit_colors: Vec<[f32; 3]>,
}

impl ColorPalette {
    /// Default palettes. Subunit slots past the fixed colors are random;
    /// pass a seed for reproducible colors.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let element_colors =
            AtomElement::ALL.iter().map(|e| e.default_color()).collect();
        let residue_colors =
            Residue::ALL.iter().map(|r| r.default_color()).collect();

        let mut subunit_colors = FIXED_SUBUNIT_COLORS.to_vec();
        let random_count = MAX_SUBUNIT_COLORS - subunit_colors.len();
        match seed {
            Some(seed) => {
                let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                subunit_colors.extend(random_colors(&mut rng, random_count));
            }
            None => {
                subunit_colors
                    .extend(random_colors(&mut rand::rng(), random_count));
            }
        }

        Self {
            element_colors,
            residue_colors,
            subunit_colors,
        }
    }

    /// Color of `element`, falling back to the unknown slot.
    #[must_use]
    pub fn element_color(&self, element: AtomElement) -> [f32; 3] {
        self.element_colors
            .get(element.table_index())
            .or_else(|| self.element_colors.first())
            .copied()
            .unwrap_or_else(|| AtomElement::Unknown.default_color())
    }

    /// Color of `residue`, gray for atoms outside amino acids.
    #[must_use]
    pub fn residue_color(&self, residue: Option<Residue>) -> [f32; 3] {
        residue
            .and_then(|r| self.residue_colors.get(r.table_index()))
            .copied()
            .unwrap_or(NON_RESIDUE_COLOR)
    }

    /// Color of subunit `index`, cycling through the palette.
    #[must_use]
    pub fn subunit_color(&self, index: usize) -> [f32; 3] {
        if self.subunit_colors.is_empty() {
            return NON_RESIDUE_COLOR;
        }
        self.subunit_colors[index % self.subunit_colors.len()]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(None)
    }
}

fn random_colors(
    rng: &mut impl Rng,
    count: usize,
) -> impl Iterator<Item = [f32; 3]> + '_ {
    (0..count).map(|_| {
        [
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
        ]
    })
}

/// Packed color-fill input: one-hot mode weights and RGBA palettes
/// truncated to their slot counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FillColor {
    /// 1.0 when coloring by element.
    pub color_by_element: f32,
    /// 1.0 when coloring by residue.
    pub color_by_residue: f32,
    /// 1.0 when coloring by subunit.
    pub color_by_subunit: f32,
    /// Element palette.
    pub element_colors: [[f32; 4]; MAX_ELEMENT_COLORS],
    /// Residue palette.
    pub residue_colors: [[f32; 4]; MAX_RESIDUE_COLORS],
    /// Subunit palette.
    pub subunit_colors: [[f32; 4]; MAX_SUBUNIT_COLORS],
}

impl FillColor {
    /// Pack `palette` with the weights for `color_by`.
    #[must_use]
    pub fn new(color_by: ProteinColorByOption, palette: &ColorPalette) -> Self {
        let weight = |mode: ProteinColorByOption| {
            if color_by == mode {
                1.0
            } else {
                0.0
            }
        };
        Self {
            color_by_element: weight(ProteinColorByOption::Element),
            color_by_residue: weight(ProteinColorByOption::Residue),
            color_by_subunit: weight(ProteinColorByOption::Subunit),
            element_colors: pack(&palette.element_colors),
            residue_colors: pack(&palette.residue_colors),
            subunit_colors: pack(&palette.subunit_colors),
        }
    }
}

/// Copy up to `N` colors into RGBA slots; missing slots stay transparent
/// black.
fn pack<const N: usize>(colors: &[[f32; 3]]) -> [[f32; 4]; N] {
    let mut packed = [[0.0; 4]; N];
    for (slot, color) in packed.iter_mut().zip(colors) {
        *slot = [color[0], color[1], color[2], 1.0];
    }
    packed
}

/// One RGBA color per atom of `protein`, chosen by the configuration's
/// color mode.
#[must_use]
pub fn atom_colors(
    protein: &Protein,
    configuration: &VisualizationConfiguration,
    palette: &ColorPalette,
) -> Vec<[f32; 4]> {
    let rgb: Vec<[f32; 3]> = match configuration.color_by() {
        ProteinColorByOption::Element => protein
            .elements()
            .iter()
            .map(|e| palette.element_color(*e))
            .collect(),
        ProteinColorByOption::Residue => protein
            .residues()
            .iter()
            .map(|r| palette.residue_color(*r))
            .collect(),
        ProteinColorByOption::Subunit => protein
            .atom_subunit_indices()
            .into_iter()
            .map(|i| palette.subunit_color(i))
            .collect(),
    };
    rgb.into_iter().map(|c| [c[0], c[1], c[2], 1.0]).collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::structure::{test_atom, ProteinSubunit, SubunitKind};
    use crate::visualization::AtomRadii;

    fn small_protein() -> Protein {
        let atoms = [
            test_atom(Some(Residue::Lys), 1, 'A', AtomElement::Nitrogen, Vec3::ZERO),
            test_atom(Some(Residue::Lys), 1, 'A', AtomElement::Carbon, Vec3::X),
            test_atom(None, 5, 'B', AtomElement::Iron, Vec3::Y),
        ];
        let subunits = vec![
            ProteinSubunit::new(0, SubunitKind::Chain, 2, 0),
            ProteinSubunit::new(1, SubunitKind::NonChain, 1, 2),
        ];
        Protein::new(&atoms, subunits)
    }

    fn config(color_by: ProteinColorByOption) -> VisualizationConfiguration {
        VisualizationConfiguration::new(AtomRadii::van_der_waals(), color_by)
    }

    #[test]
    fn seeded_palettes_are_reproducible() {
        let a = ColorPalette::new(Some(7));
        let b = ColorPalette::new(Some(7));
        assert_eq!(a, b);
        assert_eq!(a.subunit_colors.len(), MAX_SUBUNIT_COLORS);
        assert_eq!(a.subunit_colors[..8], FIXED_SUBUNIT_COLORS);
        assert!(a.subunit_colors[8..]
            .iter()
            .flatten()
            .all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn fill_color_is_one_hot() {
        let palette = ColorPalette::new(Some(1));
        for mode in ProteinColorByOption::ALL {
            let fill = FillColor::new(mode, &palette);
            let sum = fill.color_by_element
                + fill.color_by_residue
                + fill.color_by_subunit;
            assert_eq!(sum, 1.0);
        }
        let fill = FillColor::new(ProteinColorByOption::Residue, &palette);
        assert_eq!(fill.color_by_residue, 1.0);
        assert_eq!(fill.residue_colors[0][3], 1.0);
    }

    #[test]
    fn element_mode_uses_element_colors() {
        let palette = ColorPalette::new(Some(1));
        let colors = atom_colors(
            &small_protein(),
            &config(ProteinColorByOption::Element),
            &palette,
        );
        assert_eq!(colors.len(), 3);
        let carbon = AtomElement::Carbon.default_color();
        assert_eq!(colors[1], [carbon[0], carbon[1], carbon[2], 1.0]);
    }

    #[test]
    fn residue_mode_grays_out_non_residues() {
        let palette = ColorPalette::new(Some(1));
        let colors = atom_colors(
            &small_protein(),
            &config(ProteinColorByOption::Residue),
            &palette,
        );
        assert_eq!(colors[0], colors[1]);
        assert_eq!(colors[2], [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn subunit_mode_follows_subunits() {
        let palette = ColorPalette::new(Some(1));
        let colors = atom_colors(
            &small_protein(),
            &config(ProteinColorByOption::Subunit),
            &palette,
        );
        let first = FIXED_SUBUNIT_COLORS[0];
        let second = FIXED_SUBUNIT_COLORS[1];
        assert_eq!(colors[0], [first[0], first[1], first[2], 1.0]);
        assert_eq!(colors[2], [second[0], second[1], second[2], 1.0]);
    }

    #[test]
    fn subunit_colors_cycle() {
        let palette = ColorPalette::new(Some(3));
        assert_eq!(
            palette.subunit_color(MAX_SUBUNIT_COLORS + 1),
            palette.subunit_color(1)
        );
    }
}
