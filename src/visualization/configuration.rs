use super::{AtomRadii, ProteinColorByOption};

/// Everything a renderer needs to size and color a molecule's atoms.
///
/// Built once and read-only afterwards; changing either field means
/// building a new configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationConfiguration {
    atom_radii: AtomRadii,
    color_by: ProteinColorByOption,
}

impl VisualizationConfiguration {
    /// Pair a radius table with a color mode.
    #[must_use]
    pub fn new(atom_radii: AtomRadii, color_by: ProteinColorByOption) -> Self {
        Self {
            atom_radii,
            color_by,
        }
    }

    /// Per-element radii.
    #[must_use]
    pub fn atom_radii(&self) -> &AtomRadii {
        &self.atom_radii
    }

    /// Color mode.
    #[must_use]
    pub fn color_by(&self) -> ProteinColorByOption {
        self.color_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::AtomElement;

    #[test]
    fn fields_read_back_unchanged() {
        let radii = AtomRadii::from_slice(&[1.7, 1.1, 1.55, 1.52, 1.8, 1.5]);
        for color_by in ProteinColorByOption::ALL {
            let config = VisualizationConfiguration::new(radii, color_by);
            assert_eq!(*config.atom_radii(), radii);
            assert_eq!(config.color_by(), color_by);
        }
    }

    #[test]
    fn copies_are_independent_values() {
        let config = VisualizationConfiguration::new(
            AtomRadii::default_fixed(),
            ProteinColorByOption::Residue,
        );
        let copy = config;
        assert_eq!(copy, config);
        assert_eq!(copy.atom_radii().radius(AtomElement::Zinc), 0.4);
    }
}
