//! Inputs a molecule renderer consumes: per-element radii, the color-by
//! mode, per-atom fill colors, and radius transitions.

mod atom_radii;
mod color_by;
mod configuration;
mod palette;
mod transition;

pub use atom_radii::AtomRadii;
pub use color_by::ProteinColorByOption;
pub use configuration::VisualizationConfiguration;
pub use palette::{
    atom_colors, ColorPalette, FillColor, MAX_ELEMENT_COLORS,
    MAX_RESIDUE_COLORS, MAX_SUBUNIT_COLORS, NON_RESIDUE_COLOR,
};
pub use transition::RadiiTransition;
