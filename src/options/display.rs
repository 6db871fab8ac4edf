use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::visualization::{AtomRadii, ProteinColorByOption};

/// How atom radii are chosen.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RadiiMode {
    /// Van der Waals radii times [`DisplayOptions::radii_scale`].
    #[default]
    VanDerWaals,
    /// Every atom at [`DisplayOptions::fixed_radius`].
    Fixed,
    /// Radii from [`DisplayOptions::custom_radii`].
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Atom sizing and coloring.
pub struct DisplayOptions {
    /// Attribute that drives atom color.
    #[schemars(title = "Color By")]
    pub color_by: ProteinColorByOption,
    /// Radius source.
    #[schemars(title = "Radii")]
    pub radii_mode: RadiiMode,
    /// Multiplier applied to van der Waals radii.
    #[schemars(title = "Radius Scale", range(min = 0.1, max = 2.0))]
    pub radii_scale: f32,
    /// Radius used in fixed mode.
    #[schemars(title = "Fixed Radius", range(min = 0.1, max = 2.0))]
    pub fixed_radius: f32,
    /// C, H, N, O, S, others; used in custom mode.
    #[schemars(skip)]
    pub custom_radii: Vec<f32>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color_by: ProteinColorByOption::default(),
            radii_mode: RadiiMode::default(),
            radii_scale: 1.0,
            fixed_radius: AtomRadii::DEFAULT_FIXED_RADIUS,
            custom_radii: Vec::new(),
        }
    }
}

impl DisplayOptions {
    /// Radius table for the selected mode.
    #[must_use]
    pub fn atom_radii(&self) -> AtomRadii {
        match self.radii_mode {
            RadiiMode::VanDerWaals => {
                AtomRadii::scaled_van_der_waals(self.radii_scale)
            }
            RadiiMode::Fixed => AtomRadii::fixed(self.fixed_radius),
            RadiiMode::Custom => AtomRadii::from_slice(&self.custom_radii),
        }
    }
}
