use serde::{Deserialize, Serialize};

use crate::structure::AtomElement;

/// Per-element display radius table, one slot per [`AtomElement`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtomRadii {
    radii: [f32; AtomElement::COUNT],
}

impl AtomRadii {
    /// Radius used by [`Self::default_fixed`].
    pub const DEFAULT_FIXED_RADIUS: f32 = 0.4;

    /// Minimum number of radii accepted by [`Self::from_slice`]: C, H, N,
    /// O, S and one shared value for everything else.
    pub const MIN_CUSTOM_RADII: usize = 6;

    /// Every radius set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::fixed(0.0)
    }

    /// Every element at its van der Waals radius.
    #[must_use]
    pub fn van_der_waals() -> Self {
        Self::scaled_van_der_waals(1.0)
    }

    /// Van der Waals radii multiplied by `scale`.
    #[must_use]
    pub fn scaled_van_der_waals(scale: f32) -> Self {
        let mut radii = [0.0; AtomElement::COUNT];
        for element in AtomElement::ALL {
            radii[element.table_index()] =
                element.van_der_waals_radius() * scale;
        }
        Self { radii }
    }

    /// Every element at the same radius.
    #[must_use]
    pub fn fixed(radius: f32) -> Self {
        Self {
            radii: [radius; AtomElement::COUNT],
        }
    }

    /// Every element at [`Self::DEFAULT_FIXED_RADIUS`].
    #[must_use]
    pub fn default_fixed() -> Self {
        Self::fixed(Self::DEFAULT_FIXED_RADIUS)
    }

    /// Custom radii given in C, H, N, O, S, others order.
    ///
    /// Falls back to van der Waals radii when fewer than
    /// [`Self::MIN_CUSTOM_RADII`] values are supplied.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Self {
        if values.len() < Self::MIN_CUSTOM_RADII {
            log::warn!(
                "{} atom radii given, need {}; using van der Waals radii",
                values.len(),
                Self::MIN_CUSTOM_RADII
            );
            return Self::van_der_waals();
        }
        let mut table = Self::fixed(values[5]);
        for (element, radius) in AtomElement::IMPORTANT.iter().zip(values) {
            table.radii[element.table_index()] = *radius;
        }
        table
    }

    /// Per-element linear blend, exact at `progress` 0 and 1.
    /// `progress` is not clamped.
    #[must_use]
    pub fn interpolated(initial: &Self, target: &Self, progress: f32) -> Self {
        let mut radii = [0.0; AtomElement::COUNT];
        for (i, slot) in radii.iter_mut().enumerate() {
            *slot = initial.radii[i]
                .mul_add(1.0 - progress, target.radii[i] * progress);
        }
        Self { radii }
    }

    /// Radius of `element`.
    #[must_use]
    pub fn radius(&self, element: AtomElement) -> f32 {
        self.radii[element.table_index()]
    }

    /// Raw table in [`AtomElement::ALL`] order.
    #[must_use]
    pub fn as_array(&self) -> &[f32; AtomElement::COUNT] {
        &self.radii
    }
}

impl Default for AtomRadii {
    fn default() -> Self {
        Self::van_der_waals()
    }
}
