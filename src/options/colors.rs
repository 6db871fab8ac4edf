use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::structure::AtomElement;
use crate::visualization::ColorPalette;

/// Palette overrides on top of the built-in colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB per element symbol, e.g. `Fe = [0.8, 0.4, 0.1]`.
    pub elements: HashMap<String, [f32; 3]>,
    /// RGB for the leading subunit slots, in subunit order.
    pub subunits: Vec<[f32; 3]>,
    /// Seed for the random subunit colors. Unset picks a new palette each
    /// run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl ColorOptions {
    /// Built-in palette with these overrides applied.
    #[must_use]
    pub fn palette(&self) -> ColorPalette {
        let mut palette = ColorPalette::new(self.random_seed);
        for (symbol, color) in &self.elements {
            let element = AtomElement::from_symbol(symbol);
            if element == AtomElement::Unknown {
                log::warn!("ignoring color for unknown element {symbol:?}");
                continue;
            }
            palette.element_colors[element.table_index()] = *color;
        }
        for (slot, color) in palette.subunit_colors.iter_mut().zip(&self.subunits) {
            *slot = *color;
        }
        palette
    }
}
