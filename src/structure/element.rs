use serde::{Deserialize, Serialize};

/// Chemical element of an atom. The discriminant is the atomic number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum AtomElement {
    /// Element not covered by the table (or unparsable).
    #[default]
    Unknown = 0,
    /// Hydrogen.
    Hydrogen = 1,
    /// Carbon.
    Carbon = 6,
    /// Nitrogen.
    Nitrogen = 7,
    /// Oxygen.
    Oxygen = 8,
    /// Fluorine.
    Fluorine = 9,
    /// Sodium.
    Sodium = 11,
    /// Magnesium.
    Magnesium = 12,
    /// Phosphorus.
    Phosphorus = 15,
    /// Sulfur.
    Sulfur = 16,
    /// Chlorine.
    Chlorine = 17,
    /// Potassium.
    Potassium = 19,
    /// Calcium.
    Calcium = 20,
    /// Iron.
    Iron = 26,
    /// Zinc.
    Zinc = 30,
    /// Iodine.
    Iodine = 52,
}

impl AtomElement {
    /// Every element, ordered by atomic number.
    pub const ALL: [Self; 16] = [
        Self::Unknown,
        Self::Hydrogen,
        Self::Carbon,
        Self::Nitrogen,
        Self::Oxygen,
        Self::Fluorine,
        Self::Sodium,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Sulfur,
        Self::Chlorine,
        Self::Potassium,
        Self::Calcium,
        Self::Iron,
        Self::Zinc,
        Self::Iodine,
    ];

    /// Elements that make up the bulk of any protein.
    pub const IMPORTANT: [Self; 5] = [
        Self::Carbon,
        Self::Hydrogen,
        Self::Nitrogen,
        Self::Oxygen,
        Self::Sulfur,
    ];

    /// Number of element slots in per-element tables.
    pub const COUNT: usize = Self::ALL.len();

    /// Known elements that are not in [`Self::IMPORTANT`].
    pub fn others() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|e| {
            *e != Self::Unknown && !Self::IMPORTANT.contains(e)
        })
    }

    /// Map an atomic number to an element, [`Self::Unknown`] if unmapped.
    #[must_use]
    pub fn from_atomic_number(number: u8) -> Self {
        Self::ALL
            .into_iter()
            .find(|e| e.atomic_number() == number)
            .unwrap_or(Self::Unknown)
    }

    /// Parse an element symbol, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "H" => Self::Hydrogen,
            "C" => Self::Carbon,
            "N" => Self::Nitrogen,
            "O" => Self::Oxygen,
            "F" => Self::Fluorine,
            "NA" => Self::Sodium,
            "MG" => Self::Magnesium,
            "P" => Self::Phosphorus,
            "S" => Self::Sulfur,
            "CL" => Self::Chlorine,
            "K" => Self::Potassium,
            "CA" => Self::Calcium,
            "FE" => Self::Iron,
            "ZN" => Self::Zinc,
            "I" => Self::Iodine,
            _ => Self::Unknown,
        }
    }

    /// Atomic number (0 for unknown).
    #[must_use]
    pub fn atomic_number(self) -> u8 {
        self as u8
    }

    /// Position of this element in per-element tables such as
    /// [`AtomRadii`](crate::visualization::AtomRadii).
    #[must_use]
    pub fn table_index(self) -> usize {
        Self::ALL.iter().position(|e| *e == self).unwrap_or(0)
    }

    /// Periodic table symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Unknown => "?",
            Self::Hydrogen => "H",
            Self::Carbon => "C",
            Self::Nitrogen => "N",
            Self::Oxygen => "O",
            Self::Fluorine => "F",
            Self::Sodium => "Na",
            Self::Magnesium => "Mg",
            Self::Phosphorus => "P",
            Self::Sulfur => "S",
            Self::Chlorine => "Cl",
            Self::Potassium => "K",
            Self::Calcium => "Ca",
            Self::Iron => "Fe",
            Self::Zinc => "Zn",
            Self::Iodine => "I",
        }
    }

    /// Full element name.
    #[must_use]
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Hydrogen => "Hydrogen",
            Self::Carbon => "Carbon",
            Self::Nitrogen => "Nitrogen",
            Self::Oxygen => "Oxygen",
            Self::Fluorine => "Fluorine",
            Self::Sodium => "Sodium",
            Self::Magnesium => "Magnesium",
            Self::Phosphorus => "Phosphorus",
            Self::Sulfur => "Sulfur",
            Self::Chlorine => "Chlorine",
            Self::Potassium => "Potassium",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Zinc => "Zinc",
            Self::Iodine => "Iodine",
        }
    }

    /// Van der Waals radius in angstroms.
    #[must_use]
    pub fn van_der_waals_radius(self) -> f32 {
        match self {
            Self::Unknown => 1.0,
            Self::Hydrogen => 1.10,
            Self::Carbon => 1.50,
            Self::Nitrogen => 1.55,
            Self::Oxygen => 1.52,
            Self::Fluorine => 1.47,
            Self::Sodium => 2.27,
            Self::Magnesium => 1.73,
            Self::Phosphorus | Self::Sulfur => 1.80,
            Self::Chlorine => 1.75,
            Self::Potassium => 2.80,
            Self::Calcium => 2.31,
            Self::Iron => 1.94,
            Self::Zinc => 1.39,
            Self::Iodine => 1.98,
        }
    }

    /// Default RGB display color.
    #[must_use]
    pub fn default_color(self) -> [f32; 3] {
        match self {
            Self::Hydrogen => [1.0, 1.0, 1.0],
            Self::Carbon => [0.423, 0.733, 0.235],
            Self::Nitrogen => [0.091, 0.148, 0.556],
            Self::Oxygen => [1.0, 0.149, 0.0],
            Self::Sulfur => [1.0, 0.780, 0.349],
            _ => [0.517, 0.517, 0.517],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_case_insensitively() {
        assert_eq!(AtomElement::from_symbol("CL"), AtomElement::Chlorine);
        assert_eq!(AtomElement::from_symbol("Cl"), AtomElement::Chlorine);
        assert_eq!(AtomElement::from_symbol(" fe"), AtomElement::Iron);
        assert_eq!(AtomElement::from_symbol("XX"), AtomElement::Unknown);
        assert_eq!(AtomElement::from_symbol(""), AtomElement::Unknown);
    }

    #[test]
    fn atomic_number_lookup() {
        assert_eq!(AtomElement::from_atomic_number(6), AtomElement::Carbon);
        assert_eq!(AtomElement::from_atomic_number(52), AtomElement::Iodine);
        assert_eq!(AtomElement::from_atomic_number(2), AtomElement::Unknown);
    }

    #[test]
    fn table_indices_are_dense() {
        for (i, element) in AtomElement::ALL.iter().enumerate() {
            assert_eq!(element.table_index(), i);
        }
    }

    #[test]
    fn others_excludes_important_and_unknown() {
        let others: Vec<_> = AtomElement::others().collect();
        assert_eq!(others.len(), AtomElement::COUNT - 6);
        assert!(!others.contains(&AtomElement::Carbon));
        assert!(!others.contains(&AtomElement::Unknown));
        assert!(others.contains(&AtomElement::Zinc));
    }
}
