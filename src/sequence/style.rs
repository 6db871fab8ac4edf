use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::SequenceKind;

/// Geometry of a sequence row, in points.
///
/// Keys missing from a deserialized table take the [`Self::protein`]
/// values; [`Self::deserialize_nucleotide`] fills them from
/// [`Self::nucleotide`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct SequenceRowStyle {
    /// Gap between adjacent glyphs.
    #[schemars(title = "Glyph Spacing", range(min = 0.0, max = 32.0))]
    pub spacing: f32,
    /// Space above the glyph band.
    #[schemars(title = "Top Padding", range(min = 0.0, max = 64.0))]
    pub padding_top: f32,
    /// Space below the glyph band.
    #[schemars(title = "Bottom Padding", range(min = 0.0, max = 64.0))]
    pub padding_bottom: f32,
    /// Space before the first and after the last glyph.
    #[schemars(title = "Side Padding", range(min = 0.0, max = 64.0))]
    pub padding_horizontal: f32,
    /// Fixed row height; the glyph band is centered in it. `None` sizes
    /// the row to its padding and glyph band.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f32>,
    /// Height of the glyph band.
    #[schemars(title = "Glyph Height", range(min = 8.0, max = 64.0))]
    pub glyph_height: f32,
    /// Give every glyph the width of the widest one.
    #[schemars(title = "Monospaced")]
    pub monospaced: bool,
}

impl SequenceRowStyle {
    /// Nucleotide rows: loose spacing, glyph band centered in a tall row.
    #[must_use]
    pub fn nucleotide() -> Self {
        Self {
            spacing: 10.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            padding_horizontal: 24.0,
            row_height: Some(100.0),
            glyph_height: 24.0,
            monospaced: false,
        }
    }

    /// Protein rows: tight monospaced glyphs with small vertical padding.
    #[must_use]
    pub fn protein() -> Self {
        Self {
            spacing: 8.0,
            padding_top: 8.0,
            padding_bottom: 8.0,
            padding_horizontal: 24.0,
            row_height: None,
            glyph_height: 20.0,
            monospaced: true,
        }
    }

    /// Preset for `kind`.
    #[must_use]
    pub fn for_kind(kind: SequenceKind) -> Self {
        match kind {
            SequenceKind::Nucleotide => Self::nucleotide(),
            SequenceKind::Protein => Self::protein(),
        }
    }

    /// Deserialize a possibly partial table, taking missing keys from
    /// [`Self::nucleotide`]. A nucleotide row always keeps a fixed height
    /// unless the table gives another one.
    pub(crate) fn deserialize_nucleotide<'de, D>(
        deserializer: D,
    ) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StyleOverrides::deserialize(deserializer)
            .map(|overrides| overrides.over(Self::nucleotide()))
    }

    /// Height of padding plus glyph band.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.padding_top + self.glyph_height + self.padding_bottom
    }

    /// Final row height: the fixed height if it fits the content,
    /// otherwise the content height.
    #[must_use]
    pub fn resolved_height(&self) -> f32 {
        self.row_height
            .map_or(self.content_height(), |h| h.max(self.content_height()))
    }
}

impl Default for SequenceRowStyle {
    fn default() -> Self {
        Self::protein()
    }
}

/// Keys given in a style table.
#[derive(Deserialize)]
struct StyleOverrides {
    spacing: Option<f32>,
    padding_top: Option<f32>,
    padding_bottom: Option<f32>,
    padding_horizontal: Option<f32>,
    row_height: Option<f32>,
    glyph_height: Option<f32>,
    monospaced: Option<bool>,
}

impl StyleOverrides {
    fn over(self, base: SequenceRowStyle) -> SequenceRowStyle {
        SequenceRowStyle {
            spacing: self.spacing.unwrap_or(base.spacing),
            padding_top: self.padding_top.unwrap_or(base.padding_top),
            padding_bottom: self.padding_bottom.unwrap_or(base.padding_bottom),
            padding_horizontal: self
                .padding_horizontal
                .unwrap_or(base.padding_horizontal),
            row_height: self.row_height.or(base.row_height),
            glyph_height: self.glyph_height.unwrap_or(base.glyph_height),
            monospaced: self.monospaced.unwrap_or(base.monospaced),
        }
    }
}
