use super::{GlyphMeasure, RowLayout, SequenceKind, SequenceRow, SequenceRowStyle};
use crate::structure::Protein;

/// Horizontal line drawn under a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Line length.
    pub width: f32,
}

/// A row layout placed inside the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    /// Top of the row in panel coordinates.
    pub y: f32,
    /// Glyph placements relative to the row.
    pub layout: RowLayout,
}

/// Result of [`SequencePanel::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    /// Rows from top to bottom.
    pub rows: Vec<PlacedRow>,
    /// One separator under each row.
    pub separators: Vec<Separator>,
    /// Width of the widest row.
    pub width: f32,
    /// Total height including top padding and separators.
    pub height: f32,
}

impl PanelLayout {
    /// Row and glyph under the panel point `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            let inside = y >= row.y && y < row.y + row.layout.height;
            inside
                .then(|| row.layout.glyph_at(x))
                .flatten()
                .map(|glyph| (row_index, glyph))
        })
    }
}

/// Vertical stack of sequence rows separated by thin rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequencePanel {
    rows: Vec<SequenceRow>,
}

impl SequencePanel {
    /// Space above the first row.
    pub const PADDING_TOP: f32 = 8.0;
    /// Separator thickness.
    pub const SEPARATOR_HEIGHT: f32 = 1.0;
    /// Separator indent from the leading edge.
    pub const SEPARATOR_INDENT: f32 = 24.0;

    /// Panel over `rows`, top to bottom.
    #[must_use]
    pub fn new(rows: Vec<SequenceRow>) -> Self {
        Self { rows }
    }

    /// One protein row per chain of `protein`.
    #[must_use]
    pub fn from_protein(protein: &Protein) -> Self {
        Self::new(rows_for_protein(protein))
    }

    /// Append a row at the bottom.
    pub fn push(&mut self, row: SequenceRow) {
        self.rows.push(row);
    }

    /// Rows from top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[SequenceRow] {
        &self.rows
    }

    /// Lay out every row with the style for its kind.
    #[must_use]
    pub fn layout(
        &self,
        nucleotide: &SequenceRowStyle,
        protein: &SequenceRowStyle,
        metrics: &impl GlyphMeasure,
    ) -> PanelLayout {
        let mut y = Self::PADDING_TOP;
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let style = match row.kind() {
                SequenceKind::Nucleotide => nucleotide,
                SequenceKind::Protein => protein,
            };
            let layout = row.layout(style, metrics);
            let height = layout.height;
            rows.push(PlacedRow { y, layout });
            y += height + Self::SEPARATOR_HEIGHT;
        }

        let width = rows.iter().map(|r| r.layout.width).fold(0.0_f32, f32::max);
        let separators = rows
            .iter()
            .map(|r| Separator {
                x: Self::SEPARATOR_INDENT,
                y: r.y + r.layout.height,
                width: (width - Self::SEPARATOR_INDENT).max(0.0),
            })
            .collect();

        PanelLayout {
            rows,
            separators,
            width,
            height: y,
        }
    }

    /// Lay out with the preset styles.
    #[must_use]
    pub fn layout_default(&self, metrics: &impl GlyphMeasure) -> PanelLayout {
        self.layout(
            &SequenceRowStyle::nucleotide(),
            &SequenceRowStyle::protein(),
            metrics,
        )
    }
}

/// One protein row per chain sequence of `protein`, in subunit order.
#[must_use]
pub fn rows_for_protein(protein: &Protein) -> Vec<SequenceRow> {
    protein
        .chain_sequences()
        .into_iter()
        .map(|chain| SequenceRow::new(SequenceKind::Protein, chain.sequence.chars()))
        .collect()
}
