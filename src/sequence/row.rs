use std::fmt;

use super::{GlyphMeasure, SequenceRowStyle};

/// Alphabet a row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// DNA/RNA bases.
    Nucleotide,
    /// One-letter amino acid codes.
    Protein,
}

const NUCLEOTIDE_PLACEHOLDER: &str = "AACGTTCGACGTGA";
const PROTEIN_PLACEHOLDER: &str = "MDSKGSSQKGSRLLLLLVVSNLLLCQGVVSTPVCPNGPGNCQVSLRDLFDRAVMVSHYIHDLSSEMFNEFDKRYAQGKGFITMALNSCHTSSLPTPEDKEQAQQTHHEVLMSLIL";

/// Ordered single-character symbols shown side by side.
///
/// Symbols are displayed as given; nothing checks them against the
/// alphabet of [`SequenceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRow {
    kind: SequenceKind,
    sequence: Vec<char>,
}

/// One positioned symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Position in the sequence.
    pub index: usize,
    /// Symbol drawn.
    pub symbol: char,
    /// Left edge, relative to the row.
    pub x: f32,
    /// Top edge, relative to the row.
    pub y: f32,
    /// Slot width.
    pub width: f32,
    /// Slot height.
    pub height: f32,
}

/// Glyph placements for a whole row plus the row's size.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// One glyph per symbol, in sequence order.
    pub glyphs: Vec<Glyph>,
    /// Row width including side padding.
    pub width: f32,
    /// Row height.
    pub height: f32,
}

impl RowLayout {
    /// Index of the glyph whose slot contains `x`, if any.
    #[must_use]
    pub fn glyph_at(&self, x: f32) -> Option<usize> {
        let candidate = self.glyphs.partition_point(|g| g.x <= x);
        let glyph = self.glyphs.get(candidate.checked_sub(1)?)?;
        (x < glyph.x + glyph.width).then_some(glyph.index)
    }
}

impl SequenceRow {
    /// Row showing `sequence`.
    #[must_use]
    pub fn new(kind: SequenceKind, sequence: impl IntoIterator<Item = char>) -> Self {
        Self {
            kind,
            sequence: sequence.into_iter().collect(),
        }
    }

    /// Nucleotide row with its placeholder sequence.
    #[must_use]
    pub fn nucleotide_default() -> Self {
        Self::new(SequenceKind::Nucleotide, NUCLEOTIDE_PLACEHOLDER.chars())
    }

    /// Protein row with its placeholder sequence.
    #[must_use]
    pub fn protein_default() -> Self {
        Self::new(SequenceKind::Protein, PROTEIN_PLACEHOLDER.chars())
    }

    /// Same row kind, showing `sequence` instead.
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl IntoIterator<Item = char>) -> Self {
        self.set_sequence(sequence);
        self
    }

    /// Replace the displayed symbols.
    pub fn set_sequence(&mut self, sequence: impl IntoIterator<Item = char>) {
        self.sequence = sequence.into_iter().collect();
    }

    /// Alphabet of the row.
    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Displayed symbols.
    #[must_use]
    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the row shows nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Lay out with the preset style for this row's kind.
    #[must_use]
    pub fn layout_default(&self, metrics: &impl GlyphMeasure) -> RowLayout {
        self.layout(&SequenceRowStyle::for_kind(self.kind), metrics)
    }

    /// Place one glyph per symbol, left to right.
    #[must_use]
    pub fn layout(
        &self,
        style: &SequenceRowStyle,
        metrics: &impl GlyphMeasure,
    ) -> RowLayout {
        let fixed_width = style.monospaced.then(|| {
            self.sequence
                .iter()
                .map(|c| metrics.advance(*c))
                .fold(0.0_f32, f32::max)
        });

        let height = style.resolved_height();
        let y = style.padding_top + (height - style.content_height()) / 2.0;

        let mut cursor = style.padding_horizontal;
        let glyphs: Vec<Glyph> = self
            .sequence
            .iter()
            .enumerate()
            .map(|(index, &symbol)| {
                let width =
                    fixed_width.unwrap_or_else(|| metrics.advance(symbol));
                let glyph = Glyph {
                    index,
                    symbol,
                    x: cursor,
                    y,
                    width,
                    height: style.glyph_height,
                };
                cursor += width + style.spacing;
                glyph
            })
            .collect();

        let content_width = glyphs
            .last()
            .map_or(0.0, |g| g.x + g.width - style.padding_horizontal);

        RowLayout {
            glyphs,
            width: content_width + 2.0 * style.padding_horizontal,
            height,
        }
    }
}

impl fmt::Display for SequenceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sequence.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MonospaceMetrics;

    #[test]
    fn placeholders() {
        let nucleotides = SequenceRow::nucleotide_default();
        assert_eq!(nucleotides.kind(), SequenceKind::Nucleotide);
        assert_eq!(nucleotides.to_string(), "AACGTTCGACGTGA");
        let protein = SequenceRow::protein_default();
        assert_eq!(protein.len(), PROTEIN_PLACEHOLDER.len());
        assert!(protein.to_string().starts_with("MDSKG"));
    }

    #[test]
    fn one_glyph_per_symbol() {
        let metrics = MonospaceMetrics::BODY;
        for row in [
            SequenceRow::nucleotide_default(),
            SequenceRow::protein_default(),
            SequenceRow::new(SequenceKind::Protein, "".chars()),
            SequenceRow::new(SequenceKind::Nucleotide, "N*?-".chars()),
        ] {
            let layout = row.layout_default(&metrics);
            assert_eq!(layout.glyphs.len(), row.len());
            for (i, glyph) in layout.glyphs.iter().enumerate() {
                assert_eq!(glyph.index, i);
                assert_eq!(glyph.symbol, row.sequence()[i]);
            }
        }
    }

    #[test]
    fn nucleotide_geometry() {
        let row = SequenceRow::new(SequenceKind::Nucleotide, "ACG".chars());
        let layout = row.layout_default(&MonospaceMetrics { advance: 12.0 });
        let xs: Vec<f32> = layout.glyphs.iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![24.0, 46.0, 68.0]);
        // 3 glyphs + 2 gaps + both side paddings
        assert_eq!(layout.width, 3.0 * 12.0 + 2.0 * 10.0 + 48.0);
        assert_eq!(layout.height, 100.0);
        assert_eq!(layout.glyphs[0].y, 38.0);
    }

    #[test]
    fn protein_geometry() {
        let row = SequenceRow::new(SequenceKind::Protein, "MK".chars());
        let layout = row.layout_default(&MonospaceMetrics { advance: 10.0 });
        assert_eq!(layout.height, 36.0);
        assert_eq!(layout.glyphs[0].y, 8.0);
        assert_eq!(layout.glyphs[1].x, 24.0 + 10.0 + 8.0);
    }

    #[test]
    fn monospaced_uses_widest_glyph() {
        let narrow_i = |c: char| -> f32 { if c == 'I' { 4.0 } else { 9.0 } };
        let row = SequenceRow::new(SequenceKind::Protein, "IWI".chars());

        let mono = row.layout(&SequenceRowStyle::protein(), &narrow_i);
        assert!(mono.glyphs.iter().all(|g| g.width == 9.0));

        let proportional = SequenceRowStyle {
            monospaced: false,
            ..SequenceRowStyle::protein()
        };
        let layout = row.layout(&proportional, &narrow_i);
        assert_eq!(layout.glyphs[0].width, 4.0);
        assert_eq!(layout.glyphs[1].x, 24.0 + 4.0 + 8.0);
    }

    #[test]
    fn empty_row_is_just_padding() {
        let row = SequenceRow::new(SequenceKind::Protein, std::iter::empty::<char>());
        let layout = row.layout_default(&MonospaceMetrics::BODY);
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.width, 48.0);
        assert_eq!(layout.glyph_at(30.0), None);
    }

    #[test]
    fn hit_testing() {
        let row = SequenceRow::new(SequenceKind::Nucleotide, "ACGT".chars());
        let layout = row.layout_default(&MonospaceMetrics { advance: 10.0 });
        assert_eq!(layout.glyph_at(24.0), Some(0));
        assert_eq!(layout.glyph_at(33.9), Some(0));
        // inside the gap after the first glyph
        assert_eq!(layout.glyph_at(36.0), None);
        assert_eq!(layout.glyph_at(44.0), Some(1));
        assert_eq!(layout.glyph_at(0.0), None);
        assert_eq!(layout.glyph_at(1000.0), None);
    }

    #[test]
    fn set_sequence_replaces_symbols() {
        let mut row = SequenceRow::nucleotide_default();
        row.set_sequence("GATTACA".chars());
        assert_eq!(row.len(), 7);
        assert_eq!(row.layout_default(&MonospaceMetrics::BODY).glyphs.len(), 7);

        let row = SequenceRow::protein_default().with_sequence("MK".chars());
        assert_eq!(row.kind(), SequenceKind::Protein);
        assert_eq!(row.to_string(), "MK");
    }
}
