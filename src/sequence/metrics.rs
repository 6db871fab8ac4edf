/// Supplies glyph advance widths to the row layout.
///
/// The host's text system implements this; [`MonospaceMetrics`] covers
/// the common fixed-width case.
pub trait GlyphMeasure {
    /// Horizontal advance of `symbol`.
    fn advance(&self, symbol: char) -> f32;
}

/// Every glyph has the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of every glyph.
    pub advance: f32,
}

impl MonospaceMetrics {
    /// Advance of a body-size monospaced font.
    pub const BODY: Self = Self { advance: 10.0 };
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::BODY
    }
}

impl GlyphMeasure for MonospaceMetrics {
    fn advance(&self, _symbol: char) -> f32 {
        self.advance
    }
}

impl<F: Fn(char) -> f32> GlyphMeasure for F {
    fn advance(&self, symbol: char) -> f32 {
        self(symbol)
    }
}
