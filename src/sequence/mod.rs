//! One-letter sequence rows and their glyph layout.
//!
//! Layout is pure geometry: the caller supplies glyph advances through
//! [`GlyphMeasure`] and draws the returned [`Glyph`] slots however it
//! likes.

mod metrics;
mod panel;
mod row;
mod style;

pub use metrics::{GlyphMeasure, MonospaceMetrics};
pub use panel::{
    rows_for_protein, PanelLayout, PlacedRow, SequencePanel, Separator,
};
pub use row::{Glyph, RowLayout, SequenceKind, SequenceRow};
pub use style::SequenceRowStyle;
