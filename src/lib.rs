// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Protein structure data core for molecular viewers.
//!
//! Bioview parses PDB, mmCIF and XYZ structure files into per-model atom arrays,
//! derives element/residue/chain compositions, and produces the inputs a
//! renderer needs: per-element atom radii, a color-by mode, per-atom fill
//! colors, and the glyph layout of one-letter sequence rows.
//!
//! # Key entry points
//!
//! - [`parser::parse_file`] - load a structure file from disk
//! - [`structure::Protein`] - a single model with its subunits and
//!   compositions
//! - [`visualization::VisualizationConfiguration`] - atom radii plus color
//!   mode, handed to whatever draws the molecule
//! - [`sequence::SequenceRow`] - one row of sequence symbols and its layout
//! - [`options::Options`] - TOML-backed viewer presets

pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod options;
pub mod parser;
pub mod sequence;
pub mod structure;
pub mod util;
pub mod visualization;

pub use error::BioViewError;
