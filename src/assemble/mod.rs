// src/assemble/mod.rs
// =============================================================================
// This module builds the final HTML file.
//
// Submodules:
// - document: concatenates page results, wraps them in a document shell and
//   writes the file
// =============================================================================

mod document;

pub use document::{render_document, save_html_content};
