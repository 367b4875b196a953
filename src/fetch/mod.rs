// src/fetch/mod.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Submodules:
// - http: one GET per URL, classified into a `FetchOutcome`
//
// Nothing here retries. A failed fetch is final for that URL; the caller
// decides whether that aborts the run (root page) or just skips a page.
// =============================================================================

mod http;

pub use http::{build_client, fetch_page, FetchOutcome};
