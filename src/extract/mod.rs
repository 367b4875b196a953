// src/extract/mod.rs
// =============================================================================
// This module pulls the readable content out of GitBook pages.
//
// Submodules:
// - page: fetch one page and report what happened to it
// - content: title, content region and the length check
// - clean: removal of links, buttons and feedback widgets
// =============================================================================

mod clean;
mod content;
mod page;

use anyhow::{anyhow, Result};
use scraper::Selector;

pub use content::PageResult;
pub use page::fetch_page_content;

// Compiles a CSS selector, turning scraper's borrowed error into anyhow
pub(crate) fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid CSS selector '{}': {:?}", css, e))
}
