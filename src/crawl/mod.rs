// src/crawl/mod.rs
// =============================================================================
// This module finds the pages to convert.
//
// Only the root page is fetched here. Its links, filtered to the same site,
// are the full list of pages; there is no recursive crawl.
// =============================================================================

mod links;

pub use links::fetch_all_page_urls;
