// src/crawl/links.rs
// =============================================================================
// This module discovers the pages of a GitBook site.
//
// How it works:
// 1. Fetch the root page
// 2. Collect the href of every <a href> element, in document order
// 3. Turn root-relative links ("/guide/intro") into absolute ones by gluing
//    them onto the root URL
// 4. Keep only links whose text contains the root URL
//
// There is no visited set and no depth limit. A link that appears twice on
// the root page is fetched twice.
// =============================================================================

use anyhow::{anyhow, bail, Result};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::fetch::{fetch_page, FetchOutcome};

// Fetches the root page and returns every same-site page URL it links to
//
// Returns an empty Vec when the root page answers with anything but 200.
// Network errors (including a timeout on the root page) are returned as Err.
pub async fn fetch_all_page_urls(client: &Client, root_url: &str) -> Result<Vec<String>> {
    match fetch_page(client, root_url, None).await? {
        FetchOutcome::Fetched(html) => extract_site_links(&html, root_url),
        FetchOutcome::HttpStatus(status) => {
            eprintln!("Failed to fetch the page. Status code: {}", status);
            Ok(Vec::new())
        }
        FetchOutcome::TimedOut | FetchOutcome::Slow(_) => {
            bail!("Request to root page {} timed out", root_url)
        }
    }
}

// Extracts same-site links from the root page's HTML
//
// Example:
//   root_url = "https://docs.example.com/"
//   <a href="/intro">         -> "https://docs.example.com/intro"  (kept)
//   <a href="https://x.org/"> -> "https://x.org/"                  (dropped)
pub fn extract_site_links(html: &str, root_url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| anyhow!("Invalid CSS selector 'a[href]': {:?}", e))?;

    let links: Vec<String> = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| resolve_link(root_url, href))
        .filter(|url| is_site_link(url, root_url))
        .collect();

    log::debug!("Kept {} same-site link(s) from {}", links.len(), root_url);
    Ok(links)
}

// Resolves a root-relative href against the root URL
//
// Only hrefs starting with '/' are touched; everything else (absolute URLs,
// "#anchors", "page.html") is returned unchanged.
fn resolve_link(root_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", root_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

// Plain substring test, no URL parsing
fn is_site_link(url: &str, root_url: &str) -> bool {
    url.contains(root_url)
}
