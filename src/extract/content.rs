// src/extract/content.rs
// =============================================================================
// Turns one fetched GitBook page into a (title, cleaned HTML) pair.
//
// Steps:
// 1. Title from <title>, or "GitBook Document" if there is none
// 2. Content region: the first of div.book-body, <section>, <article>, <main>
// 3. Strip boilerplate inside the region (see clean.rs)
// 4. Drop the page if too little visible text is left
// =============================================================================

use anyhow::{anyhow, Result};
use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node};

use super::clean::{strip_boilerplate, Stripped};
use super::parse_selector;

pub const FALLBACK_TITLE: &str = "GitBook Document";

// Tried in order, the first selector that matches anything wins
const REGION_SELECTORS: [&str; 4] = ["div.book-body", "section", "article", "main"];

/// What a single page contributes to the final document.
///
/// An empty `content` means "nothing to add"; the assembler skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub title: String,
    pub content: String,
}

impl PageResult {
    pub fn empty() -> Self {
        PageResult::default()
    }

    pub fn title_only(title: String) -> Self {
        PageResult {
            title,
            content: String::new(),
        }
    }
}

// The three ways extraction can end for a page that was fetched fine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Content { title: String, html: String },
    NoRegion { title: String },
    TooShort { title: String, chars: usize },
}

impl Extracted {
    pub fn into_page_result(self) -> PageResult {
        match self {
            Extracted::Content { title, html } => PageResult { title, content: html },
            Extracted::NoRegion { title } | Extracted::TooShort { title, .. } => {
                PageResult::title_only(title)
            }
        }
    }
}

// Extracts and cleans the content of a page
//
// Parameters:
//   html: the page as fetched
//   min_chars: pages with fewer visible characters than this are dropped
pub fn extract_content(html: &str, min_chars: usize) -> Result<Extracted> {
    let mut document = Html::parse_document(html);
    let title = page_title(&document)?;

    let Some(region) = find_region(&document)? else {
        return Ok(Extracted::NoRegion { title });
    };

    if strip_boilerplate(&mut document, region)? == Stripped::RegionRemoved {
        return Ok(Extracted::TooShort { title, chars: 0 });
    }

    let region = document
        .tree
        .get(region)
        .and_then(ElementRef::wrap)
        .ok_or_else(|| anyhow!("content region is no longer an element"))?;

    let chars = visible_text_len(region);
    if chars < min_chars {
        return Ok(Extracted::TooShort { title, chars });
    }

    Ok(Extracted::Content {
        title,
        html: region.html(),
    })
}

fn page_title(document: &Html) -> Result<String> {
    let selector = parse_selector("title")?;
    Ok(document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string()))
}

fn find_region(document: &Html) -> Result<Option<NodeId>> {
    for css in REGION_SELECTORS {
        let selector = parse_selector(css)?;
        if let Some(element) = document.select(&selector).next() {
            log::debug!("Content region found with '{}'", css);
            return Ok(Some(element.id()));
        }
    }
    Ok(None)
}

// Elements whose text is never shown on the page
const HIDDEN_TEXT_PARENTS: [&str; 3] = ["script", "style", "template"];

// Length of the region's visible text with every text run trimmed and the
// runs joined without separators. Counted in chars, not bytes.
fn visible_text_len(region: ElementRef<'_>) -> usize {
    region
        .descendants()
        .filter(|node| !has_hidden_parent(node))
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(text.trim().chars().count()),
            _ => None,
        })
        .sum()
}

fn has_hidden_parent(node: &NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .map_or(false, |element| HIDDEN_TEXT_PARENTS.contains(&element.name()))
}
