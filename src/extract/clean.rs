// src/extract/clean.rs
// =============================================================================
// Removes page furniture from a content region.
//
// scraper parses into an ego-tree, and `Html::tree` is public, so removing an
// element is just detaching its node: the whole subtree goes with it and no
// longer shows up in `.html()` or `.text()` of any ancestor.
//
// Everything here works on node ids instead of ElementRefs, because an
// ElementRef borrows the document and we need to mutate it.
// =============================================================================

use anyhow::Result;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};

use super::parse_selector;

/// Class GitBook puts on the rating emoji of its feedback widget.
const EMOJI_CLASS_SELECTOR: &str = ".emoji";

const LAST_UPDATED: &str = "Last updated";
const WAS_THIS_HELPFUL: &str = "Was this helpful?";

// What cleaning left of the region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripped {
    /// The region is still there, `removed` nodes were detached from it
    Kept { removed: usize },
    /// A feedback text sat directly in the region, so the region itself went
    RegionRemoved,
}

// Strips boilerplate inside `region`, in this order:
// 1. every <a> (with its children)
// 2. every <button>
// 3. the element holding the text "Last updated"
// 4. the element holding the text "Was this helpful?"
// 5. every element with the emoji class
//
// Steps 3 and 4 remove the parent of the matching text. When that parent is
// the region, the whole region is gone and cleaning stops there.
pub fn strip_boilerplate(document: &mut Html, region: NodeId) -> Result<Stripped> {
    let mut removed = 0;

    removed += remove_matching(document, region, "a")?;
    removed += remove_matching(document, region, "button")?;

    for needle in [LAST_UPDATED, WAS_THIS_HELPFUL] {
        match remove_text_container(document, region, needle) {
            TextMatch::NotFound => {}
            TextMatch::Removed => removed += 1,
            TextMatch::RegionRemoved => {
                log::debug!("'{}' sits directly in the content region, dropping it", needle);
                return Ok(Stripped::RegionRemoved);
            }
        }
    }

    removed += remove_matching(document, region, EMOJI_CLASS_SELECTOR)?;

    log::debug!("Stripped {} boilerplate node(s)", removed);
    Ok(Stripped::Kept { removed })
}

// Detaches every descendant of `region` matching a CSS selector
fn remove_matching(document: &mut Html, region: NodeId, css: &str) -> Result<usize> {
    let selector = parse_selector(css)?;

    // Collect first: the borrow of the tree must end before we mutate it
    let ids: Vec<NodeId> = document
        .tree
        .get(region)
        .and_then(ElementRef::wrap)
        .map(|root| root.select(&selector).map(|element| element.id()).collect())
        .unwrap_or_default();

    for id in &ids {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }

    Ok(ids.len())
}

enum TextMatch {
    NotFound,
    Removed,
    RegionRemoved,
}

// Finds the first text node inside `region` whose text is exactly `needle`
// and detaches its parent element, which may be the region itself.
fn remove_text_container(document: &mut Html, region: NodeId, needle: &str) -> TextMatch {
    let found = document.tree.get(region).and_then(|root| {
        root.descendants()
            .find(|node| matches!(node.value(), Node::Text(text) if &**text == needle))
            .and_then(|text_node| text_node.parent().map(|parent| parent.id()))
    });

    let Some(parent_id) = found else {
        return TextMatch::NotFound;
    };

    if let Some(mut node) = document.tree.get_mut(parent_id) {
        node.detach();
    }

    if parent_id == region {
        TextMatch::RegionRemoved
    } else {
        TextMatch::Removed
    }
}
