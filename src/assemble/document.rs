// src/assemble/document.rs
// =============================================================================
// Concatenates page results into one standalone HTML document.
//
// Each page with content becomes
//   <h1>{title}</h1>{cleaned content}
// in the order the pages were discovered. Pages with empty content add
// nothing. Titles are escaped; page content is already HTML and is inserted
// as is.
// =============================================================================

use anyhow::{Context, Result};
use html_escape::encode_text;
use std::path::Path;

use crate::extract::PageResult;

/// Renders the full document.
///
/// `root_url` goes into the document `<title>`, `pages` are in discovery
/// order. Page titles and the root URL are HTML-escaped before insertion,
/// so a title like `Tips & Tricks` is written as `Tips &amp; Tricks`. The
/// rendered text is the same as inserting them raw; only the bytes differ.
pub fn render_document(root_url: &str, pages: &[PageResult]) -> String {
    let body: String = pages
        .iter()
        .filter(|page| !page.content.is_empty())
        .map(|page| format!("<h1>{}</h1>{}", encode_text(&page.title), page.content))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n    \
         <meta charset=\"UTF-8\">\n    \
         <title>{} - GitBook HTML</title>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        encode_text(root_url),
        body
    )
}

// Writes the document as UTF-8, replacing whatever was at `path`
pub async fn save_html_content(html: &str, path: &Path) -> Result<()> {
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("HTML saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, content: &str) -> PageResult {
        PageResult {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_shell() {
        let html = render_document("https://docs.example.com/", &[]);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
        assert!(html.contains("    <meta charset=\"UTF-8\">\n"));
        assert!(html.contains("    <title>https://docs.example.com/ - GitBook HTML</title>\n"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_pages_in_order_and_empty_skipped() {
        let pages = vec![
            page("First", "<section><p>one</p></section>"),
            page("Skipped", ""),
            PageResult::empty(),
            page("Second", "<article><p>two</p></article>"),
        ];
        let html = render_document("https://docs.example.com/", &pages);

        assert!(html.contains(
            "<body>\n<h1>First</h1><section><p>one</p></section><h1>Second</h1><article><p>two</p></article>\n</body>"
        ));
        assert!(!html.contains("Skipped"));
        assert_eq!(html.matches("<h1>").count(), 2);
    }

    #[test]
    fn test_title_is_escaped() {
        let pages = vec![page("Tips & <Tricks>", "<p>x</p>")];
        let html = render_document("https://docs.example.com/?a=1&b=2", &pages);
        assert!(html.contains("<h1>Tips &amp; &lt;Tricks&gt;</h1>"));
        assert!(html.contains("<title>https://docs.example.com/?a=1&amp;b=2 - GitBook HTML</title>"));
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.html");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();

        save_html_content("<p>new</p>", &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>new</p>");
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("book.html");
        assert!(save_html_content("<p>x</p>", &path).await.is_err());
    }
}
