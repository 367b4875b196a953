// src/extract/page.rs
// =============================================================================
// Fetch-and-clean for a single page.
//
// Every page-level problem (bad status, timeout, no content, too short) is
// printed and folded into an empty `PageResult`, so the caller can simply move
// on to the next URL. Only real network errors come back as Err.
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use super::content::{extract_content, Extracted, PageResult};
use crate::fetch::{fetch_page, FetchOutcome};
use crate::report::PageOutcome;

// Fetches `url` and extracts its cleaned content
//
// Parameters:
//   client: shared HTTP client
//   url: page to convert
//   timeout: limit for this one request
//   min_chars: minimum visible text for the page to be kept
pub async fn fetch_page_content(
    client: &Client,
    url: &str,
    timeout: Duration,
    min_chars: usize,
) -> Result<(PageResult, PageOutcome)> {
    let html = match fetch_page(client, url, Some(timeout)).await? {
        FetchOutcome::Fetched(html) => html,
        FetchOutcome::HttpStatus(status) => {
            eprintln!("Failed to fetch the page {}. Status code: {}", url, status);
            return Ok((PageResult::empty(), PageOutcome::HttpError { status }));
        }
        FetchOutcome::TimedOut => {
            eprintln!("Error: The request to {} timed out after {:?}.", url, timeout);
            return Ok((PageResult::empty(), PageOutcome::TimedOut));
        }
        FetchOutcome::Slow(elapsed) => {
            eprintln!("Warning: Page {} took longer than {:?} to load.", url, timeout);
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            return Ok((PageResult::empty(), PageOutcome::Slow { elapsed_ms }));
        }
    };

    let extracted = extract_content(&html, min_chars)?;
    let outcome = match &extracted {
        Extracted::Content { .. } => PageOutcome::Added,
        Extracted::NoRegion { .. } => {
            eprintln!("Could not find content on the page {}.", url);
            PageOutcome::NoContent
        }
        Extracted::TooShort { chars, .. } => {
            eprintln!("Page {} skipped due to insufficient content.", url);
            log::debug!("{} has {} visible chars, need {}", url, chars, min_chars);
            PageOutcome::TooShort { chars: *chars }
        }
    };

    Ok((extracted.into_page_result(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn article(title: &str) -> String {
        format!(
            "<html><head><title>{}</title></head><body><article><p>{}</p></article></body></html>",
            title,
            "Enough words to pass the content threshold easily. ".repeat(5)
        )
    }

    #[tokio::test]
    async fn test_good_page() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/guide")
            .with_status(200)
            .with_body(article("Guide"))
            .create_async()
            .await;

        let client = crate::fetch::build_client().unwrap();
        let url = format!("{}/guide", server.url());
        let (page, outcome) = fetch_page_content(&client, &url, Duration::from_secs(5), 200)
            .await
            .unwrap();

        assert_eq!(outcome, PageOutcome::Added);
        assert_eq!(page.title, "Guide");
        assert!(page.content.starts_with("<article>"));
    }

    #[tokio::test]
    async fn test_failed_page_has_empty_title_and_content() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/gone")
            .with_status(500)
            .create_async()
            .await;

        let client = crate::fetch::build_client().unwrap();
        let url = format!("{}/gone", server.url());
        let (page, outcome) = fetch_page_content(&client, &url, Duration::from_secs(5), 200)
            .await
            .unwrap();

        assert_eq!(outcome, PageOutcome::HttpError { status: 500 });
        assert_eq!(page, PageResult::empty());
    }

    #[tokio::test]
    async fn test_page_without_region_keeps_title() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/landing")
            .with_status(200)
            .with_body("<html><head><title>Landing</title></head><body><div>hi</div></body></html>")
            .create_async()
            .await;

        let client = crate::fetch::build_client().unwrap();
        let url = format!("{}/landing", server.url());
        let (page, outcome) = fetch_page_content(&client, &url, Duration::from_secs(5), 200)
            .await
            .unwrap();

        assert_eq!(outcome, PageOutcome::NoContent);
        assert_eq!(page.title, "Landing");
        assert!(page.content.is_empty());
    }
}
