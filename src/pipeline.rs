// src/pipeline.rs
// =============================================================================
// Runs a whole conversion, start to finish:
//
// 1. Make sure the output directory exists
// 2. Discover page URLs from the root page (stop here if there are none)
// 3. Fetch and clean each page, strictly one after another
// 4. Assemble the document and write it
//
// Page-level problems never stop the run. Only errors that come back as Err
// (network failures on the root page, unexpected network errors, file I/O)
// abort it.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

use crate::assemble::{render_document, save_html_content};
use crate::config::Config;
use crate::crawl::fetch_all_page_urls;
use crate::extract::fetch_page_content;
use crate::fetch::build_client;
use crate::report::{discovery_message, PageReport, RunReport};

pub async fn gitbook_to_html(config: &Config) -> Result<RunReport> {
    ensure_output_dir(&config.output).await?;

    let client = build_client()?;

    let page_urls = fetch_all_page_urls(&client, &config.root_url).await?;
    let total = page_urls.len();
    println!("{}", discovery_message(total));
    if total == 0 {
        return Ok(RunReport::no_pages(&config.root_url));
    }

    let mut pages = Vec::with_capacity(total);
    let mut reports = Vec::with_capacity(total);

    for (index, page_url) in page_urls.iter().enumerate() {
        let (page, outcome) = fetch_page_content(
            &client,
            page_url,
            config.page_timeout,
            config.min_content_chars,
        )
        .await?;

        if page.content.is_empty() {
            eprintln!(
                "Warning: Content for page {} could not be fetched or was empty.",
                page_url
            );
        }
        println!("   Processed page {}/{}: {}", index + 1, total, page_url);

        pages.push(page);
        reports.push(PageReport {
            url: page_url.clone(),
            outcome,
        });
    }

    let html = render_document(&config.root_url, &pages);
    save_html_content(&html, &config.output).await?;

    Ok(RunReport {
        root_url: config.root_url.clone(),
        pages_found: total,
        pages: reports,
        output: Some(config.output.clone()),
    })
}

// Creates the directory the output file will live in
//
// A bare file name ("book.html") has an empty parent, which needs nothing.
async fn ensure_output_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create output directory {}", dir.display())),
        _ => Ok(()),
    }
}
