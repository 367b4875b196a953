// src/report.rs
// =============================================================================
// What happened to every page during a run, and how we print it.
//
// Each page gets a `PageReport`. After the run, main prints either a short
// summary table or the whole report as JSON (--json).
// =============================================================================

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// The fate of one discovered page
//
// #[serde(tag = "outcome")] writes the variant name into an "outcome" field,
// e.g. {"outcome": "http_error", "status": 404}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PageOutcome {
    /// Content made it into the document
    Added,
    /// Content region found, but too little text after cleaning
    TooShort { chars: usize },
    /// No book-body, section, article or main element
    NoContent,
    /// The server answered with something other than 200
    HttpError { status: u16 },
    /// The request hit the per-page timeout
    TimedOut,
    /// The response arrived, but after the timeout had already passed
    Slow { elapsed_ms: u64 },
}

impl PageOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, PageOutcome::Added)
    }

    /// True when the page could not be downloaded at all
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            PageOutcome::HttpError { .. } | PageOutcome::TimedOut | PageOutcome::Slow { .. }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    pub url: String,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root_url: String,
    pub pages_found: usize,
    pub pages: Vec<PageReport>,
    /// Where the document was written; None when no pages were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl RunReport {
    pub fn no_pages(root_url: &str) -> Self {
        RunReport {
            root_url: root_url.to_string(),
            pages_found: 0,
            pages: Vec::new(),
            output: None,
        }
    }

    pub fn added_count(&self) -> usize {
        self.pages.iter().filter(|p| p.outcome.is_added()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.pages.iter().filter(|p| p.outcome.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.pages.len() - self.added_count() - self.failed_count()
    }
}

// The line printed once page discovery is done
pub fn discovery_message(pages_found: usize) -> String {
    if pages_found == 0 {
        "⚠️  No pages found to convert.".to_string()
    } else {
        format!("📄 Found {} pages to convert.", pages_found)
    }
}

// Prints the report either as a summary or as JSON
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    let output = if json {
        render_json(report)?
    } else {
        render_summary(report)
    };
    print!("{}", output);
    Ok(())
}

pub fn render_json(report: &RunReport) -> Result<String> {
    let mut json_output = serde_json::to_string_pretty(report)?;
    json_output.push('\n');
    Ok(json_output)
}

// Human-readable table plus totals; empty when no pages were found
pub fn render_summary(report: &RunReport) -> String {
    if report.pages.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        String::new(),
        format!("{:<70} {:<20}", "PAGE", "RESULT"),
        "=".repeat(90),
    ];

    for page in &report.pages {
        // Truncate on a char boundary so multi-byte URLs don't panic
        let url_display = if page.url.chars().count() > 67 {
            format!("{}...", page.url.chars().take(67).collect::<String>())
        } else {
            page.url.clone()
        };
        lines.push(format!("{:<70} {:<20}", url_display, format_outcome(&page.outcome)));
    }

    lines.push(String::new());
    lines.push("📊 Summary:".to_string());
    lines.push(format!("   ✅ Added: {}", report.added_count()));
    lines.push(format!("   ⏭️  Skipped: {}", report.skipped_count()));
    lines.push(format!("   ❌ Failed: {}", report.failed_count()));
    lines.push(format!("   📋 Total: {}", report.pages.len()));

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

fn format_outcome(outcome: &PageOutcome) -> String {
    match outcome {
        PageOutcome::Added => "✅ ADDED".to_string(),
        PageOutcome::TooShort { chars } => format!("✂️  TOO SHORT ({} chars)", chars),
        PageOutcome::NoContent => "🕳️  NO CONTENT".to_string(),
        PageOutcome::HttpError { status } => format!("❌ HTTP {}", status),
        PageOutcome::TimedOut => "⏱️  TIMEOUT".to_string(),
        PageOutcome::Slow { elapsed_ms } => format!("🐢 SLOW ({} ms)", elapsed_ms),
    }
}
