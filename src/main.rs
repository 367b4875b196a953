// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG=debug shows what the extractor is doing)
// 2. Parse command-line arguments using clap and validate them
// 3. Run the conversion pipeline
// 4. Print the per-page report
// 5. Exit with 0 on a completed run, 2 on an error
//
// Note that a run where some (or all) pages were skipped still counts as
// completed. Only errors that abort the pipeline change the exit code.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod assemble;      // src/assemble/ - document shell and file write
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - validated settings
mod crawl;         // src/crawl/ - page discovery from the root page
mod extract;       // src/extract/ - content region and boilerplate removal
mod fetch;         // src/fetch/ - HTTP GET with timeout
mod pipeline;      // src/pipeline.rs - the whole run, in order
mod report;        // src/report.rs - per-page outcomes and their printing

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() {
    env_logger::init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    println!("🔍 Converting GitBook site: {}", config.root_url);
    log::debug!(
        "Output: {}, page timeout: {:?}, min content: {} chars",
        config.output.display(),
        config.page_timeout,
        config.min_content_chars
    );

    let report = pipeline::gitbook_to_html(&config).await?;
    report::print_report(&report, cli.json)?;

    Ok(0)
}
