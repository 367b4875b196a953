// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: crawl one GitBook site and save it as HTML.
// Every flag has a default, so running `gitbook2html` with no arguments
// converts the default knowledge base into output/copied_gitbook.html.
// =============================================================================

use clap::Parser;

// Default values, shared with the config module and the tests
pub const DEFAULT_ROOT_URL: &str = "https://kb.pvhostvm.ru/";
pub const DEFAULT_OUTPUT: &str = "output/copied_gitbook.html";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 200;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "gitbook2html",
    version = "0.1.0",
    about = "Crawl a GitBook site and save all of its pages as a single HTML file",
    long_about = "gitbook2html fetches the root page of a GitBook site, follows every link that \
                  belongs to the site, strips navigation and feedback widgets from each page, \
                  and writes the remaining content into one standalone HTML document."
)]
pub struct Cli {
    /// Root URL of the GitBook site (e.g., https://docs.example.com/)
    ///
    /// Only links that contain this exact string are converted
    #[arg(default_value = DEFAULT_ROOT_URL)]
    pub root_url: String,

    /// Path of the HTML file to write (its directory is created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Timeout for each page request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pages with less visible text than this are skipped
    #[arg(long, default_value_t = DEFAULT_MIN_CONTENT_CHARS)]
    pub min_content_chars: usize,

    /// Print a JSON report of every page instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gitbook2html"]);
        assert_eq!(cli.root_url, DEFAULT_ROOT_URL);
        assert_eq!(cli.output, DEFAULT_OUTPUT);
        assert_eq!(cli.timeout_secs, 180);
        assert_eq!(cli.min_content_chars, 200);
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "gitbook2html",
            "https://docs.example.com/",
            "-o",
            "book.html",
            "--timeout-secs",
            "30",
            "--min-content-chars",
            "50",
            "--json",
        ]);
        assert_eq!(cli.root_url, "https://docs.example.com/");
        assert_eq!(cli.output, "book.html");
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.min_content_chars, 50);
        assert!(cli.json);
    }
}
