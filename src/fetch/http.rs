// src/fetch/http.rs
// =============================================================================
// This module fetches a single page with an HTTP GET.
//
// Key functionality:
// - Returns the body only for an exact 200 response
// - Turns non-200 responses and timeouts into `FetchOutcome` values instead
//   of errors, so one bad page never stops the run
// - Lets every other network error (DNS, refused connection, TLS) bubble up
//   through anyhow, because those mean something is wrong with the run itself
//
// Rust concepts:
// - Enums: To represent the different ways a fetch can end
// - async/await: reqwest is async, we simply await each request in turn
// - Instant: To measure how long a request actually took
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

// How a fetch ended
//
// Only `Fetched` carries a body. The others are page-level failures that the
// caller reports and then moves past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 200 OK, with the decoded response body
    Fetched(String),
    /// Any status other than 200 (redirects are followed before we see them)
    HttpStatus(u16),
    /// The request did not finish within the timeout
    TimedOut,
    /// The request finished, but took longer than the timeout we asked for
    Slow(Duration),
}

// Builds the HTTP client shared by the whole run
//
// No client-wide timeout is set: the root page uses reqwest's default
// behavior, and each content page passes its own timeout to `fetch_page`.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .build()
        .context("Failed to create HTTP client")
}

// Fetches one page
//
// Parameters:
//   client: shared reqwest client
//   url: absolute URL to GET
//   timeout: per-request limit; None means "whatever the client does"
//
// Returns:
//   Ok(FetchOutcome) for responses and timeouts
//   Err for any other network failure
pub async fn fetch_page(client: &Client, url: &str, timeout: Option<Duration>) -> Result<FetchOutcome> {
    let started = Instant::now();

    let mut request = client.get(url);
    if let Some(limit) = timeout {
        request = request.timeout(limit);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Ok(FetchOutcome::TimedOut),
        Err(e) => return Err(e).with_context(|| format!("Request to {} failed", url)),
    };

    let status = response.status();
    if status != StatusCode::OK {
        log::debug!("GET {} -> HTTP {}", url, status.as_u16());
        return Ok(FetchOutcome::HttpStatus(status.as_u16()));
    }

    // The timeout covers reading the body too, so it can still fire here
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if e.is_timeout() => return Ok(FetchOutcome::TimedOut),
        Err(e) => return Err(e).with_context(|| format!("Failed to read body of {}", url)),
    };

    let elapsed = started.elapsed();
    log::debug!("GET {} -> HTTP 200, {} bytes in {:?}", url, body.len(), elapsed);

    if let Some(limit) = timeout {
        if elapsed > limit {
            return Ok(FetchOutcome::Slow(elapsed));
        }
    }

    Ok(FetchOutcome::Fetched(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_ok_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><body>hello</body></html>")
            .expect(1)
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/page", server.url());
        let outcome = fetch_page(&client, &url, Some(Duration::from_secs(5))).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Fetched("<html><body>hello</body></html>".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_not_found_reports_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/missing", server.url());
        let outcome = fetch_page(&client, &url, None).await.unwrap();

        assert_eq!(outcome, FetchOutcome::HttpStatus(404));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_success_is_still_a_failure() {
        // Only an exact 200 counts; 204 has no page to convert
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/empty")
            .with_status(204)
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/empty", server.url());
        let outcome = fetch_page(&client, &url, None).await.unwrap();

        assert_eq!(outcome, FetchOutcome::HttpStatus(204));
    }

    #[tokio::test]
    async fn test_slow_body_times_out() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/slow")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(1500));
                w.write_all(b"<html></html>")
            })
            .create_async()
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/slow", server.url());
        let outcome = fetch_page(&client, &url, Some(Duration::from_millis(200))).await.unwrap();

        assert_eq!(outcome, FetchOutcome::TimedOut);
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        // Nothing listens on port 9 of localhost in a test environment
        let client = build_client().unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:9/", Some(Duration::from_secs(5))).await;
        assert!(result.is_err());
    }
}
