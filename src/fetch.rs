//! HTTP page fetching with exponential backoff retry logic.
//!
//! This module provides the single network primitive the collectors use:
//! download a page body as text, retrying transient failures with
//! exponential backoff and jitter.
//!
//! # Architecture
//!
//! The module uses a trait-based design for flexibility:
//! - [`FetchAsync`]: Core trait defining an async page fetch
//! - [`HttpFetcher`]: Wraps a configured `reqwest::Client`
//! - [`RetryFetch`]: Decorator that adds retry logic to any `FetchAsync`
//!   implementation
//!
//! # Retry Strategy
//!
//! - Attempt count and base delay come from [`ScrapingConfig`]
//! - Exponential backoff, delay capped at 30 seconds
//! - Random jitter (0-250ms) added to prevent thundering herd

use rand::{Rng, rng};
use std::error::Error;
use std::fmt;
use std::time::{Duration as StdDuration, Instant};
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use crate::config::ScrapingConfig;

/// Trait for async page fetching.
///
/// Implementors download the body at a URL as text. The abstraction exists
/// so decorators (like retry logic) and test doubles can stand in for the
/// real HTTP client.
pub trait FetchAsync {
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// A configured `reqwest` client implementing [`FetchAsync`].
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the configured User-Agent and request timeout.
    pub fn new(config: &ScrapingConfig) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(StdDuration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchAsync for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let result = async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            Ok::<String, reqwest::Error>(response.text().await?)
        }
        .await;
        let dt = t0.elapsed();

        match result {
            Ok(body) => {
                info!(elapsed_ms = dt.as_millis() as u64, bytes = body.len(), "Fetched page");
                Ok(body)
            }
            Err(e) => {
                warn!(elapsed_ms = dt.as_millis() as u64, error = %e, "Page fetch failed");
                Err(Box::new(e) as Box<dyn Error>)
            }
        }
    }
}

/// Wrapper that adds exponential backoff retry logic to any [`FetchAsync`]
/// implementation.
///
/// The delay between retries follows:
/// ```text
/// delay = min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..250ms)
/// ```
pub struct RetryFetch<T> {
    inner: T,
    max_retries: usize,
    base_delay: StdDuration,
    max_delay: StdDuration,
}

impl<T> RetryFetch<T>
where
    T: FetchAsync,
{
    pub fn new(inner: T, max_retries: usize, base_delay: StdDuration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: StdDuration::from_secs(30),
        }
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<T> FetchAsync for RetryFetch<T>
where
    T: FetchAsync,
{
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    attempt += 1;
                    let total_dt = total_t0.elapsed();

                    if attempt > self.max_retries {
                        error!(
                            attempt,
                            max = self.max_retries,
                            elapsed_ms_total = total_dt.as_millis() as u64,
                            error = %e,
                            "fetch() exhausted retries"
                        );
                        return Err(e);
                    }

                    // backoff calc
                    let mut delay = self.base_delay.saturating_mul(1 << (attempt - 1));
                    if delay > self.max_delay {
                        delay = self.max_delay;
                    }
                    let jitter_ms: u64 = rng().random_range(0..=250);
                    let delay = delay + StdDuration::from_millis(jitter_ms);

                    warn!(
                        attempt,
                        max = self.max_retries,
                        elapsed_ms_total = total_dt.as_millis() as u64,
                        ?delay,
                        error = %e,
                        "fetch() attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Download a page with the configured retry policy.
///
/// This is the entry point the collectors call: builds a client from
/// `config`, wraps it with [`RetryFetch`], and fetches `url`.
#[instrument(level = "info", skip(config))]
pub async fn fetch_with_backoff(
    config: &ScrapingConfig,
    url: &str,
) -> Result<String, Box<dyn Error>> {
    let fetcher = HttpFetcher::new(config)?;
    let client = RetryFetch::new(
        fetcher,
        config.max_retries,
        StdDuration::from_millis(config.retry_base_delay_ms),
    );
    client.fetch(url).await
}
