use rand::Rng;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::{path::PathBuf, time::Duration};

/// Search endpoint of Amazon India.
pub const DEFAULT_BASE_URL: &str = "https://www.amazon.in/s";
pub const DEFAULT_QUERY: &str = "laptop under 50k";
pub const DEFAULT_MAX_PAGES: u32 = 15;
pub const DEFAULT_OUTPUT_PATH: &str = "amazon_laptops_under_50k.csv";

/// Builds the default headers for the client.
///
/// Without a browser user agent and a language preference the
/// results page is often refused or served in a different layout.
pub fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-IN, en;q=0.9"),
    );
    headers
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bounds of the random pause between two page fetches.
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    /// Bounds given in either order are swapped into place.
    pub fn new(a: Duration, b: Duration) -> Self {
        DelayRange {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_secs(min: u64, max: u64) -> Self {
        Self::new(Duration::from_secs(min), Duration::from_secs(max))
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draws a duration uniformly from `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let secs = rand::thread_rng().gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::from_secs(2, 5)
    }
}

#[derive(Debug, Clone)]
/// Settings of one scraping run.
///
/// `ScrapeConfig::default()` is the stock run: 15 pages of
/// "laptop under 50k" on amazon.in, 2 to 5 seconds apart.
pub struct ScrapeConfig {
    /// Search endpoint, without query parameters.
    pub base_url: String,
    /// Search terms, sent as the `k` parameter.
    pub query: String,
    /// Pages `1..=max_pages` are fetched.
    pub max_pages: u32,
    pub delay: DelayRange,
    /// Headers sent with every request.
    pub headers: HeaderMap,
    /// Where the CSV export is written.
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.into(),
            query: DEFAULT_QUERY.into(),
            max_pages: DEFAULT_MAX_PAGES,
            delay: DelayRange::default(),
            headers: build_headers(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
        }
    }
}
