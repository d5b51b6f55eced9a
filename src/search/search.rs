use eyre::{Result, WrapErr};
use tracing::{debug, info, warn};
use url::Url;

use crate::listing::{parse_search_page, ListingRecord};
use crate::search::{Fetch, HttpFetcher};
use crate::ScrapeConfig;

#[derive(Debug)]
/// Walks the pages of a product search and collects every listing.
///
/// Pages are fetched one at a time with a random pause in between.
/// Use `LaptopSearch::new` for the live site, or
/// `LaptopSearch::with_fetcher` to read pages from elsewhere.
pub struct LaptopSearch<F> {
    config: ScrapeConfig,
    fetcher: F,
}

impl LaptopSearch<HttpFetcher> {
    /// Searches over HTTP using the configured headers.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.headers.clone())?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetch> LaptopSearch<F> {
    pub fn with_fetcher(config: ScrapeConfig, fetcher: F) -> Self {
        LaptopSearch { config, fetcher }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// URL of a single results page: the search query plus a page number.
    pub fn page_url(&self, page: u32) -> Result<Url> {
        Url::parse_with_params(
            &self.config.base_url,
            &[("k", self.config.query.to_owned()), ("page", page.to_string())],
        )
        .wrap_err_with(|| format!("Invalid search URL {:?}", self.config.base_url))
    }

    /// Fetches and parses one page.
    ///
    /// A failed fetch is logged and gives no records, so one bad page
    /// doesn't end the run.
    pub async fn scrape_page(&self, page: u32) -> Result<Vec<ListingRecord>> {
        let url = self.page_url(page)?;
        info!("Scraping: {url}");

        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(err) => {
                warn!("Skipping page {page}: {err:#}");
                return Ok(Vec::new());
            }
        };

        let records = parse_search_page(&body);
        debug!("Page {page} gave {} listings", records.len());
        Ok(records)
    }

    /// Scrapes pages `1..=max_pages` in order and returns all records,
    /// page by page.
    pub async fn run(&self) -> Result<Vec<ListingRecord>> {
        let max_pages = self.config.max_pages;
        let mut records = Vec::new();

        for page in 1..=max_pages {
            records.extend(self.scrape_page(page).await?);

            if page < max_pages {
                let pause = self.config.delay.sample();
                debug!("Waiting {:.1}s before the next page", pause.as_secs_f64());
                tokio::time::sleep(pause).await;
            }
        }

        info!("Collected {} records from {max_pages} pages", records.len());
        Ok(records)
    }
}
