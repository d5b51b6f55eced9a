use async_trait::async_trait;
use eyre::{bail, Result};
use reqwest::{header::HeaderMap, Client};
use url::Url;

/// Source of search results pages.
#[async_trait]
pub trait Fetch {
    /// Fetches the page body. A non-success status is an error.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Fetches pages over HTTP with a fixed set of default headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(headers: HeaderMap) -> Result<Self> {
        let client = Client::builder().default_headers(headers).build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let webpage = self.client.get(url.to_owned()).send().await?;
        let status = webpage.status();
        if !status.is_success() {
            bail!("Request failed: {status} for {url}");
        }
        Ok(webpage.text().await?)
    }
}
