//! Scrape Amazon India laptop search results into a CSV file.
//!
//! `LaptopSearch` walks the pages of a search, parsing every listing
//! into a `ListingRecord` with brand, RAM, storage, processor,
//! generation and GPU pulled out of its title and specs. `export_csv`
//! writes the collected records to disk.

mod config;
mod export;
pub mod listing;
pub mod search;

pub use config::{
    build_headers, DelayRange, ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES,
    DEFAULT_OUTPUT_PATH, DEFAULT_QUERY,
};
pub use export::{export_csv, write_csv};
pub use listing::ListingRecord;
pub use search::{Fetch, HttpFetcher, LaptopSearch};
pub use url::Url;
