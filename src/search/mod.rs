mod fetch;
#[allow(clippy::module_inception)]
mod search;

pub use fetch::{Fetch, HttpFetcher};
pub use search::LaptopSearch;
