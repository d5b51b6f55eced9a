mod extract;
mod parser;
mod record;

pub use extract::{
    extract_brand, extract_gpu, extract_generation, extract_processor, extract_ram,
    extract_storage, ExtractedFields,
};
pub use parser::{parse_listings, parse_search_page};
pub use record::ListingRecord;
