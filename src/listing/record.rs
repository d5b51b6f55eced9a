use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single laptop listing found in search results.
///
/// Every field is always present; anything that could not be found
/// in the markup or matched in the text is an empty string.
pub struct ListingRecord {
    /// Title of the listing as shown on the results page.
    #[serde(rename = "Product Name")]
    pub product_name: String,
    /// First word of the title.
    #[serde(rename = "Brand")]
    pub brand: String,
    /// Whole and fractional price text joined together.
    #[serde(rename = "Price (INR)")]
    pub price_inr: String,
    /// Raw rating label, e.g. `4.3 out of 5 stars`.
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "RAM")]
    pub ram: String,
    #[serde(rename = "Storage")]
    pub storage: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "Generation")]
    pub generation: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    /// Secondary description block, lines joined with ` | `.
    #[serde(rename = "Specs / Description")]
    pub specs_text: String,
}

impl ListingRecord {
    /// Column labels in export order.
    pub const HEADERS: [&'static str; 10] = [
        "Product Name",
        "Brand",
        "Price (INR)",
        "Rating",
        "RAM",
        "Storage",
        "Processor",
        "Generation",
        "GPU",
        "Specs / Description",
    ];
}
