//! Pattern matchers pulling laptop attributes out of free text.
//!
//! Each matcher returns the first span found left to right, with the
//! alternatives of a pattern tried in the order they are written.
//! No match is not an error: the result is simply empty.

use regex::Regex;
use std::sync::LazyLock;

static RAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+GB|\d+\s?GB)").unwrap());

// `\d+TB SSD` is shadowed by `\d+TB` and never matches on its own.
static STORAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+TB|\d+GB SSD|\d+GB HDD|\d+GB|\d+TB SSD)").unwrap()
});

static PROCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Intel\s?[iI]\d|Ryzen\s?\d|\bAMD\b|Core\s?i\d)").unwrap()
});

static GENERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}th\s?Gen|\d{1,2}th\s?generation)").unwrap());

static GPU: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(RTX\s?\d+|GTX\s?\d+|RTX|GTX|Integrated|Graphics)").unwrap()
});

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First whitespace-delimited word of the title.
pub fn extract_brand(title: &str) -> String {
    title
        .split_whitespace()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

/// Memory size such as `16GB` or `16 GB`.
pub fn extract_ram(text: &str) -> String {
    first_match(&RAM, text)
}

/// Disk size; the leftmost span wins, so `8GB RAM 512GB SSD` gives `8GB`.
pub fn extract_storage(text: &str) -> String {
    first_match(&STORAGE, text)
}

/// CPU family: `Intel i5`, `Ryzen 5`, `AMD` or `Core i7`.
pub fn extract_processor(text: &str) -> String {
    first_match(&PROCESSOR, text)
}

/// CPU generation: `11th Gen`, `12th generation`.
pub fn extract_generation(text: &str) -> String {
    first_match(&GENERATION, text)
}

/// Graphics chip; `Graphics` wins when it appears before `RTX`.
pub fn extract_gpu(text: &str) -> String {
    first_match(&GPU, text)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Attributes extracted from one listing's title and specs block.
pub struct ExtractedFields {
    pub brand: String,
    pub ram: String,
    pub storage: String,
    pub processor: String,
    pub generation: String,
    pub gpu: String,
}

impl ExtractedFields {
    /// Runs every matcher. The brand comes from the title alone, the
    /// rest from the title and specs joined by a single space.
    pub fn from_text(title: &str, specs: &str) -> Self {
        let combined = format!("{title} {specs}");
        ExtractedFields {
            brand: extract_brand(title),
            ram: extract_ram(&combined),
            storage: extract_storage(&combined),
            processor: extract_processor(&combined),
            generation: extract_generation(&combined),
            gpu: extract_gpu(&combined),
        }
    }
}
