use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::listing::{ExtractedFields, ListingRecord};

/// One product card in the search results.
static RESULT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-component-type="s-search-result"]"#).unwrap()
});
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
static PRICE_WHOLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());
static PRICE_FRACTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-fraction").unwrap());
static RATING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());
/// Matches the class attribute exactly, not any div carrying these classes.
static SPECS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class="a-row a-size-base a-color-secondary"]"#).unwrap()
});

/// Parses a fetched search results page into listing records,
/// in document order.
pub fn parse_search_page(body: &str) -> Vec<ListingRecord> {
    let document = Html::parse_document(body);
    parse_listings(&document)
}

pub fn parse_listings(document: &Html) -> Vec<ListingRecord> {
    let records = document
        .select(&RESULT)
        .map(parse_listing)
        .inspect(|record| trace!("Parsed listing: {:?}", record.product_name))
        .collect::<Vec<_>>();
    debug!("Parsed {} listings", records.len());
    records
}

/// Trimmed text of the first element matching `selector` inside `item`.
fn first_text(item: ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|elem| elem.text().collect::<String>().trim().to_string())
}

fn parse_listing(item: ElementRef) -> ListingRecord {
    let product_name = first_text(item, &TITLE).unwrap_or_default();

    let price_inr = first_text(item, &PRICE_WHOLE)
        .map(|whole| whole + &first_text(item, &PRICE_FRACTION).unwrap_or_default())
        .unwrap_or_default();

    let rating = first_text(item, &RATING).unwrap_or_default();

    let specs_text = first_text(item, &SPECS)
        .map(|specs| specs.replace('\n', " | "))
        .unwrap_or_default();

    let ExtractedFields {
        brand,
        ram,
        storage,
        processor,
        generation,
        gpu,
    } = ExtractedFields::from_text(&product_name, &specs_text);

    ListingRecord {
        product_name,
        brand,
        price_inr,
        rating,
        ram,
        storage,
        processor,
        generation,
        gpu,
        specs_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(listings: &str) -> String {
        format!("<html><body><div class=\"s-main-slot\">{listings}</div></body></html>")
    }

    #[test]
    fn single_listing_without_specs_or_rating() {
        let body = page(
            r#"<div data-component-type="s-search-result">
                 <h2><a><span>Dell Inspiron 15 8GB RAM 512GB SSD Intel i5 11th Gen</span></a></h2>
                 <span class="a-price"><span class="a-price-whole">45</span><span class="a-price-fraction">999</span></span>
               </div>"#,
        );
        let records = parse_search_page(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            ListingRecord {
                product_name: "Dell Inspiron 15 8GB RAM 512GB SSD Intel i5 11th Gen".into(),
                brand: "Dell".into(),
                price_inr: "45999".into(),
                rating: "".into(),
                ram: "8GB".into(),
                storage: "8GB".into(),
                processor: "Intel i5".into(),
                generation: "11th Gen".into(),
                gpu: "".into(),
                specs_text: "".into(),
            }
        );
    }

    #[test]
    fn missing_title_leaves_name_and_brand_empty() {
        let body = page(
            r#"<div data-component-type="s-search-result">
                 <span class="a-icon-alt">4.1 out of 5 stars</span>
               </div>"#,
        );
        let records = parse_search_page(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "");
        assert_eq!(records[0].brand, "");
        assert_eq!(records[0].rating, "4.1 out of 5 stars");
    }

    #[test]
    fn fraction_without_whole_price_is_ignored() {
        let body = page(
            r#"<div data-component-type="s-search-result">
                 <h2>HP 250 G8</h2>
                 <span class="a-price-fraction">99</span>
               </div>"#,
        );
        assert_eq!(parse_search_page(&body)[0].price_inr, "");
    }

    #[test]
    fn whole_price_without_fraction_is_kept() {
        let body = page(
            r#"<div data-component-type="s-search-result">
                 <h2>HP 250 G8</h2>
                 <span class="a-price-whole"> 32,990 </span>
               </div>"#,
        );
        assert_eq!(parse_search_page(&body)[0].price_inr, "32,990");
    }

    #[test]
    fn specs_block_feeds_extractors() {
        let body = page(
            "<div data-component-type=\"s-search-result\">\
               <h2>Acer Aspire 7 Gaming Laptop</h2>\
               <div class=\"a-row a-size-base a-color-secondary\">AMD Ryzen 5 5500U\n16 GB DDR4\nRTX 3050</div>\
             </div>",
        );
        let record = &parse_search_page(&body)[0];
        assert_eq!(record.specs_text, "AMD Ryzen 5 5500U | 16 GB DDR4 | RTX 3050");
        assert_eq!(record.brand, "Acer");
        assert_eq!(record.ram, "16 GB");
        assert_eq!(record.processor, "AMD");
        assert_eq!(record.gpu, "RTX 3050");
        assert_eq!(record.storage, "");
    }

    #[test]
    fn specs_class_must_match_exactly() {
        let body = page(
            r#"<div data-component-type="s-search-result">
                 <h2>Lenovo IdeaPad</h2>
                 <div class="a-row a-size-base a-color-secondary a-spacing-top-mini">Intel Core i3</div>
               </div>"#,
        );
        let record = &parse_search_page(&body)[0];
        assert_eq!(record.specs_text, "");
        assert_eq!(record.processor, "");
    }

    #[test]
    fn listings_keep_document_order() {
        let body = page(
            r#"<div data-component-type="s-search-result"><h2>First</h2></div>
               <div data-component-type="s-impression-counter"><h2>Ad</h2></div>
               <div data-component-type="s-search-result"><h2>Second</h2></div>"#,
        );
        let names = parse_search_page(&body)
            .into_iter()
            .map(|record| record.product_name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn page_without_listings() {
        assert!(parse_search_page("<html><body><p>No results</p></body></html>").is_empty());
    }
}
