use amazon_laptop_scraper::{export_csv, LaptopSearch, ScrapeConfig};
use eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,amazon_laptop_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ScrapeConfig::default();
    let search = LaptopSearch::new(config)?;
    let records = search.run().await?;
    export_csv(&records, &search.config().output_path)?;
    Ok(())
}
