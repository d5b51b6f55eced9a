use eyre::{Result, WrapErr};
use std::{fs::File, io, path::Path};
use tracing::info;

use crate::listing::ListingRecord;

/// Writes the header row and one row per record, returning the number
/// of records written.
///
/// The header is always written, even when there are no records.
pub fn write_csv<W: io::Write>(records: &[ListingRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(ListingRecord::HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(records.len())
}

/// Exports the records to a CSV file, replacing any existing file.
pub fn export_csv(records: &[ListingRecord], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("Could not create {}", path.display()))?;
    let written =
        write_csv(records, file).wrap_err_with(|| format!("Could not write {}", path.display()))?;
    info!("Saved {written} records to {}", path.display());
    Ok(written)
}
