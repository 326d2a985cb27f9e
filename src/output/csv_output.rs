//! CSV export backend
//!
//! Writes the record set as one CSV file: a header row taken from the
//! record schema, then one row per record in extraction order.

use crate::crawler::BusinessRecord;
use crate::output::traits::{Exporter, OutputResult};
use std::fs::File;
use std::path::Path;

/// Exports records as a CSV file
#[derive(Debug, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, records: &[BusinessRecord], path: &Path) -> OutputResult<()> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new().from_writer(file);

        writer.write_record(BusinessRecord::FIELD_NAMES)?;
        for record in records {
            writer.write_record(record.to_row())?;
        }
        writer.flush()?;

        Ok(())
    }
}
