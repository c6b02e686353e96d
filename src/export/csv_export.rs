//! CSV export of solved concentration tables.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::network::ConcentrationTable;

/// Export a concentration table to a timestamped CSV file
///
/// Creates the exports directory if it doesn't exist.
/// Filename is auto-generated with timestamp: `concentrations_YYYYMMDD_HHMMSS.csv`
///
/// Returns the path to the saved CSV file.
pub fn export_table_csv(table: &ConcentrationTable) -> Result<PathBuf> {
    // Create exports directory
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    // Generate filename with timestamp
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("concentrations_{}.csv", timestamp);
    let path = dir.join(&filename);

    export_table_csv_to(table, &path)?;
    Ok(path)
}

/// Export a concentration table to a specific file
///
/// Column layout: `time` followed by every species in the table's
/// canonical order; one row per time point.
pub fn export_table_csv_to<P: AsRef<Path>>(table: &ConcentrationTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    let mut header = Vec::with_capacity(table.species().len() + 1);
    header.push("time".to_string());
    header.extend(table.species().iter().cloned());
    writer.write_record(&header)?;

    let mut record = Vec::with_capacity(header.len());
    for (i, time) in table.times().iter().enumerate() {
        record.clear();
        record.push(time.to_string());
        record.extend(table.row(i).iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    log::info!(
        "CSV export completed: {} ({} rows, {} species)",
        path.display(),
        table.len(),
        table.species().len()
    );
    Ok(())
}
