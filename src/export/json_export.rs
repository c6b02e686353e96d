//! JSON export of solved concentration tables.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::network::ConcentrationTable;

/// Full solution export structure
#[derive(Debug, Clone, Serialize)]
pub struct SolutionExport {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    /// Solved concentration table
    pub table: ConcentrationTable,
}

/// Export a solved concentration table to JSON
///
/// Creates the exports directory if it doesn't exist.
/// Filename is auto-generated with timestamp: `solution_YYYYMMDD_HHMMSS.json`
///
/// Returns the path to the saved JSON file.
pub fn export_solution_json(table: &ConcentrationTable) -> Result<PathBuf> {
    // Create exports directory
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    // Generate filename with timestamp
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("solution_{}.json", timestamp);
    let path = dir.join(&filename);

    export_solution_json_to(table, &path)?;
    Ok(path)
}

/// Export a solution to a specific file
pub fn export_solution_json_to<P: AsRef<Path>>(
    table: &ConcentrationTable,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let export = SolutionExport {
        exported_at: Local::now().to_rfc3339(),
        version: "1.0.0",
        table: table.clone(),
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    log::info!("JSON solution exported: {}", path.display());
    Ok(())
}
