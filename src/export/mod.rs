//! Export functionality for simulation results.
//!
//! Provides CSV time-series export and JSON solution export.

mod csv_export;
mod json_export;

pub use csv_export::{export_table_csv, export_table_csv_to};
pub use json_export::{export_solution_json, export_solution_json_to, SolutionExport};
