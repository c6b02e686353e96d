//! Time-indexed concentration table.
//!
//! The solver's output: one row per requested time point, one column per
//! species in the network's canonical (lexicographic) order. Consumed by
//! the export layer and by downstream plotting/statistics collaborators.

use serde::Serialize;

/// Concentrations over time for every species in a solved network.
#[derive(Debug, Clone, Serialize)]
pub struct ConcentrationTable {
    /// Species names, lexicographically sorted (column order)
    species: Vec<String>,
    /// Time points in the order requested (row order)
    times: Vec<f64>,
    /// Row-major concentration values: `values[row][column]`
    values: Vec<Vec<f64>>,
}

impl ConcentrationTable {
    /// Assemble a table from its parts.
    ///
    /// Row count must match the time grid and every row must match the
    /// species count.
    pub(crate) fn new(species: Vec<String>, times: Vec<f64>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(times.len(), values.len());
        debug_assert!(values.iter().all(|row| row.len() == species.len()));
        Self {
            species,
            times,
            values,
        }
    }

    /// Species names in column order.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Time points in row order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of rows (time points).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Concentration row at the given time index.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index]
    }

    /// Concentration of `species` at the given time index, or `None` if
    /// the species is not part of the network.
    pub fn value(&self, index: usize, species: &str) -> Option<f64> {
        let col = self.column_index(species)?;
        Some(self.values[index][col])
    }

    /// The full time series of `species`, or `None` if unknown.
    pub fn column(&self, species: &str) -> Option<Vec<f64>> {
        let col = self.column_index(species)?;
        Some(self.values.iter().map(|row| row[col]).collect())
    }

    /// Concentration of `species` at the final time point.
    pub fn final_value(&self, species: &str) -> Option<f64> {
        let col = self.column_index(species)?;
        self.values.last().map(|row| row[col])
    }

    fn column_index(&self, species: &str) -> Option<usize> {
        // Columns are sorted, so the lookup can binary-search.
        self.species.binary_search_by(|s| s.as_str().cmp(species)).ok()
    }
}
