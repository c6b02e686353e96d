//! Error types for reaction parsing and ODE solving.

use thiserror::Error;

/// Errors surfaced by the reaction network builder and solver.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A reaction equation contains neither `<->` nor `->`.
    #[error("malformed reaction equation (no '->' or '<->' arrow): {equation:?}")]
    MalformedReaction {
        /// The offending equation string
        equation: String,
    },

    /// A rate term references a reactant that is not part of the species
    /// universe. Indicates an inconsistency between the reaction set and
    /// the concentration state; the solve is aborted.
    #[error("reactant {species:?} not found in the concentration mapping")]
    MissingSpecies {
        /// Name of the unresolved reactant
        species: String,
    },

    /// The requested time grid contains no points.
    #[error("time grid is empty")]
    EmptyTimeGrid,

    /// The requested time grid is not non-decreasing.
    #[error("time grid is not non-decreasing at index {index} ({previous} -> {current})")]
    NonMonotonicTimeGrid {
        /// Index of the offending grid point
        index: usize,
        /// Grid value before the violation
        previous: f64,
        /// Offending grid value
        current: f64,
    },
}
