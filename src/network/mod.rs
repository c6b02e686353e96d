//! Reaction network: parsing, assembly, and ODE integration.
//!
//! The pipeline through this module:
//! 1. [`parser`] splits symbolic equations into reactant/product tokens,
//! 2. [`solver`] assembles per-species signed rate-law terms and
//!    integrates them over a time grid,
//! 3. [`integrator`] supplies the fixed-substep RK4 stepper,
//! 4. [`table`] holds the time-indexed concentration output.
//!
//! Species identity is the exact equation token; the canonical species
//! order is lexicographic and fixed when the network is built.

pub mod integrator;
pub mod parser;
pub mod solver;
pub mod table;

pub use integrator::{IntegratorConfig, Rk4Integrator};
pub use parser::{RateTerm, ReactionRecord};
pub use solver::ReactionNetwork;
pub use table::ConcentrationTable;
