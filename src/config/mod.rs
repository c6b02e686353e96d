//! Configuration module for loading simulation parameters.
//!
//! Kinetic and simulation parameters load from JSON with sensible
//! defaults when the files are absent.

mod parameters;

pub use parameters::{KineticParameters, Parameters, RatePair, SimulationParameters};
