//! Oligosim - chemical reaction network simulator for branched oligomer growth
//!
//! This library enumerates branched/linear oligomer structures up to a size
//! bound, derives the symbolic growth/death/pore-diffusion/outflow reaction
//! set, and integrates the resulting ODE system to time-resolved species
//! concentrations.

pub mod chemistry;
pub mod config;
pub mod error;
pub mod export;
pub mod network;

pub use chemistry::{build_reaction_records, generate, Structure};
pub use config::{KineticParameters, Parameters, SimulationParameters};
pub use error::SimulationError;
pub use network::{
    ConcentrationTable, IntegratorConfig, RateTerm, ReactionNetwork, ReactionRecord,
};
