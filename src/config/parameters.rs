//! Parameter structures for the reaction network and the solver run.
//!
//! Kinetic parameters pick the size bound and the per-family rate
//! constants; simulation parameters pick the time grid, the integrator
//! settings, and the reactor's initial/fixed concentrations.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Reaction network kinetics (size bound, rate constants)
    pub kinetics: KineticParameters,
    /// Solver run settings (time grid, integrator, reactor contents)
    pub simulation: SimulationParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let kinetics = KineticParameters::load_or_default("data/parameters/kinetics.json");
        let simulation = SimulationParameters::load_or_default("data/parameters/simulation.json");

        Self {
            kinetics,
            simulation,
        }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let kinetics = KineticParameters::load_or_default(dir.join("kinetics.json"));
        let simulation = SimulationParameters::load_or_default(dir.join("simulation.json"));

        Self {
            kinetics,
            simulation,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            kinetics: KineticParameters::default(),
            simulation: SimulationParameters::default(),
        }
    }
}

/// Forward/backward rate constants of a reversible reaction family
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatePair {
    /// Forward (left-to-right) rate constant
    pub forward: f64,
    /// Backward (right-to-left) rate constant
    pub backward: f64,
}

/// Kinetic parameters for the oligomerization network
///
/// One rate pair per reversible reaction family; outflow is irreversible
/// and carries a single constant shared by pore and direct outflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticParameters {
    /// Largest total structure mass, in carbon units (even, >= 4)
    pub max_chain_size: u32,

    /// Monomer addition at the radical site (1/(conc*time), 1/time)
    pub growth: RatePair,

    /// Radical loss leaving a neutral chain (1/time, 1/(conc*time))
    pub death: RatePair,

    /// Neutral chain transfer into the pore compartment (1/time both ways)
    pub pore_diffusion: RatePair,

    /// Irreversible transfer out of the reactor (1/time)
    pub outflow_rate: f64,
}

impl KineticParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded kinetic parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse kinetic parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Kinetic parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for KineticParameters {
    fn default() -> Self {
        Self {
            max_chain_size: 10,

            // Chain growth dominates its reverse reaction
            growth: RatePair {
                forward: 10.0,
                backward: 0.1,
            },

            // Radical loss and re-initiation
            death: RatePair {
                forward: 0.5,
                backward: 0.05,
            },

            // Pore exchange
            pore_diffusion: RatePair {
                forward: 1.0,
                backward: 0.5,
            },

            // Reactor outflow
            outflow_rate: 0.2,
        }
    }
}

/// Solver run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// End of the simulated time span (time units, grid starts at 0)
    pub t_end: f64,

    /// Number of points in the uniform output time grid
    pub n_time_points: usize,

    /// Maximum RK4 substep width (time units)
    pub integrator_dt: f64,

    /// Concentration floor applied after every substep
    pub min_concentration: f64,

    /// Initial reactor contents; species not listed start at zero
    pub initial_concentrations: HashMap<String, f64>,

    /// Species clamped at their initial concentration (constant feeds)
    pub fixed_species: Vec<String>,
}

impl SimulationParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded simulation parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse simulation parameters: {}, using defaults",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Simulation parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    /// The uniform output time grid `[0, t_end]` with `n_time_points` points
    pub fn time_grid(&self) -> Vec<f64> {
        let n = self.n_time_points.max(2);
        let step = self.t_end / (n - 1) as f64;
        (0..n).map(|i| i as f64 * step).collect()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            t_end: 100.0,
            n_time_points: 201,
            integrator_dt: 1e-3,
            min_concentration: 0.0,

            // Radical sites plus a monomer feed held constant
            initial_concentrations: HashMap::from([
                ("Cr".to_string(), 1.0),
                ("C2".to_string(), 10.0),
            ]),
            fixed_species: vec!["C2".to_string()],
        }
    }
}
