//! ODE integration for reaction-network simulations.
//!
//! Implements 4th-order Runge-Kutta (RK4) integration for systems of
//! ordinary differential equations over species concentrations.
//!
//! The integrator is a black box to the solver: it advances a state vector
//! across a time span with fixed substeps and carries no knowledge of the
//! reaction network. Step-size control beyond the configured substep is
//! deliberately absent.
//!
//! Reference: Press et al., Numerical Recipes, 3rd ed., Cambridge
//! University Press 2007

use crate::error::SimulationError;

/// Configuration for the ODE integrator
#[derive(Debug, Clone)]
pub struct IntegratorConfig {
    /// Maximum substep width in time units
    pub dt: f64,
    /// Concentration floor (prevents negative values)
    pub min_concentration: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            min_concentration: 0.0,
        }
    }
}

/// 4th-order Runge-Kutta integrator for ODE systems
///
/// Solves dy/dt = f(y) where y is a vector of concentrations.
pub struct Rk4Integrator {
    /// Configuration
    pub config: IntegratorConfig,
    /// Number of substeps taken
    pub step_count: u64,
    // Scratch vectors for intermediate calculations
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    y_temp: Vec<f64>,
}

impl Rk4Integrator {
    /// Create a new RK4 integrator for a system with n variables
    pub fn new(n_variables: usize, config: IntegratorConfig) -> Self {
        Self {
            config,
            step_count: 0,
            k1: vec![0.0; n_variables],
            k2: vec![0.0; n_variables],
            k3: vec![0.0; n_variables],
            k4: vec![0.0; n_variables],
            y_temp: vec![0.0; n_variables],
        }
    }

    /// Resize internal buffers if the system size changes
    fn resize(&mut self, n_variables: usize) {
        if self.k1.len() != n_variables {
            self.k1.resize(n_variables, 0.0);
            self.k2.resize(n_variables, 0.0);
            self.k3.resize(n_variables, 0.0);
            self.k4.resize(n_variables, 0.0);
            self.y_temp.resize(n_variables, 0.0);
        }
    }

    /// Perform one RK4 step of width `dt`
    ///
    /// # Arguments
    /// * `y` - Current state vector, modified in place
    /// * `dt` - Step width
    /// * `derivatives` - Computes dy/dt given the current state
    ///
    /// # RK4 Algorithm
    /// k1 = f(y)
    /// k2 = f(y + dt/2 * k1)
    /// k3 = f(y + dt/2 * k2)
    /// k4 = f(y + dt * k3)
    /// y_new = y + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
    pub fn step<F>(&mut self, y: &mut [f64], dt: f64, derivatives: &mut F) -> Result<(), SimulationError>
    where
        F: FnMut(&[f64], &mut [f64]) -> Result<(), SimulationError>,
    {
        let n = y.len();
        self.resize(n);

        derivatives(y, &mut self.k1)?;

        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * dt * self.k1[i];
        }
        derivatives(&self.y_temp, &mut self.k2)?;

        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * dt * self.k2[i];
        }
        derivatives(&self.y_temp, &mut self.k3)?;

        for i in 0..n {
            self.y_temp[i] = y[i] + dt * self.k3[i];
        }
        derivatives(&self.y_temp, &mut self.k4)?;

        let dt_6 = dt / 6.0;
        for i in 0..n {
            y[i] += dt_6 * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
            if y[i] < self.config.min_concentration {
                y[i] = self.config.min_concentration;
            }
        }

        self.step_count += 1;
        Ok(())
    }

    /// Advance the state across `span` time units with fixed substeps
    ///
    /// The span is divided into equal substeps no wider than the configured
    /// `dt`, so the integration lands exactly on the span boundary.
    pub fn advance<F>(
        &mut self,
        y: &mut [f64],
        span: f64,
        derivatives: &mut F,
    ) -> Result<(), SimulationError>
    where
        F: FnMut(&[f64], &mut [f64]) -> Result<(), SimulationError>,
    {
        if span <= 0.0 {
            return Ok(());
        }
        let n_steps = (span / self.config.dt).ceil().max(1.0) as usize;
        let h = span / n_steps as f64;
        for _ in 0..n_steps {
            self.step(y, h, derivatives)?;
        }
        Ok(())
    }
}
