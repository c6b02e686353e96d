//! Reaction-network assembly and ODE solving.
//!
//! `ReactionNetwork::from_records` turns a list of symbolic reaction
//! records into per-species rate laws: every record contributes signed
//! mass-action terms to each species it touches, and the network keeps
//! those terms individually rather than folding them into a stoichiometric
//! matrix. `solve` then integrates the resulting system across a caller
//! supplied time grid with the RK4 integrator.
//!
//! Species order is fixed at construction: the lexicographically sorted
//! list of every name appearing in any equation. All vectors handed to or
//! produced by the network use that order.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::SimulationError;
use crate::network::integrator::{IntegratorConfig, Rk4Integrator};
use crate::network::parser::{parse_equation, RateTerm, ReactionRecord};
use crate::network::table::ConcentrationTable;

/// A parsed reaction network ready for integration.
#[derive(Debug, Clone)]
pub struct ReactionNetwork {
    /// Per-species signed rate-law terms, keyed by species name.
    contributions: BTreeMap<String, Vec<RateTerm>>,
    /// Species names, lexicographically sorted. Fixed at construction.
    species: Vec<String>,
    /// Name to column index, derived from `species`.
    index: HashMap<String, usize>,
    /// Species held at their initial concentration throughout the solve.
    fixed: HashSet<String>,
    /// Integrator settings used by `solve`.
    integrator_config: IntegratorConfig,
}

impl ReactionNetwork {
    /// Build a network from symbolic reaction records.
    ///
    /// Each record's equation is parsed and its rate constants attached as
    /// signed terms: reactants are consumed by the forward direction and
    /// regenerated by the reverse one, products the other way around. A
    /// record whose `backward` is `None` contributes forward terms only.
    pub fn from_records(records: &[ReactionRecord]) -> Result<Self, SimulationError> {
        let mut contributions: BTreeMap<String, Vec<RateTerm>> = BTreeMap::new();

        for record in records {
            let parsed = parse_equation(&record.equation)?;
            let backward = if parsed.reversible {
                record.backward
            } else {
                None
            };

            for reactant in &parsed.reactants {
                let terms = contributions.entry(reactant.clone()).or_default();
                terms.push(RateTerm {
                    reactants: parsed.reactants.clone(),
                    rate: -record.forward,
                });
                if let Some(kb) = backward {
                    terms.push(RateTerm {
                        reactants: parsed.products.clone(),
                        rate: kb,
                    });
                }
            }

            for product in &parsed.products {
                let terms = contributions.entry(product.clone()).or_default();
                terms.push(RateTerm {
                    reactants: parsed.reactants.clone(),
                    rate: record.forward,
                });
                if let Some(kb) = backward {
                    terms.push(RateTerm {
                        reactants: parsed.products.clone(),
                        rate: -kb,
                    });
                }
            }
        }

        // BTreeMap iterates in key order, so the species list comes out
        // lexicographically sorted.
        let species: Vec<String> = contributions.keys().cloned().collect();
        let index = species
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        log::info!(
            "Built reaction network: {} species from {} reactions",
            species.len(),
            records.len()
        );

        Ok(Self {
            contributions,
            species,
            index,
            fixed: HashSet::new(),
            integrator_config: IntegratorConfig::default(),
        })
    }

    /// Hold the given species at their initial concentrations.
    ///
    /// Fixed species still appear in every reactant product, so they keep
    /// driving the reactions they participate in; only their own rate of
    /// change is pinned to zero. Names not present in the network are
    /// ignored.
    pub fn with_fixed_concentrations<I>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.fixed.extend(species);
        self
    }

    /// Replace the integrator configuration used by `solve`.
    pub fn with_integrator_config(mut self, config: IntegratorConfig) -> Self {
        self.integrator_config = config;
        self
    }

    /// Species names in canonical (lexicographic) order.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Number of species in the network.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// The signed rate-law terms attached to `species`, if present.
    pub fn terms_for(&self, species: &str) -> Option<&[RateTerm]> {
        self.contributions.get(species).map(Vec::as_slice)
    }

    /// Evaluate d[conc]/dt into `dydt`, both in canonical species order.
    ///
    /// Each term contributes `rate * product(conc[r])` over its reactant
    /// tuple; fixed species get a zero derivative.
    pub fn rate_of_change(
        &self,
        conc: &[f64],
        dydt: &mut [f64],
    ) -> Result<(), SimulationError> {
        for (i, name) in self.species.iter().enumerate() {
            if self.fixed.contains(name) {
                dydt[i] = 0.0;
                continue;
            }
            let mut total = 0.0;
            for term in &self.contributions[name] {
                let mut rate = term.rate;
                for reactant in &term.reactants {
                    let col = self.index.get(reactant).ok_or_else(|| {
                        SimulationError::MissingSpecies {
                            species: reactant.clone(),
                        }
                    })?;
                    rate *= conc[*col];
                }
                total += rate;
            }
            dydt[i] = total;
        }
        Ok(())
    }

    /// Integrate the network across `time_grid` from the given initial
    /// concentrations.
    ///
    /// Species absent from `initial` start at zero. The first output row
    /// is the initial state itself, at `time_grid[0]`; each later row is
    /// reached by RK4 substepping across the preceding grid interval. The
    /// grid must be non-empty and non-decreasing; a repeated time point
    /// repeats the row.
    pub fn solve(
        &self,
        initial: &HashMap<String, f64>,
        time_grid: &[f64],
    ) -> Result<ConcentrationTable, SimulationError> {
        if time_grid.is_empty() {
            return Err(SimulationError::EmptyTimeGrid);
        }
        for (i, window) in time_grid.windows(2).enumerate() {
            if window[1] < window[0] {
                return Err(SimulationError::NonMonotonicTimeGrid {
                    index: i + 1,
                    previous: window[0],
                    current: window[1],
                });
            }
        }

        for name in initial.keys() {
            if !self.index.contains_key(name) {
                log::warn!("Initial concentration for unknown species '{}' ignored", name);
            }
        }

        let mut y: Vec<f64> = self
            .species
            .iter()
            .map(|name| initial.get(name).copied().unwrap_or(0.0))
            .collect();

        let mut rows = Vec::with_capacity(time_grid.len());
        rows.push(y.clone());

        let mut integrator = Rk4Integrator::new(self.species.len(), self.integrator_config.clone());
        let mut derivatives =
            |state: &[f64], dydt: &mut [f64]| self.rate_of_change(state, dydt);

        for window in time_grid.windows(2) {
            integrator.advance(&mut y, window[1] - window[0], &mut derivatives)?;
            rows.push(y.clone());
        }

        log::debug!(
            "Solved network over {} time points ({} RK4 substeps)",
            time_grid.len(),
            integrator.step_count
        );

        Ok(ConcentrationTable::new(
            self.species.clone(),
            time_grid.to_vec(),
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(reactants: &[&str], rate: f64) -> RateTerm {
        RateTerm {
            reactants: reactants.iter().map(|s| s.to_string()).collect(),
            rate,
        }
    }

    #[test]
    fn test_irreversible_contributions() {
        // A + B -> C with kf = 2: each reactant is consumed by the forward
        // direction, the product gains it, and no reverse terms appear.
        let records = [ReactionRecord::irreversible("A + B -> C", 2.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        assert_eq!(network.species(), &["A", "B", "C"]);
        assert_eq!(
            network.terms_for("A").unwrap(),
            &[term(&["A", "B"], -2.0)]
        );
        assert_eq!(
            network.terms_for("B").unwrap(),
            &[term(&["A", "B"], -2.0)]
        );
        assert_eq!(network.terms_for("C").unwrap(), &[term(&["A", "B"], 2.0)]);
    }

    #[test]
    fn test_reversible_contributions() {
        let records = [ReactionRecord::reversible("A <-> B", 3.0, 0.5)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        assert_eq!(
            network.terms_for("A").unwrap(),
            &[term(&["A"], -3.0), term(&["B"], 0.5)]
        );
        assert_eq!(
            network.terms_for("B").unwrap(),
            &[term(&["A"], 3.0), term(&["B"], -0.5)]
        );
    }

    #[test]
    fn test_terms_kept_individually() {
        // Two reactions consuming A keep separate terms rather than a
        // summed constant.
        let records = [
            ReactionRecord::irreversible("A -> B", 1.0),
            ReactionRecord::irreversible("A -> C", 1.0),
        ];
        let network = ReactionNetwork::from_records(&records).unwrap();
        assert_eq!(
            network.terms_for("A").unwrap(),
            &[term(&["A"], -1.0), term(&["A"], -1.0)]
        );
    }

    #[test]
    fn test_rate_of_change_mass_action() {
        let records = [ReactionRecord::irreversible("A + B -> C", 2.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        // [A]=0.5, [B]=4.0, [C]=0: rate = 2 * 0.5 * 4 = 4.
        let conc = [0.5, 4.0, 0.0];
        let mut dydt = [0.0; 3];
        network.rate_of_change(&conc, &mut dydt).unwrap();
        assert_eq!(dydt, [-4.0, -4.0, 4.0]);
    }

    #[test]
    fn test_equilibrium_relaxation() {
        // A <-> B with kf = kb relaxes to equal concentrations, and the
        // total is conserved along the way.
        let records = [ReactionRecord::reversible("A <-> B", 1.0, 1.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        let initial = HashMap::from([("A".to_string(), 1.0)]);
        let grid: Vec<f64> = (0..=10).map(|i| i as f64).collect();
        let table = network.solve(&initial, &grid).unwrap();

        for i in 0..table.len() {
            let a = table.value(i, "A").unwrap();
            let b = table.value(i, "B").unwrap();
            assert!(
                (a + b - 1.0).abs() < 1e-9,
                "mass not conserved at row {}: A={} B={}",
                i,
                a,
                b
            );
        }
        assert!((table.final_value("A").unwrap() - 0.5).abs() < 1e-6);
        assert!((table.final_value("B").unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_first_row_is_initial_state() {
        let records = [ReactionRecord::irreversible("A -> B", 5.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        let initial = HashMap::from([("A".to_string(), 2.0)]);
        let table = network.solve(&initial, &[0.0, 0.1]).unwrap();

        assert_eq!(table.row(0), &[2.0, 0.0]);
        assert!(table.value(1, "A").unwrap() < 2.0);
    }

    #[test]
    fn test_unlisted_species_starts_at_zero() {
        let records = [ReactionRecord::irreversible("A + B -> C", 1.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        // B starts at zero, so nothing ever reacts.
        let initial = HashMap::from([("A".to_string(), 1.0)]);
        let table = network.solve(&initial, &[0.0, 1.0]).unwrap();
        assert_eq!(table.row(1), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fixed_species_holds_concentration() {
        let records = [ReactionRecord::irreversible("A + B -> C", 1.0)];
        let network = ReactionNetwork::from_records(&records)
            .unwrap()
            .with_fixed_concentrations(["A".to_string()]);

        let initial =
            HashMap::from([("A".to_string(), 1.0), ("B".to_string(), 1.0)]);
        let table = network.solve(&initial, &[0.0, 1.0, 2.0]).unwrap();

        // A is clamped but still drives consumption of B.
        for i in 0..table.len() {
            assert_eq!(table.value(i, "A"), Some(1.0));
        }
        assert!(table.final_value("B").unwrap() < 1.0);
        assert!(table.final_value("C").unwrap() > 0.0);
    }

    #[test]
    fn test_empty_time_grid_is_error() {
        let records = [ReactionRecord::irreversible("A -> B", 1.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();
        let err = network.solve(&HashMap::new(), &[]).unwrap_err();
        assert!(matches!(err, SimulationError::EmptyTimeGrid));
    }

    #[test]
    fn test_non_monotonic_grid_is_error() {
        let records = [ReactionRecord::irreversible("A -> B", 1.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();
        let err = network
            .solve(&HashMap::new(), &[0.0, 1.0, 0.5])
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::NonMonotonicTimeGrid { index: 2, .. }
        ));
    }

    #[test]
    fn test_repeated_time_point_repeats_row() {
        let records = [ReactionRecord::irreversible("A -> B", 1.0)];
        let network = ReactionNetwork::from_records(&records).unwrap();

        let initial = HashMap::from([("A".to_string(), 1.0)]);
        let table = network.solve(&initial, &[0.0, 1.0, 1.0]).unwrap();
        assert_eq!(table.row(1), table.row(2));
    }

    #[test]
    fn test_missing_species_in_rate_term() {
        // The public constructor registers every referenced name, so an
        // unknown reactant can only be injected directly.
        let records = [ReactionRecord::irreversible("A -> B", 1.0)];
        let mut network = ReactionNetwork::from_records(&records).unwrap();
        network
            .contributions
            .get_mut("A")
            .unwrap()
            .push(term(&["Ghost"], 1.0));

        let mut dydt = [0.0; 2];
        let err = network.rate_of_change(&[1.0, 0.0], &mut dydt).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::MissingSpecies { species } if species == "Ghost"
        ));
    }

    #[test]
    fn test_malformed_equation_rejected() {
        let records = [ReactionRecord::irreversible("A B", 1.0)];
        let err = ReactionNetwork::from_records(&records).unwrap_err();
        assert!(matches!(err, SimulationError::MalformedReaction { .. }));
    }
}
