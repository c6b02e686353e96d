//! Reaction equation parsing.
//!
//! The equation mini-grammar:
//!
//! ```text
//! reaction := terms ('->' | '<->') terms
//! terms    := token ('+' token)*
//! ```
//!
//! Tokens are trimmed of surrounding whitespace and `+` separates the
//! members of a combination. The reversible arrow `<->` must be checked
//! before `->`, since the latter is a substring of the former.
//!
//! Each parsed record contributes signed rate-law terms to its species:
//! a reactant is consumed by the forward direction and regenerated by the
//! reverse one, a product the other way around. Terms are retained
//! individually (never summed) and evaluated independently at solve time.

use crate::error::SimulationError;

/// A reaction definition: equation plus its rate constant(s).
#[derive(Debug, Clone)]
pub struct ReactionRecord {
    /// Symbolic equation, e.g. `CrC2 + C2 <-> CrC4`.
    pub equation: String,
    /// Forward (left-to-right) rate constant.
    pub forward: f64,
    /// Backward rate constant; `None` for irreversible reactions or when
    /// the reverse direction is deliberately left out of the network.
    pub backward: Option<f64>,
}

impl ReactionRecord {
    /// An irreversible reaction with a single forward rate constant.
    pub fn irreversible(equation: impl Into<String>, forward: f64) -> Self {
        Self {
            equation: equation.into(),
            forward,
            backward: None,
        }
    }

    /// A reversible reaction with forward and backward rate constants.
    pub fn reversible(equation: impl Into<String>, forward: f64, backward: f64) -> Self {
        Self {
            equation: equation.into(),
            forward,
            backward: Some(backward),
        }
    }
}

/// One signed rate-law term attached to a species.
///
/// The instantaneous contribution is
/// `rate * product(concentration[r] for r in reactants)`; a positive rate
/// produces the species, a negative one consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTerm {
    /// Ordered reactant tuple of the contributing direction.
    pub reactants: Vec<String>,
    /// Signed rate constant.
    pub rate: f64,
}

/// A reaction split into reactant and product token lists.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedReaction {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub reversible: bool,
}

/// Split an equation on its arrow and its terms on `+`.
pub(crate) fn parse_equation(equation: &str) -> Result<ParsedReaction, SimulationError> {
    let (lhs, rhs, reversible) = if let Some((lhs, rhs)) = equation.split_once("<->") {
        (lhs, rhs, true)
    } else if let Some((lhs, rhs)) = equation.split_once("->") {
        (lhs, rhs, false)
    } else {
        return Err(SimulationError::MalformedReaction {
            equation: equation.to_string(),
        });
    };

    Ok(ParsedReaction {
        reactants: split_terms(lhs),
        products: split_terms(rhs),
        reversible,
    })
}

fn split_terms(side: &str) -> Vec<String> {
    side.split('+').map(|token| token.trim().to_string()).collect()
}
