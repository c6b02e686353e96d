//! Combinatorial chemistry: structure enumeration and reaction assembly.
//!
//! This module enumerates every valid branched/linear oligomer structure
//! up to a configured size bound and derives the symbolic reaction set the
//! solver integrates:
//! - growth: reversible `C2` monomer addition at the radical site,
//! - death: reversible radical loss to a neutral chain,
//! - pore diffusion: reversible transfer into the pore compartment,
//! - outflow: irreversible transfer out of the reactor.
//!
//! The structure grammar and the species-naming convention are load-bearing:
//! the network parser matches species by exact string equality.

pub mod reactions;
pub mod structure;

pub use reactions::{
    death_reaction, growth_reaction, linear_outflow_reactions, neutral_chain,
    outflow_reaction, pore_diffusion_reaction, SEED_REACTION,
};
pub use structure::{basic_units, generate, Segment, Structure};

use crate::config::KineticParameters;
use crate::network::ReactionRecord;

/// Assemble the complete reaction network for the configured size bound.
///
/// Produces the seed reaction followed by the growth, death, pore-diffusion,
/// and outflow families for every generated structure, plus the direct
/// outflow of every even linear chain. Rate constants are attached from the
/// configuration per family.
pub fn build_reaction_records(params: &KineticParameters) -> Vec<ReactionRecord> {
    let structures = generate(params.max_chain_size);
    log::info!(
        "Enumerated {} structures for max chain size {}",
        structures.len(),
        params.max_chain_size
    );

    let mut records = Vec::with_capacity(4 * structures.len() + 1);

    records.push(ReactionRecord::reversible(
        SEED_REACTION,
        params.growth.forward,
        params.growth.backward,
    ));
    for s in &structures {
        records.push(ReactionRecord::reversible(
            growth_reaction(s),
            params.growth.forward,
            params.growth.backward,
        ));
    }
    for s in &structures {
        records.push(ReactionRecord::reversible(
            death_reaction(s),
            params.death.forward,
            params.death.backward,
        ));
    }
    for s in &structures {
        records.push(ReactionRecord::reversible(
            pore_diffusion_reaction(s),
            params.pore_diffusion.forward,
            params.pore_diffusion.backward,
        ));
    }
    for s in &structures {
        records.push(ReactionRecord::irreversible(
            outflow_reaction(s),
            params.outflow_rate,
        ));
    }
    for equation in linear_outflow_reactions(params.max_chain_size) {
        records.push(ReactionRecord::irreversible(equation, params.outflow_rate));
    }

    log::debug!("Assembled {} reaction records", records.len());
    records
}
