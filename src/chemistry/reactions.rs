//! Symbolic reaction construction for oligomer structures.
//!
//! Each generated structure gives rise to four reaction families:
//! - growth: reversible addition of the 2-unit monomer `C2` at the
//!   radical site `Cr`,
//! - death: reversible loss of the radical, leaving a neutral chain,
//! - pore diffusion: reversible transfer into the pore-localized state,
//! - outflow: irreversible transfer from the pore to the outside.
//!
//! Species names are built by exact token substitution: arms become `C{k}`
//! tokens, caps become `(C{k})`, radicals carry the `Cr` prefix, and the
//! compartment states append `_pore` / `_out`. The network parser keys on
//! exact string equality, so the substitution rules here define species
//! identity for the whole system.

use super::structure::{Segment, Structure};

/// Render a structure as a neutral chain: every arm `C{k}`, every cap
/// `(C{k})`, joined by underscores.
pub fn neutral_chain(structure: &Structure) -> String {
    chain_of(structure.segments())
}

fn chain_of(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push('_');
        }
        match *seg {
            Segment::Linear(k) => {
                out.push('C');
                out.push_str(&k.to_string());
            }
            Segment::Cap(k) => {
                out.push_str("(C");
                out.push_str(&k.to_string());
                out.push(')');
            }
        }
    }
    out
}

fn radical_chain(segments: &[Segment]) -> String {
    format!("Cr{}", chain_of(segments))
}

/// Reversible monomer addition producing the given structure.
///
/// Cap-prefixed structures grow their cap by one monomer unit; a single
/// arm grows linearly; a multi-arm structure is formed by attaching the
/// first arm's monomer to the radical bearing the remaining arms.
pub fn growth_reaction(structure: &Structure) -> String {
    let segments = structure.segments();
    match segments[0] {
        Segment::Cap(n) => {
            let rest = &segments[1..];
            let rest_chain = chain_of(rest);
            let sep = if rest.is_empty() { "" } else { "_" };
            if n == 2 {
                // There is no C0: the precursor is the bare radical chain.
                format!(
                    "Cr{} + C2 <-> Cr(C2){}{}",
                    rest_chain, sep, rest_chain
                )
            } else {
                format!(
                    "Cr(C{}){}{} + C2 <-> Cr(C{}){}{}",
                    n - 2,
                    sep,
                    rest_chain,
                    n,
                    sep,
                    rest_chain
                )
            }
        }
        Segment::Linear(k) if segments.len() == 1 => {
            format!("CrC{} + C2 <-> CrC{}", k - 2, k)
        }
        Segment::Linear(k) => {
            let rest = &segments[1..];
            format!(
                "{} + C{} <-> {}",
                radical_chain(rest),
                k,
                radical_chain(segments)
            )
        }
    }
}

/// Reversible radical loss: `Cr<chain> <-> <chain> + Cr`.
pub fn death_reaction(structure: &Structure) -> String {
    let chain = neutral_chain(structure);
    format!("Cr{} <-> {} + Cr", chain, chain)
}

/// Reversible transfer of the neutral chain into the pore-localized state.
pub fn pore_diffusion_reaction(structure: &Structure) -> String {
    let chain = neutral_chain(structure);
    format!("{} <-> {}_pore", chain, chain)
}

/// Irreversible pore-to-outside transfer of the neutral chain.
pub fn outflow_reaction(structure: &Structure) -> String {
    let chain = neutral_chain(structure);
    format!("{}_pore -> {}_out", chain, chain)
}

/// Direct outflow of every even linear chain from size 4 up to `n_max`.
pub fn linear_outflow_reactions(n_max: u32) -> Vec<String> {
    let mut reactions = Vec::new();
    let mut i = 4;
    while i <= n_max {
        reactions.push(format!("C{} -> C{}_out", i, i));
        i += 2;
    }
    reactions
}

/// The seed reaction initiating chain growth at a bare radical site.
pub const SEED_REACTION: &str = "Cr + C2 <-> CrC2";
