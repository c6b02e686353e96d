//! Oligomer structure enumeration.
//!
//! A structure identifier encodes the composition of a linear or branched
//! oligomer as an underscore-separated sequence of segments. Bare even
//! integers are chain arms grown from the radical site; parenthesized
//! counts are branch caps produced by contracting runs of 2-unit segments.
//!
//! Examples: `4_6` is a branch point bearing arms of size 4 and 6;
//! `(2)_4_4` is a branch point where one arm is a fixed 2-unit cap.
//!
//! Enumeration is a depth-first extension of every basic unit, bounded by
//! the total mass `n_max`, followed by redundancy filters and the
//! cap-contraction normalization pass.

use std::fmt;
use std::str::FromStr;

/// One segment of a structure identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A chain arm of the given (even) size, serialized as a bare integer.
    Linear(u32),
    /// A contracted branch cap of the given total size, serialized as `(n)`.
    Cap(u32),
}

impl Segment {
    /// Mass contributed by this segment.
    pub fn mass(&self) -> u32 {
        match *self {
            Segment::Linear(k) => k,
            Segment::Cap(k) => k,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::Linear(k) => write!(f, "{}", k),
            Segment::Cap(k) => write!(f, "({})", k),
        }
    }
}

/// A branched/linear oligomer structure: an ordered sequence of segments.
///
/// The `Display` form reproduces the identifier grammar exactly, so
/// structures can round-trip through the reaction-string layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Structure {
    segments: Vec<Segment>,
}

impl Structure {
    /// Create a structure from its segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// A single linear chain of size `k`.
    pub fn linear(k: u32) -> Self {
        Self::new(vec![Segment::Linear(k)])
    }

    /// The segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the structure has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total mass of the structure (sum of all segment masses).
    pub fn mass(&self) -> u32 {
        self.segments.iter().map(Segment::mass).sum()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromStr for Structure {
    type Err = String;

    /// Parse an identifier like `4_6` or `(2)_4_4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        for token in s.split('_') {
            if let Some(inner) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
                let k = inner
                    .parse::<u32>()
                    .map_err(|_| format!("invalid cap segment {:?}", token))?;
                segments.push(Segment::Cap(k));
            } else {
                let k = token
                    .parse::<u32>()
                    .map_err(|_| format!("invalid linear segment {:?}", token))?;
                segments.push(Segment::Linear(k));
            }
        }
        Ok(Structure::new(segments))
    }
}

/// The basic units for a given size bound: every even integer in `[2, n_max]`.
pub fn basic_units(n_max: u32) -> Vec<u32> {
    (1..=n_max / 2).map(|i| 2 * i).collect()
}

/// Enumerate all valid structures up to total mass `n_max`.
///
/// Deterministic and duplicate-free. Every returned structure has mass at
/// most `n_max` and uses only even arm sizes of at least 2. For
/// `n_max < 4` the result is empty: the trivial single-unit chain is
/// excluded (its growth step is the seed reaction, added separately when
/// the network is assembled) and no branching fits under the bound.
pub fn generate(n_max: u32) -> Vec<Structure> {
    let basics = basic_units(n_max);
    if basics.is_empty() {
        return Vec::new();
    }

    // Phase 1: depth-first extension over bare arm sizes.
    let mut raw: Vec<Vec<u32>> = basics.iter().map(|&b| vec![b]).collect();
    for &seed in &basics {
        extend_recursive(&[seed], &basics, n_max, &mut raw);
    }

    // Phase 2: redundancy filters.
    //
    // A trailing lone 2 after a non-trivial prefix is redundant (the same
    // physical structure is reached through cap contraction), the first
    // basic element duplicates the seed reaction, and a bare segment
    // following one whose rendering ends in the digit 2 is a malformed
    // trailing order.
    let mut filtered: Vec<Vec<u32>> = raw
        .into_iter()
        .filter(|comb| !(comb.len() > 1 && *comb.last().unwrap() == 2))
        .collect();
    if !filtered.is_empty() {
        filtered.remove(0);
    }
    filtered.retain(|comb| {
        comb.len() < 2 || !comb[comb.len() - 2].to_string().ends_with('2')
    });

    // Phase 3: cap contraction.
    filtered.into_iter().map(|comb| canonicalize(&comb)).collect()
}

fn extend_recursive(prefix: &[u32], basics: &[u32], n_max: u32, out: &mut Vec<Vec<u32>>) {
    for &basic in basics {
        let mut combination = prefix.to_vec();
        combination.push(basic);
        let total: u32 = combination.iter().sum();
        if total <= n_max {
            out.push(combination.clone());
            extend_recursive(&combination, basics, n_max, out);
        }
    }
}

/// Contract runs of 2-unit arms into branch caps.
///
/// A maximal run of two or more consecutive `2` segments collapses into a
/// single cap carrying the run's total mass; a remaining lone `2` that is
/// not the final segment becomes the unit cap `(2)`.
fn canonicalize(values: &[u32]) -> Structure {
    let mut segments = Vec::with_capacity(values.len());
    let mut i = 0;
    while i < values.len() {
        if values[i] == 2 {
            let mut run = 1;
            while i + run < values.len() && values[i + run] == 2 {
                run += 1;
            }
            if run >= 2 {
                segments.push(Segment::Cap(2 * run as u32));
            } else if i + 1 < values.len() {
                segments.push(Segment::Cap(2));
            } else {
                segments.push(Segment::Linear(2));
            }
            i += run;
        } else {
            segments.push(Segment::Linear(values[i]));
            i += 1;
        }
    }
    Structure::new(segments)
}
