//! Selection of the final implicant list from the prime implicants.
//!
//! Essential prime implicants are taken first: a value covered by exactly one prime
//! forces that prime into the result. Whatever remains uncovered is solved by an
//! exhaustive search for the smallest exact cover among the other primes.
//!
//! The search enumerates subsets as bitmasks `1..2^k` over the candidate pool,
//! where bit `j` selects candidate `j`. Among exact covers with the fewest members,
//! the one with the smallest mask wins. This is exponential in the pool size.

use std::collections::BTreeSet;

use log::{debug, error};

use crate::bitset::BitSet;
use crate::error::{QmError, Result};
use crate::term::Term;

/// Largest candidate pool the cover search accepts (one bit of a `u64` mask per candidate).
pub const MAX_COVER_CANDIDATES: usize = 63;

/// Outcome of the essential prime implicant pass.
#[derive(Debug, Clone)]
pub struct Essentials {
    /// Essential prime implicants, in the order they were found.
    pub terms: Vec<Term>,
    /// Values not covered by any essential implicant, in input order.
    pub residual: Vec<u32>,
}

/// Finds the essential prime implicants for `values`.
///
/// `values` are scanned in order. A value covered by exactly one prime makes that prime
/// essential, and every non-don't-care index it covers becomes satisfied.
pub fn essential_implicants(
    primes: &[Term],
    values: &[u32],
    dont_cares: &BTreeSet<u32>,
) -> Essentials {
    let mut terms: Vec<Term> = Vec::new();
    let mut satisfied: BTreeSet<u32> = BTreeSet::new();

    for &value in values {
        let mut uses = 0;
        let mut last = None;
        for prime in primes {
            if prime.covered().contains(&value) {
                uses += 1;
                last = Some(prime);
            }
        }
        if let (1, Some(prime)) = (uses, last) {
            if !terms.contains(prime) {
                debug!("essential_implicants: {} is essential for {}", prime, value);
                satisfied.extend(prime.covered().iter().filter(|v| !dont_cares.contains(*v)));
                terms.push(prime.clone());
            }
        }
    }

    let residual = values
        .iter()
        .copied()
        .filter(|v| !satisfied.contains(v))
        .collect();
    Essentials { terms, residual }
}

/// Finds a smallest subset of `candidates` whose covered values restricted to `residual`
/// are exactly `residual`.
///
/// Returned members keep the candidate order. A pool of one candidate is returned as is.
pub fn minimal_cover(candidates: &[Term], residual: &[u32]) -> Result<Vec<Term>> {
    if candidates.len() == 1 {
        return Ok(candidates.to_vec());
    }
    if candidates.len() > MAX_COVER_CANDIDATES {
        return Err(QmError::CoverTooLarge {
            size: candidates.len(),
        });
    }

    // Map residual values to dense positions, so each candidate becomes a bit set.
    let positions: Vec<u32> = residual
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let target = BitSet::full(positions.len());
    let coverage: Vec<BitSet> = candidates
        .iter()
        .map(|term| {
            positions
                .iter()
                .enumerate()
                .filter(|(_, v)| term.covered().contains(*v))
                .map(|(pos, _)| pos)
                .collect()
        })
        .collect();

    debug!(
        "minimal_cover: {} candidates, {} residual values",
        candidates.len(),
        positions.len()
    );

    let mut best: Option<u64> = None;
    for mask in 1..(1u64 << candidates.len()) {
        let size = mask.count_ones();
        if let Some(best) = best {
            if size >= best.count_ones() {
                continue;
            }
        }

        let mut union = BitSet::new();
        for (j, bits) in coverage.iter().enumerate() {
            if mask & (1 << j) != 0 {
                union.union_with(bits);
            }
        }
        if union == target {
            best = Some(mask);
        }
    }

    match best {
        Some(mask) => Ok(candidates
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1 << *j) != 0)
            .map(|(_, term)| term.clone())
            .collect()),
        None => {
            error!(
                "minimal_cover: no exact cover of {:?} among {} candidates",
                residual,
                candidates.len()
            );
            Err(QmError::UnsatisfiableCover)
        }
    }
}

/// Chooses the final implicant list: essential primes first, then a minimal cover of the rest.
pub fn select_implicants(
    primes: &[Term],
    values: &[u32],
    dont_cares: &BTreeSet<u32>,
) -> Result<Vec<Term>> {
    let Essentials {
        mut terms,
        residual,
    } = essential_implicants(primes, values, dont_cares);

    if residual.is_empty() {
        debug!("select_implicants: essentials cover everything");
        return Ok(terms);
    }

    let candidates: Vec<Term> = primes
        .iter()
        .filter(|p| !terms.contains(p))
        .filter(|p| p.covered().iter().any(|v| !dont_cares.contains(v)))
        .cloned()
        .collect();

    terms.extend(minimal_cover(&candidates, &residual)?);
    Ok(terms)
}
