//! Prime implicant generation.
//!
//! Each level of the table is an ordered list of buckets, where bucket `i` holds
//! terms with `i` ones (counting only concrete positions of their origin). Every
//! term of bucket `i` is tried against every term of bucket `i + 1`; merged terms
//! form bucket `i` of the next level. Terms that never merge are prime.
//!
//! The levels are consumed by an explicit loop, so the table depth does not
//! translate into recursion depth. Each level has one bucket fewer than the
//! previous, and the loop stops when a single bucket remains.

use std::collections::HashSet;

use log::debug;

use crate::group::Groups;
use crate::term::Term;

/// Merges every pair of terms from adjacent buckets.
///
/// Returns the next level (one bucket fewer), deduplicated by structural equality.
/// Operands that merged at least once are left marked as used.
pub fn combine_level(groups: &mut Groups) -> Groups {
    let comparisons = groups.len().saturating_sub(1);
    let mut next: Groups = vec![Vec::new(); comparisons];

    for i in 0..comparisons {
        let (lower, upper) = groups.split_at_mut(i + 1);
        let group1 = &mut lower[i];
        let group2 = &mut upper[0];

        let mut seen = HashSet::new();
        for term1 in group1.iter_mut() {
            for term2 in group2.iter_mut() {
                if let Some(term3) = term1.combine(term2) {
                    if seen.insert(term3.clone()) {
                        next[i].push(term3);
                    }
                }
            }
        }
    }

    next
}

/// Computes every prime implicant reachable from the initial grouping.
///
/// The result is in discovery order: level by level, bucket by bucket,
/// and in bucket order within a bucket. It contains no duplicates.
pub fn prime_implicants(groups: Groups) -> Vec<Term> {
    let mut primes = Vec::new();
    let mut seen = HashSet::new();

    let mut groups = groups;
    let mut level = 0;
    loop {
        let next = if groups.len() > 1 {
            Some(combine_level(&mut groups))
        } else {
            None
        };

        let before = primes.len();
        for term in groups.into_iter().flatten() {
            if !term.is_used() && seen.insert(term.clone()) {
                primes.push(term);
            }
        }
        debug!(
            "prime_implicants: level {} contributed {} primes",
            level,
            primes.len() - before
        );

        match next {
            Some(next) => groups = next,
            None => break,
        }
        level += 1;
    }

    debug!("prime_implicants -> {} terms", primes.len());
    primes
}
