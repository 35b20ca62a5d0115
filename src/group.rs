//! Initial grouping of the Quine-McCluskey table by population count.

use log::debug;

use crate::term::Term;

/// Terms bucketed by the number of `1` bits in their pattern.
pub type Groups = Vec<Vec<Term>>;

/// Places a singleton term for every index into `groups[popcount(index)]`.
///
/// Returns exactly `width + 1` buckets, some of which may be empty.
/// Within a bucket, terms keep the order of `indices`.
pub fn initial_group(indices: impl IntoIterator<Item = u32>, width: usize) -> Groups {
    let mut groups: Groups = vec![Vec::new(); width + 1];
    for index in indices {
        let term = Term::singleton(index, width);
        groups[term.pattern().ones()].push(term);
    }
    debug!(
        "initial_group(width = {}) -> sizes {:?}",
        width,
        groups.iter().map(|g| g.len()).collect::<Vec<_>>()
    );
    groups
}
