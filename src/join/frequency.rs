use rayon::prelude::*;
use std::collections::HashMap;

use crate::models::Record;

/// Count every term across both datasets. This is the one global reduction
/// whose result every downstream stage reads: per-partition counts are
/// folded locally, then merged by summing. The returned table is immutable.
pub fn term_frequencies(a: &[Record], b: &[Record]) -> HashMap<String, u64> {
    a.par_iter()
        .chain(b.par_iter())
        .fold(HashMap::new, |mut counts, record| {
            for term in &record.terms {
                *counts.entry(term.clone()).or_insert(0) += 1;
            }
            counts
        })
        .reduce(HashMap::new, |mut left, right| {
            for (term, count) in right {
                *left.entry(term).or_insert(0) += count;
            }
            left
        })
}
