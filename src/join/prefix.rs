use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{AnnotatedRecord, Record};

/// Minimal prefix length such that two term sets with Jaccard similarity
/// >= `s`, both sorted by the same global order, share at least one of
/// their first `p` elements: `p = max(1, L - ceil(s*L) + 1)`.
pub fn prefix_len(term_count: usize, s: f64) -> usize {
    let l = term_count as i64;
    let required = (s * term_count as f64).ceil() as i64;
    (l - required + 1).max(1) as usize
}

/// Derive the frequency-ordered view of each record: terms sorted by
/// (global frequency asc, term lexicographic asc), plus the filter prefix.
/// Requires the fully combined frequency table; per-partition counts would
/// break the shared order both sides rely on.
pub fn annotate(
    records: &[Record],
    freq: &HashMap<String, u64>,
    s: f64,
) -> Vec<Arc<AnnotatedRecord>> {
    records
        .par_iter()
        .map(|record| {
            let mut sorted_terms: Vec<String> = record.terms.iter().cloned().collect();
            sorted_terms.sort_by(|t1, t2| {
                let f1 = freq.get(t1).copied().unwrap_or(0);
                let f2 = freq.get(t2).copied().unwrap_or(0);
                f1.cmp(&f2).then_with(|| t1.cmp(t2))
            });
            let p = prefix_len(sorted_terms.len(), s);
            let prefix = sorted_terms.iter().take(p).cloned().collect();
            Arc::new(AnnotatedRecord {
                record: record.clone(),
                sorted_terms,
                prefix,
            })
        })
        .collect()
}
