use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::models::{AnnotatedRecord, CandidatePair, GridCell};

fn group_by_cell(
    keyed: Vec<(GridCell, Arc<AnnotatedRecord>)>,
) -> HashMap<GridCell, Vec<Arc<AnnotatedRecord>>> {
    let mut groups: HashMap<GridCell, Vec<Arc<AnnotatedRecord>>> = HashMap::new();
    for (cell, record) in keyed {
        groups.entry(cell).or_default().push(record);
    }
    groups
}

/// Per-cell cross product of A-records and B-records. Cells holding only
/// one side contribute nothing. This is the only super-linear stage; its
/// output bounds the cost of every verifier downstream.
pub fn cell_join(
    a_keyed: Vec<(GridCell, Arc<AnnotatedRecord>)>,
    b_keyed: Vec<(GridCell, Arc<AnnotatedRecord>)>,
) -> Vec<CandidatePair> {
    let a_groups = group_by_cell(a_keyed);
    let b_groups = group_by_cell(b_keyed);
    a_groups
        .par_iter()
        .flat_map_iter(|(cell, a_records)| {
            let b_records = b_groups.get(cell).map(Vec::as_slice).unwrap_or(&[]);
            a_records.iter().flat_map(move |a| {
                b_records.iter().map(move |b| CandidatePair {
                    a: Arc::clone(a),
                    b: Arc::clone(b),
                })
            })
        })
        .collect()
}

/// Keep one representative per `(aId, bId)`. A true neighbor pair can be
/// discovered through up to 9 shared cells; duplicates carry identical
/// content, so the first occurrence wins.
pub fn dedup(pairs: Vec<CandidatePair>) -> Vec<CandidatePair> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(pairs.len());
    let mut unique = Vec::new();
    for pair in pairs {
        let (a_id, b_id) = pair.id_pair();
        if seen.insert((a_id.to_string(), b_id.to_string())) {
            unique.push(pair);
        }
    }
    unique
}
