use rayon::prelude::*;
use std::collections::HashSet;

use crate::config::JoinConfig;
use crate::models::{CandidatePair, Record, ResultRecord};

pub fn euclidean(a: &Record, b: &Record) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Exact Jaccard similarity; 0 when both sets are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let inter = a.intersection(b).count();
    let union = a.len() + b.len() - inter;
    if union == 0 {
        0.0
    } else {
        inter as f64 / union as f64
    }
}

/// Run the three verification stages over deduplicated candidates:
/// exact distance (drops grid false positives), prefix intersection
/// (sound pre-filter, never drops a qualifying pair), exact Jaccard
/// (the authoritative similarity decision).
pub fn verify_pairs(pairs: Vec<CandidatePair>, cfg: &JoinConfig) -> Vec<ResultRecord> {
    pairs
        .into_par_iter()
        .filter(|pair| euclidean(&pair.a.record, &pair.b.record) <= cfg.distance)
        .filter(|pair| !pair.a.prefix.is_disjoint(&pair.b.prefix))
        .filter_map(|pair| {
            let similarity = jaccard(&pair.a.record.terms, &pair.b.record.terms);
            if similarity < cfg.similarity {
                return None;
            }
            let a = &pair.a.record;
            let b = &pair.b.record;
            Some(ResultRecord {
                a_id: format!("{}{}", a.tag, a.key),
                b_id: format!("{}{}", b.tag, b.key),
                a_key: a.key,
                b_key: b.key,
                distance: euclidean(a, b),
                similarity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnnotatedRecord;
    use std::sync::Arc;

    fn pair(
        a_pos: (f64, f64),
        a_terms: &[&str],
        a_prefix: &[&str],
        b_pos: (f64, f64),
        b_terms: &[&str],
        b_prefix: &[&str],
    ) -> CandidatePair {
        let build = |id: &str, pos: (f64, f64), terms: &[&str], prefix: &[&str]| {
            Arc::new(AnnotatedRecord {
                record: Record {
                    id: id.to_string(),
                    tag: id.chars().next().unwrap(),
                    key: id[1..].parse().unwrap(),
                    x: pos.0,
                    y: pos.1,
                    terms: terms.iter().map(|t| t.to_string()).collect(),
                },
                sorted_terms: terms.iter().map(|t| t.to_string()).collect(),
                prefix: prefix.iter().map(|t| t.to_string()).collect(),
            })
        };
        CandidatePair {
            a: build("A1", a_pos, a_terms, a_prefix),
            b: build("B1", b_pos, b_terms, b_prefix),
        }
    }

    fn cfg(d: f64, s: f64) -> JoinConfig {
        JoinConfig {
            distance: d,
            similarity: s,
        }
    }

    #[test]
    fn test_euclidean() {
        let p = pair((0.0, 0.0), &[], &[], (3.0, 4.0), &[], &[]);
        assert_eq!(euclidean(&p.a.record, &p.b.record), 5.0);
    }

    #[test]
    fn test_jaccard_edges() {
        let two: HashSet<String> = ["a", "b"].iter().map(|t| t.to_string()).collect();
        let overlap: HashSet<String> = ["b", "c"].iter().map(|t| t.to_string()).collect();
        let empty = HashSet::new();
        assert_eq!(jaccard(&two, &two), 1.0);
        assert!((jaccard(&two, &overlap) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(jaccard(&two, &empty), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_distance_filter() {
        // Shares a neighbor cell at d=1 but is sqrt(2) > 1 away.
        let p = pair(
            (0.0, 0.0),
            &["a"],
            &["a"],
            (1.0, 1.0),
            &["a"],
            &["a"],
        );
        assert!(verify_pairs(vec![p], &cfg(1.0, 0.5)).is_empty());
    }

    #[test]
    fn test_prefix_filter() {
        let p = pair(
            (0.0, 0.0),
            &["a", "b"],
            &["a"],
            (0.1, 0.0),
            &["b", "c"],
            &["c"],
        );
        assert!(verify_pairs(vec![p], &cfg(1.0, 0.1)).is_empty());
    }

    #[test]
    fn test_similarity_threshold_is_inclusive() {
        // Jaccard exactly 0.5 must survive s=0.5.
        let p = pair(
            (0.0, 0.0),
            &["a", "b", "c"],
            &["a"],
            (0.5, 0.5),
            &["a", "b", "d"],
            &["a"],
        );
        let results = verify_pairs(vec![p], &cfg(1.0, 0.5));
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.a_id, "A1");
        assert_eq!(r.b_id, "B1");
        assert!((r.similarity - 0.5).abs() < 1e-12);
        assert!((r.distance - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distance_threshold_is_inclusive() {
        let p = pair((0.0, 0.0), &["a"], &["a"], (1.0, 0.0), &["a"], &["a"]);
        assert_eq!(verify_pairs(vec![p], &cfg(1.0, 0.5)).len(), 1);
    }

    #[test]
    fn test_empty_term_sets_never_qualify() {
        let p = pair((0.0, 0.0), &[], &[], (0.0, 0.0), &[], &[]);
        assert!(verify_pairs(vec![p], &cfg(1.0, 0.5)).is_empty());
    }
}
