use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Spatial bucket key: `(floor(x/d), floor(y/d))`. Derived, never stored.
pub type GridCell = (i64, i64);

/// One parsed input record. Immutable after parsing.
#[derive(Debug, Clone)]
pub struct Record {
    /// Id exactly as it appeared in the input, e.g. `A17`.
    pub id: String,
    /// Leading dataset letter of the id.
    pub tag: char,
    /// Numeric remainder of the id; the global ordering key.
    pub key: i64,
    pub x: f64,
    pub y: f64,
    pub terms: HashSet<String>,
}

/// Record plus the frequency-ordered term view used for prefix filtering.
/// Built once the global frequency table exists; read-only afterward.
#[derive(Debug)]
pub struct AnnotatedRecord {
    pub record: Record,
    /// Terms ordered by (global frequency asc, term lexicographic asc).
    pub sorted_terms: Vec<String>,
    /// First `max(1, L - ceil(s*L) + 1)` entries of `sorted_terms`.
    pub prefix: HashSet<String>,
}

/// A-record and B-record sharing at least one grid cell. The same id pair
/// can surface up to 9 times before deduplication.
#[derive(Debug, Clone)]
pub struct CandidatePair {
    pub a: Arc<AnnotatedRecord>,
    pub b: Arc<AnnotatedRecord>,
}

impl CandidatePair {
    pub fn id_pair(&self) -> (&str, &str) {
        (&self.a.record.id, &self.b.record.id)
    }
}

/// A fully verified pair, emitted exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    /// Display form of the A-side id (`A17`).
    pub a_id: String,
    /// Display form of the B-side id (`B3`).
    pub b_id: String,
    pub a_key: i64,
    pub b_key: i64,
    pub distance: f64,
    pub similarity: f64,
}
