use rayon::prelude::*;
use std::sync::Arc;

use crate::models::{AnnotatedRecord, GridCell};

/// Home cell of a point on a grid with side length `cell_size`.
///
/// With `cell_size` equal to the distance threshold, two points within that
/// distance differ by at most 1 in each cell index, so 3x3 replication is
/// complete. Callers must have validated `cell_size > 0`.
pub fn home_cell(x: f64, y: f64, cell_size: f64) -> GridCell {
    ((x / cell_size).floor() as i64, (y / cell_size).floor() as i64)
}

/// The cell itself plus its 8 immediate neighbors.
pub fn neighborhood((i, j): GridCell) -> [GridCell; 9] {
    let mut cells = [(0i64, 0i64); 9];
    let mut k = 0;
    for di in -1..=1 {
        for dj in -1..=1 {
            cells[k] = (i + di, j + dj);
            k += 1;
        }
    }
    cells
}

/// Key-replication fan-out: emit each record under all 9 cells of its
/// neighborhood. No filtering happens here.
pub fn replicate(
    records: &[Arc<AnnotatedRecord>],
    cell_size: f64,
) -> Vec<(GridCell, Arc<AnnotatedRecord>)> {
    records
        .par_iter()
        .flat_map_iter(|record| {
            let home = home_cell(record.record.x, record.record.y, cell_size);
            neighborhood(home)
                .into_iter()
                .map(move |cell| (cell, Arc::clone(record)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::collections::HashSet;

    fn annotated(x: f64, y: f64) -> Arc<AnnotatedRecord> {
        Arc::new(AnnotatedRecord {
            record: Record {
                id: "A1".into(),
                tag: 'A',
                key: 1,
                x,
                y,
                terms: HashSet::new(),
            },
            sorted_terms: Vec::new(),
            prefix: HashSet::new(),
        })
    }

    #[test]
    fn test_home_cell_boundaries() {
        assert_eq!(home_cell(0.0, 0.0, 1.0), (0, 0));
        // A point exactly on a boundary belongs to the higher cell.
        assert_eq!(home_cell(1.0, 1.0, 1.0), (1, 1));
        assert_eq!(home_cell(-0.1, 0.0, 1.0), (-1, 0));
        assert_eq!(home_cell(2.5, -3.5, 0.5), (5, -7));
    }

    #[test]
    fn test_neighborhood_is_nine_distinct_cells() {
        let cells = neighborhood((4, -2));
        let unique: HashSet<GridCell> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 9);
        assert!(unique.contains(&(4, -2)));
        assert!(unique.contains(&(3, -3)));
        assert!(unique.contains(&(5, -1)));
    }

    #[test]
    fn test_replicate_emits_nine_keys_per_record() {
        let records = vec![annotated(0.2, 0.2), annotated(10.0, 10.0)];
        let keyed = replicate(&records, 1.0);
        assert_eq!(keyed.len(), 18);
    }

    #[test]
    fn test_spatial_completeness_across_boundaries() {
        // Pairs within distance d must share a cell once one side is
        // replicated, wherever the cell boundaries fall.
        let d = 1.0;
        let pairs = [
            ((0.0, 0.0), (1.0, 0.0)),   // exactly d apart, on boundaries
            ((0.99, 0.99), (1.01, 1.01)), // straddling a corner
            ((-0.01, 0.0), (0.01, 0.0)), // straddling a vertical boundary
            ((0.5, 0.5), (0.5, 1.5)),   // exactly d apart vertically
        ];
        for (p, q) in pairs {
            let hq = home_cell(q.0, q.1, d);
            let replicated: HashSet<GridCell> =
                neighborhood(home_cell(p.0, p.1, d)).into_iter().collect();
            assert!(
                replicated.contains(&hq),
                "pair {:?} {:?} missed by the grid",
                p,
                q
            );
        }
    }
}
