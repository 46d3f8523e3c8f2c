//! The join engine: frequency aggregation, grid-based candidate
//! generation, prefix filtering, exact verification.
//!
//! Stages run strictly in order. The frequency table is the one hard
//! barrier: it must be fully combined across both datasets before any
//! record is annotated, because the prefix order is global, not
//! per-partition.

use log::info;
use std::time::Instant;

use crate::config::JoinConfig;
use crate::error::ConfigError;
use crate::models::{Record, ResultRecord};

pub mod candidates;
pub mod frequency;
pub mod grid;
pub mod prefix;
pub mod verify;

/// Compute all pairs (a, b) with distance <= `cfg.distance` and Jaccard
/// similarity >= `cfg.similarity`. Results are unordered; the output
/// layer owns the final total sort.
pub fn join_datasets(
    a: &[Record],
    b: &[Record],
    cfg: &JoinConfig,
) -> Result<Vec<ResultRecord>, ConfigError> {
    cfg.validate()?;
    let start = Instant::now();

    let freq = frequency::term_frequencies(a, b);
    info!("Aggregated {} distinct terms across both datasets", freq.len());

    let a_annotated = prefix::annotate(a, &freq, cfg.similarity);
    let b_annotated = prefix::annotate(b, &freq, cfg.similarity);

    let a_keyed = grid::replicate(&a_annotated, cfg.distance);
    let b_keyed = grid::replicate(&b_annotated, cfg.distance);

    let raw = candidates::cell_join(a_keyed, b_keyed);
    let unique = candidates::dedup(raw);
    info!("{} candidate pairs after dedup", unique.len());

    let results = verify::verify_pairs(unique, cfg);
    info!(
        "{} pairs verified in {:?}",
        results.len(),
        start.elapsed()
    );
    Ok(results)
}
