use crate::models::ResultRecord;

/// Fractional digits kept before trimming.
const PRECISION: usize = 4;

/// Render a value at fixed precision, strip trailing zeros, keep at least
/// one fractional digit: `3.5`, `0.0`, `1.0`, `0.7071`.
pub fn trim_fixed(value: f64) -> String {
    let fixed = format!("{:.*}", PRECISION, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{}.0", trimmed)
    }
}

pub fn render_line(result: &ResultRecord) -> String {
    format!(
        "({},{}):{},{}",
        result.a_id,
        result.b_id,
        trim_fixed(result.distance),
        trim_fixed(result.similarity)
    )
}

/// The engine-wide total order: sort by numeric `(aId, bId)` and render.
/// Partitioned verification produces results in no particular order, so
/// this is the final barrier before the sink.
pub fn render_sorted(mut results: Vec<ResultRecord>) -> Vec<String> {
    results.sort_by_key(|r| (r.a_key, r.b_key));
    results.iter().map(render_line).collect()
}
