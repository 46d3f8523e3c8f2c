use std::collections::HashSet;

use crate::error::ParseError;
use crate::models::Record;

/// Parse one input line of the form `<id>#(<x>,<y>)#<space-separated terms>`.
///
/// `line_no` is 1-based and only used for error reporting. Any malformed
/// line is fatal for the whole job; there is no skip-and-continue.
pub fn parse_line(line: &str, line_no: usize) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.trim().split('#').collect();
    if fields.len() != 3 {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let id = fields[0].trim();
    let mut chars = id.chars();
    let tag = chars.next().ok_or_else(|| ParseError::RecordId {
        line: line_no,
        id: id.to_string(),
    })?;
    let key: i64 = chars.as_str().parse().map_err(|_| ParseError::RecordId {
        line: line_no,
        id: id.to_string(),
    })?;

    let (x, y) = parse_coordinate(fields[1], line_no)?;

    // Duplicate terms within one record collapse into a set.
    let terms: HashSet<String> = fields[2]
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Ok(Record {
        id: id.to_string(),
        tag,
        key,
        x,
        y,
        terms,
    })
}

fn parse_coordinate(field: &str, line_no: usize) -> Result<(f64, f64), ParseError> {
    let bad = || ParseError::Coordinate {
        line: line_no,
        value: field.to_string(),
    };
    let inner = field
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (xs, ys) = inner.split_once(',').ok_or_else(bad)?;
    let x: f64 = xs.trim().parse().map_err(|_| bad())?;
    let y: f64 = ys.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok((x, y))
}
