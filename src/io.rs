//! Line-oriented input source and output sink. Files are opened once per
//! job and the sink is flushed once, so a failed run leaves no partial
//! output behind the caller's back (the run aborts before `write_lines`).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::models::Record;
use crate::parse::parse_line;

/// Read and parse a whole dataset file, one record per line. Blank lines
/// are ignored; any malformed line aborts the read.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(&line, idx + 1).with_context(|| format!("in {}", path.display()))?);
    }
    Ok(records)
}

/// Write the consolidated, already-ordered result lines.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::with_capacity(512 * 1024, file);
    for line in lines {
        writeln!(w, "{}", line)?;
    }
    w.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
