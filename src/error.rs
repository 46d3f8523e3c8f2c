use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected 3 '#'-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid coordinate pair {value:?}")]
    Coordinate { line: usize, value: String },
    #[error("line {line}: record id {id:?} must be a dataset letter followed by an integer")]
    RecordId { line: usize, id: String },
}
