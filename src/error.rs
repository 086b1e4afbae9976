use thiserror::Error;

pub type ShiftsResult<T> = Result<T, ShiftsError>;

#[derive(Error, Debug)]
pub enum ShiftsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Layout file error: {0}")]
    Layout(#[from] serde_json::Error),

    #[error("Invalid grid layout: {0}")]
    InvalidLayout(String),

    #[error("Couldn't find a time slot band for row {row}")]
    NoBandForRow { row: usize },

    #[error("Invalid shift type: {0}")]
    UnknownShiftKind(String),

    #[error("Malformed shift entry (expected '<date> from <time>'): {0:?}")]
    MalformedShift(String),

    #[error("Nothing to write: the output needs at least one row")]
    EmptyOutput,
}
