use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
