use thiserror::Error;

/// Errors raised by native signal sources behind a detector.
///
/// These never cross a live sequence: detectors fold them into the
/// `Unreachable` / `Unknown` fallback values before anything reaches a
/// subscriber.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("connectivity signal source not available: {0}")]
    NotAvailable(String),

    #[error("monitor operation failed: {0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
