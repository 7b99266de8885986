use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Target size must be a positive number of megabytes, got {0}")]
    InvalidTargetSize(f64),
}
