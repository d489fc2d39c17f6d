use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpcError {
    #[error("IO Error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Result file not found: '{}'", .path.display())]
    MissingResult { path: PathBuf },

    #[error("No marker line in '{}'", .path.display())]
    MissingMarker { path: PathBuf },

    #[error("No number on marker line {line_no} of '{}': {line}", .path.display())]
    NoNumber {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Malformed metric '{text}' on line {line_no} of '{}'", .path.display())]
    MalformedMetric {
        path: PathBuf,
        line_no: usize,
        text: String,
    },
}

impl IpcError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type IpcResult<T> = Result<T, IpcError>;
