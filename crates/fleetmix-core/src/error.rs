//! Config error types.

use thiserror::Error;

/// Errors raised while loading or validating a capacity-plan config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config format for {0}: expected a .json or .toml file")]
    UnsupportedFormat(String),

    #[error("workload matrix is empty")]
    EmptyWorkload,

    #[error("workload matrix is ragged: row {row} has {got} columns, expected {expected}")]
    RaggedWorkload {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("workload fraction [{row}][{col}] is {value}: must be finite and non-negative")]
    BadWorkloadCell { row: usize, col: usize, value: f64 },

    #[error("total request rate is {0}: must be finite and positive")]
    BadRequestRate(f64),

    #[error("slice factor must be positive")]
    ZeroSliceFactor,

    #[error("accelerator {name}: cost is {cost}: must be finite and non-negative")]
    BadCost { name: String, cost: f64 },

    #[error(
        "accelerator {name}: throughput matrix row {row} has {got} columns, expected {rows}x{cols}"
    )]
    TputShapeMismatch {
        name: String,
        row: usize,
        got: usize,
        rows: usize,
        cols: usize,
    },

    #[error("accelerator {name}: throughput matrix has {got} rows, expected {rows}x{cols}")]
    TputRowCountMismatch {
        name: String,
        got: usize,
        rows: usize,
        cols: usize,
    },

    #[error("accelerator {name}: throughput [{row}][{col}] is {value}: must be finite and non-negative")]
    BadTputCell {
        name: String,
        row: usize,
        col: usize,
        value: f64,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
