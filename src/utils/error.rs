use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{reason}")]
    Admission { reason: String },

    #[error("invalid text encoding: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot summarize an empty dataset")]
    EmptyDataset,

    #[error("unknown month{}", .month.map(|m| format!(" number {m}")).unwrap_or_default())]
    UnknownMonth { month: Option<i64> },

    #[error("record {row} is missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
