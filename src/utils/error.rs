use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("cannot dequeue from empty queue")]
    EmptyQueue,

    #[error("no volunteers available in queue")]
    NoVolunteers,

    #[error("no relief site has remaining capacity")]
    NoCapacity,

    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OpsError>;
