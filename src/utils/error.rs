use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("unknown format type: {value}")]
    UnknownFormat { value: String },
}

pub type Result<T> = std::result::Result<T, TimestampError>;
