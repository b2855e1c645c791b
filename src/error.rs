use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, BoardError>;
