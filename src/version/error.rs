use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Inverted range: min version {min} is greater than max version {max}")]
    Inverted { min: String, max: String },
}
