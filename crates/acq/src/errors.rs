use thiserror::Error;

/// A result type for acquisition computations
pub type Result<T> = std::result::Result<T, AcqError>;

/// An error when evaluating an acquisition criterion
#[derive(Error, Debug)]
pub enum AcqError {
    /// When criterion configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfigError(String),
    /// When an invalid value is encountered
    #[error("Value error: {0}")]
    InvalidValue(String),
    /// When the surrogate model fails to predict
    #[error("Surrogate error: {0}")]
    SurrogateError(String),
}
