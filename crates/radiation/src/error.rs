/// Input outside the physical domain of a formula.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} must not be negative, got {value}")]
    Negative { quantity: &'static str, value: f64 },
    #[error("{quantity} must be finite, got {value}")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("exponent hν/kT = {ratio:e} overflows the Planck denominator")]
    ExponentOverflow { ratio: f64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
