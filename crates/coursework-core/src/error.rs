use thiserror::Error;

/// Errors raised while validating or combining coursework values.
///
/// Every constructor and setter in the crate fails on the first invalid
/// argument it sees and leaves the receiver untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourseworkError {
    #[error("{value} is not a valid number, expected a finite int or float")]
    NotNumeric { value: String },
    #[error("the value has to be above 0, got {0}")]
    NotPositive(f64),
    #[error("vectors can't be empty")]
    EmptyVector,
    #[error("the zero vector has no direction")]
    ZeroVector,
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("slope is undefined for a vertical line at x = {0}")]
    UndefinedSlope(f64),
    #[error("hypotenuse {hypotenuse} must be longer than the cathetus {cathetus}")]
    InvalidTriangle { cathetus: f64, hypotenuse: f64 },
    #[error("cannot compute a ratio over an empty population")]
    EmptyPopulation,
    #[error("{part} out of {total} is not a valid count")]
    InvalidCount { part: u64, total: u64 },
    #[error("stop depositing negative values, {riksdaler} riksdaler or {skilling} skilling not okay")]
    NegativeAmount { riksdaler: f64, skilling: f64 },
    #[error("you cannot withdraw negative numbers, {riksdaler} riksdaler or {skilling} skilling not okay")]
    NegativeWithdrawal { riksdaler: f64, skilling: f64 },
    #[error("you cannot withdraw more coins than you have")]
    InsufficientFunds,
    #[error("cannot sample from the empty or unbounded range {min}..={max}")]
    EmptyRange { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, CourseworkError>;
