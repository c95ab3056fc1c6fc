use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComputationError {
    #[error("Square of {value} does not fit in a 64-bit integer")]
    Overflow { value: i64 },
}

/// Square every number, keeping order and length.
pub fn square_all(numbers: &[i64]) -> Result<Vec<i64>, ComputationError> {
    numbers
        .iter()
        .map(|&value| {
            value
                .checked_mul(value)
                .ok_or(ComputationError::Overflow { value })
        })
        .collect()
}
