use thiserror::Error;

/// Reason a piece of seed material was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedFault {
    /// Scalar seed was 0, which the xorshift64* expander maps to an all-zero state.
    #[error("scalar seed must be non-zero")]
    Zero,
    /// Seed vector length outside `1 ..= 15`.
    #[error("seed vector has {0} words, expected 1 to 15")]
    Length(usize),
    /// Every word of the seed vector was zero.
    #[error("all seed words are zero")]
    AllZero,
}

/// Error returned by the fallible Xs1024 constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("invalid seed: {0}")]
    InvalidSeed(SeedFault),
}

impl From<SeedFault> for SeedError {
    fn from(fault: SeedFault) -> Self {
        SeedError::InvalidSeed(fault)
    }
}
