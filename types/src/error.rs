use thiserror::Error;

/// Rejected bet conditions. Checked before any state mutation, so a rejected
/// spin never touches balance or history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet must be greater than zero")]
    ZeroBet,
    #[error("bet {bet} exceeds balance {balance}")]
    InsufficientBalance { bet: u64, balance: u64 },
}

/// Session state violations surfaced by [`crate::SessionState::validate_invariants`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("history records out of order at position {index}")]
    HistoryOutOfOrder { index: usize },
}

/// Conversion failure for symbol indices outside the wheel.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown symbol index {0}")]
pub struct UnknownSymbol(pub u8);
