use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::InvariantError, ReelOutcome, START_BALANCE};

/// One settled spin. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    pub timestamp: DateTime<Utc>,
    pub reels: ReelOutcome,
    pub bet: u64,
    pub win: u64,
    pub balance_after: u64,
    pub message: String,
}

/// Per-session mutable state, owned by exactly one player.
///
/// Created by the front-end, mutated only by engine operations, reset on
/// explicit request. The front-end owns its lifecycle and persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub balance: u64,
    /// Front of the deque is the most recent spin.
    pub history: VecDeque<SpinRecord>,
    pub last_outcome: Option<ReelOutcome>,
    pub last_message: String,
    pub auto_running: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            balance: START_BALANCE,
            history: VecDeque::new(),
            last_outcome: None,
            last_message: String::new(),
            auto_running: false,
        }
    }

    /// Check that history timestamps are non-increasing front to back.
    pub fn validate_invariants(&self) -> Result<(), InvariantError> {
        for (index, (newer, older)) in self
            .history
            .iter()
            .zip(self.history.iter().skip(1))
            .enumerate()
        {
            if newer.timestamp < older.timestamp {
                return Err(InvariantError::HistoryOutOfOrder { index });
            }
        }
        Ok(())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
