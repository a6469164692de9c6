//! Reelhouse spin engine.
//!
//! This crate contains the spin/payout logic and session bookkeeping for the
//! play-money slot machine: uniform reel draws, the payout decision policy,
//! bet validation, bounded auto-spin runs with cooperative cancellation, and
//! CSV export of the spin history.
//!
//! State is explicit: every operation takes a [`reelhouse_types::SessionState`]
//! owned by the caller. The engine never reads the wall clock or the
//! filesystem on its own; time comes in through [`Clock`] and exports are
//! written to a caller-supplied writer.
//!
//! ```
//! use reelhouse_engine::{accept_spin, ReelRng, SystemClock};
//! use reelhouse_types::SessionState;
//!
//! let mut session = SessionState::new();
//! let mut rng = ReelRng::from_seed(42);
//! let record = accept_spin(&mut session, 10, &mut rng, &SystemClock).unwrap();
//! assert_eq!(record.bet, 10);
//! ```

pub mod auto;
pub mod clock;
pub mod export;
pub mod rng;
pub mod spin;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use auto::{
    run_auto_spin, AutoSpinConfig, AutoSpinConfigError, AutoSpinSummary, StopFlag, StopReason,
};
pub use clock::{Clock, SystemClock};
pub use export::{history_csv_string, write_history_csv, ExportError, TIMESTAMP_FORMAT};
pub use rng::ReelRng;
pub use spin::{accept_spin, draw, evaluate, reset_session, SpinGrade};
