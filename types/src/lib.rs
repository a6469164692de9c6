//! Common types for the reelhouse play-money slot machine.
//!
//! Defines symbols, reel outcomes, spin records, session state, and the
//! constants shared by the engine and front-ends.

mod constants;
mod error;
mod session;
mod symbol;

pub use constants::*;
pub use error::{BetError, InvariantError, UnknownSymbol};
pub use session::{SessionState, SpinRecord};
pub use symbol::{ReelOutcome, Symbol};
