/// Balance granted to a fresh session, in coins.
pub const START_BALANCE: u64 = 1_000;

/// Number of reel positions in a single spin outcome.
pub const REEL_POSITIONS: usize = 3;

/// Scale for basis-point payout arithmetic.
pub const BPS_SCALE: u64 = 10_000;

/// Two-of-a-kind payout in basis points of the bet (1.5x, floored).
pub const PAIR_PAYOUT_BPS: u64 = 15_000;

/// Minimum accepted bet, in coins.
pub const MIN_BET: u64 = 1;

/// Maximum spins a single auto-spin run may request.
pub const MAX_AUTO_SPINS: u32 = 1_000;
