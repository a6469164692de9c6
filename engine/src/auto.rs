//! Bounded auto-spin runs with cooperative cancellation.
//!
//! The stop flag is read once per iteration boundary, never preemptively, so
//! at most one extra spin can settle after a stop request. The bet is
//! captured when the run starts and is not re-read mid-run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use thiserror::Error;

use reelhouse_types::{SessionState, MAX_AUTO_SPINS, MIN_BET};

use crate::clock::Clock;
use crate::rng::ReelRng;
use crate::spin::accept_spin;

/// Parameters for one auto-spin run. The delay is pacing only, not
/// correctness-relevant.
#[derive(Clone, Copy, Debug)]
pub struct AutoSpinConfig {
    pub bet: u64,
    pub count: u32,
    pub delay: Duration,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutoSpinConfigError {
    #[error("auto-spin bet must be greater than zero")]
    ZeroBet,
    #[error("auto-spin count must be at least 1")]
    ZeroCount,
    #[error("auto-spin count {got} exceeds the cap of {max}")]
    CountTooLarge { got: u32, max: u32 },
}

impl AutoSpinConfig {
    pub fn validate(&self) -> Result<(), AutoSpinConfigError> {
        if self.bet < MIN_BET {
            return Err(AutoSpinConfigError::ZeroBet);
        }
        if self.count == 0 {
            return Err(AutoSpinConfigError::ZeroCount);
        }
        if self.count > MAX_AUTO_SPINS {
            return Err(AutoSpinConfigError::CountTooLarge {
                got: self.count,
                max: MAX_AUTO_SPINS,
            });
        }
        Ok(())
    }
}

/// Cooperative cancellation token. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why an auto-spin run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Every requested spin settled.
    Completed,
    /// The balance could no longer cover the bet. Spins already settled are
    /// retained.
    BalanceExhausted,
    /// A stop request was observed at an iteration boundary.
    Stopped,
}

/// Outcome of one auto-spin run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoSpinSummary {
    pub requested: u32,
    pub completed: u32,
    pub stop_reason: StopReason,
}

impl AutoSpinSummary {
    /// One-line banner for front-ends.
    pub fn banner(&self) -> String {
        match self.stop_reason {
            StopReason::Completed => format!("Auto-spin finished ({} spins).", self.completed),
            StopReason::BalanceExhausted => format!(
                "Balance exhausted, auto-spin stopped after {} spins.",
                self.completed
            ),
            StopReason::Stopped => format!(
                "Auto-spin stopped on request after {} spins.",
                self.completed
            ),
        }
    }
}

/// Run up to `config.count` spins at the fixed `config.bet`, sleeping
/// `config.delay` between iterations.
///
/// Stops early when the balance can no longer cover the bet or when a stop
/// request is observed at an iteration boundary. A config error is returned
/// without touching the session.
pub fn run_auto_spin(
    session: &mut SessionState,
    config: &AutoSpinConfig,
    stop: &StopFlag,
    rng: &mut ReelRng,
    clock: &impl Clock,
) -> Result<AutoSpinSummary, AutoSpinConfigError> {
    config.validate()?;

    tracing::info!(bet = config.bet, count = config.count, "auto-spin started");
    session.auto_running = true;

    let bet = config.bet;
    let mut completed = 0u32;
    let mut stop_reason = StopReason::Completed;

    for remaining in (0..config.count).rev() {
        if stop.is_stopped() {
            stop_reason = StopReason::Stopped;
            break;
        }
        if bet > session.balance {
            tracing::warn!(
                balance = session.balance,
                bet,
                "auto-spin halted: balance exhausted"
            );
            stop_reason = StopReason::BalanceExhausted;
            break;
        }
        match accept_spin(session, bet, rng, clock) {
            Ok(_) => completed += 1,
            Err(err) => {
                // The guards above filter every rejection accept_spin can
                // produce; treat a residual one as exhaustion.
                tracing::warn!(%err, "auto-spin halted: bet rejected");
                stop_reason = StopReason::BalanceExhausted;
                break;
            }
        }
        if remaining > 0 && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }
    }

    session.auto_running = false;
    let summary = AutoSpinSummary {
        requested: config.count,
        completed,
        stop_reason,
    };
    tracing::info!(
        completed = summary.completed,
        requested = summary.requested,
        reason = ?summary.stop_reason,
        "auto-spin finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ManualClock;

    fn config(bet: u64, count: u32) -> AutoSpinConfig {
        AutoSpinConfig {
            bet,
            count,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn rejects_out_of_bounds_configs_without_touching_state() {
        let mut session = SessionState::new();
        let mut rng = ReelRng::from_seed(1);
        let clock = ManualClock::starting_at(0);
        let stop = StopFlag::new();

        for (cfg, expected) in [
            (config(0, 5), AutoSpinConfigError::ZeroBet),
            (config(10, 0), AutoSpinConfigError::ZeroCount),
            (
                config(10, MAX_AUTO_SPINS + 1),
                AutoSpinConfigError::CountTooLarge {
                    got: MAX_AUTO_SPINS + 1,
                    max: MAX_AUTO_SPINS,
                },
            ),
        ] {
            assert_eq!(
                run_auto_spin(&mut session, &cfg, &stop, &mut rng, &clock),
                Err(expected)
            );
        }
        assert!(session.history.is_empty());
        assert_eq!(session.balance, reelhouse_types::START_BALANCE);
    }

    #[test]
    fn completes_the_requested_count_with_ample_balance() {
        // Worst case loss over 5 spins at bet 1 is 5 coins, so the run can
        // never exhaust the starting balance.
        let mut session = SessionState::new();
        let mut rng = ReelRng::from_seed(9);
        let clock = ManualClock::starting_at(100);
        let stop = StopFlag::new();

        let summary =
            run_auto_spin(&mut session, &config(1, 5), &stop, &mut rng, &clock).expect("valid");
        assert_eq!(summary.requested, 5);
        assert_eq!(summary.completed, 5);
        assert_eq!(summary.stop_reason, StopReason::Completed);
        assert_eq!(session.history.len(), 5);
        assert!(!session.auto_running);
        assert_eq!(session.validate_invariants(), Ok(()));
    }

    #[test]
    fn stops_when_the_balance_cannot_cover_the_bet() {
        // Betting the whole starting balance every spin drifts downward; long
        // before 1000 iterations a losing spin leaves less than the bet.
        let mut session = SessionState::new();
        session.balance = 10;
        let mut rng = ReelRng::from_seed(13);
        let clock = ManualClock::starting_at(0);
        let stop = StopFlag::new();

        let summary = run_auto_spin(
            &mut session,
            &config(10, MAX_AUTO_SPINS),
            &stop,
            &mut rng,
            &clock,
        )
        .expect("valid");
        assert_eq!(summary.stop_reason, StopReason::BalanceExhausted);
        assert!(summary.completed < summary.requested);
        assert_eq!(session.history.len(), summary.completed as usize);
        assert!(session.balance < 10);
        assert!(!session.auto_running);
    }

    #[test]
    fn observes_a_stop_request_before_spinning() {
        let mut session = SessionState::new();
        let mut rng = ReelRng::from_seed(4);
        let clock = ManualClock::starting_at(0);
        let stop = StopFlag::new();
        stop.request_stop();

        let summary =
            run_auto_spin(&mut session, &config(10, 5), &stop, &mut rng, &clock).expect("valid");
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.stop_reason, StopReason::Stopped);
        assert!(session.history.is_empty());
        assert!(!session.auto_running);
    }

    #[test]
    fn stop_flag_is_shared_across_clones() {
        let stop = StopFlag::new();
        let observer = stop.clone();
        assert!(!observer.is_stopped());
        stop.request_stop();
        assert!(observer.is_stopped());
    }

    #[test]
    fn banners_name_the_completed_count() {
        let summary = AutoSpinSummary {
            requested: 10,
            completed: 10,
            stop_reason: StopReason::Completed,
        };
        assert_eq!(summary.banner(), "Auto-spin finished (10 spins).");

        let summary = AutoSpinSummary {
            requested: 10,
            completed: 3,
            stop_reason: StopReason::BalanceExhausted,
        };
        assert_eq!(
            summary.banner(),
            "Balance exhausted, auto-spin stopped after 3 spins."
        );
    }
}
