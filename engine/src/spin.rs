//! Single-spin operations: draw, payout evaluation, session bookkeeping.
//!
//! Payout decision policy, first match wins:
//! 1. three of a kind pays bet x symbol multiplier
//! 2. any two of a kind pays bet x 1.5, floored
//! 3. otherwise nothing
//!
//! Three equal symbols never fall through to the pair case, so the two rules
//! cannot both apply.

use reelhouse_types::{
    BetError, ReelOutcome, SessionState, SpinRecord, Symbol, BPS_SCALE, MIN_BET, PAIR_PAYOUT_BPS,
    START_BALANCE,
};

use crate::clock::Clock;
use crate::rng::ReelRng;

/// How a spin settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinGrade {
    ThreeOfAKind(Symbol),
    TwoOfAKind,
    NoMatch,
}

/// Draw a full reel outcome. Consumes entropy; no error conditions.
pub fn draw(rng: &mut ReelRng) -> ReelOutcome {
    rng.draw_outcome()
}

/// Grade an outcome and compute the win for `bet`. Pure.
pub fn evaluate(outcome: &ReelOutcome, bet: u64) -> (u64, SpinGrade) {
    let [a, b, c] = *outcome.symbols();
    if a == b && b == c {
        let win = bet.saturating_mul(a.payout_multiplier());
        return (win, SpinGrade::ThreeOfAKind(a));
    }
    if a == b || a == c || b == c {
        // Floor of bet x 1.5, via basis points.
        let win = bet.saturating_mul(PAIR_PAYOUT_BPS) / BPS_SCALE;
        return (win, SpinGrade::TwoOfAKind);
    }
    (0, SpinGrade::NoMatch)
}

/// Short result line for a graded spin. Stored on the history record.
pub fn grade_message(grade: SpinGrade, win: u64) -> String {
    match grade {
        SpinGrade::ThreeOfAKind(symbol) => format!("Three {symbol}! You win {win} coins."),
        SpinGrade::TwoOfAKind => format!("Two of a kind, you win {win} coins."),
        SpinGrade::NoMatch => "No match, try again.".to_string(),
    }
}

/// Run one spin against `session`.
///
/// Validation happens before any mutation: a rejected bet leaves balance and
/// history untouched, and repeated rejections never change state. On
/// acceptance the bet is debited before the outcome is drawn, so the balance
/// reflects the wager before the result is known.
pub fn accept_spin<'a>(
    session: &'a mut SessionState,
    bet: u64,
    rng: &mut ReelRng,
    clock: &impl Clock,
) -> Result<&'a SpinRecord, BetError> {
    if bet < MIN_BET {
        tracing::warn!(bet, balance = session.balance, "bet rejected: zero bet");
        return Err(BetError::ZeroBet);
    }
    if bet > session.balance {
        tracing::warn!(
            bet,
            balance = session.balance,
            "bet rejected: insufficient balance"
        );
        return Err(BetError::InsufficientBalance {
            bet,
            balance: session.balance,
        });
    }

    session.balance -= bet;
    let reels = draw(rng);
    let (win, grade) = evaluate(&reels, bet);
    session.balance += win;

    let message = grade_message(grade, win);
    session.last_outcome = Some(reels);
    session.last_message = format!("{message} (bet: {bet}) | balance: {}", session.balance);
    session.history.push_front(SpinRecord {
        timestamp: clock.now(),
        reels,
        bet,
        win,
        balance_after: session.balance,
        message,
    });

    tracing::info!(
        bet,
        win,
        balance = session.balance,
        reels = %reels,
        "spin settled"
    );

    Ok(&session.history[0])
}

/// Restore a session to its initial funded state.
pub fn reset_session(session: &mut SessionState) {
    session.balance = START_BALANCE;
    session.history.clear();
    session.last_outcome = None;
    session.last_message = format!("Balance reset to {START_BALANCE} coins.");
    session.auto_running = false;
    tracing::info!(balance = session.balance, "session reset");
}
