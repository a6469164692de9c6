//! Monte Carlo estimate of the paytable's return to player.
//!
//! Run with: cargo run --example house_edge -p reelhouse-engine

use reelhouse_engine::{evaluate, ReelRng, SpinGrade};

const TRIALS: usize = 200_000;
const BET: u64 = 100;

fn main() {
    let mut rng = ReelRng::from_seed(7);
    let mut total_wagered: u64 = 0;
    let mut total_returned: u64 = 0;
    let mut triples: u64 = 0;
    let mut pairs: u64 = 0;

    for _ in 0..TRIALS {
        let outcome = rng.draw_outcome();
        let (win, grade) = evaluate(&outcome, BET);
        total_wagered += BET;
        total_returned += win;
        match grade {
            SpinGrade::ThreeOfAKind(_) => triples += 1,
            SpinGrade::TwoOfAKind => pairs += 1,
            SpinGrade::NoMatch => {}
        }
    }

    let rtp = total_returned as f64 / total_wagered as f64;
    println!("trials:           {TRIALS}");
    println!("three of a kind:  {triples}");
    println!("two of a kind:    {pairs}");
    println!("return to player: {rtp:.4}");
    println!("house edge:       {:.4}", 1.0 - rtp);
}
