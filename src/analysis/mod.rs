//! Payout tuning support.
//!
//! Plays many seeded rounds through a [`RoundController`] with random
//! picks and reports how much of the stake comes back. Use it to check a
//! `goal_factor` / `start_factor` pair before shipping it.

mod stats;

pub use stats::ReturnStats;

use log::debug;

use crate::core::{BoardSpec, LadderConfig, LadderRng, RandomSource, Result};
use crate::payout::WagerMode;
use crate::round::RoundController;

/// Stake used for every simulated round.
const UNIT_BET: f64 = 1.0;

/// Simulate `rounds` rounds with uniformly random goals (and starts, in
/// goal+start mode).
///
/// Deterministic for a given `seed`.
pub fn simulate(
    config: &LadderConfig,
    spec: &BoardSpec,
    mode: WagerMode,
    rounds: u32,
    seed: u64,
) -> Result<ReturnStats> {
    spec.validate()?;
    let mut controller = RoundController::with_seed(config.clone(), seed)?;
    let mut picker = LadderRng::new(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);
    let mut stats = ReturnStats::new();

    for _ in 0..rounds {
        controller.start_round(spec.clone())?;
        controller.select_goal(picker.gen_index(spec.columns))?;
        if mode == WagerMode::GoalAndStart {
            controller.select_start(picker.gen_index(spec.columns))?;
        }
        let result = controller.resolve(UNIT_BET, mode)?;
        stats.record(&result);
        controller.acknowledge()?;
    }

    debug!(
        "simulated {} {} rounds: hit rate {:.3}, rtp {:.3}",
        stats.rounds,
        mode,
        stats.hit_rate(),
        stats.return_to_player()
    );
    Ok(stats)
}
