//! Dice rolling.
//!
//! Every call is bracketed by a `roll_the_dice` span with one `roll_once`
//! child per die, so a trace shows each individual result.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("empty range [{min}, {max})")]
    EmptyRange { min: i64, max: i64 },
}

/// Roll `count` independent dice, each uniform in `[min, max)`.
pub fn roll_dice(count: usize, min: i64, max: i64) -> Result<Vec<i64>, DiceError> {
    roll_dice_with(&mut rand::thread_rng(), count, min, max)
}

/// Same as [`roll_dice`] with a caller-supplied generator.
pub fn roll_dice_with<R: Rng>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, DiceError> {
    if min >= max {
        return Err(DiceError::EmptyRange { min, max });
    }

    let span = tracing::info_span!("roll_the_dice", dicelib.rolls = count);
    let _enter = span.enter();

    let rolls = (0..count).map(|index| roll_once(rng, index, min, max)).collect();
    metrics::counter!("service_dice_rolls_total").increment(count as u64);
    Ok(rolls)
}

fn roll_once<R: Rng>(rng: &mut R, index: usize, min: i64, max: i64) -> i64 {
    let span = tracing::trace_span!("roll_once", index, dicelib.rolled = tracing::field::Empty);
    let _enter = span.enter();

    let result = rng.gen_range(min..max);
    span.record("dicelib.rolled", result);
    result
}
