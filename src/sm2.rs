//! SM-2 (SuperMemo 2) scheduling.
//!
//! Quality is graded 0-5. Anything below 3 is a lapse: the card restarts at a one day interval
//! and its ease factor takes a small penalty. Passing grades walk the classic progression of
//! 1 day, 6 days, then the previous interval multiplied by the ease factor.

use crate::clock::Clock;
use crate::clock::UtcClock;
use time::Duration;
use time::OffsetDateTime;

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;

pub const PASSING_QUALITY: u8 = 3;
const MAX_QUALITY: u8 = 5;

const RESTART_INTERVAL: u32 = 1;
const FIRST_INTERVAL: u32 = 1;
const SECOND_INTERVAL: u32 = 6;
// About a century. Keeps the due date representable.
const MAX_INTERVAL: u32 = 36_500;

const LAPSE_EASE_PENALTY: f64 = 0.2;

const CORRECT_SWIPE_QUALITY: u8 = 4;
const WRONG_SWIPE_QUALITY: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sm2Outcome {
    pub ease_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub next_review: OffsetDateTime,
}

/// Maps a binary swipe to a quality grade. A correct swipe leaves the ease factor where it is.
pub fn quality_from_swipe(correct: bool) -> u8 {
    if correct {
        CORRECT_SWIPE_QUALITY
    } else {
        WRONG_SWIPE_QUALITY
    }
}

/// Schedules against the current UTC time.
pub fn calculate_sm2(quality: u8, repetitions: u32, ease_factor: f64, interval: u32) -> Sm2Outcome {
    Scheduler::new(UtcClock).next(quality, repetitions, ease_factor, interval)
}

pub struct Scheduler<C: Clock> {
    clock: C,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Scheduler { clock }
    }

    pub fn next(&self, quality: u8, repetitions: u32, ease_factor: f64, interval: u32) -> Sm2Outcome {
        calculate_sm2_at(quality, repetitions, ease_factor, interval, self.clock.now())
    }
}

pub fn calculate_sm2_at(
    quality: u8,
    repetitions: u32,
    ease_factor: f64,
    interval: u32,
    now: OffsetDateTime,
) -> Sm2Outcome {
    let quality = quality.min(MAX_QUALITY);
    let ease_factor = sanitize_ease_factor(ease_factor);

    let (ease_factor, interval, repetitions) = if quality < PASSING_QUALITY {
        (
            (ease_factor - LAPSE_EASE_PENALTY).max(MIN_EASE_FACTOR),
            RESTART_INTERVAL,
            0,
        )
    } else {
        let repetitions = repetitions.saturating_add(1);

        let interval = match repetitions {
            1 => FIRST_INTERVAL,
            2 => SECOND_INTERVAL,
            // The prior interval may be 0 if the caller's state is inconsistent
            _ => ((f64::from(interval) * ease_factor).round() as u32).max(1),
        };

        let q = f64::from(MAX_QUALITY - quality);
        let ease_factor = (ease_factor + (0.1 - q * (0.08 + q * 0.02))).max(MIN_EASE_FACTOR);

        (ease_factor, interval, repetitions)
    };

    let interval = interval.min(MAX_INTERVAL);

    Sm2Outcome {
        ease_factor,
        interval,
        repetitions,
        next_review: now + Duration::days(i64::from(interval)),
    }
}

fn sanitize_ease_factor(ease_factor: f64) -> f64 {
    if ease_factor.is_finite() {
        ease_factor.max(MIN_EASE_FACTOR)
    } else {
        DEFAULT_EASE_FACTOR
    }
}
