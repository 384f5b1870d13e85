use crate::sm2;
use crate::sm2::DEFAULT_EASE_FACTOR;
use crate::sm2::PASSING_QUALITY;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

/// Scheduling state of one flashcard for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub ease_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_reviewed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub next_review_at: Option<OffsetDateTime>,
    pub quality: Option<u8>,
    pub total_reviews: u32,
    pub correct_reviews: u32,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewState {
    /// State of a card that has never been reviewed.
    pub fn new() -> Self {
        Self {
            ease_factor: DEFAULT_EASE_FACTOR,
            interval: 0,
            repetitions: 0,
            last_reviewed_at: None,
            next_review_at: None,
            quality: None,
            total_reviews: 0,
            correct_reviews: 0,
        }
    }

    pub fn review(&self, quality: u8, now: OffsetDateTime) -> Self {
        let outcome =
            sm2::calculate_sm2_at(quality, self.repetitions, self.ease_factor, self.interval, now);

        let correct = quality >= PASSING_QUALITY;

        Self {
            ease_factor: outcome.ease_factor,
            interval: outcome.interval,
            repetitions: outcome.repetitions,
            last_reviewed_at: Some(now),
            next_review_at: Some(outcome.next_review),
            quality: Some(quality),
            total_reviews: self.total_reviews.saturating_add(1),
            correct_reviews: self.correct_reviews.saturating_add(u32::from(correct)),
        }
    }

    pub fn review_swipe(&self, correct: bool, now: OffsetDateTime) -> Self {
        self.review(sm2::quality_from_swipe(correct), now)
    }

    pub fn is_due(&self, now: OffsetDateTime) -> bool {
        self.next_review_at.is_none_or(|next| next <= now)
    }
}

pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..7 => format!("{days}d"),
        7..30 => format!("{}w", days / 7),
        30..365 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
