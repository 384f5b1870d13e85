//! Spaced repetition flashcards and a deterministic practice bank for the Swedish
//! Högskoleprovet.

mod bank;
pub mod clock;
mod generate;
mod options;
mod quant;
pub mod question;
pub mod rand;
pub mod review;
pub mod sm2;
pub mod srs;
mod stats;

pub use generate::BankRequest;
pub use generate::MAX_COUNT;
pub use generate::generate_hp_question_bank;
pub use options::make_options;
pub use question::Difficulty;
pub use question::GeneratedQuestion;
pub use question::ParseSectionError;
pub use question::QuestionType;
pub use question::SectionCode;
pub use review::ReviewState;
pub use review::format_interval;
pub use sm2::Scheduler;
pub use sm2::Sm2Outcome;
pub use sm2::calculate_sm2;
pub use sm2::calculate_sm2_at;
pub use sm2::quality_from_swipe;
pub use srs::Card;
pub use srs::SessionResult;
pub use srs::Srs;
pub use srs::TestSession;
pub use srs::UserStats;
