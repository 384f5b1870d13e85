use crate::srs::TestSession;
use crate::srs::UserStats;
use std::fmt;

fn accuracy(correct: u32, answered: u32) -> f32 {
    if answered > 0 {
        correct as f32 / answered as f32 * 100.0
    } else {
        100.0
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} / {} cards reviewed", self.reviewed, self.cards)?;
        writeln!(f, "Due now: {}", self.due)?;

        writeln!(
            f,
            "Accuracy: {:.0}% ({} / {})",
            accuracy(self.correct_reviews, self.total_reviews),
            self.correct_reviews,
            self.total_reviews,
        )
    }
}

impl fmt::Display for TestSession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} questions, seed '{}'",
            self.id, self.section_code, self.question_count, self.seed
        )?;

        if let Some(version) = &self.test_version {
            write!(f, ", version '{version}'")?;
        }

        write!(
            f,
            " - {:.0}% ({} / {})",
            accuracy(self.correct, self.answered),
            self.correct,
            self.answered,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::SectionCode;
    use time::OffsetDateTime;

    #[test]
    fn user_stats() {
        let stats = UserStats {
            cards: 10,
            reviewed: 4,
            due: 7,
            total_reviews: 8,
            correct_reviews: 6,
        };

        assert_eq!(
            stats.to_string(),
            "4 / 10 cards reviewed\nDue now: 7\nAccuracy: 75% (6 / 8)\n"
        );
    }

    #[test]
    fn no_reviews_yet() {
        let stats = UserStats {
            cards: 0,
            reviewed: 0,
            due: 0,
            total_reviews: 0,
            correct_reviews: 0,
        };

        assert!(stats.to_string().contains("Accuracy: 100% (0 / 0)"));
    }

    #[test]
    fn session_line() {
        let session = TestSession {
            id: 3,
            section_code: SectionCode::Las,
            question_count: 20,
            seed: "abc".to_string(),
            test_version: Some("vt-2024".to_string()),
            correct: 15,
            answered: 20,
            timestamp: OffsetDateTime::UNIX_EPOCH,
        };

        assert_eq!(
            session.to_string(),
            "3 LÄS 20 questions, seed 'abc', version 'vt-2024' - 75% (15 / 20)"
        );
    }
}
