use crate::question::SectionCode;
use crate::review::ReviewState;
use anyhow::Result;
use anyhow::bail;
use log::debug;
use log::info;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Row;
use rusqlite::config::DbConfig;
use rusqlite::params;
use rusqlite::types::Type;
use std::path::Path;
use time::OffsetDateTime;

pub struct Srs {
    conn: Connection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    pub front: String,
    pub back: String,
}

#[derive(Debug)]
pub struct UserStats {
    pub cards: u32,
    pub reviewed: u32,
    pub due: u32,
    pub total_reviews: u32,
    pub correct_reviews: u32,
}

/// A finished drill, with everything needed to regenerate its questions.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSession {
    pub id: u64,
    pub section_code: SectionCode,
    pub question_count: u32,
    pub seed: String,
    pub test_version: Option<String>,
    pub correct: u32,
    pub answered: u32,
    pub timestamp: OffsetDateTime,
}

/// Outcome of a drill, as handed to [`Srs::save_session`].
#[derive(Debug)]
pub struct SessionResult<'a> {
    pub section: SectionCode,
    pub question_count: u32,
    pub seed: &'a str,
    pub test_version: Option<&'a str>,
    pub correct: u32,
    pub answered: u32,
}

impl Srs {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let srs = Self::with_connection(Connection::open_in_memory()?)?;
        srs.init()?;

        Ok(srs)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;

        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;

        info!("initialized schema");
        Ok(())
    }

    pub fn cards(&self) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, front, back
            FROM Flashcard
            ORDER BY creationTimestamp DESC, id DESC
            ",
        )?;

        let iter = stmt.query_map([], card_from_row)?;

        let r: Result<_, rusqlite::Error> = iter.collect();

        Ok(r?)
    }

    pub fn get_card(&self, id: u64) -> Result<Card> {
        Ok(self.conn.query_row(
            "SELECT id, front, back FROM Flashcard WHERE id = ?",
            [id],
            card_from_row,
        )?)
    }

    pub fn create_card(&mut self, front: &str, back: &str, now: OffsetDateTime) -> Result<u64> {
        if front.trim().is_empty() {
            bail!("front of card can't be empty");
        }

        let id = self.conn.query_row(
            "INSERT INTO Flashcard(front, back, creationTimestamp) VALUES (?, ?, ?) RETURNING id",
            params![front, back, to_millis(now)],
            |row| row.get(0),
        )?;

        Ok(id)
    }

    /// Deletes the card along with every user's review state for it.
    pub fn delete_card(&mut self, id: u64) -> Result<()> {
        self.conn.execute("DELETE FROM Flashcard WHERE id = ?", [id])?;

        Ok(())
    }

    pub fn review_state(&self, user_id: &str, card_id: u64) -> Result<Option<ReviewState>> {
        load_review_state(&self.conn, user_id, card_id)
    }

    pub fn upsert_review_state(
        &mut self,
        user_id: &str,
        card_id: u64,
        state: &ReviewState,
    ) -> Result<()> {
        upsert(&self.conn, user_id, card_id, state)
    }

    /// Records a swipe on a card and returns the rescheduled state.
    pub fn answer(
        &mut self,
        user_id: &str,
        card_id: u64,
        correct: bool,
        now: OffsetDateTime,
    ) -> Result<ReviewState> {
        let tx = self.conn.transaction()?;

        let prior = load_review_state(&tx, user_id, card_id)?.unwrap_or_default();

        let state = prior.review_swipe(correct, now);

        upsert(&tx, user_id, card_id, &state)?;

        tx.commit()?;

        debug!(
            "card {card_id} for {user_id}: correct={correct}, interval={}d, ease={:.2}",
            state.interval, state.ease_factor
        );

        Ok(state)
    }

    /// Cards that are due or have never been reviewed, most overdue first.
    pub fn due_cards(&self, user_id: &str, now: OffsetDateTime) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(
            "
            SELECT Flashcard.id, front, back
            FROM Flashcard
            LEFT JOIN ReviewState
                ON ReviewState.flashcardId = Flashcard.id AND ReviewState.userId = ?1
            WHERE nextReviewTimestamp IS NULL OR nextReviewTimestamp <= ?2
            ORDER BY nextReviewTimestamp IS NULL, nextReviewTimestamp, Flashcard.id
            ",
        )?;

        let iter = stmt.query_map(params![user_id, to_millis(now)], card_from_row)?;

        let r: Result<_, rusqlite::Error> = iter.collect();

        Ok(r?)
    }

    pub fn stats(&self, user_id: &str, now: OffsetDateTime) -> Result<UserStats> {
        Ok(self.conn.query_row(
            "
            SELECT
                (SELECT COUNT(*) FROM Flashcard) AS cards,

                (SELECT COUNT(*) FROM ReviewState WHERE userId = ?1) AS reviewed,

                (SELECT COUNT(*)
                FROM Flashcard
                LEFT JOIN ReviewState
                    ON ReviewState.flashcardId = Flashcard.id AND ReviewState.userId = ?1
                WHERE nextReviewTimestamp IS NULL OR nextReviewTimestamp <= ?2) AS due,

                (SELECT COALESCE(SUM(totalReviews), 0)
                FROM ReviewState WHERE userId = ?1) AS totalReviews,

                (SELECT COALESCE(SUM(correctReviews), 0)
                FROM ReviewState WHERE userId = ?1) AS correctReviews
            ",
            params![user_id, to_millis(now)],
            |row| {
                Ok(UserStats {
                    cards: row.get(0)?,
                    reviewed: row.get(1)?,
                    due: row.get(2)?,
                    total_reviews: row.get(3)?,
                    correct_reviews: row.get(4)?,
                })
            },
        )?)
    }

    pub fn save_session(
        &mut self,
        user_id: &str,
        result: &SessionResult,
        now: OffsetDateTime,
    ) -> Result<u64> {
        let id: u64 = self.conn.query_row(
            "
            INSERT INTO TestSession(userId, sectionCode, questionCount, seed, testVersion,
                correct, answered, timestamp)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            ",
            params![
                user_id,
                result.section.code(),
                result.question_count,
                result.seed,
                result.test_version,
                result.correct,
                result.answered,
                to_millis(now)
            ],
            |row| row.get(0),
        )?;

        info!(
            "saved {} session {id} for {user_id}: {}/{}",
            result.section, result.correct, result.answered
        );

        Ok(id)
    }

    pub fn session(&self, user_id: &str, id: u64) -> Result<TestSession> {
        let session = self
            .conn
            .query_row(
                "
                SELECT id, sectionCode, questionCount, seed, testVersion, correct, answered,
                    timestamp
                FROM TestSession
                WHERE userId = ? AND id = ?
                ",
                params![user_id, id],
                session_from_row,
            )
            .optional()?;

        match session {
            Some(session) => Ok(session),
            None => bail!("no session {id} for {user_id}"),
        }
    }

    pub fn sessions(&self, user_id: &str) -> Result<Vec<TestSession>> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, sectionCode, questionCount, seed, testVersion, correct, answered, timestamp
            FROM TestSession
            WHERE userId = ?
            ORDER BY timestamp DESC, id DESC
            ",
        )?;

        let iter = stmt.query_map([user_id], session_from_row)?;

        let r: Result<_, rusqlite::Error> = iter.collect();

        Ok(r?)
    }
}

fn load_review_state(
    conn: &Connection,
    user_id: &str,
    card_id: u64,
) -> Result<Option<ReviewState>> {
    Ok(conn
        .query_row(
            "
            SELECT easeFactor, intervalDays, repetitions, quality,
                lastReviewedTimestamp, nextReviewTimestamp, totalReviews, correctReviews
            FROM ReviewState
            WHERE userId = ? AND flashcardId = ?
            ",
            params![user_id, card_id],
            review_state_from_row,
        )
        .optional()?)
}

fn upsert(conn: &Connection, user_id: &str, card_id: u64, state: &ReviewState) -> Result<()> {
    conn.execute(
        "
        INSERT INTO ReviewState(userId, flashcardId, easeFactor, intervalDays, repetitions,
            quality, lastReviewedTimestamp, nextReviewTimestamp, totalReviews, correctReviews)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(userId, flashcardId) DO UPDATE SET
            easeFactor = excluded.easeFactor,
            intervalDays = excluded.intervalDays,
            repetitions = excluded.repetitions,
            quality = excluded.quality,
            lastReviewedTimestamp = excluded.lastReviewedTimestamp,
            nextReviewTimestamp = excluded.nextReviewTimestamp,
            totalReviews = excluded.totalReviews,
            correctReviews = excluded.correctReviews
        ",
        params![
            user_id,
            card_id,
            state.ease_factor,
            state.interval,
            state.repetitions,
            state.quality,
            state.last_reviewed_at.map(to_millis),
            state.next_review_at.map(to_millis),
            state.total_reviews,
            state.correct_reviews
        ],
    )?;

    Ok(())
}

fn card_from_row(row: &Row) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        front: row.get(1)?,
        back: row.get(2)?,
    })
}

fn review_state_from_row(row: &Row) -> rusqlite::Result<ReviewState> {
    Ok(ReviewState {
        ease_factor: row.get(0)?,
        interval: row.get(1)?,
        repetitions: row.get(2)?,
        quality: row.get(3)?,
        last_reviewed_at: optional_timestamp(row, 4)?,
        next_review_at: optional_timestamp(row, 5)?,
        total_reviews: row.get(6)?,
        correct_reviews: row.get(7)?,
    })
}

fn session_from_row(row: &Row) -> rusqlite::Result<TestSession> {
    let code: String = row.get(1)?;
    let section_code = code
        .parse::<SectionCode>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(TestSession {
        id: row.get(0)?,
        section_code,
        question_count: row.get(2)?,
        seed: row.get(3)?,
        test_version: row.get(4)?,
        correct: row.get(5)?,
        answered: row.get(6)?,
        timestamp: timestamp(row, 7)?,
    })
}

fn timestamp(row: &Row, idx: usize) -> rusqlite::Result<OffsetDateTime> {
    from_millis(row.get(idx)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

fn optional_timestamp(row: &Row, idx: usize) -> rusqlite::Result<Option<OffsetDateTime>> {
    match row.get::<_, Option<i64>>(idx)? {
        Some(ms) => from_millis(ms).map(Some).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e))
        }),
        None => Ok(None),
    }
}

fn to_millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

fn from_millis(ms: i64) -> Result<OffsetDateTime, time::error::ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    const USER: &str = "anna";

    fn now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    fn srs_with_cards(fronts: &[&str]) -> (Srs, Vec<u64>) {
        let mut srs = Srs::open_in_memory().unwrap();

        let ids = fronts
            .iter()
            .map(|front| srs.create_card(front, "baksida", now()).unwrap())
            .collect();

        (srs, ids)
    }

    #[test]
    fn reject_empty_front() {
        let mut srs = Srs::open_in_memory().unwrap();

        assert!(srs.create_card("  ", "baksida", now()).is_err());
    }

    #[test]
    fn first_answer_starts_from_defaults() {
        let (mut srs, ids) = srs_with_cards(&["hund"]);

        assert_eq!(srs.review_state(USER, ids[0]).unwrap(), None);

        let state = srs.answer(USER, ids[0], true, now()).unwrap();

        assert_eq!(state, ReviewState::new().review_swipe(true, now()));
        assert_eq!(srs.review_state(USER, ids[0]).unwrap(), Some(state));
    }

    #[test]
    fn answer_builds_on_stored_state() {
        let (mut srs, ids) = srs_with_cards(&["fisk"]);

        let stored = ReviewState::new().review_swipe(true, now());
        srs.upsert_review_state(USER, ids[0], &stored).unwrap();

        let later = now() + Duration::days(1);
        let state = srs.answer(USER, ids[0], true, later).unwrap();

        assert_eq!(state, stored.review_swipe(true, later));
        assert_eq!(state.interval, 6);
        assert_eq!(state.total_reviews, 2);
        assert_eq!(srs.review_state(USER, ids[0]).unwrap(), Some(state));
    }

    #[test]
    fn upsert_replaces_existing_row() {
        let (mut srs, ids) = srs_with_cards(&["katt"]);

        let first = ReviewState::new().review_swipe(true, now());
        srs.upsert_review_state(USER, ids[0], &first).unwrap();

        let second = first.review_swipe(false, now() + Duration::days(1));
        srs.upsert_review_state(USER, ids[0], &second).unwrap();

        assert_eq!(srs.review_state(USER, ids[0]).unwrap(), Some(second));
        assert_eq!(srs.stats(USER, now()).unwrap().reviewed, 1);
    }

    #[test]
    fn state_is_per_user() {
        let (mut srs, ids) = srs_with_cards(&["häst"]);

        srs.answer(USER, ids[0], true, now()).unwrap();

        assert_eq!(srs.review_state("bertil", ids[0]).unwrap(), None);
        assert_eq!(srs.due_cards("bertil", now()).unwrap().len(), 1);
    }

    #[test]
    fn answering_unknown_card_fails() {
        let mut srs = Srs::open_in_memory().unwrap();

        assert!(srs.answer(USER, 42, true, now()).is_err());
    }

    #[test]
    fn due_cards_follow_schedule() {
        let (mut srs, ids) = srs_with_cards(&["ett", "två", "tre"]);

        srs.answer(USER, ids[0], true, now()).unwrap();
        srs.answer(USER, ids[1], false, now() - Duration::days(3)).unwrap();

        let due: Vec<_> = srs
            .due_cards(USER, now())
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(due, &[ids[1], ids[2]]);

        let due = srs.due_cards(USER, now() + Duration::days(1)).unwrap();
        assert_eq!(due.len(), 3);
        assert_eq!(due[0].id, ids[1]);
    }

    #[test]
    fn delete_cascades_review_state() {
        let (mut srs, ids) = srs_with_cards(&["fyra"]);

        srs.answer(USER, ids[0], true, now()).unwrap();
        srs.delete_card(ids[0]).unwrap();

        assert_eq!(srs.review_state(USER, ids[0]).unwrap(), None);
        assert_eq!(srs.stats(USER, now()).unwrap().reviewed, 0);
    }

    #[test]
    fn stats_count_answers() {
        let (mut srs, ids) = srs_with_cards(&["fem", "sex"]);

        srs.answer(USER, ids[0], true, now()).unwrap();
        srs.answer(USER, ids[0], false, now()).unwrap();
        srs.answer(USER, ids[1], true, now()).unwrap();

        let stats = srs.stats(USER, now()).unwrap();

        assert_eq!(stats.cards, 2);
        assert_eq!(stats.reviewed, 2);
        assert_eq!(stats.due, 0);
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.correct_reviews, 2);
    }

    #[test]
    fn sessions_round_trip() {
        let mut srs = Srs::open_in_memory().unwrap();

        let las = SessionResult {
            section: SectionCode::Las,
            question_count: 20,
            seed: "abc",
            test_version: Some("vt-2024"),
            correct: 15,
            answered: 20,
        };
        let kva = SessionResult {
            section: SectionCode::Kva,
            question_count: 10,
            seed: "def",
            test_version: None,
            correct: 3,
            answered: 4,
        };

        let id = srs.save_session(USER, &las, now()).unwrap();
        srs.save_session(USER, &kva, now() + Duration::hours(1)).unwrap();

        let session = srs.session(USER, id).unwrap();
        assert_eq!(session.section_code, SectionCode::Las);
        assert_eq!(session.seed, "abc");
        assert_eq!(session.test_version.as_deref(), Some("vt-2024"));
        assert_eq!(session.timestamp, now());

        let sessions = srs.sessions(USER).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].section_code, SectionCode::Kva);

        assert!(srs.session("bertil", id).is_err());
    }
}
