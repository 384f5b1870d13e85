//! Deterministic practice question banks for the högskoleprov.
//!
//! A bank is a pure function of the section code, the requested count, the seed and the test
//! version. Regenerating from the same inputs yields the same questions in the same order, ids
//! included, which is what lets a stored session be replayed.

use crate::bank;
use crate::bank::BLANK;
use crate::options::make_options;
use crate::quant;
use crate::quant::Draft;
use crate::question::Difficulty;
use crate::question::GeneratedQuestion;
use crate::question::QuestionType;
use crate::question::SectionCode;
use crate::rand::Rng;
use crate::rand::hash_str;
use log::debug;
use log::warn;

pub const MAX_COUNT: i64 = 5000;

// Part of every derived seed. Bump when the banks or generators change.
const GENERATOR_VERSION: &str = "hp-bank-v1";

const ID_SUFFIX_LEN: usize = 4;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Default)]
pub struct BankRequest<'a> {
    pub section_code: &'a str,
    pub count: i64,
    pub test_version: Option<&'a str>,
    pub seed: Option<&'a str>,
}

/// Generates up to `count` questions for a section.
///
/// Unknown section codes and non-positive counts give an empty bank. Counts above
/// [`MAX_COUNT`] are clamped.
pub fn generate_hp_question_bank(request: &BankRequest) -> Vec<GeneratedQuestion> {
    let Some(section) = SectionCode::normalize(request.section_code) else {
        warn!("no question bank for section '{}'", request.section_code);
        return vec![];
    };

    let count = request.count.clamp(0, MAX_COUNT) as usize;
    if count == 0 {
        return vec![];
    }

    let seed_hash = hash_str(&combined_seed(request, section, count));
    let mut rng = Rng::new(seed_hash);

    debug!("generating {count} {section} questions from seed hash {seed_hash:08x}");

    (0..count)
        .map(|index| {
            let target = Difficulty::for_position(index, count);
            let (question_type, draft, passage, difficulty) = draft(&mut rng, section, target);

            let number = index + 1;
            let id = format!(
                "hp-{}-{seed_hash:08x}-{number:04}-{}",
                section.slug(),
                id_suffix(&mut rng)
            );

            GeneratedQuestion {
                id,
                section_code: section,
                question_number: number as u32,
                question_text: draft.text,
                question_type,
                options: draft.options,
                correct_answer: draft.correct,
                explanation: draft.explanation,
                difficulty: difficulty.unwrap_or(target),
                reading_passage: passage,
            }
        })
        .collect()
}

fn combined_seed(request: &BankRequest, section: SectionCode, count: usize) -> String {
    format!(
        "{}|{}|{}|{count}|{GENERATOR_VERSION}",
        request.seed.unwrap_or_default(),
        section.code(),
        request.test_version.unwrap_or_default(),
    )
}

fn id_suffix(rng: &mut Rng) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.index(ID_ALPHABET.len())]))
        .collect()
}

/// Section specific content. The returned difficulty, when present, overrides the ramp.
fn draft(
    rng: &mut Rng,
    section: SectionCode,
    target: Difficulty,
) -> (QuestionType, Draft, Option<String>, Option<Difficulty>) {
    match section {
        SectionCode::Ord => (QuestionType::MultipleChoice, vocabulary(rng), None, None),
        SectionCode::Mek => (QuestionType::MultipleChoice, sentence(rng), None, None),
        SectionCode::Las => {
            let (draft, passage, difficulty) = reading(rng);
            (
                QuestionType::ReadingComprehension,
                draft,
                Some(passage),
                difficulty,
            )
        }
        SectionCode::Kva => (QuestionType::Comparison, quant::kva(rng, target), None, None),
        SectionCode::Xyz => (QuestionType::MultipleChoice, quant::xyz(rng, target), None, None),
        SectionCode::Dtk => (QuestionType::MultipleChoice, quant::dtk(rng, target), None, None),
    }
}

fn vocabulary(rng: &mut Rng) -> Draft {
    let entry = &bank::VOCABULARY[rng.index(bank::VOCABULARY.len())];

    Draft {
        text: format!("Vad betyder ordet \"{}\"?", entry.word),
        options: make_options(rng, entry.definition, entry.distractors),
        correct: entry.definition.to_string(),
        explanation: format!("\"{}\" betyder {}.", entry.word, entry.definition),
    }
}

fn sentence(rng: &mut Rng) -> Draft {
    let template = &bank::SENTENCES[rng.index(bank::SENTENCES.len())];

    Draft {
        text: format!(
            "Vilket alternativ passar bäst i luckan?\n\n{}",
            template.text
        ),
        options: make_options(rng, template.answer, template.distractors),
        correct: template.answer.to_string(),
        explanation: format!(
            "Rätt ord är \"{}\": {}",
            template.answer,
            template.text.replacen(BLANK, template.answer, 1)
        ),
    }
}

fn reading(rng: &mut Rng) -> (Draft, String, Option<Difficulty>) {
    let passage = &bank::PASSAGES[rng.index(bank::PASSAGES.len())];
    let question = &passage.questions[rng.index(passage.questions.len())];

    let draft = Draft {
        text: question.question.to_string(),
        options: make_options(rng, question.answer, question.distractors),
        correct: question.answer.to_string(),
        explanation: format!(
            "Svaret framgår av texten \"{}\": {}",
            passage.title, question.answer
        ),
    };

    (draft, passage.text.to_string(), passage.difficulty)
}
