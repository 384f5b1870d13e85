use crate::prompt;
use anyhow::Result;
use anyhow::bail;
use hp_srs::BankRequest;
use hp_srs::GeneratedQuestion;
use hp_srs::QuestionType;
use hp_srs::SectionCode;
use hp_srs::SessionResult;
use hp_srs::Srs;
use hp_srs::clock::Clock;
use hp_srs::format_interval;
use hp_srs::generate_hp_question_bank;
use serde::Serialize;

pub struct App<C: Clock> {
    srs: Srs,
    user: String,
    clock: C,
}

/// Inputs that determine a generated bank.
#[derive(Debug, Clone, PartialEq)]
pub struct BankArgs {
    pub section: String,
    pub count: i64,
    pub seed: Option<String>,
    pub test_version: Option<String>,
}

impl<C: Clock> App<C> {
    pub fn new(srs: Srs, user: String, clock: C) -> Self {
        Self { srs, user, clock }
    }

    pub fn init(&mut self) -> Result<()> {
        self.srs.init()?;

        println!("Initialized database");
        Ok(())
    }

    pub fn add(&mut self, front: &str, back: &str) -> Result<()> {
        let id = self.srs.create_card(front, back, self.clock.now())?;

        println!("Created card {id}");
        Ok(())
    }

    pub fn cards(&self) -> Result<()> {
        for card in self.srs.cards()? {
            println!("{} {}", card.id, card.front.replace('\n', " "));
        }

        Ok(())
    }

    pub fn delete(&mut self, card_id: u64) -> Result<()> {
        let front = self.srs.get_card(card_id)?.front;

        if prompt::binary(format!(
            "Are you sure you want to delete '{}'?",
            front.replace('\n', " ")
        ))? {
            self.srs.delete_card(card_id)?;
            println!("... deleted.");
        }

        Ok(())
    }

    pub fn review(&mut self) -> Result<()> {
        let mut cards = self.srs.due_cards(&self.user, self.clock.now())?;

        if cards.is_empty() {
            println!("Nothing to review");
            return Ok(());
        }

        fastrand::shuffle(&mut cards);

        let num_cards = cards.len();
        println!("{num_cards} cards to review\n");

        let mut num_correct = 0;

        for card in cards {
            println!("{}\n", card.front);

            prompt::any("Press any key to show answer")?;

            println!("{}", "-".repeat(79));
            println!("{}\n", card.back);

            let correct = prompt::binary("Correct?")?;
            if correct {
                num_correct += 1;
            }

            let state = self
                .srs
                .answer(&self.user, card.id, correct, self.clock.now())?;

            println!("Next review in {}\n", format_interval(state.interval));
        }

        println!("Answered {num_correct}/{num_cards} correctly");

        Ok(())
    }

    pub fn stats(&self) -> Result<()> {
        let stats = self.srs.stats(&self.user, self.clock.now())?;

        print!("{stats}");

        Ok(())
    }

    pub fn generate(&self, args: &BankArgs, json: bool) -> Result<()> {
        let seed = seed_or_random(args.seed.as_deref());
        let questions = bank(args, &seed)?;

        if json {
            println!("{}", bank_json(args, &seed, &questions)?);
            return Ok(());
        }

        println!("Seed: {seed}\n");

        for q in &questions {
            print_question(q);

            let letter = q.correct_index().map(prompt::option_letter).unwrap_or('?');
            println!("Svar: {letter}. {}", q.correct_answer);
            println!("{}\n", q.explanation);
        }

        Ok(())
    }

    pub fn drill(&mut self, args: &BankArgs) -> Result<()> {
        let seed = seed_or_random(args.seed.as_deref());
        let questions = bank(args, &seed)?;

        println!("Seed: {seed}\n");

        let (correct, answered) = run_drill(&questions)?;

        let result = SessionResult {
            section: questions[0].section_code,
            question_count: questions.len() as u32,
            seed: &seed,
            test_version: args.test_version.as_deref(),
            correct,
            answered,
        };
        let id = self.srs.save_session(&self.user, &result, self.clock.now())?;

        println!("Answered {correct}/{answered} correctly (session {id})");

        Ok(())
    }

    pub fn sessions(&self) -> Result<()> {
        for session in self.srs.sessions(&self.user)? {
            println!("{session}");
        }

        Ok(())
    }

    /// Drills the exact questions of an earlier session again.
    pub fn replay(&mut self, session_id: u64) -> Result<()> {
        let session = self.srs.session(&self.user, session_id)?;

        let args = BankArgs {
            section: session.section_code.code().to_string(),
            count: i64::from(session.question_count),
            seed: Some(session.seed),
            test_version: session.test_version,
        };

        self.drill(&args)
    }
}

fn seed_or_random(seed: Option<&str>) -> String {
    match seed {
        Some(seed) => seed.to_string(),
        None => format!("{:016x}", fastrand::u64(..)),
    }
}

fn bank(args: &BankArgs, seed: &str) -> Result<Vec<GeneratedQuestion>> {
    let questions = generate_hp_question_bank(&BankRequest {
        section_code: &args.section,
        count: args.count,
        test_version: args.test_version.as_deref(),
        seed: Some(seed),
    });

    if questions.is_empty() {
        if args.section.parse::<SectionCode>().is_err() {
            bail!("unknown section '{}'", args.section);
        }
        bail!("no questions to generate, count was {}", args.count);
    }

    Ok(questions)
}

/// A generated bank together with the inputs that reproduce it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BankOutput<'a> {
    seed: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_version: Option<&'a str>,
    questions: &'a [GeneratedQuestion],
}

fn bank_json(args: &BankArgs, seed: &str, questions: &[GeneratedQuestion]) -> Result<String> {
    let output = BankOutput {
        seed,
        test_version: args.test_version.as_deref(),
        questions,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn print_question(q: &GeneratedQuestion) {
    println!(
        "{}. [{} {}] {}",
        q.question_number, q.section_code, q.difficulty, q.question_text
    );

    if let Some(passage) = &q.reading_passage {
        println!("\n{passage}");
    }

    println!();

    // Comparison alternatives are already spelled out in the question text
    if q.question_type != QuestionType::Comparison {
        for (i, option) in q.options.iter().enumerate() {
            println!("  {}. {option}", prompt::option_letter(i));
        }
        println!();
    }
}

/// Returns (correct, answered).
fn run_drill(questions: &[GeneratedQuestion]) -> Result<(u32, u32)> {
    let mut correct = 0;
    let mut answered = 0;

    for q in questions {
        print_question(q);

        let selection = prompt::choice("Ditt svar:", q.options.len())?;
        answered += 1;

        if q.is_correct(&q.options[selection]) {
            correct += 1;
            println!("Rätt!");
        } else {
            println!("Fel. Rätt svar: {}", q.correct_answer);
        }
        println!("{}\n", q.explanation);
    }

    Ok((correct, answered))
}
