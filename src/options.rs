//! Builds the four answer alternatives shown for a question.

use crate::rand::Rng;

pub const OPTION_COUNT: usize = 4;

const FILLERS: [&str; 4] = [
    "Ingen av ovanstående",
    "Samtliga ovanstående",
    "Kan inte avgöras",
    "Okänt",
];

/// Returns exactly four shuffled, distinct options containing `correct` once.
///
/// Up to three distractors are drawn from `wrong`. Empty strings and copies of the correct
/// answer are dropped first; fixed filler phrases make up for a short pool.
pub fn make_options(rng: &mut Rng, correct: &str, wrong: &[impl AsRef<str>]) -> Vec<String> {
    let mut pool: Vec<&str> = Vec::new();
    for w in wrong {
        let w: &str = w.as_ref();
        if !w.is_empty() && w != correct && !pool.contains(&w) {
            pool.push(w);
        }
    }

    let mut options = vec![correct.to_string()];
    for w in rng.shuffle(&pool).into_iter().take(OPTION_COUNT - 1) {
        push_unique(&mut options, w);
    }

    if options.len() < OPTION_COUNT {
        for filler in rng.shuffle(&FILLERS) {
            if options.len() == OPTION_COUNT {
                break;
            }
            push_unique(&mut options, filler);
        }
    }

    rng.shuffle(&options)
}

fn push_unique(options: &mut Vec<String>, candidate: &str) {
    if !options.iter().any(|o| o == candidate) {
        options.push(candidate.to_string());
    }
}
