//! Numeric question generators: quantitative comparisons (KVA) and the problem solving and data
//! interpretation sections (XYZ, DTK).

use crate::options::make_options;
use crate::question::Difficulty;
use crate::rand::Rng;
use std::cmp::Ordering;
use std::fmt;

pub const COMPARISON_OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

const COMPARISON_LEGEND: &str = "A: I är större än II\n\
                                 B: II är större än I\n\
                                 C: I är lika med II\n\
                                 D: informationen är otillräcklig";

/// Question content before it is numbered and given an id.
pub struct Draft {
    pub text: String,
    pub options: Vec<String>,
    pub correct: String,
    pub explanation: String,
}

/// Exact fraction with a positive denominator.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0);

        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    pub fn int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        (i128::from(self.num) * i128::from(other.den))
            .cmp(&(i128::from(other.num) * i128::from(self.den)))
    }
}

/// Decimal form with a decimal comma, rounded to at most four decimals.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const SCALE: i128 = 10_000;

        let num = i128::from(self.num);
        let den = i128::from(self.den);

        let scaled = (num.abs() * SCALE * 2 + den) / (den * 2);
        let sign = if num < 0 && scaled != 0 { "-" } else { "" };

        let whole = scaled / SCALE;
        let frac = scaled % SCALE;

        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let digits = format!("{frac:04}");
            write!(f, "{sign}{whole},{}", digits.trim_end_matches('0'))
        }
    }
}

fn relation(a: Ratio, b: Ratio) -> &'static str {
    match a.cmp(&b) {
        Ordering::Greater => "A",
        Ordering::Less => "B",
        Ordering::Equal => "C",
    }
}

fn verdict(letter: &str) -> &'static str {
    match letter {
        "A" => "Kvantitet I är större, alltså A.",
        "B" => "Kvantitet II är större, alltså B.",
        "C" => "Kvantiteterna är lika stora, alltså C.",
        _ => "Jämförelsen kan inte avgöras, alltså D.",
    }
}

fn upper_bound(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 9,
        Difficulty::Medium => 20,
        Difficulty::Hard => 50,
    }
}

fn comparison(setup: &str, first: &str, second: &str, a: Ratio, b: Ratio) -> Draft {
    let letter = relation(a, b);

    Draft {
        text: comparison_text(setup, first, second),
        options: COMPARISON_OPTIONS.map(String::from).to_vec(),
        correct: letter.to_string(),
        explanation: format!("I = {a}, II = {b}. {}", verdict(letter)),
    }
}

fn comparison_text(setup: &str, first: &str, second: &str) -> String {
    let mut text = String::new();
    if !setup.is_empty() {
        text.push_str(setup);
        text.push_str("\n\n");
    }
    text.push_str(&format!(
        "Kvantitet I: {first}\nKvantitet II: {second}\n\n{COMPARISON_LEGEND}"
    ));
    text
}

/// Generates a quantitative comparison question.
pub fn kva(rng: &mut Rng, difficulty: Difficulty) -> Draft {
    let max = upper_bound(difficulty);

    match rng.int(0, 5) {
        0 => {
            let x = rng.int(1, max);
            let y = rng.int(1, max);
            comparison(
                &format!("x = {x} och y = {y}"),
                "x²",
                "x · y",
                Ratio::int(x * x),
                Ratio::int(x * y),
            )
        }
        1 => {
            let p = rng.int(1, 30);
            let a = rng.int(1, 10) * 10;
            let q = rng.int(1, 300);
            let b = rng.int(1, 10) * 10;
            comparison(
                "",
                &format!("{p} % av {a}"),
                &format!("{q} ‰ av {b}"),
                Ratio::new(p * a, 100),
                Ratio::new(q * b, 1000),
            )
        }
        2 => {
            let den_max = max.min(12);
            let (a, b) = (rng.int(1, den_max), rng.int(2, den_max));
            let (c, d) = (rng.int(1, den_max), rng.int(2, den_max));
            comparison(
                "",
                &format!("{a}/{b}"),
                &format!("{c}/{d}"),
                Ratio::new(a, b),
                Ratio::new(c, d),
            )
        }
        3 => {
            let x = rng.int(-max, max);
            let (k1, m1) = (rng.int(1, 6), rng.int(-10, 10));
            let (k2, m2) = (rng.int(1, 6), rng.int(-10, 10));
            comparison(
                &format!("x = {x}"),
                &linear(k1, m1),
                &linear(k2, m2),
                Ratio::int(k1 * x + m1),
                Ratio::int(k2 * x + m2),
            )
        }
        4 => {
            let values: Vec<i64> = (0..3).map(|_| rng.int(1, max)).collect();
            let sum: i64 = values.iter().sum();
            let other = rng.int(1, max);
            comparison(
                "",
                &format!(
                    "medelvärdet av {}, {} och {}",
                    values[0], values[1], values[2]
                ),
                &other.to_string(),
                Ratio::new(sum, 3),
                Ratio::int(other),
            )
        }
        _ => undetermined(rng),
    }
}

fn linear(k: i64, m: i64) -> String {
    let x = if k == 1 {
        "x".to_string()
    } else {
        format!("{k}x")
    };

    match m.cmp(&0) {
        Ordering::Greater => format!("{x} + {m}"),
        Ordering::Less => format!("{x} − {}", -m),
        Ordering::Equal => x,
    }
}

/// x² against c·x for a positive integer x: x = 1 puts II ahead while x = c + 1 puts I ahead.
fn undetermined(rng: &mut Rng) -> Draft {
    let c = rng.int(2, 5);
    let high = c + 1;

    Draft {
        text: comparison_text("x är ett positivt heltal.", "x²", &format!("{c}x")),
        options: COMPARISON_OPTIONS.map(String::from).to_vec(),
        correct: "D".to_string(),
        explanation: format!(
            "Jämförelsen beror på x: om x = 1 är I = 1 och II = {c}, men om x = {high} är \
             I = {} och II = {}. {}",
            high * high,
            c * high,
            verdict("D")
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Scenario stated in running text.
    Prose,
    /// Scenario presented as a table to read from.
    Table,
}

fn numeric(
    rng: &mut Rng,
    text: String,
    answer: String,
    wrong: &[String],
    explanation: String,
) -> Draft {
    let options = make_options(rng, &answer, wrong);

    Draft {
        text,
        options,
        correct: answer,
        explanation,
    }
}

fn percent(p: i64) -> String {
    format!("{p} %")
}

fn revenue_change(rng: &mut Rng, difficulty: Difficulty, layout: Layout) -> Draft {
    let steps: &[i64] = match difficulty {
        Difficulty::Easy => &[10, 20, 25, 50],
        Difficulty::Medium => &[5, 12, 15, 30, 40],
        Difficulty::Hard => &[6, 8, 14, 18, 35, 45],
    };
    let p = *rng.pick(steps).unwrap_or(&10);
    let from = rng.int(1, 9) * 100;
    let to = from * (100 + p) / 100;

    let text = match layout {
        Layout::Prose => format!(
            "Ett företags omsättning ökade från {from} miljoner kronor till {to} miljoner kronor. \
             Med hur många procent ökade omsättningen?"
        ),
        Layout::Table => format!(
            "Tabell: Omsättning (miljoner kronor)\n\
             År 1 | {from}\n\
             År 2 | {to}\n\n\
             Med hur många procent ökade omsättningen från år 1 till år 2?"
        ),
    };

    let of_new = ((to - from) * 100 + to / 2) / to;
    let wrong = [
        percent(of_new),
        percent(p + 5),
        percent((p - 5).max(1)),
        percent(to - from),
    ];

    numeric(
        rng,
        text,
        percent(p),
        &wrong,
        format!(
            "Ökningen är {to} − {from} = {} miljoner kronor, och {} / {from} = {}.",
            to - from,
            to - from,
            percent(p)
        ),
    )
}

fn share_of_respondents(rng: &mut Rng, difficulty: Difficulty, layout: Layout) -> Draft {
    let shares: &[i64] = match difficulty {
        Difficulty::Easy => &[10, 20, 25, 50, 75],
        Difficulty::Medium => &[15, 30, 35, 40, 60],
        Difficulty::Hard => &[12, 18, 27, 36, 64],
    };
    let pct = *rng.pick(shares).unwrap_or(&25);
    let total = rng.int(2, 10) * 100;
    let yes = total * pct / 100;
    let no = total - yes;

    let text = match layout {
        Layout::Prose => format!(
            "I en enkät svarade {total} personer på frågan om de pendlar till arbetet. {yes} av \
             dem svarade ja. Hur stor andel svarade ja?"
        ),
        Layout::Table => format!(
            "Tabell: Svar på frågan om man pendlar till arbetet\n\
             Ja  | {yes}\n\
             Nej | {no}\n\n\
             Hur stor andel av de svarande svarade ja?"
        ),
    };

    let wrong = [
        percent(100 - pct),
        percent(pct + 5),
        percent((pct - 5).max(1)),
        percent(pct + 10),
    ];

    numeric(
        rng,
        text,
        percent(pct),
        &wrong,
        format!("Andelen är {yes} / {total} = {}.", percent(pct)),
    )
}

fn average_measurement(rng: &mut Rng, difficulty: Difficulty, layout: Layout) -> Draft {
    let spread = upper_bound(difficulty);
    let mean = rng.int(spread + 1, spread * 4);
    let d1 = rng.int(1, spread);
    let d2 = rng.int(1, spread);
    let values = rng.shuffle(&[mean - d1, mean + d1, mean - d2, mean + d2, mean]);

    let listed = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let text = match layout {
        Layout::Prose => format!(
            "Fem mätningar av en temperatur gav följande värden (°C): {listed}. \
             Vad är medelvärdet av mätningarna?"
        ),
        Layout::Table => {
            let rows = values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("Mätning {} | {v}", i + 1))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Tabell: Uppmätt temperatur (°C)\n{rows}\n\nVad är medelvärdet av mätningarna?")
        }
    };

    let sum = mean * 5;
    let wrong = [
        (mean + 1).to_string(),
        (mean - 1).to_string(),
        (mean + 2).to_string(),
        (sum / 4).to_string(),
    ];

    numeric(
        rng,
        text,
        mean.to_string(),
        &wrong,
        format!("Summan av värdena är {sum} och {sum} / 5 = {mean}."),
    )
}

fn linear_cost(rng: &mut Rng, difficulty: Difficulty, layout: Layout) -> Draft {
    let fixed = rng.int(1, 10) * 50;
    let per = rng.int(2, upper_bound(difficulty)) * 10;
    let months = rng.int(3, 12);
    let total = fixed + per * months;

    let text = match layout {
        Layout::Prose => format!(
            "Ett abonnemang kostar {fixed} kr i startavgift och därefter {per} kr per månad. \
             Vad blir den totala kostnaden efter {months} månader?"
        ),
        Layout::Table => format!(
            "Tabell: Prislista för abonnemang\n\
             Startavgift | {fixed} kr\n\
             Månadsavgift | {per} kr\n\n\
             Vad blir den totala kostnaden efter {months} månader?"
        ),
    };

    let kr = |n: i64| format!("{n} kr");
    let wrong = [
        kr(per * months),
        kr(fixed + per * (months - 1)),
        kr(fixed + per * (months + 1)),
        kr((fixed + per) * months),
    ];

    numeric(
        rng,
        text,
        kr(total),
        &wrong,
        format!("{fixed} + {per} · {months} = {total} kr."),
    )
}

fn equation(rng: &mut Rng, difficulty: Difficulty) -> Draft {
    let x = rng.int(-upper_bound(difficulty), upper_bound(difficulty));
    let k = rng.int(2, 9);
    let m = rng.int(-20, 20);
    let rhs = k * x + m;

    let text = format!("Vilket värde på x löser ekvationen {} = {rhs}?", linear(k, m));

    let wrong = [
        (x + 1).to_string(),
        (x - 1).to_string(),
        (-x).to_string(),
        (x + k).to_string(),
    ];

    numeric(
        rng,
        text,
        x.to_string(),
        &wrong,
        format!(
            "{k}x = {rhs} − ({m}) = {}, alltså x = {} / {k} = {x}.",
            rhs - m,
            rhs - m
        ),
    )
}

/// Generates a problem solving question.
pub fn xyz(rng: &mut Rng, difficulty: Difficulty) -> Draft {
    match rng.int(0, 4) {
        0 => revenue_change(rng, difficulty, Layout::Prose),
        1 => share_of_respondents(rng, difficulty, Layout::Prose),
        2 => average_measurement(rng, difficulty, Layout::Prose),
        3 => linear_cost(rng, difficulty, Layout::Prose),
        _ => equation(rng, difficulty),
    }
}

/// Generates a data interpretation question with the data in table form.
pub fn dtk(rng: &mut Rng, difficulty: Difficulty) -> Draft {
    match rng.int(0, 3) {
        0 => revenue_change(rng, difficulty, Layout::Table),
        1 => share_of_respondents(rng, difficulty, Layout::Table),
        2 => average_measurement(rng, difficulty, Layout::Table),
        _ => linear_cost(rng, difficulty, Layout::Table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_ordering() {
        assert_eq!(Ratio::new(1, 2), Ratio::new(3, 6));
        assert!(Ratio::new(2, 3) > Ratio::new(3, 5));
        assert!(Ratio::new(-1, 2) < Ratio::int(0));
        assert_eq!(Ratio::new(1, -2), Ratio::new(-1, 2));
    }

    #[test]
    fn ratio_display() {
        assert_eq!(Ratio::int(12).to_string(), "12");
        assert_eq!(Ratio::new(75, 100).to_string(), "0,75");
        assert_eq!(Ratio::new(1, 3).to_string(), "0,3333");
        assert_eq!(Ratio::new(2, 3).to_string(), "0,6667");
        assert_eq!(Ratio::new(-5, 2).to_string(), "-2,5");
        assert_eq!(Ratio::new(1234, 1000).to_string(), "1,234");
    }

    #[test]
    fn linear_formatting() {
        assert_eq!(linear(1, 0), "x");
        assert_eq!(linear(3, 4), "3x + 4");
        assert_eq!(linear(5, -2), "5x − 2");
    }

    #[test]
    fn relation_letters() {
        assert_eq!(relation(Ratio::int(3), Ratio::int(2)), "A");
        assert_eq!(relation(Ratio::int(2), Ratio::int(3)), "B");
        assert_eq!(relation(Ratio::new(2, 4), Ratio::new(1, 2)), "C");
    }

    #[test]
    fn undetermined_witnesses_disagree() {
        let mut rng = Rng::new(4);

        let draft = undetermined(&mut rng);

        assert_eq!(draft.correct, "D");
        assert_eq!(draft.options, COMPARISON_OPTIONS.map(String::from).to_vec());
        assert!(draft.explanation.contains("om x = 1 är I = 1"));
    }

    #[test]
    fn numeric_answers_are_options() {
        let mut rng = Rng::new(2024);

        for i in 0..300 {
            let difficulty = Difficulty::for_position(i % 10, 10);
            for draft in [xyz(&mut rng, difficulty), dtk(&mut rng, difficulty)] {
                assert_eq!(draft.options.len(), 4, "{}", draft.text);
                assert!(draft.options.contains(&draft.correct), "{}", draft.text);
            }
        }
    }

    #[test]
    fn tables_only_for_dtk() {
        let mut rng = Rng::new(77);

        for _ in 0..50 {
            assert!(dtk(&mut rng, Difficulty::Medium).text.starts_with("Tabell"));
            assert!(!xyz(&mut rng, Difficulty::Medium).text.starts_with("Tabell"));
        }
    }
}
