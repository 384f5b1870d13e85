use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six subtests of the högskoleprov.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionCode {
    #[serde(rename = "ORD")]
    Ord,
    #[serde(rename = "LÄS")]
    Las,
    #[serde(rename = "MEK")]
    Mek,
    #[serde(rename = "XYZ")]
    Xyz,
    #[serde(rename = "KVA")]
    Kva,
    #[serde(rename = "DTK")]
    Dtk,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section code '{0}', expected one of ORD, LÄS, MEK, XYZ, KVA, DTK")]
pub struct ParseSectionError(pub String);

impl SectionCode {
    pub const ALL: [SectionCode; 6] = [
        SectionCode::Ord,
        SectionCode::Las,
        SectionCode::Mek,
        SectionCode::Xyz,
        SectionCode::Kva,
        SectionCode::Dtk,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SectionCode::Ord => "ORD",
            SectionCode::Las => "LÄS",
            SectionCode::Mek => "MEK",
            SectionCode::Xyz => "XYZ",
            SectionCode::Kva => "KVA",
            SectionCode::Dtk => "DTK",
        }
    }

    /// ASCII form of the code, used in question ids.
    pub fn slug(self) -> &'static str {
        match self {
            SectionCode::Las => "LAS",
            other => other.code(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionCode::Ord => "Ordförståelse",
            SectionCode::Las => "Svensk läsförståelse",
            SectionCode::Mek => "Meningskomplettering",
            SectionCode::Xyz => "Matematisk problemlösning",
            SectionCode::Kva => "Kvantitativa jämförelser",
            SectionCode::Dtk => "Diagram, tabeller och kartor",
        }
    }

    /// Accepts any casing and surrounding whitespace, and `LAS` for `LÄS`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();

        match upper.as_str() {
            "LAS" => Some(SectionCode::Las),
            code => Self::ALL.into_iter().find(|s| s.code() == code),
        }
    }
}

impl FromStr for SectionCode {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

impl fmt::Display for SectionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Position based ramp through a batch of `count` questions.
    pub fn for_position(index: usize, count: usize) -> Self {
        let ratio = if count == 0 {
            0.0
        } else {
            index as f64 / count as f64
        };

        if ratio < 0.35 {
            Difficulty::Easy
        } else if ratio < 0.8 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "lätt",
            Difficulty::Medium => "medel",
            Difficulty::Hard => "svår",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Comparison,
    ReadingComprehension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub id: String,
    pub section_code: SectionCode,
    pub question_number: u32,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_passage: Option<String>,
}

impl GeneratedQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Index of the correct answer among the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_codes() {
        assert_eq!(SectionCode::normalize("ord"), Some(SectionCode::Ord));
        assert_eq!(SectionCode::normalize(" läs "), Some(SectionCode::Las));
        assert_eq!(SectionCode::normalize("LAS"), Some(SectionCode::Las));
        assert_eq!(SectionCode::normalize("dtk"), Some(SectionCode::Dtk));
        assert_eq!(SectionCode::normalize("NOG"), None);
        assert_eq!(SectionCode::normalize(""), None);
    }

    #[test]
    fn parse_error_names_input() {
        let err = "ELF".parse::<SectionCode>().unwrap_err();

        assert_eq!(err, ParseSectionError("ELF".to_string()));
        assert!(err.to_string().contains("'ELF'"));
    }

    #[test]
    fn difficulty_ramp_for_twenty() {
        let ramp: Vec<_> = (0..20).map(|i| Difficulty::for_position(i, 20)).collect();

        assert!(ramp[..7].iter().all(|d| *d == Difficulty::Easy));
        assert!(ramp[7..16].iter().all(|d| *d == Difficulty::Medium));
        assert!(ramp[16..].iter().all(|d| *d == Difficulty::Hard));
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&SectionCode::Las).unwrap(), "\"LÄS\"");
        assert_eq!(
            serde_json::to_string(&QuestionType::ReadingComprehension).unwrap(),
            "\"reading_comprehension\""
        );
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
