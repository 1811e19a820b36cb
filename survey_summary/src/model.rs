// ********* Input data structures ***********

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The answers to every question, keyed by the question label.
///
/// The keys follow the order in which the labels first appear in the header
/// row. If a label is repeated in the header, the values of the last column
/// carrying that label are kept.
#[derive(Debug, Clone, Default)]
pub struct ByQuestion {
    // The header, as given to the constructor.
    header: Vec<String>,
    // For each header column, the index of its entry in `columns`.
    positions: Vec<usize>,
    columns: Vec<(String, Vec<String>)>,
}

impl ByQuestion {
    /// Creates one empty entry per distinct question label.
    pub fn with_questions(header: &[String]) -> ByQuestion {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut columns: Vec<(String, Vec<String>)> = Vec::new();
        let mut positions: Vec<usize> = Vec::with_capacity(header.len());
        for label in header.iter() {
            let pos = *index.entry(label.as_str()).or_insert_with(|| {
                columns.push((label.clone(), Vec::new()));
                columns.len() - 1
            });
            positions.push(pos);
        }
        ByQuestion {
            header: header.to_vec(),
            positions,
            columns,
        }
    }

    /// Appends one respondent record. The record must be aligned with the header.
    pub fn append_record(&mut self, record: &[String]) -> Result<(), SurveyError> {
        if record.len() != self.header.len() {
            return Err(SurveyError::RowLength {
                row: self.num_responses(),
                expected: self.header.len(),
                found: record.len(),
            });
        }
        // Repeated labels: the last column wins.
        let mut latest: Vec<Option<&String>> = vec![None; self.columns.len()];
        for (pos, value) in self.positions.iter().zip(record.iter()) {
            latest[*pos] = Some(value);
        }
        for ((_, answers), value) in self.columns.iter_mut().zip(latest) {
            if let Some(v) = value {
                answers.push(v.clone());
            }
        }
        Ok(())
    }

    pub fn get(&self, question: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(label, _)| label == question)
            .map(|(_, answers)| answers.as_slice())
    }

    /// The question labels, in order.
    pub fn questions(&self) -> impl Iterator<Item = &String> {
        self.columns.iter().map(|(label, _)| label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &[String])> {
        self.columns
            .iter()
            .map(|(label, answers)| (label, answers.as_slice()))
    }

    /// The number of distinct questions.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The number of records appended so far.
    pub fn num_responses(&self) -> usize {
        self.columns
            .first()
            .map(|(_, answers)| answers.len())
            .unwrap_or(0)
    }
}

// Two views are equal when they hold the same questions and answers in the
// same order, regardless of the header they were built from.
impl PartialEq for ByQuestion {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for ByQuestion {}

impl Serialize for ByQuestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (label, answers) in self.columns.iter() {
            map.serialize_entry(label, answers)?;
        }
        map.end()
    }
}

struct ByQuestionVisitor;

impl<'de> Visitor<'de> for ByQuestionVisitor {
    type Value = ByQuestion;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map from question labels to lists of answers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ByQuestion, A::Error> {
        let mut columns: Vec<(String, Vec<String>)> = Vec::new();
        while let Some((label, answers)) = access.next_entry::<String, Vec<String>>()? {
            match columns.iter_mut().find(|(l, _)| *l == label) {
                Some(entry) => entry.1 = answers,
                None => columns.push((label, answers)),
            }
        }
        let header: Vec<String> = columns.iter().map(|(l, _)| l.clone()).collect();
        let positions = (0..columns.len()).collect();
        Ok(ByQuestion {
            header,
            positions,
            columns,
        })
    }
}

impl<'de> Deserialize<'de> for ByQuestion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ByQuestion, D::Error> {
        deserializer.deserialize_map(ByQuestionVisitor)
    }
}

/// The three views of a survey export.
///
/// Instances are built with the [`crate::builder::Builder`] and are not
/// modified afterwards.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    #[serde(rename = "qIndex")]
    pub(crate) q_index: Vec<String>,
    #[serde(rename = "byQuestion")]
    pub(crate) by_question: ByQuestion,
    #[serde(rename = "byResponse")]
    pub(crate) by_response: Vec<Vec<String>>,
}

impl Survey {
    /// The header row of the export.
    pub fn q_index(&self) -> &[String] {
        &self.q_index
    }

    pub fn by_question(&self) -> &ByQuestion {
        &self.by_question
    }

    /// One record per respondent, aligned with `q_index`.
    pub fn by_response(&self) -> &[Vec<String>] {
        &self.by_response
    }

    pub fn num_responses(&self) -> usize {
        self.by_response.len()
    }
}

// ******** Output data structures *********

/// Label under which blank answers are counted.
pub const NO_ANSWER: &str = "N/A";

/// Forms exports carry no hint about the type of a question. A question with
/// more distinct answers than this is assumed to be a free text answer.
pub const MAX_CHOICES: usize = 7;

/// One distinct answer and the number of respondents who gave it.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCount {
    pub a: String,
    pub n: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// At most `MAX_CHOICES` distinct answers.
    Enumerable,
    Freeform,
}

impl QuestionKind {
    pub fn from_distinct_answers(num_distinct: usize) -> QuestionKind {
        if num_distinct > MAX_CHOICES {
            QuestionKind::Freeform
        } else {
            QuestionKind::Enumerable
        }
    }
}

/// The tally of the answers for one question.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub question: String,
    pub kind: QuestionKind,
    /// Distinct answers, in the order they were first seen.
    pub summary: Vec<AnswerCount>,
}

impl QuestionSummary {
    /// The count for an answer, blank answers being looked up as `NO_ANSWER`.
    pub fn count_of(&self, answer: &str) -> Option<u64> {
        self.summary.iter().find(|ac| ac.a == answer).map(|ac| ac.n)
    }

    pub fn num_distinct(&self) -> usize {
        self.summary.len()
    }

    pub fn counts(&self) -> HashMap<String, u64> {
        self.summary.iter().map(|ac| (ac.a.clone(), ac.n)).collect()
    }
}

/// Errors that prevent a survey from being assembled.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SurveyError {
    /// A record does not have one field per header column.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Error for SurveyError {}

impl Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyError::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "response {} has {} fields, expected {}",
                row, found, expected
            ),
        }
    }
}
