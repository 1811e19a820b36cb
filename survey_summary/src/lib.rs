/*!
Data model and answer tallies for survey responses exported from online forms.

A survey export is held in three views (see [`Survey`]):
- the header row, which gives the order of the questions
- the answers grouped by question
- the answers grouped by respondent

The tallies count how often each distinct answer was given to a question. They are
always derived from the answers grouped by question and never stored.

```
use survey_summary::builder::Builder;
use survey_summary::{summarize, QuestionKind};
# use survey_summary::SurveyError;

let mut builder = Builder::new(&["Favorite color".to_string()])?;
for color in ["Red", "Blue", "Red", ""] {
    builder.add_response_simple(&[color])?;
}
let summaries = summarize(&builder.build());

assert_eq!(summaries[0].count_of("Red"), Some(2));
assert_eq!(summaries[0].count_of("N/A"), Some(1));
assert_eq!(summaries[0].kind, QuestionKind::Enumerable);
# Ok::<(), SurveyError>(())
```
*/

mod model;
pub mod builder;
pub mod quick_start;

use log::{debug, info};

use std::collections::HashMap;

pub use crate::model::*;

/// Counts the distinct answers to one question.
///
/// Blank answers are counted under `NO_ANSWER`. The counts are returned in the
/// order in which each answer was first seen.
pub fn summarize_answers(answers: &[String]) -> Vec<AnswerCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut res: Vec<AnswerCount> = Vec::new();
    for answer in answers.iter() {
        let label: &str = if answer.is_empty() {
            NO_ANSWER
        } else {
            answer.as_str()
        };
        match positions.get(label) {
            Some(idx) => {
                res[*idx].n += 1;
            }
            None => {
                positions.insert(label, res.len());
                res.push(AnswerCount {
                    a: label.to_string(),
                    n: 1,
                });
            }
        }
    }
    res
}

/// Tallies one question.
pub fn summarize_question(question: &str, answers: &[String]) -> QuestionSummary {
    let summary = summarize_answers(answers);
    let kind = QuestionKind::from_distinct_answers(summary.len());
    debug!(
        "summarize_question: {:?}: {} distinct answers, {:?}",
        question,
        summary.len(),
        kind
    );
    QuestionSummary {
        question: question.to_string(),
        kind,
        summary,
    }
}

/// Tallies every question of the survey, in question order.
pub fn summarize(survey: &Survey) -> Vec<QuestionSummary> {
    info!(
        "Summarizing {} questions over {} responses",
        survey.by_question().len(),
        survey.num_responses()
    );
    survey
        .by_question()
        .iter()
        .map(|(question, answers)| summarize_question(question, answers))
        .collect()
}
