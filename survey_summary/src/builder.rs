pub use crate::model::*;

/// A builder for assembling a survey, one respondent at a time.
///
/// The header is given first, then each response in the order of the export.
///
/// ```
/// pub use survey_summary::builder::Builder;
/// # use survey_summary::SurveyError;
///
/// let mut builder = Builder::new(&["Timestamp".to_string(), "Favorite color".to_string()])?;
///
/// builder.add_response_simple(&["2020-01-01", "Red"])?;
/// builder.add_response_simple(&["2020-01-02", ""])?;
///
/// let survey = builder.build();
/// assert_eq!(survey.num_responses(), 2);
/// assert_eq!(
///     survey.by_question().get("Favorite color"),
///     Some(&["Red".to_string(), "".to_string()][..])
/// );
///
/// # Ok::<(), SurveyError>(())
/// ```
pub struct Builder {
    pub(crate) _q_index: Vec<String>,
    pub(crate) _by_question: ByQuestion,
    pub(crate) _responses: Vec<Vec<String>>,
}

impl Builder {
    pub fn new(header: &[String]) -> Result<Builder, SurveyError> {
        Ok(Builder {
            _q_index: header.to_vec(),
            _by_question: ByQuestion::with_questions(header),
            _responses: Vec::new(),
        })
    }

    /// Adds a response given as string slices.
    pub fn add_response_simple(&mut self, answers: &[&str]) -> Result<(), SurveyError> {
        self.add_response(answers.iter().map(|s| s.to_string()).collect())
    }

    /// Adds the answers of one respondent.
    ///
    /// answers: one entry per header column, in column order. Blank answers
    /// are kept as empty strings.
    pub fn add_response(&mut self, answers: Vec<String>) -> Result<(), SurveyError> {
        if answers.len() != self._q_index.len() {
            return Err(SurveyError::RowLength {
                row: self._responses.len(),
                expected: self._q_index.len(),
                found: answers.len(),
            });
        }
        self._by_question.append_record(&answers)?;
        self._responses.push(answers);
        Ok(())
    }

    pub fn num_responses(&self) -> usize {
        self._responses.len()
    }

    pub fn build(self) -> Survey {
        Survey {
            q_index: self._q_index,
            by_question: self._by_question,
            by_response: self._responses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn views_are_aligned() {
        let mut builder = Builder::new(&header(&["Timestamp", "Favorite color"])).unwrap();
        builder.add_response_simple(&["2020-01-01", "Red"]).unwrap();
        builder.add_response_simple(&["2020-01-02", "Blue"]).unwrap();
        builder.add_response_simple(&["2020-01-03", "Red"]).unwrap();
        builder.add_response_simple(&["2020-01-04", ""]).unwrap();
        let survey = builder.build();

        assert_eq!(survey.q_index(), header(&["Timestamp", "Favorite color"]));
        assert_eq!(survey.num_responses(), 4);
        for row in survey.by_response() {
            assert_eq!(row.len(), survey.q_index().len());
        }
        for (question, answers) in survey.by_question().iter() {
            assert_eq!(answers.len(), survey.num_responses());
            let col = survey.q_index().iter().position(|q| q == question).unwrap();
            for (i, answer) in answers.iter().enumerate() {
                assert_eq!(answer, &survey.by_response()[i][col]);
            }
        }
        assert_eq!(
            survey.by_question().get("Favorite color").unwrap(),
            &header(&["Red", "Blue", "Red", ""])[..]
        );
    }

    #[test]
    fn rejects_short_rows() {
        let mut builder = Builder::new(&header(&["a", "b", "c"])).unwrap();
        builder.add_response_simple(&["1", "2", "3"]).unwrap();
        let err = builder.add_response_simple(&["1", "2"]).unwrap_err();
        assert_eq!(
            err,
            SurveyError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        // The rejected row leaves no trace.
        assert_eq!(builder.num_responses(), 1);
        let survey = builder.build();
        assert_eq!(survey.by_question().get("c").unwrap().len(), 1);
    }

    #[test]
    fn repeated_label_keeps_last_column() {
        let mut builder = Builder::new(&header(&["q", "other", "q"])).unwrap();
        builder.add_response_simple(&["first", "x", "last"]).unwrap();
        let survey = builder.build();

        let questions: Vec<&String> = survey.by_question().questions().collect();
        assert_eq!(questions, vec!["q", "other"]);
        assert_eq!(survey.by_question().get("q").unwrap(), &header(&["last"])[..]);
        assert_eq!(survey.q_index().len(), 3);
        assert_eq!(survey.by_response()[0].len(), 3);
    }

    #[test]
    fn no_responses() {
        let survey = Builder::new(&header(&["a", "b"])).unwrap().build();
        assert_eq!(survey.num_responses(), 0);
        assert_eq!(survey.by_question().len(), 2);
        assert!(survey.by_question().get("a").unwrap().is_empty());
    }

    #[test]
    fn json_keys_follow_header_order() {
        let mut builder = Builder::new(&header(&["zeta", "alpha", "mid"])).unwrap();
        builder.add_response_simple(&["1", "2", "3"]).unwrap();
        let survey = builder.build();
        let js = serde_json::to_string(&survey).unwrap();
        assert_eq!(
            js,
            r#"{"qIndex":["zeta","alpha","mid"],"byQuestion":{"zeta":["1"],"alpha":["2"],"mid":["3"]},"byResponse":[["1","2","3"]]}"#
        );

        let back: Survey = serde_json::from_str(&js).unwrap();
        assert_eq!(back, survey);
    }
}
