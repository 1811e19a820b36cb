use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};

use std::fs;

use serde::Serialize;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use survey_summary::{summarize, ByQuestion, Survey, SurveyError};

use crate::args::Args;

mod io_common;
mod io_csv;

use crate::convert::io_common::{resolve_input_path, OutputTarget};

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display("Pass a csv filename as a command line parameter."))]
    MissingArgument {},
    #[snafu(display("Cannot resolve the current directory"))]
    CurrentDir { source: std::io::Error },

    #[snafu(display("Error opening file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading the header of {path}"))]
    CsvHeader { source: csv::Error, path: String },
    #[snafu(display("Error parsing response {row} of {path}"))]
    CsvParse {
        source: csv::Error,
        path: String,
        row: usize,
    },
    #[snafu(display("Inconsistent responses in {path}"))]
    InvalidSurvey { source: SurveyError, path: String },
    #[snafu(display("The two readings of {path} disagree: {reason}"))]
    PassMismatch { path: String, reason: String },

    #[snafu(display("Error serializing the output"))]
    JsonSerialize { source: serde_json::Error },
    #[snafu(display("Error writing {path}"))]
    JsonWrite {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error opening reference file {path}"))]
    ReferenceRead {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing reference file {path}"))]
    ReferenceParse {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the output and the reference {path}"))]
    ReferenceMismatch { path: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> ConvertResult<String> {
    let res = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    res.context(JsonSerializeSnafu {})
}

fn write_output(target: &OutputTarget, contents: &str) -> ConvertResult<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{}", contents);
        }
        OutputTarget::File(p) => {
            println!("Writing json output to {}", p.display());
            fs::write(p, contents).context(JsonWriteSnafu {
                path: p.display().to_string(),
            })?;
        }
    }
    Ok(())
}

/// Compares the survey with a JSON document written earlier.
///
/// Both sides are normalized through `serde_json::Value`, so formatting and
/// key order do not matter.
fn check_reference(reference_path: &str, survey: &Survey) -> ConvertResult<()> {
    let contents = fs::read_to_string(reference_path).context(ReferenceReadSnafu {
        path: reference_path,
    })?;
    let reference: JSValue =
        serde_json::from_str(contents.as_str()).context(ReferenceParseSnafu {
            path: reference_path,
        })?;
    let produced: JSValue = serde_json::to_value(survey).context(JsonSerializeSnafu {})?;

    let pretty_reference = to_json(&reference, true)?;
    let pretty_produced = to_json(&produced, true)?;
    if pretty_reference != pretty_produced {
        warn!("Found differences with the reference {:?}", reference_path);
        print_diff(pretty_reference.as_str(), pretty_produced.as_str(), "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("Output matches the reference {:?}", reference_path);
    Ok(())
}

/// Reads the export twice: once grouped by question, once grouped by respondent.
///
/// The second reading only starts once the first one succeeded, and the two
/// must agree.
pub fn read_survey(path: &str) -> ConvertResult<Survey> {
    let by_question: ByQuestion = io_csv::read_by_question(path)?;
    let survey = io_csv::read_by_response(path)?;

    if by_question.num_responses() != survey.by_question().num_responses() {
        return PassMismatchSnafu {
            path,
            reason: format!(
                "{} responses grouped by question, {} grouped by respondent",
                by_question.num_responses(),
                survey.num_responses()
            ),
        }
        .fail();
    }
    ensure!(
        survey.by_question() == &by_question,
        PassMismatchSnafu {
            path,
            reason: "the answers grouped by question differ",
        }
    );
    Ok(survey)
}

/// Converts the export named in the arguments and writes the JSON document.
///
/// Nothing is written unless both readings of the file succeeded.
pub fn run_conversion(args: &Args) -> ConvertResult<Survey> {
    let input = args.input.as_ref().context(MissingArgumentSnafu {})?;
    let input_path = resolve_input_path(input)?;
    let path = input_path.display().to_string();
    info!("Reading survey responses from {:?}", path);

    let survey = read_survey(&path)?;
    debug!(
        "run_conversion: {} questions, {} responses",
        survey.q_index().len(),
        survey.num_responses()
    );

    let js = to_json(&survey, false)?;
    let target = OutputTarget::from_args(&input_path, &args.out);
    write_output(&target, &js)?;

    if let Some(reference_path) = args.reference.as_ref() {
        check_reference(reference_path, &survey)?;
    }

    if args.summary {
        let summaries = to_json(&summarize(&survey), true)?;
        // Keep the standard output a single JSON document.
        if target.uses_stdout() {
            eprintln!("{}", summaries);
        } else {
            println!("{}", summaries);
        }
    }

    Ok(survey)
}
