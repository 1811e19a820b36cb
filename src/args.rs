use clap::Parser;

/// Converts the CSV export of an online form into a JSON document with the
/// responses grouped by question and by respondent.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The CSV export. The first row must contain the questions.
    /// The output is written next to it, under the same name with a `.json` suffix.
    #[clap(value_parser)]
    pub input: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the JSON document will be written to the given
    /// location instead of next to the input.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference JSON document. If provided, surveyjson will
    /// check that the converted output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, the tally of the answers to every question will be printed
    /// in JSON format to the standard output, or to the standard error when `--out stdout` is used.
    #[clap(long, takes_value = false)]
    pub summary: bool,

    // Other arguments
    /// If passed as an argument, will turn on debug logging.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
