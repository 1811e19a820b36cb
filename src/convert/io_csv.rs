// Primitives for reading CSV files.

use std::fs::File;

use csv::{Reader, ReaderBuilder, StringRecord};

use survey_summary::builder::Builder;

use crate::convert::*;

// Both readings share this configuration, so a malformed file fails the same way in each.
fn open_reader(path: &str, has_headers: bool) -> ConvertResult<Reader<File>> {
    ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(false)
        .from_path(path)
        .context(CsvOpenSnafu { path })
}

fn record_to_vec(record: &StringRecord) -> Vec<String> {
    record.iter().map(|s| s.to_string()).collect()
}

// Spreadsheet tools often save CSV with a leading UTF-8 byte order mark.
fn header_to_vec(record: &StringRecord) -> Vec<String> {
    let mut header = record_to_vec(record);
    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
    header
}

/// Reads the answers grouped by question. The first row gives the field names.
pub fn read_by_question(path: &str) -> ConvertResult<ByQuestion> {
    let mut rdr = open_reader(path, true)?;
    let header = header_to_vec(rdr.headers().context(CsvHeaderSnafu { path })?);
    debug!("read_by_question: header: {:?}", header);

    let mut by_question = ByQuestion::with_questions(&header);
    let mut num_records: usize = 0;
    for (idx, record_r) in rdr.records().enumerate() {
        let row = idx + 1;
        let record = record_r.context(CsvParseSnafu { path, row })?;
        debug!("read_by_question: row: {:?} {:?}", row, record);
        by_question
            .append_record(&record_to_vec(&record))
            .context(InvalidSurveySnafu { path })?;
        num_records += 1;
    }
    info!("{} records loaded", num_records);
    Ok(by_question)
}

/// Reads the answers grouped by respondent. The first row is kept aside as the
/// list of questions.
pub fn read_by_response(path: &str) -> ConvertResult<Survey> {
    let rdr = open_reader(path, false)?;
    let mut records = rdr.into_records();

    let header: Vec<String> = match records.next() {
        Some(record_r) => header_to_vec(&record_r.context(CsvParseSnafu { path, row: 0usize })?),
        None => {
            warn!("read_by_response: {:?} is empty", path);
            Vec::new()
        }
    };
    debug!("read_by_response: header: {:?}", header);

    let mut builder = Builder::new(&header).context(InvalidSurveySnafu { path })?;
    for (idx, record_r) in records.enumerate() {
        let row = idx + 1;
        let record = record_r.context(CsvParseSnafu { path, row })?;
        debug!("read_by_response: row: {:?} {:?}", row, record);
        builder
            .add_response(record_to_vec(&record))
            .context(InvalidSurveySnafu { path })?;
    }
    info!("{} records loaded", builder.num_responses());
    Ok(builder.build())
}
