use crate::error::IoError;
use crate::machine_learning::Example;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

fn to_example(record: &StringRecord) -> Result<Example<String>, IoError> {
    Ok(Example::new(record.iter().map(str::to_string).collect())?)
}

/// Reads example records from comma-delimited text without a header row.
///
/// Every line becomes one `Example<String>`: all fields are kept as text
/// tokens and the last field is the label. Rows are not required to share an
/// arity here; `build` rejects ragged data with a row number.
///
/// # Parameters
///
/// * `reader` - Source of CSV text
///
/// # Returns
///
/// - `Ok(Vec<Example<String>>)` - One example per line
/// - `Err(IoError)` - If the text cannot be read or a record cannot become an example
///
/// # Example
/// ```rust
/// use id3tree::dataset::csv_records::read_examples;
///
/// let data = "S,H,N\nR,C,Y\n";
/// let examples = read_examples(data.as_bytes()).unwrap();
/// assert_eq!(examples.len(), 2);
/// assert_eq!(examples[1].label(), "Y");
/// ```
pub fn read_examples<R: Read>(reader: R) -> Result<Vec<Example<String>>, IoError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    csv_reader
        .records()
        .map(|record| to_example(&record?))
        .collect()
}

/// Reads example records from comma-delimited text whose first line names the columns.
///
/// # Returns
///
/// - `Ok((Vec<String>, Vec<Example<String>>))` - The column names and one example per data line
/// - `Err(IoError)` - If the text cannot be read or a record cannot become an example
pub fn read_examples_with_headers<R: Read>(
    reader: R,
) -> Result<(Vec<String>, Vec<Example<String>>), IoError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let examples = csv_reader
        .records()
        .map(|record| to_example(&record?))
        .collect::<Result<Vec<_>, IoError>>()?;

    Ok((headers, examples))
}

/// Loads example records from a CSV file without a header row.
///
/// # Parameters
///
/// * `path` - Path of the file to read
///
/// # Returns
///
/// - `Ok(Vec<Example<String>>)` - One example per line of the file
/// - `Err(IoError)` - If the file cannot be opened or parsed
pub fn load_examples(path: &str) -> Result<Vec<Example<String>>, IoError> {
    let reader = IoError::load_in_buf_reader(path)?;
    read_examples(reader)
}
