use std::fs::File;
use std::io::BufReader;
use thiserror::Error;

/// Error types that can occur while building or querying a decision tree
///
/// # Variants
///
/// - `NotFitted` - Indicates that the model has not been fitted yet
/// - `InputValidationError` - indicates the input data provided does not meet the expected format or arity
/// - `InvalidNodeKind` - indicates a value handed to the tree builder is not an example record (it carries no label field)
/// - `IndexOutOfBounds` - indicates an attribute index outside `0..n_attributes`
/// - `UnseenAttributeValue` - indicates classification reached an attribute value that was never observed at that node during training
/// - `TreeError` - indicates that there is something wrong with the tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error(
        "Model has not been fitted. Certain methods require the model to be fitted before use."
    )]
    NotFitted,
    #[error("Input validation error: {0}")]
    InputValidationError(String),
    #[error("Invalid node kind: {0}")]
    InvalidNodeKind(&'static str),
    #[error("Attribute index {index} is out of bounds for {n_attributes} attribute column(s)")]
    IndexOutOfBounds { index: usize, n_attributes: usize },
    #[error("Attribute {attribute_index} has value {value} which was not observed during training")]
    UnseenAttributeValue {
        attribute_index: usize,
        value: String,
    },
    #[error("Tree structure error: {0}")]
    TreeError(&'static str),
}

/// Input/Output error types that can occur while loading example records
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations
/// - `CsvError` - Wraps errors raised by the CSV reader
/// - `Model` - A record was read but could not be turned into an example
#[derive(Debug, Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path)?;
        Ok(BufReader::new(file))
    }
}
