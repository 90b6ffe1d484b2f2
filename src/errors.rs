//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while building or evaluating a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A tree was built, or a metric evaluated, on zero rows.
    #[error("The dataset is empty, at least one row is required.")]
    EmptyDataset,
    /// A split was required but every attribute has already been used.
    #[error("Node {node} still needs a split, but no attributes remain in the pool.")]
    NoAttributesRemaining { node: usize },
    /// Prediction met a value for which the node has no child.
    #[error("Row {row}: node {node} has no branch for value `{value}` of attribute `{attribute}`.")]
    NoMatchingBranch {
        node: usize,
        row: usize,
        attribute: String,
        value: String,
    },
    /// Actual and predicted sequences differ in length.
    #[error("Length mismatch, {0} actual labels but {1} predicted labels.")]
    LengthMismatch(usize, usize),
    /// An entropy term was requested over an empty total.
    #[error("Entropy term is undefined for count {count} over total {total}.")]
    UndefinedEntropyTerm { count: usize, total: usize },
    /// A row does not carry a value for the requested attribute.
    #[error("Row {row} has no value for attribute `{attribute}`.")]
    MissingValue { row: usize, attribute: String },
    /// An attribute name is not one of the table columns.
    #[error("Attribute `{0}` is not a column of the table.")]
    UnknownAttribute(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write config to file.
    #[error("Unable to write config to file: {0}")]
    UnableToWrite(String),
    /// Unable to read config from file.
    #[error("Unable to read config from a file {0}")]
    UnableToRead(String),
}
