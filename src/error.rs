//! Domain errors raised while cleaning and analysing the table.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("required columns not found: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("column '{0}' has no numeric values, its median is undefined")]
    UndefinedMedian(String),
    #[error("column '{0}' not found")]
    ColumnNotFound(String),
    #[error("column '{column}' is not numeric at row {row}")]
    NotNumeric { column: String, row: usize },
    #[error("column '{0}' is empty")]
    EmptyColumn(String),
    #[error("{moment} of column '{column}' is not a finite number")]
    NonFiniteMoment { column: String, moment: &'static str },
    #[error("column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
