use std::fmt;

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, the minimum needed to mirror a mixed-dtype table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "<missing>"),
        }
    }
}

/// Cell texts read as missing, the same set `pandas.read_csv` treats as NA.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl CellValue {
    /// Guess the type of a raw text cell: NA token → missing, float → number.
    ///
    /// Infinities stay numbers; the moments reject them later.
    pub fn parse(raw: &str) -> Self {
        if NA_TOKENS.contains(&raw) {
            return CellValue::Missing;
        }
        match raw.parse::<f64>() {
            Ok(v) => CellValue::from_number(v),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// NaN is a missing value, never a number.
    pub fn from_number(v: f64) -> Self {
        if v.is_nan() {
            CellValue::Missing
        } else {
            CellValue::Number(v)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// A column is numeric when it holds at least one number and no text.
    pub fn is_numeric(&self) -> bool {
        let mut any_number = false;
        for value in &self.values {
            match value {
                CellValue::Text(_) => return false,
                CellValue::Number(_) => any_number = true,
                CellValue::Missing => {}
            }
        }
        any_number
    }

    /// The numbers present in the column, skipping missing and text cells.
    pub fn present_numbers(&self) -> Vec<f64> {
        self.values.iter().filter_map(CellValue::as_f64).collect()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Every value as `f64`, failing on the first cell that is not a number.
    pub fn to_f64_vec(&self) -> Result<Vec<f64>, AnalysisError> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.as_f64().ok_or_else(|| AnalysisError::NotNumeric {
                    column: self.name.clone(),
                    row,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered collection of equally long named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset, rejecting columns of unequal length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, AnalysisError> {
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(AnalysisError::RaggedColumns {
                    column: bad.name.clone(),
                    expected,
                    found: bad.values.len(),
                });
            }
        }
        Ok(Dataset { columns })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// First column with this exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Like [`Dataset::column`] but with an error naming the column.
    pub fn require(&self, name: &str) -> Result<&Column, AnalysisError> {
        self.column(name)
            .ok_or_else(|| AnalysisError::ColumnNotFound(name.to_string()))
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guesses_cell_types() {
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("12"), CellValue::Number(12.0));
        assert_eq!(CellValue::parse("-3.5"), CellValue::Number(-3.5));
        assert_eq!(CellValue::parse("USA"), CellValue::Text("USA".into()));
    }

    #[test]
    fn na_tokens_and_nan_are_missing() {
        for raw in ["NaN", "nan", "-nan", "NA", "N/A", "null", "NULL", "None", "#N/A", "<NA>"] {
            assert_eq!(CellValue::parse(raw), CellValue::Missing, "{raw}");
        }
        assert_eq!(CellValue::from_number(f64::NAN), CellValue::Missing);
        // only exact tokens count
        assert_eq!(CellValue::parse("NAM"), CellValue::Text("NAM".into()));
    }

    #[test]
    fn infinity_stays_a_number() {
        assert_eq!(CellValue::parse("inf"), CellValue::Number(f64::INFINITY));
        assert_eq!(CellValue::parse("-inf"), CellValue::Number(f64::NEG_INFINITY));
    }

    #[test]
    fn numeric_needs_a_number_and_no_text() {
        let numeric = Column::new("a", vec![CellValue::Number(1.0), CellValue::Missing]);
        let mixed = Column::new("b", vec![CellValue::Number(1.0), CellValue::Text("x".into())]);
        let empty = Column::new("c", vec![CellValue::Missing, CellValue::Missing]);
        assert!(numeric.is_numeric());
        assert!(!mixed.is_numeric());
        assert!(!empty.is_numeric());
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Dataset::from_columns(vec![
            Column::new("a", vec![CellValue::Number(1.0)]),
            Column::new("b", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, AnalysisError::RaggedColumns { found: 0, .. }));
    }

    #[test]
    fn to_f64_vec_reports_first_bad_row() {
        let col = Column::new(
            "x",
            vec![CellValue::Number(1.0), CellValue::Missing, CellValue::Number(2.0)],
        );
        let err = col.to_f64_vec().unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NotNumeric {
                column: "x".into(),
                row: 1
            }
        );
    }
}
