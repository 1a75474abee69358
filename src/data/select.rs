use crate::error::AnalysisError;

use super::model::Dataset;

/// Row indices of the `n` largest values of `column`, largest first.
///
/// Ties keep the earlier row first. The column must be fully numeric.
pub fn n_largest(dataset: &Dataset, column: &str, n: usize) -> Result<Vec<usize>, AnalysisError> {
    let values = dataset.require(column)?.to_f64_vec()?;
    let mut order: Vec<usize> = (0..values.len()).collect();
    // stable sort keeps row order among equal values
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order.truncate(n);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};

    fn gold(values: &[f64]) -> Dataset {
        Dataset::from_columns(vec![Column::new(
            "total_gold",
            values.iter().map(|v| CellValue::Number(*v)).collect(),
        )])
        .unwrap()
    }

    #[test]
    fn picks_largest_first() {
        let ds = gold(&[3.0, 10.0, 1.0, 7.0]);
        assert_eq!(n_largest(&ds, "total_gold", 2).unwrap(), vec![1, 3]);
    }

    #[test]
    fn ties_keep_row_order() {
        let ds = gold(&[5.0, 9.0, 5.0, 5.0]);
        assert_eq!(n_largest(&ds, "total_gold", 3).unwrap(), vec![1, 0, 2]);
    }

    #[test]
    fn n_beyond_length_returns_all_rows() {
        let ds = gold(&[1.0, 2.0]);
        assert_eq!(n_largest(&ds, "total_gold", 10).unwrap(), vec![1, 0]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let ds = gold(&[1.0]);
        assert!(matches!(
            n_largest(&ds, "summer_gold", 1),
            Err(AnalysisError::ColumnNotFound(_))
        ));
    }
}
