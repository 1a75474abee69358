use std::collections::BTreeMap;

use crate::error::AnalysisError;
use crate::stats::descriptive;

use super::model::{CellValue, Dataset};

/// What a preprocessing pass found and changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreprocessOutcome {
    /// Designated columns absent from the table after trimming names.
    pub missing_columns: Vec<String>,
    /// Column → (cells filled, median used). Only columns with gaps appear.
    pub imputed: BTreeMap<String, (usize, f64)>,
}

impl PreprocessOutcome {
    /// Turn absent designated columns into an error.
    pub fn require_all_columns(&self) -> Result<(), AnalysisError> {
        if self.missing_columns.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::MissingColumns(self.missing_columns.clone()))
        }
    }
}

/// Clean a raw dataset in place.
///
/// 1. trim every column name
/// 2. coerce `numeric_columns` to numbers, unparseable cells become missing
/// 3. fill the gaps of every numeric column with its median
///
/// A designated column without a single parseable value has no median and
/// fails with [`AnalysisError::UndefinedMedian`].
pub fn preprocess(
    dataset: &mut Dataset,
    numeric_columns: &[String],
) -> Result<PreprocessOutcome, AnalysisError> {
    let mut outcome = PreprocessOutcome::default();

    for column in &mut dataset.columns {
        let trimmed = column.name.trim();
        if trimmed.len() != column.name.len() {
            column.name = trimmed.to_string();
        }
    }

    for name in numeric_columns {
        let name = name.trim();
        let Some(column) = dataset.column_mut(name) else {
            log::warn!("designated numeric column '{name}' not found");
            outcome.missing_columns.push(name.to_string());
            continue;
        };
        let mut coerced = 0usize;
        for value in &mut column.values {
            if let CellValue::Text(raw) = value {
                *value = match raw.trim().parse::<f64>() {
                    Ok(v) => CellValue::from_number(v),
                    Err(_) => {
                        coerced += 1;
                        CellValue::Missing
                    }
                };
            }
        }
        if coerced > 0 {
            log::info!("'{name}': {coerced} non-numeric values treated as missing");
        }
        if !column.is_numeric() {
            return Err(AnalysisError::UndefinedMedian(name.to_string()));
        }
    }

    for column in dataset.columns.iter_mut().filter(|c| c.is_numeric()) {
        let gaps = column.missing_count();
        if gaps == 0 {
            continue;
        }
        let median = descriptive::median(&column.present_numbers())
            .ok_or_else(|| AnalysisError::UndefinedMedian(column.name.clone()))?;
        for value in column.values.iter_mut().filter(|v| v.is_missing()) {
            *value = CellValue::Number(median);
        }
        log::debug!("'{}': filled {gaps} missing values with median {median}", column.name);
        outcome.imputed.insert(column.name.clone(), (gaps, median));
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn designated() -> Vec<String> {
        ["summer_gold", "summer_total", "total_gold", "total_total"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn raw(name: &str, cells: &[&str]) -> Column {
        Column::new(name, cells.iter().map(|c| CellValue::parse(c)).collect())
    }

    fn medals() -> Dataset {
        Dataset::from_columns(vec![
            raw(" countries", &["Afghanistan", "Albania", "", "Algeria"]),
            raw("summer_gold ", &["10", "abc", "20", ""]),
            raw(" summer_total", &["1", "2", "3", "4"]),
            raw("total_gold", &["5", " 7 ", "n/a", "9"]),
            raw("  total_total  ", &["", "", "6", ""]),
            raw("total_participation", &["14", "", "3", "11"]),
        ])
        .unwrap()
    }

    #[test]
    fn coerces_and_imputes_with_median() {
        let mut ds = medals();
        preprocess(&mut ds, &designated()).unwrap();
        let gold = ds.column("summer_gold").unwrap().to_f64_vec().unwrap();
        assert_eq!(gold, vec![10.0, 15.0, 20.0, 15.0]);
        let total_gold = ds.column("total_gold").unwrap().to_f64_vec().unwrap();
        assert_eq!(total_gold, vec![5.0, 7.0, 7.0, 9.0]);
    }

    #[test]
    fn names_are_trimmed_and_designated_columns_complete() {
        let mut ds = medals();
        let outcome = preprocess(&mut ds, &designated()).unwrap();
        for name in ds.column_names() {
            assert_eq!(name, name.trim());
        }
        for name in designated() {
            assert_eq!(ds.column(&name).unwrap().missing_count(), 0);
        }
        assert!(outcome.missing_columns.is_empty());
        assert_eq!(outcome.imputed.get("summer_gold"), Some(&(2, 15.0)));
    }

    #[test]
    fn other_numeric_columns_are_imputed_and_text_passes_through() {
        let mut ds = medals();
        preprocess(&mut ds, &designated()).unwrap();
        let part = ds.column("total_participation").unwrap().to_f64_vec().unwrap();
        assert_eq!(part, vec![14.0, 11.0, 3.0, 11.0]);
        let countries = ds.column("countries").unwrap();
        assert_eq!(countries.values[2], CellValue::Missing);
    }

    #[test]
    fn preprocessing_is_idempotent() {
        let mut once = medals();
        preprocess(&mut once, &designated()).unwrap();
        let mut twice = once.clone();
        let outcome = preprocess(&mut twice, &designated()).unwrap();
        assert_eq!(once, twice);
        assert!(outcome.imputed.is_empty());
    }

    #[test]
    fn absent_designated_columns_are_reported() {
        let mut ds = Dataset::from_columns(vec![raw(" total_gold", &["1", "x"])]).unwrap();
        let outcome = preprocess(&mut ds, &designated()).unwrap();
        assert_eq!(
            outcome.missing_columns,
            vec!["summer_gold", "summer_total", "total_total"]
        );
        assert!(matches!(
            outcome.require_all_columns(),
            Err(AnalysisError::MissingColumns(cols)) if cols.len() == 3
        ));
        assert_eq!(
            ds.column("total_gold").unwrap().to_f64_vec().unwrap(),
            vec![1.0, 1.0]
        );
    }

    #[test]
    fn nan_and_na_cells_are_imputed() {
        let mut ds = Dataset::from_columns(vec![
            raw("total_gold", &["10", "NaN", "20"]),
            raw("total_participation", &["3", "NA", "5"]),
            Column::new(
                "summer_gold",
                vec![
                    CellValue::Text(" nan ".into()),
                    CellValue::Number(4.0),
                    CellValue::Number(6.0),
                ],
            ),
        ])
        .unwrap();
        let numeric = ["total_gold".to_string(), "summer_gold".to_string()];
        let outcome = preprocess(&mut ds, &numeric).unwrap();

        let gold = ds.column("total_gold").unwrap().to_f64_vec().unwrap();
        assert_eq!(gold, vec![10.0, 15.0, 20.0]);
        let part = ds.column("total_participation").unwrap().to_f64_vec().unwrap();
        assert_eq!(part, vec![3.0, 4.0, 5.0]);
        let summer = ds.column("summer_gold").unwrap().to_f64_vec().unwrap();
        assert_eq!(summer, vec![5.0, 4.0, 6.0]);
        assert_eq!(outcome.imputed.get("total_gold"), Some(&(1, 15.0)));
    }

    #[test]
    fn infinity_passes_through_and_fails_the_moments() {
        let gold = raw("total_gold", &["1", "2", "inf", ""]);
        let mut ds = Dataset::from_columns(vec![gold]).unwrap();
        preprocess(&mut ds, &["total_gold".to_string()]).unwrap();
        let gold = ds.column("total_gold").unwrap().to_f64_vec().unwrap();
        assert_eq!(gold, vec![1.0, 2.0, f64::INFINITY, 2.0]);

        let err = crate::stats::moments::analyze(&ds, "total_gold").unwrap_err();
        assert!(matches!(err, AnalysisError::NonFiniteMoment { moment: "mean", .. }));
    }

    #[test]
    fn designated_column_without_numbers_has_no_median() {
        let mut ds = Dataset::from_columns(vec![raw("total_gold", &["a", "", "b"])]).unwrap();
        let err = preprocess(&mut ds, &["total_gold".to_string()]).unwrap_err();
        assert_eq!(err, AnalysisError::UndefinedMedian("total_gold".into()));
    }
}
