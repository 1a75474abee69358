use crate::data::model::Dataset;
use crate::error::AnalysisError;

/// Pairwise Pearson coefficients over the numeric columns of a dataset.
///
/// `values[i][j]` is `None` when either column has zero variance.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlate every numeric column. Expects preprocessed data (no gaps).
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, AnalysisError> {
        let mut labels = Vec::new();
        let mut series = Vec::new();
        for column in dataset.numeric_columns() {
            labels.push(column.name.clone());
            series.push(column.to_f64_vec()?);
        }

        let n = series.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            values[i][i] = pearson(&series[i], &series[i]).map(|_| 1.0);
            for j in (i + 1)..n {
                let r = pearson(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }
        Ok(CorrelationMatrix { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Pearson correlation of two equally long series.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};

    fn numbers(name: &str, v: &[f64]) -> Column {
        Column::new(name, v.iter().map(|x| CellValue::Number(*x)).collect())
    }

    #[test]
    fn perfectly_linear_series() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_undefined() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn matrix_skips_text_columns_and_is_symmetric() {
        let ds = Dataset::from_columns(vec![
            Column::new(
                "countries",
                vec![
                    CellValue::Text("A".into()),
                    CellValue::Text("B".into()),
                    CellValue::Text("C".into()),
                ],
            ),
            numbers("gold", &[1.0, 5.0, 2.0]),
            numbers("total", &[3.0, 9.0, 4.0]),
            numbers("flat", &[1.0, 1.0, 1.0]),
        ])
        .unwrap();

        let m = CorrelationMatrix::from_dataset(&ds).unwrap();
        assert_eq!(m.labels, vec!["gold", "total", "flat"]);
        assert_eq!(m.values[0][0], Some(1.0));
        assert_eq!(m.values[0][1], m.values[1][0]);
        assert_eq!(m.values[2][0], None);
        assert_eq!(m.values[2][2], None);
    }
}
