use std::fmt;

use crate::stats::descriptive;

use super::model::Dataset;

/// `describe()`-style statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Absent for fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summaries of every numeric column, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub columns: Vec<ColumnSummary>,
}

pub fn describe(dataset: &Dataset) -> Summary {
    let columns = dataset
        .numeric_columns()
        .filter_map(|column| {
            let mut values = column.present_numbers();
            values.sort_by(f64::total_cmp);
            let mean = descriptive::mean(&values)?;
            Some(ColumnSummary {
                name: column.name.clone(),
                count: values.len(),
                mean,
                std: descriptive::sample_std(&values),
                min: values[0],
                q1: descriptive::quantile_sorted(&values, 0.25),
                median: descriptive::quantile_sorted(&values, 0.5),
                q3: descriptive::quantile_sorted(&values, 0.75),
                max: values[values.len() - 1],
            })
        })
        .collect();
    Summary { columns }
}

type Statistic = fn(&ColumnSummary) -> Option<f64>;

const ROWS: [(&str, Statistic); 8] = [
    ("count", |c| Some(c.count as f64)),
    ("mean", |c| Some(c.mean)),
    ("std", |c| c.std),
    ("min", |c| Some(c.min)),
    ("25%", |c| Some(c.q1)),
    ("50%", |c| Some(c.median)),
    ("75%", |c| Some(c.q3)),
    ("max", |c| Some(c.max)),
];

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = ROWS
            .iter()
            .map(|(_, stat)| {
                self.columns
                    .iter()
                    .map(|c| stat(c).map_or_else(|| "NaN".to_string(), |v| format!("{v:.6}")))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                rendered
                    .iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(c.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<6}", "")?;
        for (c, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name, w = w)?;
        }
        writeln!(f)?;
        for ((label, _), cells) in ROWS.iter().zip(&rendered) {
            write!(f, "{label:<6}")?;
            for (value, w) in cells.iter().zip(&widths) {
                write!(f, "  {:>w$}", value, w = w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};

    fn dataset() -> Dataset {
        Dataset::from_columns(vec![
            Column::new(
                "countries",
                vec![
                    CellValue::Text("A".into()),
                    CellValue::Text("B".into()),
                    CellValue::Text("C".into()),
                    CellValue::Text("D".into()),
                ],
            ),
            Column::new(
                "total_gold",
                [1.0, 2.0, 3.0, 4.0].into_iter().map(CellValue::Number).collect(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn describe_covers_numeric_columns_only() {
        let summary = describe(&dataset());
        assert_eq!(summary.columns.len(), 1);
        let gold = &summary.columns[0];
        assert_eq!(gold.name, "total_gold");
        assert_eq!(gold.count, 4);
        assert_eq!(gold.mean, 2.5);
        assert_eq!((gold.min, gold.max), (1.0, 4.0));
        assert!((gold.q1 - 1.75).abs() < 1e-12);
        assert!((gold.median - 2.5).abs() < 1e-12);
        assert!((gold.q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn display_lists_statistics_as_rows() {
        let text = describe(&dataset()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("total_gold"));
        assert!(lines[1].starts_with("count"));
        assert!(lines[1].ends_with("4.000000"));
        assert!(lines[8].starts_with("max"));
    }

    #[test]
    fn single_value_has_no_std() {
        let ds = Dataset::from_columns(vec![Column::new("x", vec![CellValue::Number(3.0)])])
            .unwrap();
        let summary = describe(&ds);
        assert_eq!(summary.columns[0].std, None);
        assert!(summary.to_string().contains("NaN"));
    }
}
