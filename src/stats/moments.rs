use crate::data::model::Dataset;
use crate::error::AnalysisError;

use super::descriptive;

/// Relative resolution below which the second central moment counts as zero.
const ZERO_VARIANCE_RESOLUTION: f64 = 1e-15;

/// The four moments reported for the analysis column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    /// Sample standard deviation (divisor `n - 1`).
    pub stddev: f64,
    /// Biased Fisher-Pearson coefficient `m3 / m2^1.5`.
    pub skewness: f64,
    /// Biased `m4 / m2^2 - 3`.
    pub excess_kurtosis: f64,
}

/// Compute the moments of a fully numeric column.
pub fn analyze(dataset: &Dataset, column: &str) -> Result<Moments, AnalysisError> {
    let values = dataset.require(column)?.to_f64_vec()?;
    let moments = Moments::from_values(column, &values)?;
    log::debug!("moments for '{column}' over {} values: {moments:?}", values.len());
    Ok(moments)
}

impl Moments {
    /// `column` only labels errors.
    ///
    /// A single value has stddev 0. Zero variance gives skewness and
    /// excess kurtosis of 0 instead of 0/0.
    pub fn from_values(column: &str, values: &[f64]) -> Result<Self, AnalysisError> {
        let mean = descriptive::mean(values)
            .ok_or_else(|| AnalysisError::EmptyColumn(column.to_string()))?;
        let n = values.len() as f64;

        let (mut m2, mut m3, mut m4) = (0.0_f64, 0.0_f64, 0.0_f64);
        for v in values {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        m2 /= n;
        m3 /= n;
        m4 /= n;

        let stddev = descriptive::sample_std(values).unwrap_or(0.0);
        let (skewness, excess_kurtosis) = if m2 <= (ZERO_VARIANCE_RESOLUTION * mean).powi(2) {
            (0.0, 0.0)
        } else {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        };

        let moments = Moments {
            mean,
            stddev,
            skewness,
            excess_kurtosis,
        };
        moments.ensure_finite(column)?;
        Ok(moments)
    }

    fn ensure_finite(&self, column: &str) -> Result<(), AnalysisError> {
        let named = [
            ("mean", self.mean),
            ("standard deviation", self.stddev),
            ("skewness", self.skewness),
            ("excess kurtosis", self.excess_kurtosis),
        ];
        match named.iter().find(|(_, v)| !v.is_finite()) {
            Some((moment, _)) => Err(AnalysisError::NonFiniteMoment {
                column: column.to_string(),
                moment: *moment,
            }),
            None => Ok(()),
        }
    }
}
