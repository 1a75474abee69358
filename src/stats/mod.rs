/// Statistics over cleaned numeric columns.
///
/// ```text
///   Dataset (preprocessed)
///        │
///        ├──► moments      mean / std / skewness / excess kurtosis
///        │
///        └──► correlation  Pearson matrix for the heatmap
///
///   descriptive: shared mean, std, quantile helpers
/// ```

pub mod correlation;
pub mod descriptive;
pub mod moments;
