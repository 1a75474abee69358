/// Data layer: core types, loading, cleaning and summaries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset (raw headers, typed cells)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ preprocess │  trim names, coerce, impute medians
///   └────────────┘
///        │
///        ├──► summary   describe()-style table
///        └──► select    n largest rows for the bar chart
/// ```

pub mod loader;
pub mod model;
pub mod preprocess;
pub mod select;
pub mod summary;
