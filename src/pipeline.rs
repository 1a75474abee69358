use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::charts;
use crate::config::AnalysisConfig;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::data::preprocess::{PreprocessOutcome, preprocess};
use crate::data::summary::describe;
use crate::report::Reporter;
use crate::stats::moments::{self, Moments};

// ---------------------------------------------------------------------------
// Pipeline: load → clean → summarise → plot → moments → report
// ---------------------------------------------------------------------------

/// Everything one run produced besides console text.
#[derive(Debug)]
pub struct RunOutput {
    pub outcome: PreprocessOutcome,
    pub charts: Vec<PathBuf>,
    pub moments: Moments,
}

/// Run the whole analysis once. Any error aborts the run.
pub fn run<W: Write>(config: &AnalysisConfig, out: &mut W) -> Result<RunOutput> {
    config.validate()?;
    let (dataset, outcome) = load_and_clean(config, out)?;
    let charts = charts::render_all(&dataset, &config.charts)?;
    let moments = report(&dataset, config, out)?;
    Ok(RunOutput {
        outcome,
        charts,
        moments,
    })
}

/// Load the input, preprocess it and print the summary table.
pub fn load_and_clean<W: Write>(
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<(Dataset, PreprocessOutcome)> {
    let mut dataset = load_file(&config.input_path)?;
    if dataset.is_empty() {
        log::warn!("{} has no data rows", config.input_path.display());
    }

    let outcome = preprocess(&mut dataset, &config.numeric_columns)
        .context("preprocessing")?;
    if config.fail_on_missing_columns {
        outcome.require_all_columns()?;
    } else if !outcome.missing_columns.is_empty() {
        log::warn!(
            "continuing without columns: {}",
            outcome.missing_columns.join(", ")
        );
    }
    log::debug!("columns after cleaning: {:?}", dataset.column_names());

    writeln!(out, "Data Preprocessing Completed. Summary:")?;
    write!(out, "{}", describe(&dataset))?;
    Ok((dataset, outcome))
}

/// Compute the moments of the analysis column and print the report.
pub fn report<W: Write>(
    dataset: &Dataset,
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<Moments> {
    let column = config.analysis_column.as_str();
    let moments = moments::analyze(dataset, column)
        .with_context(|| format!("analysing '{column}'"))?;
    Reporter::new(config.skew_thresholds)
        .write_report(out, &moments, column)
        .context("writing report")?;
    Ok(moments)
}
