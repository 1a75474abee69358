use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use plotters::prelude::*;

use crate::color::viridis_palette;
use crate::config::ChartConfig;
use crate::data::model::{CellValue, Dataset};
use crate::data::select::n_largest;

use super::{CATEGORICAL_FILE, render_png};

/// `(label, value)` of the `n` rows with the largest `rank` values, largest first.
pub fn top_bars(
    dataset: &Dataset,
    rank: &str,
    label: &str,
    n: usize,
) -> Result<Vec<(String, f64)>> {
    let values = dataset.require(rank)?.to_f64_vec()?;
    let labels = dataset.require(label)?;
    let bars = n_largest(dataset, rank, n)?
        .into_iter()
        .map(|row| {
            let name = match &labels.values[row] {
                CellValue::Missing => format!("row {row}"),
                other => other.to_string(),
            };
            (name, values[row])
        })
        .collect();
    Ok(bars)
}

/// Horizontal bars of the top countries by gold medals.
pub fn plot_categorical(dataset: &Dataset, config: &ChartConfig) -> Result<PathBuf> {
    let bars = top_bars(
        dataset,
        &config.rank_column,
        &config.label_column,
        config.top_n,
    )
    .context("categorical plot")?;
    if bars.is_empty() {
        bail!("categorical plot: no rows to rank by '{}'", config.rank_column);
    }
    let path = config.output_dir.join(CATEGORICAL_FILE);
    let font = config.font_size;
    let k = bars.len();
    let colors = viridis_palette(k);
    let x_max = bars.iter().map(|b| b.1).fold(0.0_f64, f64::max);
    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };
    // bars[0] sits on the top segment
    let slot = |segment: usize| k.checked_sub(segment + 1);

    render_png(&path, config.image_size, |root| {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("Top {} Countries by Total Gold Medals", config.top_n),
                ("sans-serif", font * 1.4),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(180)
            .build_cartesian_2d(0.0..x_max, (0..k).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Total Gold Medals")
            .y_desc("Countries")
            .axis_desc_style(("sans-serif", font))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.25))
            .y_labels(k)
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(s) => slot(*s)
                    .and_then(|i| bars.get(i))
                    .map(|b| b.0.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
            let segment = k - 1 - i;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(segment)),
                    (*value, SegmentValue::Exact(segment + 1)),
                ],
                colors[i].filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))?;
        Ok(())
    })?;
    Ok(path)
}
