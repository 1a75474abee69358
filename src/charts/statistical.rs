use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{coolwarm, text_color_for};
use crate::config::ChartConfig;
use crate::data::model::Dataset;
use crate::stats::correlation::CorrelationMatrix;

use super::{STATISTICAL_FILE, render_png};

const UNDEFINED_CELL: RGBColor = RGBColor(190, 190, 190);

/// Annotation text for one heatmap cell.
pub fn cell_label(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

/// Correlation heatmap of every numeric column.
pub fn plot_statistical(dataset: &Dataset, config: &ChartConfig) -> Result<PathBuf> {
    let matrix = CorrelationMatrix::from_dataset(dataset).context("statistical plot")?;
    if matrix.is_empty() {
        bail!("statistical plot: no numeric columns to correlate");
    }
    let path = config.output_dir.join(STATISTICAL_FILE);
    let font = config.font_size;
    let n = matrix.len();
    // row 0 of the matrix is drawn on the top segment
    let label_at = |segment: &SegmentValue<usize>, flip: bool| match segment {
        SegmentValue::CenterOf(s) if *s < n => {
            let i = if flip { n - 1 - *s } else { *s };
            matrix.labels[i].clone()
        }
        _ => String::new(),
    };

    render_png(&path, config.image_size, |root| {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption(
                "Correlation Heatmap of Numerical Features",
                ("sans-serif", font * 1.4),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(180)
            .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n)
            .y_labels(n)
            .x_label_style(("sans-serif", font * 0.7))
            .y_label_style(("sans-serif", font * 0.8))
            .x_label_formatter(&|v| label_at(v, false))
            .y_label_formatter(&|v| label_at(v, true))
            .draw()?;

        let cells = || (0..n).flat_map(move |i| (0..n).map(move |j| (i, j)));
        chart.draw_series(cells().map(|(i, j)| {
            let row = n - 1 - i;
            let fill = matrix.values[i][j].map_or(UNDEFINED_CELL, coolwarm);
            Rectangle::new(
                [
                    (SegmentValue::Exact(j), SegmentValue::Exact(row)),
                    (SegmentValue::Exact(j + 1), SegmentValue::Exact(row + 1)),
                ],
                fill.filled(),
            )
        }))?;

        chart.draw_series(cells().map(|(i, j)| {
            let value = matrix.values[i][j];
            let ink = text_color_for(value.map_or(UNDEFINED_CELL, coolwarm));
            let style = ("sans-serif", font * 0.8)
                .into_font()
                .color(&ink)
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(
                cell_label(value),
                (SegmentValue::CenterOf(j), SegmentValue::CenterOf(n - 1 - i)),
                style,
            )
        }))?;
        Ok(())
    })?;
    Ok(path)
}
