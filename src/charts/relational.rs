use std::path::PathBuf;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::data::model::Dataset;

use super::{RELATIONAL_FILE, padded_range, render_png};

/// `(x, y)` pairs of two fully numeric columns.
pub fn scatter_points(dataset: &Dataset, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
    let xs = dataset.require(x)?.to_f64_vec()?;
    let ys = dataset.require(y)?.to_f64_vec()?;
    Ok(xs.into_iter().zip(ys).collect())
}

/// Scatter of total participation against total medals.
pub fn plot_relational(dataset: &Dataset, config: &ChartConfig) -> Result<PathBuf> {
    let points = scatter_points(dataset, &config.participation_column, &config.medals_column)
        .context("relational plot")?;
    let path = config.output_dir.join(RELATIONAL_FILE);
    let font = config.font_size;

    render_png(&path, config.image_size, |root| {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption("Total Participation vs. Total Medals", ("sans-serif", font * 1.4))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                padded_range(points.iter().map(|p| p.0)),
                padded_range(points.iter().map(|p| p.1)),
            )?;

        chart
            .configure_mesh()
            .x_desc("Total Participation")
            .y_desc("Total Medals Won")
            .axis_desc_style(("sans-serif", font))
            .light_line_style(BLACK.mix(0.05))
            .draw()?;

        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, 4, BLUE.mix(0.7).filled())),
        )?;
        Ok(())
    })?;
    Ok(path)
}
