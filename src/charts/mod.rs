/// Static PNG charts of the cleaned table.
///
/// ```text
///   Dataset ──► relational   scatter, participation vs. medals
///           ──► categorical  top-N horizontal bars
///           ──► statistical  correlation heatmap
/// ```
///
/// Each chart draws into an in-memory RGB buffer which is then written
/// with the `image` crate.

pub mod categorical;
pub mod relational;
pub mod statistical;

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::data::model::Dataset;

pub const RELATIONAL_FILE: &str = "relational_plot.png";
pub const CATEGORICAL_FILE: &str = "categorical_plot.png";
pub const STATISTICAL_FILE: &str = "statistical_plot.png";

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render all three charts in order; the first failure aborts.
pub fn render_all(dataset: &Dataset, config: &ChartConfig) -> Result<Vec<PathBuf>> {
    Ok(vec![
        relational::plot_relational(dataset, config)?,
        statistical::plot_statistical(dataset, config)?,
        categorical::plot_categorical(dataset, config)?,
    ])
}

/// Draw onto a white canvas of `size` and save it as PNG at `path`.
pub(crate) fn render_png<F>(path: &Path, (width, height): (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&Canvas<'_>) -> Result<()>,
{
    let mut buffer = vec![255u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    image::save_buffer(path, &buffer, width, height, image::ColorType::Rgb8)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Axis range covering `values` with a 5% margin; never empty.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = if max > min { (max - min) * 0.05 } else { min.abs().max(1.0) * 0.5 };
    (min - pad)..(max + pad)
}
