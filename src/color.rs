use palette::{LinSrgb, Mix, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Colour maps
// ---------------------------------------------------------------------------

/// Anchor colours of the viridis sequential map, dark to light.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Blue → light grey → red diverging map.
const COOLWARM: [(u8, u8, u8); 3] = [(59, 76, 192), (221, 221, 221), (180, 4, 38)];

/// Sample a piecewise-linear gradient at `t` in `[0, 1]`, mixing in linear RGB.
fn gradient(stops: &[(u8, u8, u8)], t: f32) -> RGBColor {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (stops.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - lo as f32;

    let linear = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
        Srgb::new(r, g, b).into_format::<f32>().into_linear()
    };
    let mixed = linear(stops[lo]).mix(linear(stops[lo + 1]), frac);
    let rgb: Srgb<f32> = Srgb::from_linear(mixed);
    let rgb: Srgb<u8> = rgb.into_format();
    RGBColor(rgb.red, rgb.green, rgb.blue)
}

pub fn viridis(t: f32) -> RGBColor {
    gradient(&VIRIDIS, t)
}

/// `n` colours spread evenly along viridis.
pub fn viridis_palette(n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![viridis(0.0)],
        _ => (0..n).map(|i| viridis(i as f32 / (n - 1) as f32)).collect(),
    }
}

/// Colour for a correlation coefficient in `[-1, 1]`.
pub fn coolwarm(value: f64) -> RGBColor {
    gradient(&COOLWARM, ((value + 1.0) / 2.0) as f32)
}

/// Black or white, whichever reads better on `background`.
pub fn text_color_for(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luma > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}
