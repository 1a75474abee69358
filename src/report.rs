use std::fmt;
use std::io::{self, Write};

use crate::stats::moments::Moments;

// ---------------------------------------------------------------------------
// Qualitative labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skew {
    Right,
    Left,
    NotSkewed,
}

impl fmt::Display for Skew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Skew::Right => "right-skewed",
            Skew::Left => "left-skewed",
            Skew::NotSkewed => "not skewed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tails {
    Leptokurtic,
    Platykurtic,
    Mesokurtic,
}

impl fmt::Display for Tails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tails::Leptokurtic => "leptokurtic (heavy-tailed)",
            Tails::Platykurtic => "platykurtic (light-tailed)",
            Tails::Mesokurtic => "mesokurtic",
        })
    }
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Renders moments as text and classifies their shape.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    skew_low: f64,
    skew_high: f64,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new((-2.0, 2.0))
    }
}

impl Reporter {
    pub fn new((skew_low, skew_high): (f64, f64)) -> Self {
        Reporter {
            skew_low,
            skew_high,
        }
    }

    pub fn classify_skew(&self, skewness: f64) -> Skew {
        if skewness > self.skew_high {
            Skew::Right
        } else if skewness < self.skew_low {
            Skew::Left
        } else {
            Skew::NotSkewed
        }
    }

    pub fn classify_tails(&self, excess_kurtosis: f64) -> Tails {
        if excess_kurtosis > 0.0 {
            Tails::Leptokurtic
        } else if excess_kurtosis < 0.0 {
            Tails::Platykurtic
        } else {
            Tails::Mesokurtic
        }
    }

    /// Three lines: the column, the moments to two decimals, the labels.
    pub fn render(&self, moments: &Moments, column: &str) -> String {
        format!(
            "For the attribute {column}:\n\
             Mean = {:.2}, Standard Deviation = {:.2}, Skewness = {:.2}, and Excess Kurtosis = {:.2}.\n\
             The data was {} and {}.\n",
            moments.mean,
            moments.stddev,
            moments.skewness,
            moments.excess_kurtosis,
            self.classify_skew(moments.skewness),
            self.classify_tails(moments.excess_kurtosis),
        )
    }

    pub fn write_report<W: Write>(
        &self,
        out: &mut W,
        moments: &Moments,
        column: &str,
    ) -> io::Result<()> {
        out.write_all(self.render(moments, column).as_bytes())?;
        out.flush()
    }
}
