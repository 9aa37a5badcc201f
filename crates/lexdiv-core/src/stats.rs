//! Descriptive statistics over collected ratios.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mean and spread of a list of ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// Number of ratios summarized.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0.0 for a single ratio.
    pub stdev: f64,
}

impl Summary {
    /// Summarize `ratios`, or `None` when there are none.
    pub fn from_ratios(ratios: &[f64]) -> Option<Self> {
        if ratios.is_empty() {
            return None;
        }
        let count = ratios.len();
        let mean = ratios.iter().sum::<f64>() / count as f64;
        let stdev = if count > 1 {
            let squares: f64 = ratios.iter().map(|r| (r - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        Some(Self { count, mean, stdev })
    }
}
