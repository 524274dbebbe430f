use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default bound on `span / step`, allowing at most five gridlines.
pub const DEFAULT_TICK_LIMIT: f64 = 5.5;

const STEP_FACTORS: [f64; 3] = [1.0, 2.0, 5.0];
// Smallest power of ten that is still a normal f64.
const SMALLEST_MAGNITUDE: f64 = 1e-307;

/// Axis range rounded outward to a "nice" step of `{1, 2, 5} * 10^k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    min: f64,
    max: f64,
    divs: Vec<f64>,
    step: f64,
}

impl AxisScale {
    /// Builds a scale for `[min, max]` with [`DEFAULT_TICK_LIMIT`].
    pub fn for_range(min: f64, max: f64) -> ChartResult<Self> {
        Self::for_range_with_limit(min, max, DEFAULT_TICK_LIMIT)
    }

    /// Picks the smallest `{1, 2, 5} * 10^k` step for which
    /// `(max - min) / step <= limit`.
    pub fn for_range_with_limit(min: f64, max: f64, limit: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::NonFiniteScaleBounds { min, max });
        }
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale tick limit must be finite and > 0".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "scale min must be <= max: min={min}, max={max}"
            )));
        }

        if min == max {
            if min == 0.0 {
                return Self::for_range_with_limit(0.0, 1.0, limit);
            }
            return Self::for_range_with_limit(min.min(0.0), max.max(0.0), limit);
        }

        let span = max - min;
        if !span.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "scale span overflows: min={min}, max={max}"
            )));
        }
        let step = select_step(span, limit);
        if !step.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "no finite step fits span {span} within limit {limit}"
            )));
        }
        Ok(Self {
            min: (min / step).floor() * step,
            max: (max / step).ceil() * step,
            divs: interior_divisions(step, min, max, limit),
            step,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Gridline values strictly between the axis floor and the data maximum.
    #[must_use]
    pub fn divs(&self) -> &[f64] {
        &self.divs
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

fn select_step(span: f64, limit: f64) -> f64 {
    let mut magnitude = 10f64.powf((span.log10() - 1.0).floor());
    if magnitude < SMALLEST_MAGNITUDE {
        magnitude = SMALLEST_MAGNITUDE;
    }
    loop {
        for factor in STEP_FACTORS {
            let step = factor * magnitude;
            if span / step <= limit {
                return step;
            }
        }
        magnitude *= 10.0;
    }
}

// At most ceil(limit) multiples fit strictly inside (floor(min / step) * step, max).
fn interior_divisions(step: f64, min: f64, max: f64, limit: f64) -> Vec<f64> {
    let base = (min / step).floor();
    let max_divs = limit.ceil() as usize;
    (1..=max_divs)
        .map(|k| (base + k as f64) * step)
        .take_while(|&value| value < max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{interior_divisions, select_step};

    #[test]
    fn step_selection_walks_one_two_five() {
        assert_eq!(select_step(23.0, 5.5), 5.0);
        assert_eq!(select_step(10.0, 5.5), 2.0);
        assert_eq!(select_step(1.0, 5.5), 0.2);
        assert_eq!(select_step(400.0, 5.5), 100.0);
    }

    #[test]
    fn divisions_exclude_floor_and_max() {
        assert_eq!(interior_divisions(5.0, 0.0, 25.0, 5.5), vec![5.0, 10.0, 15.0, 20.0]);
        assert_eq!(interior_divisions(2.0, 3.0, 9.0, 5.5), vec![4.0, 6.0, 8.0]);
    }
}
