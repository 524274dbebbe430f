use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Named progress remapping curves.
///
/// Every curve maps 0 to 0 and 1 to 1. `InOutBack` and `InOutElastic`
/// overshoot the unit range in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    InOutQuart,
    InOutCubic,
    InExpo,
    InOutSine,
    InOutCirc,
    InOutBack,
    InOutElastic,
}

impl Easing {
    pub const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::InOutQuart,
        Easing::InOutCubic,
        Easing::InExpo,
        Easing::InOutSine,
        Easing::InOutCirc,
        Easing::InOutBack,
        Easing::InOutElastic,
    ];

    #[must_use]
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Easing::Linear => linear(p),
            Easing::InOutQuart => in_out_quart(p),
            Easing::InOutCubic => in_out_cubic(p),
            Easing::InExpo => in_expo(p),
            Easing::InOutSine => in_out_sine(p),
            Easing::InOutCirc => in_out_circ(p),
            Easing::InOutBack => in_out_back(p),
            Easing::InOutElastic => in_out_elastic(p),
        }
    }
}

#[must_use]
pub fn linear(p: f64) -> f64 {
    p
}

#[must_use]
pub fn in_out_quart(p: f64) -> f64 {
    if p < 0.5 {
        8.0 * p * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(4) / 2.0
    }
}

#[must_use]
pub fn in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Exponential ease-in; flat near 0, steep near 1.
#[must_use]
pub fn in_expo(p: f64) -> f64 {
    if p <= 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * p - 10.0)
    }
}

#[must_use]
pub fn in_out_sine(p: f64) -> f64 {
    -((PI * p).cos() - 1.0) / 2.0
}

#[must_use]
pub fn in_out_circ(p: f64) -> f64 {
    if p < 0.5 {
        (1.0 - (1.0 - (2.0 * p).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * p + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

#[must_use]
pub fn in_out_back(p: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C2: f64 = C1 * 1.525;
    if p < 0.5 {
        ((2.0 * p).powi(2) * ((C2 + 1.0) * 2.0 * p - C2)) / 2.0
    } else {
        ((2.0 * p - 2.0).powi(2) * ((C2 + 1.0) * (p * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

#[must_use]
pub fn in_out_elastic(p: f64) -> f64 {
    const C5: f64 = (2.0 * PI) / 4.5;
    if p <= 0.0 {
        0.0
    } else if p >= 1.0 {
        1.0
    } else if p < 0.5 {
        -(2f64.powf(20.0 * p - 10.0) * ((20.0 * p - 11.125) * C5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * p + 10.0) * ((20.0 * p - 11.125) * C5).sin()) / 2.0 + 1.0
    }
}
