//! Angular statistics for phase populations.
//!
//! - Wrapping into `[0, 2π)` and `[-π, π)`
//! - Circular mean via vector (cos/sin) averaging
//! - Phase spread and the coherence derived from it
//!
//! A plain arithmetic mean of raw angles is biased near the 0/2π seam, so
//! every mean in this crate goes through [`circular_mean`].

use std::f64::consts::{PI, TAU};

use crate::config::SpreadMetric;

/// Wrap an angle into `[0, 2π)`.
///
/// NaN passes through unchanged.
#[inline]
pub fn wrap_phase(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle difference into `[-π, π)`.
#[inline]
pub fn wrap_signed(angle: f64) -> f64 {
    wrap_phase(angle + PI) - PI
}

/// Circular mean of a set of phases, in `[0, 2π)`.
///
/// Averages `cos` and `sin` separately and takes `atan2(mean_sin, mean_cos)`.
///
/// # Returns
///
/// `None` for an empty input.
///
/// # Example
///
/// ```
/// use seity_core::circular::circular_mean;
///
/// // Straddling the seam: 6.2 and 0.1 average near 0, not near π.
/// let mean = circular_mean([6.2, 0.1]).unwrap();
/// assert!(mean > 6.0 || mean < 0.2);
/// ```
pub fn circular_mean(phases: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut n = 0usize;
    let mut sum_cos = 0.0;
    let mut sum_sin = 0.0;

    for phase in phases {
        sum_cos += phase.cos();
        sum_sin += phase.sin();
        n += 1;
    }

    if n == 0 {
        return None;
    }

    let avg_cos = sum_cos / n as f64;
    let avg_sin = sum_sin / n as f64;
    Some(wrap_phase(avg_sin.atan2(avg_cos)))
}

/// Population standard deviation (divides by `n`).
///
/// Uses the shifted-data formulation around the first value, so a set of
/// identical values yields exactly `0.0`. Returns `0.0` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    let Some(&shift) = values.first() else {
        return 0.0;
    };
    let n = values.len() as f64;

    let (sum, sum_sq) = values.iter().fold((0.0, 0.0), |(sum, sum_sq), &v| {
        let d = v - shift;
        (sum + d, sum_sq + d * d)
    });

    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;
    // Keep NaN: f64::max would swallow it
    if variance < 0.0 {
        0.0
    } else {
        variance.sqrt()
    }
}

/// Spread of a phase population around `mean_phase`.
pub fn phase_spread(phases: &[f64], mean_phase: f64, metric: SpreadMetric) -> f64 {
    match metric {
        SpreadMetric::RawPhase => population_std_dev(phases),
        SpreadMetric::MeanCentered => {
            let deviations: Vec<f64> = phases
                .iter()
                .map(|&phase| wrap_signed(phase - mean_phase))
                .collect();
            population_std_dev(&deviations)
        }
    }
}

/// Coherence `1 - spread/π`, clamped to `[0, 1]`.
///
/// A spread of `0` is perfect synchrony; a spread of `π` (or more) is
/// maximal dispersion.
#[inline]
pub fn coherence_from_spread(spread: f64) -> f64 {
    (1.0 - spread / PI).clamp(0.0, 1.0)
}
