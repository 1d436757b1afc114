//! Data used in tests.

use crate::profile::WindProfileSample;
use metfor::{Knots, Meters, WindSpdDir, WindUV};

/// A level with valid wind components.
pub fn sample(height: f64, u: f64, v: f64) -> WindProfileSample {
    WindProfileSample::from_wind(
        Meters(height),
        WindUV {
            u: Knots(u),
            v: Knots(v),
        },
    )
}

/// Winds veering from southeast at the surface to west at 14 km, strengthening with height.
///
/// One level every 500 m, so every band threshold falls on a level and each is straddled by
/// exactly one pair.
pub fn veering_profile() -> Vec<WindProfileSample> {
    (0..=28)
        .map(|i| {
            let height = f64::from(i) * 500.0;
            let speed = 10.0 + 2.0 * f64::from(i);
            let direction = 135.0 + 4.5 * f64::from(i);

            WindProfileSample::from_wind(
                Meters(height),
                WindSpdDir {
                    speed: Knots(speed),
                    direction,
                },
            )
        })
        .collect()
}

pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    f64::abs(tgt - guess) <= tol
}
