//! Storm motion markers and effective inflow lines drawn over the hodograph trace.
//!
//! The storm motions and the effective inflow layer are found elsewhere; this module only turns
//! them into geometry in wind component space.

use crate::{
    error::{HodographError, Result},
    interpolation::HeightInterpolator,
    profile::{filter_missing, HodoPoint, WindProfileSample},
    render::{HodographPainter, HodographStyle},
};
use metfor::{Knots, Meters, WindUV};
use optional::Optioned;

/// Storm motion vectors for the right and left moving supercells, and the layer feeding them.
#[derive(Clone, Copy, Debug)]
pub struct StormMotionOverlay {
    right_mover: WindUV<Knots>,
    left_mover: WindUV<Knots>,
    effective_layer: Option<(Meters, Meters)>,
}

impl StormMotionOverlay {
    /// Create an overlay with no effective inflow layer.
    pub fn new<W>(right_mover: W, left_mover: W) -> Self
    where
        WindUV<Knots>: From<W>,
    {
        StormMotionOverlay {
            right_mover: WindUV::<Knots>::from(right_mover),
            left_mover: WindUV::<Knots>::from(left_mover),
            effective_layer: None,
        }
    }

    /// Builder method to add the effective inflow layer, given as its bottom and top heights.
    #[inline]
    pub fn with_effective_layer(self, bottom: Meters, top: Meters) -> Self {
        Self {
            effective_layer: Some((bottom, top)),
            ..self
        }
    }

    /// Builder method for an effective inflow layer that may not exist.
    ///
    /// Many soundings have no effective inflow layer at all. The layer is only kept if both the
    /// bottom and the top are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Knots, Meters, WindUV};
    /// use optional::{none, some};
    /// use sounding_hodograph::StormMotionOverlay;
    ///
    /// let rm = WindUV { u: Knots(20.0), v: Knots(-5.0) };
    /// let lm = WindUV { u: Knots(5.0), v: Knots(20.0) };
    ///
    /// let overlay = StormMotionOverlay::new(rm, lm)
    ///     .with_optional_effective_layer(some(Meters(0.0)), none());
    /// assert!(overlay.effective_layer().is_none());
    /// ```
    #[inline]
    pub fn with_optional_effective_layer(
        self,
        bottom: Optioned<Meters>,
        top: Optioned<Meters>,
    ) -> Self {
        let effective_layer = match (bottom.into_option(), top.into_option()) {
            (Some(bottom), Some(top)) => Some((bottom, top)),
            _ => None,
        };

        Self {
            effective_layer,
            ..self
        }
    }

    /// The right mover storm motion.
    #[inline]
    pub fn right_mover(&self) -> WindUV<Knots> {
        self.right_mover
    }

    /// The left mover storm motion.
    #[inline]
    pub fn left_mover(&self) -> WindUV<Knots> {
        self.left_mover
    }

    /// The bottom and top of the effective inflow layer, if there is one.
    #[inline]
    pub fn effective_layer(&self) -> Option<(Meters, Meters)> {
        self.effective_layer
    }
}

/// The winds at the bottom and top of the effective inflow layer.
#[derive(Clone, Copy, Debug)]
pub struct InflowLines {
    /// Wind at the bottom of the layer.
    pub bottom: HodoPoint,
    /// Wind at the top of the layer.
    pub top: HodoPoint,
}

/// Everything needed to draw the storm motion overlay.
#[derive(Clone, Copy, Debug)]
pub struct OverlayGeometry {
    /// Center of the right mover marker.
    pub right_mover: WindUV<Knots>,
    /// Center of the left mover marker.
    pub left_mover: WindUV<Knots>,
    /// Lines from the right mover to the inflow layer winds, when there is a layer.
    pub inflow: Option<InflowLines>,
}

impl OverlayGeometry {
    /// Just the storm motion markers, with no inflow lines.
    #[inline]
    pub(crate) fn markers_only(overlay: &StormMotionOverlay) -> Self {
        OverlayGeometry {
            right_mover: overlay.right_mover,
            left_mover: overlay.left_mover,
            inflow: None,
        }
    }

    /// Draw the markers, then the inflow lines from the right mover.
    pub fn draw<P>(&self, style: &HodographStyle, painter: &mut P)
    where
        P: HodographPainter + ?Sized,
    {
        let marker = style.marker_style();
        let radius = style.marker_radius();
        painter.draw_circle(self.right_mover, radius, &marker);
        painter.draw_circle(self.left_mover, radius, &marker);

        if let Some(InflowLines { bottom, top }) = self.inflow {
            let inflow = style.inflow_style();
            painter.draw_line(self.right_mover, bottom.wind, &inflow);
            painter.draw_line(self.right_mover, top.wind, &inflow);
        }
    }
}

/// Locate the overlay on the hodograph.
///
/// Without an effective inflow layer this cannot fail. With one, the winds at its bottom and top
/// come from `interp` over the profile with missing levels removed, so the layer must lie inside
/// the profile.
pub fn overlay_geometry<I>(
    overlay: &StormMotionOverlay,
    samples: &[WindProfileSample],
    interp: &I,
) -> Result<OverlayGeometry>
where
    I: HeightInterpolator + ?Sized,
{
    let inflow = match overlay.effective_layer {
        Some((bottom, top)) => {
            let points = filter_missing(samples);
            if points.len() < 2 {
                return Err(HodographError::NotEnoughData);
            }

            let heights: Vec<Meters> = points.iter().map(|pnt| pnt.height).collect();
            let us: Vec<Knots> = points.iter().map(|pnt| pnt.wind.u).collect();
            let vs: Vec<Knots> = points.iter().map(|pnt| pnt.wind.v).collect();

            let bottom = HodoPoint {
                height: bottom,
                wind: interp.wind_at(bottom, &heights, &us, &vs)?,
            };
            let top = HodoPoint {
                height: top,
                wind: interp.wind_at(top, &heights, &us, &vs)?,
            };

            Some(InflowLines { bottom, top })
        }
        None => None,
    };

    Ok(OverlayGeometry {
        inflow,
        ..OverlayGeometry::markers_only(overlay)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        interpolation::LinearInterpolator,
        test_data::{approx_equal, sample, veering_profile},
    };
    use metfor::Quantity;

    fn storm_motions() -> (WindUV<Knots>, WindUV<Knots>) {
        (
            WindUV {
                u: Knots(25.0),
                v: Knots(-5.0),
            },
            WindUV {
                u: Knots(5.0),
                v: Knots(25.0),
            },
        )
    }

    #[test]
    fn test_no_layer() {
        let (rm, lm) = storm_motions();
        let overlay = StormMotionOverlay::new(rm, lm);

        // Does not need any data without a layer.
        let geom = overlay_geometry(&overlay, &[], &LinearInterpolator).unwrap();
        assert!(geom.inflow.is_none());
        assert_eq!(geom.right_mover.u, Knots(25.0));
        assert_eq!(geom.left_mover.v, Knots(25.0));
    }

    #[test]
    fn test_inflow_layer() {
        let (rm, lm) = storm_motions();
        let overlay = StormMotionOverlay::new(rm, lm).with_effective_layer(Meters(250.0), Meters(1750.0));

        let samples = [
            sample(0.0, 0.0, 0.0),
            sample(1000.0, 10.0, 20.0),
            sample(2000.0, 20.0, 20.0),
        ];

        let InflowLines { bottom, top } = overlay_geometry(&overlay, &samples, &LinearInterpolator)
            .unwrap()
            .inflow
            .unwrap();

        assert_eq!(bottom.height, Meters(250.0));
        assert!(approx_equal(2.5, bottom.wind.u.unpack(), 1.0e-9));
        assert!(approx_equal(5.0, bottom.wind.v.unpack(), 1.0e-9));

        assert_eq!(top.height, Meters(1750.0));
        assert!(approx_equal(17.5, top.wind.u.unpack(), 1.0e-9));
        assert!(approx_equal(20.0, top.wind.v.unpack(), 1.0e-9));
    }

    #[test]
    fn test_layer_outside_profile() {
        let (rm, lm) = storm_motions();
        let overlay = StormMotionOverlay::new(rm, lm).with_effective_layer(Meters(0.0), Meters(3000.0));

        assert_eq!(
            overlay_geometry(&overlay, &[sample(0.0, 0.0, 0.0)], &LinearInterpolator).unwrap_err(),
            HodographError::NotEnoughData
        );

        let result = overlay_geometry(
            &overlay,
            &[sample(0.0, 0.0, 0.0), sample(1000.0, 1.0, 1.0)],
            &LinearInterpolator,
        );
        assert_eq!(result.unwrap_err(), HodographError::InterpolationError);

        assert!(overlay_geometry(&overlay, &veering_profile(), &LinearInterpolator).is_ok());
    }
}
