//! Everything drawn in the hodograph window for one render pass.

use crate::{
    error::Result,
    hodograph::{hodograph_segments_with, Segment},
    interpolation::{HeightInterpolator, LinearInterpolator},
    overlay::{overlay_geometry, OverlayGeometry, StormMotionOverlay},
    profile::{WindProfile, WindProfileSample},
    render::{band_paths, BandPath, HodographPainter, HodographStyle},
};
use tracing::debug;

/// The banded trace and optional storm motion overlay for one profile.
///
/// This is cheap to build and holds no reference to the profile, so build a new one whenever the
/// profile changes rather than trying to update it.
#[derive(Clone, Debug)]
pub struct Hodograph {
    segments: Vec<Segment>,
    storm_motion: Option<OverlayGeometry>,
}

impl Hodograph {
    /// Build a hodograph with linear interpolation.
    pub fn new(samples: &[WindProfileSample], storm_motion: Option<&StormMotionOverlay>) -> Self {
        Self::with_interpolator(samples, storm_motion, &LinearInterpolator)
    }

    /// Build a hodograph from parallel profiles.
    ///
    /// Fails only if the profiles cannot be combined into samples, see `WindProfile::samples`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Knots, Meters};
    /// use optional::some;
    /// use sounding_hodograph::{Hodograph, WindProfile};
    ///
    /// let prof = WindProfile::new()
    ///     .with_height_profile(vec![some(Meters(0.0)), some(Meters(1000.0)), some(Meters(4000.0))])
    ///     .with_uv_profile(
    ///         vec![some(Knots(0.0)), some(Knots(10.0)), some(Knots(20.0))],
    ///         vec![some(Knots(5.0)), some(Knots(15.0)), some(Knots(30.0))],
    ///     );
    ///
    /// let hodo = Hodograph::from_profile(&prof, None).unwrap();
    /// assert_eq!(hodo.segments().len(), 3);
    /// assert_eq!(hodo.band_paths().len(), 2);
    /// ```
    pub fn from_profile(
        profile: &WindProfile,
        storm_motion: Option<&StormMotionOverlay>,
    ) -> Result<Self> {
        Ok(Self::new(&profile.samples()?, storm_motion))
    }

    /// Build a hodograph, finding winds between levels with `interp`.
    ///
    /// The trace and the overlay are independent. If the inflow layer winds cannot be found, the
    /// storm motion markers are still drawn without the inflow lines.
    pub fn with_interpolator<I>(
        samples: &[WindProfileSample],
        storm_motion: Option<&StormMotionOverlay>,
        interp: &I,
    ) -> Self
    where
        I: HeightInterpolator + ?Sized,
    {
        let segments = hodograph_segments_with(samples, interp);
        let storm_motion = storm_motion.map(|overlay| {
            overlay_geometry(overlay, samples, interp).unwrap_or_else(|err| {
                debug!(error = %err, "dropping inflow lines from storm motion overlay");
                OverlayGeometry::markers_only(overlay)
            })
        });

        Hodograph {
            segments,
            storm_motion,
        }
    }

    /// The segments of the trace, bottom up.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The storm motion overlay, if one was requested.
    #[inline]
    pub fn storm_motion(&self) -> Option<&OverlayGeometry> {
        self.storm_motion.as_ref()
    }

    /// The trace merged into one polyline per band.
    #[inline]
    pub fn band_paths(&self) -> Vec<BandPath> {
        band_paths(&self.segments)
    }

    /// Draw the trace, then the storm motion overlay on top of it.
    pub fn draw<P>(&self, style: &HodographStyle, painter: &mut P)
    where
        P: HodographPainter + ?Sized,
    {
        for path in self.band_paths() {
            painter.draw_path(&path.winds(), &style.band_style(path.color_class));
        }

        if let Some(overlay) = &self.storm_motion {
            overlay.draw(style, painter);
        }
    }
}
