//! Splitting a wind profile into height-banded hodograph segments.
//!
//! The hodograph trace is colored by height: 0-3 km, 3-6 km, 6-9 km and 9-12 km. Color changes
//! should happen exactly at the band thresholds and not at whichever data point happens to be
//! closest, so a vertex is interpolated at the threshold whenever a pair of levels straddles one.
//! Nothing above 12 km is drawn.
//!
//! Only one threshold is resolved per pair of levels. A very coarse profile that jumps across two
//! or more thresholds between adjacent levels gets a single boundary vertex at the top of the
//! lower level's band, and the rest of the pair is colored with the next band up.

use crate::{
    interpolation::{HeightInterpolator, LinearInterpolator},
    profile::{filter_missing, HodoPoint, WindProfileSample},
};
use itertools::Itertools;
use metfor::{Knots, Meters, Quantity};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, trace};

/// Height at which the hodograph trace ends.
pub const HODOGRAPH_TOP: Meters = Meters(12_000.0);

/// The height band a hodograph segment belongs to, which determines its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum ColorClass {
    /// Below 3 km.
    #[strum(serialize = "0-3 km")]
    Low,
    /// From 3 km up to 6 km.
    #[strum(serialize = "3-6 km")]
    Mid,
    /// From 6 km up to 9 km.
    #[strum(serialize = "6-9 km")]
    Upper,
    /// From 9 km up to 12 km.
    #[strum(serialize = "9-12 km")]
    Trop,
}

impl ColorClass {
    /// The lowest height included in this band.
    ///
    /// Anything below ground level still classifies as `Low`.
    pub fn bottom(self) -> Meters {
        match self {
            ColorClass::Low => Meters(0.0),
            ColorClass::Mid => Meters(3_000.0),
            ColorClass::Upper => Meters(6_000.0),
            ColorClass::Trop => Meters(9_000.0),
        }
    }

    /// The first height above this band. This is the threshold where a boundary vertex is
    /// interpolated.
    pub fn top(self) -> Meters {
        match self {
            ColorClass::Low => Meters(3_000.0),
            ColorClass::Mid => Meters(6_000.0),
            ColorClass::Upper => Meters(9_000.0),
            ColorClass::Trop => HODOGRAPH_TOP,
        }
    }

    /// The band directly above this one, if there is one.
    pub fn next(self) -> Option<ColorClass> {
        match self {
            ColorClass::Low => Some(ColorClass::Mid),
            ColorClass::Mid => Some(ColorClass::Upper),
            ColorClass::Upper => Some(ColorClass::Trop),
            ColorClass::Trop => None,
        }
    }
}

/// Classify a height into its band.
///
/// Returns `None` at or above the top of the hodograph. NaN heights also return `None`.
///
/// # Examples
///
/// ```rust
/// use metfor::Meters;
/// use sounding_hodograph::{height_band, ColorClass};
///
/// assert_eq!(height_band(Meters(2999.0)), Some(ColorClass::Low));
/// assert_eq!(height_band(Meters(3000.0)), Some(ColorClass::Mid));
/// assert_eq!(height_band(Meters(11999.0)), Some(ColorClass::Trop));
/// assert_eq!(height_band(Meters(12000.0)), None);
/// ```
pub fn height_band(height: Meters) -> Option<ColorClass> {
    ColorClass::iter().find(|class| height < class.top())
}

/// A straight piece of the hodograph trace in wind component space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start of the segment, the lower level.
    pub from: HodoPoint,
    /// End of the segment, the upper level.
    pub to: HodoPoint,
    /// Band used to color the segment.
    pub color_class: ColorClass,
}

impl Segment {
    #[inline]
    fn new(from: HodoPoint, to: HodoPoint, color_class: ColorClass) -> Self {
        Segment {
            from,
            to,
            color_class,
        }
    }
}

/// Build the segments of a hodograph with linear interpolation at the band thresholds.
///
/// Samples with a missing wind component are dropped first. Heights are assumed non-decreasing;
/// that is not checked, out of order or NaN heights just fall into whatever band the comparisons
/// pick.
///
/// # Examples
///
/// ```rust
/// use metfor::{Knots, Meters, WindUV};
/// use sounding_hodograph::{hodograph_segments, ColorClass, WindProfileSample};
///
/// let samples = [
///     WindProfileSample::from_wind(Meters(11_000.0), WindUV { u: Knots(40.0), v: Knots(10.0) }),
///     WindProfileSample::from_wind(Meters(13_000.0), WindUV { u: Knots(60.0), v: Knots(10.0) }),
/// ];
///
/// let segments = hodograph_segments(&samples);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].color_class, ColorClass::Trop);
/// assert_eq!(segments[0].to.height, Meters(12_000.0));
/// assert_eq!(segments[0].to.wind.u, Knots(50.0));
/// ```
#[inline]
pub fn hodograph_segments(samples: &[WindProfileSample]) -> Vec<Segment> {
    hodograph_segments_with(samples, &LinearInterpolator)
}

/// Build the segments of a hodograph, finding the winds at band thresholds with `interp`.
///
/// The interpolator is handed the whole filtered profile, but it is only ever asked for a height
/// that lies between the two levels currently being split. If it cannot find the wind at a
/// threshold, the trace ends at the last level before that threshold.
pub fn hodograph_segments_with<I>(samples: &[WindProfileSample], interp: &I) -> Vec<Segment>
where
    I: HeightInterpolator + ?Sized,
{
    let points = filter_missing(samples);
    if points.len() < samples.len() {
        debug!(
            dropped = samples.len() - points.len(),
            "skipping levels with missing wind"
        );
    }

    let heights: Vec<Meters> = points.iter().map(|pnt| pnt.height).collect();
    let us: Vec<Knots> = points.iter().map(|pnt| pnt.wind.u).collect();
    let vs: Vec<Knots> = points.iter().map(|pnt| pnt.wind.v).collect();

    let boundary = |height: Meters| {
        interp
            .wind_at(height, &heights, &us, &vs)
            .map(|wind| HodoPoint { height, wind })
    };

    let mut segments = Vec::with_capacity(points.len());

    for (&lower, &upper) in points.iter().tuple_windows::<(_, _)>() {
        let class = match height_band(lower.height) {
            Some(class) => class,
            None => {
                trace!(height = lower.height.unpack(), "reached top of hodograph");
                break;
            }
        };

        let top = class.top();

        // Same band, or the profile went backwards; either way no threshold to split on.
        if upper.height < top {
            segments.push(Segment::new(lower, upper, class));
            continue;
        }

        let split = match boundary(top) {
            Ok(split) => split,
            Err(err) => {
                debug!(
                    height = top.unpack(),
                    error = %err,
                    "no wind at threshold, trace cut off"
                );
                break;
            }
        };
        segments.push(Segment::new(lower, split, class));

        match class.next() {
            Some(next) => segments.push(Segment::new(split, upper, next)),
            None => {
                trace!(height = top.unpack(), "trace cut off");
                break;
            }
        }
    }

    segments
}
