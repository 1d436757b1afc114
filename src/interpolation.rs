//! Interpolating winds at an arbitrary height in the profile.
use crate::error::{HodographError, Result};
use itertools::{izip, Itertools};
use metfor::{Knots, Meters, Quantity, WindUV};
use std::ops::Sub;
use tracing::trace;

/// Finds the wind at a target height given the full, filtered profile.
///
/// The hodograph only asks for heights bracketed by two adjacent levels of the profile, so an
/// implementation never needs to extrapolate.
pub trait HeightInterpolator {
    /// The wind at `target`, given parallel height and wind component slices with no missing
    /// values.
    fn wind_at(
        &self,
        target: Meters,
        heights: &[Meters],
        us: &[Knots],
        vs: &[Knots],
    ) -> Result<WindUV<Knots>>;
}

impl<F> HeightInterpolator for F
where
    F: Fn(Meters, &[Meters], &[Knots], &[Knots]) -> Result<WindUV<Knots>>,
{
    #[inline]
    fn wind_at(
        &self,
        target: Meters,
        heights: &[Meters],
        us: &[Knots],
        vs: &[Knots],
    ) -> Result<WindUV<Knots>> {
        self(target, heights, us, vs)
    }
}

/// Linear interpolation in height, component by component.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearInterpolator;

impl HeightInterpolator for LinearInterpolator {
    fn wind_at(
        &self,
        target: Meters,
        heights: &[Meters],
        us: &[Knots],
        vs: &[Knots],
    ) -> Result<WindUV<Knots>> {
        let u = linear_interpolate(heights, us, target);
        let v = linear_interpolate(heights, vs, target);

        match (u, v) {
            (Some(u), Some(v)) => Ok(WindUV { u, v }),
            _ => {
                trace!(height = target.unpack(), "height not bracketed by profile");
                Err(HodographError::InterpolationError)
            }
        }
    }
}

/// Interpolate values given two parallel slices of data and a target value.
///
/// Assumes that xs is monotonic. The first pair of points that brackets the target is used, and
/// `None` is returned if no pair does.
///
/// # Examples
///
/// ```rust
/// use metfor::{Knots, Meters};
/// use sounding_hodograph::linear_interpolate;
///
/// let heights = [Meters(0.0), Meters(1000.0), Meters(2000.0)];
/// let speeds = [Knots(0.0), Knots(10.0), Knots(30.0)];
///
/// assert_eq!(linear_interpolate(&heights, &speeds, Meters(1500.0)), Some(Knots(20.0)));
/// assert_eq!(linear_interpolate(&heights, &speeds, Meters(2000.0)), Some(Knots(30.0)));
/// assert_eq!(linear_interpolate(&heights, &speeds, Meters(2500.0)), None);
/// ```
#[inline]
pub fn linear_interpolate<X, Y>(xs: &[X], ys: &[Y], target_x: X) -> Option<Y>
where
    X: Quantity + PartialOrd + Sub<X>,
    <X as Sub<X>>::Output: Quantity,
    Y: Quantity + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    debug_assert_eq!(xs.len(), ys.len());

    enum BracketType<X, Y> {
        Bracket((X, Y), (X, Y)),
        EndEqual((X, Y)),
    }

    let make_bracket = |pnt_0, pnt_1| -> Option<BracketType<X, Y>> {
        let (x0, _) = pnt_0;
        let (x1, _) = pnt_1;

        if (x0 < target_x && x1 > target_x) || (x0 > target_x && x1 < target_x) {
            Some(BracketType::Bracket(pnt_0, pnt_1))
        } else if (x0 - target_x).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEqual(pnt_0))
        } else if (x1 - target_x).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEqual(pnt_1))
        } else {
            None
        }
    };

    izip!(xs, ys)
        .map(|(x, y)| (*x, *y))
        // Look at them in pairs.
        .tuple_windows::<(_, _)>()
        // Make a bracket and filter out all levels the don't create a bracket.
        .filter_map(|(pnt_0, pnt_1)| make_bracket(pnt_0, pnt_1))
        // Get the first one that brackets the target value
        .next()
        .map(|val| match val {
            BracketType::Bracket(pnt_0, pnt_1) => {
                let (x0, y0) = pnt_0;
                let (x1, y1) = pnt_1;
                linear_interp(target_x, x0, x1, y0, y1)
            }
            BracketType::EndEqual(pnt) => pnt.1,
        })
}

#[inline]
pub(crate) fn linear_interp<X, Y>(x_val: X, x1: X, x2: X, y1: Y, y2: Y) -> Y
where
    X: Sub<X> + Copy + std::fmt::Debug + std::cmp::PartialEq,
    <X as Sub<X>>::Output: Quantity,
    Y: Quantity + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    debug_assert_ne!(x1, x2);

    let run = (x2 - x1).unpack();
    let rise = (y2 - y1).unpack();
    let dx = (x_val - x1).unpack();

    Y::pack(y1.unpack() + dx * (rise / run))
}
