#![warn(missing_docs)]
/*!
Functions and data types for building hodographs from weather soundings.

A hodograph traces the tip of the wind vector as height increases. This crate splits that trace
into the four traditional height bands, 0-3 km, 3-6 km, 6-9 km and 9-12 km, interpolating a vertex
at each band threshold so the color changes exactly where the band does. Anything above 12 km is
left off.

The crate does no drawing of its own. Everything is expressed in wind component space and handed
to a [`HodographPainter`], which owns the mapping to pixels, the range rings and the rest of the
background.

```rust
use metfor::{Knots, Meters, WindUV};
use sounding_hodograph::{hodograph_segments, ColorClass, WindProfileSample};

let samples: Vec<WindProfileSample> = [(500.0, 5.0), (2500.0, 15.0), (3500.0, 25.0)]
    .iter()
    .map(|&(h, u)| WindProfileSample::from_wind(Meters(h), WindUV { u: Knots(u), v: Knots(10.0) }))
    .collect();

let segments = hodograph_segments(&samples);
let classes: Vec<ColorClass> = segments.iter().map(|seg| seg.color_class).collect();
assert_eq!(classes, vec![ColorClass::Low, ColorClass::Low, ColorClass::Mid]);
assert_eq!(segments[1].to.height, Meters(3000.0));
```
*/

//
// API
//
pub use crate::{
    error::{HodographError, Result},
    hodograph::{
        height_band, hodograph_segments, hodograph_segments_with, ColorClass, Segment,
        HODOGRAPH_TOP,
    },
    interpolation::{linear_interpolate, HeightInterpolator, LinearInterpolator},
    overlay::{overlay_geometry, InflowLines, OverlayGeometry, StormMotionOverlay},
    plot::Hodograph,
    profile::{filter_missing, HodoPoint, WindProfile, WindProfileSample},
    render::{band_paths, draw_segments, BandPath, HodographPainter, HodographStyle, LineStyle, Rgba},
};

//
// Internal use only
//

// Modules
mod error;
mod hodograph;
mod interpolation;
mod overlay;
mod plot;
mod profile;
mod render;

#[cfg(test)]
mod test_data;
