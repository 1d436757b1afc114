//! Handing hodograph data to something that can draw it.
//!
//! Nothing in this crate knows about pixels. A painter receives points in wind component space
//! and is responsible for mapping them onto its canvas, along with range rings, axes and any
//! other background it wants.

use crate::{hodograph::ColorClass, hodograph::Segment, profile::HodoPoint};
use metfor::{Knots, WindUV};

/// An RGBA color.
pub type Rgba = [u8; 4];

/// Color and width of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a new line style.
    pub const fn new(color: Rgba, width: f32) -> Self {
        LineStyle { color, width }
    }
}

/// Colors and line widths used when drawing a hodograph.
///
/// The defaults are the traditional SHARP palette: red, green, yellow and cyan for the four
/// height bands on a black background.
#[derive(Debug, Clone, PartialEq)]
pub struct HodographStyle {
    band_colors: [Rgba; 4],
    trace_width: f32,
    marker: LineStyle,
    marker_radius: f32,
    inflow: LineStyle,
}

impl Default for HodographStyle {
    fn default() -> Self {
        Self {
            band_colors: [
                [0xFF, 0x00, 0x00, 0xFF],
                [0x00, 0xFF, 0x00, 0xFF],
                [0xFF, 0xFF, 0x00, 0xFF],
                [0x00, 0xFF, 0xFF, 0xFF],
            ],
            trace_width: 2.0,
            marker: LineStyle::new([0xFF, 0xFF, 0xFF, 0xFF], 1.0),
            marker_radius: 5.0,
            inflow: LineStyle::new([0x00, 0xFF, 0xFF, 0xFF], 1.0),
        }
    }
}

impl HodographStyle {
    /// Create the default style. This is a proxy for default with a clearer name.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the color of one band of the trace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_hodograph::{ColorClass, HodographStyle};
    ///
    /// let style = HodographStyle::new().with_band_color(ColorClass::Low, [255, 0, 255, 255]);
    /// assert_eq!(style.band_style(ColorClass::Low).color, [255, 0, 255, 255]);
    /// assert_eq!(style.band_style(ColorClass::Mid).color, [0, 255, 0, 255]);
    /// ```
    #[inline]
    pub fn with_band_color(mut self, class: ColorClass, color: Rgba) -> Self {
        self.band_colors[class as usize] = color;
        self
    }

    /// Builder method to set the width of the trace.
    #[inline]
    pub fn with_trace_width(mut self, width: f32) -> Self {
        self.trace_width = width;
        self
    }

    /// Builder method to set the stroke of the storm motion markers.
    #[inline]
    pub fn with_marker_style(mut self, style: LineStyle) -> Self {
        self.marker = style;
        self
    }

    /// Builder method to set the radius, in pixels, of the storm motion markers.
    #[inline]
    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Builder method to set the stroke of the effective inflow lines.
    #[inline]
    pub fn with_inflow_style(mut self, style: LineStyle) -> Self {
        self.inflow = style;
        self
    }

    /// The stroke for one band of the trace.
    #[inline]
    pub fn band_style(&self, class: ColorClass) -> LineStyle {
        LineStyle::new(self.band_colors[class as usize], self.trace_width)
    }

    /// The stroke for storm motion markers.
    #[inline]
    pub fn marker_style(&self) -> LineStyle {
        self.marker
    }

    /// The radius of storm motion markers.
    #[inline]
    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    /// The stroke for effective inflow lines.
    #[inline]
    pub fn inflow_style(&self) -> LineStyle {
        self.inflow
    }
}

/// A drawing surface for hodographs.
///
/// All coordinates are wind vectors. Implementors convert them to pixels however their plot is
/// scaled and centered.
pub trait HodographPainter {
    /// Stroke a straight line.
    fn draw_line(&mut self, from: WindUV<Knots>, to: WindUV<Knots>, style: &LineStyle);

    /// Stroke a circle. The radius is in pixels so markers keep their size when zoomed.
    fn draw_circle(&mut self, center: WindUV<Knots>, radius: f32, style: &LineStyle);

    /// Stroke an open polyline.
    ///
    /// The default draws each piece with `draw_line`; painters with native path support should
    /// override it to get proper joins.
    fn draw_path(&mut self, points: &[WindUV<Knots>], style: &LineStyle) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], style);
        }
    }
}

/// Draw segments one at a time, in order, each with its band's stroke.
pub fn draw_segments<P>(segments: &[Segment], style: &HodographStyle, painter: &mut P)
where
    P: HodographPainter + ?Sized,
{
    for seg in segments {
        painter.draw_line(
            seg.from.wind,
            seg.to.wind,
            &style.band_style(seg.color_class),
        );
    }
}

/// A run of connected segments that all belong to the same band.
#[derive(Debug, Clone)]
pub struct BandPath {
    /// The band of every segment in the path.
    pub color_class: ColorClass,
    /// Vertices of the path, from the bottom up.
    pub points: Vec<HodoPoint>,
}

impl BandPath {
    /// The wind vectors of the path's vertices.
    pub fn winds(&self) -> Vec<WindUV<Knots>> {
        self.points.iter().map(|pnt| pnt.wind).collect()
    }
}

/// Merge consecutive segments into polylines, one per run of the same band.
///
/// A new path is started whenever the band changes or the next segment does not start where the
/// previous one ended.
pub fn band_paths(segments: &[Segment]) -> Vec<BandPath> {
    let mut paths: Vec<BandPath> = vec![];

    for seg in segments {
        if let Some(path) = paths.last_mut() {
            let connected = path
                .points
                .last()
                .map_or(false, |last| *last == seg.from);

            if connected && path.color_class == seg.color_class {
                path.points.push(seg.to);
                continue;
            }
        }

        paths.push(BandPath {
            color_class: seg.color_class,
            points: vec![seg.from, seg.to],
        });
    }

    paths
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        hodograph::hodograph_segments,
        test_data::{sample, veering_profile},
    };
    use strum::IntoEnumIterator;

    #[derive(Default)]
    struct LineCounter {
        lines: Vec<LineStyle>,
    }

    impl HodographPainter for LineCounter {
        fn draw_line(&mut self, _: WindUV<Knots>, _: WindUV<Knots>, style: &LineStyle) {
            self.lines.push(*style);
        }

        fn draw_circle(&mut self, _: WindUV<Knots>, _: f32, _: &LineStyle) {}
    }

    #[test]
    fn test_default_style() {
        let style = HodographStyle::default();

        assert_eq!(style.band_style(ColorClass::Low).color, [255, 0, 0, 255]);
        assert_eq!(style.band_style(ColorClass::Trop).color, [0, 255, 255, 255]);
        for class in ColorClass::iter() {
            assert_eq!(style.band_style(class).width, 2.0);
        }
        assert_eq!(style.marker_radius(), 5.0);
    }

    #[test]
    fn test_draw_segments_uses_band_colors() {
        let segments = hodograph_segments(&[sample(2000.0, 0.0, 0.0), sample(4000.0, 10.0, 10.0)]);
        let style = HodographStyle::new().with_trace_width(3.0);

        let mut painter = LineCounter::default();
        draw_segments(&segments, &style, &mut painter);

        assert_eq!(
            painter.lines,
            vec![
                style.band_style(ColorClass::Low),
                style.band_style(ColorClass::Mid)
            ]
        );
        assert_eq!(painter.lines[0].width, 3.0);
    }

    #[test]
    fn test_band_paths() {
        let segments = hodograph_segments(&veering_profile());
        let paths = band_paths(&segments);

        assert_eq!(paths.len(), 4);
        for (path, class) in paths.iter().zip(ColorClass::iter()) {
            assert_eq!(path.color_class, class);
        }

        let vertices: usize = paths.iter().map(|p| p.points.len() - 1).sum();
        assert_eq!(vertices, segments.len());
    }

    #[test]
    fn test_band_paths_break_on_gaps() {
        let a = hodograph_segments(&[sample(0.0, 0.0, 0.0), sample(500.0, 1.0, 1.0)]);
        let b = hodograph_segments(&[sample(1000.0, 5.0, 5.0), sample(1500.0, 6.0, 6.0)]);
        let joined: Vec<Segment> = a.into_iter().chain(b).collect();

        assert_eq!(band_paths(&joined).len(), 2);
        assert!(band_paths(&[]).is_empty());
    }

    #[test]
    fn test_default_draw_path() {
        let mut painter = LineCounter::default();
        let winds = [
            WindUV { u: Knots(0.0), v: Knots(0.0) },
            WindUV { u: Knots(1.0), v: Knots(0.0) },
            WindUV { u: Knots(1.0), v: Knots(1.0) },
        ];

        painter.draw_path(&winds, &LineStyle::new([0, 0, 0, 255], 1.0));
        assert_eq!(painter.lines.len(), 2);

        painter.draw_path(&winds[..1], &LineStyle::new([0, 0, 0, 255], 1.0));
        assert_eq!(painter.lines.len(), 2);
    }
}
