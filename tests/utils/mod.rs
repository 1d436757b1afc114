#![allow(dead_code)]

use metfor::{Knots, Meters, WindSpdDir, WindUV};
use optional::Optioned;
use sounding_hodograph::{HodographPainter, LineStyle, WindProfile};
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

/// Load a profile from a csv file of height (m), wind speed (kt) and wind direction (deg).
///
/// Blank values are missing.
pub fn load_test_file(fname: &str) -> WindProfile {
    let mut location = PathBuf::new();
    location.push("test_data");
    location.push(fname);

    let mut f = File::open(&location).expect(&format!("Error opening file: {:?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:?}", location));

    let mut height: Vec<Optioned<Meters>> = vec![];
    let mut wind: Vec<Optioned<WindSpdDir<Knots>>> = vec![];

    for line in contents.lines() {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 3 {
            continue;
        }

        let wspd = f64::from_str(tokens[1].trim()).ok();
        let wdir = f64::from_str(tokens[2].trim()).ok();
        let wind_val: Option<WindSpdDir<Knots>> = wspd.and_then(|wspd| {
            wdir.map(|wdir| WindSpdDir {
                speed: Knots(wspd),
                direction: wdir,
            })
        });

        height.push(f64::from_str(tokens[0].trim()).ok().map(Meters).into());
        wind.push(wind_val.into());
    }

    WindProfile::new()
        .with_source_description(fname.to_owned())
        .with_height_profile(height)
        .with_wind_profile(wind)
}

pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    f64::abs(tgt - guess) <= tol
}

/// Something drawn by a painter.
#[derive(Debug, Clone, Copy)]
pub enum Stroke {
    Line {
        from: WindUV<Knots>,
        to: WindUV<Knots>,
        style: LineStyle,
    },
    Circle {
        center: WindUV<Knots>,
        radius: f32,
        style: LineStyle,
    },
}

/// A painter that remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub strokes: Vec<Stroke>,
}

impl RecordingPainter {
    pub fn lines(&self) -> impl Iterator<Item = (WindUV<Knots>, WindUV<Knots>, LineStyle)> + '_ {
        self.strokes.iter().filter_map(|stroke| match *stroke {
            Stroke::Line { from, to, style } => Some((from, to, style)),
            Stroke::Circle { .. } => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (WindUV<Knots>, f32, LineStyle)> + '_ {
        self.strokes.iter().filter_map(|stroke| match *stroke {
            Stroke::Circle {
                center,
                radius,
                style,
            } => Some((center, radius, style)),
            Stroke::Line { .. } => None,
        })
    }
}

impl HodographPainter for RecordingPainter {
    fn draw_line(&mut self, from: WindUV<Knots>, to: WindUV<Knots>, style: &LineStyle) {
        self.strokes.push(Stroke::Line {
            from,
            to,
            style: *style,
        });
    }

    fn draw_circle(&mut self, center: WindUV<Knots>, radius: f32, style: &LineStyle) {
        self.strokes.push(Stroke::Circle {
            center,
            radius,
            style: *style,
        });
    }
}
