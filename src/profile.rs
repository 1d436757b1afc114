//! Data types for the wind profile a hodograph is drawn from.

use crate::error::{HodographError, Result};
use itertools::izip;
use metfor::{Knots, Meters, WindSpdDir, WindUV};
use optional::Optioned;

/// One vertical level of a wind profile.
///
/// Either wind component may be missing. A sample with a missing component is left out of the
/// hodograph entirely, it is never patched from its neighbors.
#[derive(Clone, Copy, Debug)]
pub struct WindProfileSample {
    /// Height of the level.
    pub height: Meters,
    /// Zonal component of the wind.
    pub u: Optioned<Knots>,
    /// Meridional component of the wind.
    pub v: Optioned<Knots>,
}

impl WindProfileSample {
    /// Create a sample from possibly missing wind components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Knots, Meters};
    /// use optional::{none, some};
    /// use sounding_hodograph::WindProfileSample;
    ///
    /// let good = WindProfileSample::new(Meters(1000.0), some(Knots(10.0)), some(Knots(5.0)));
    /// assert!(!good.is_missing());
    ///
    /// let bad = WindProfileSample::new(Meters(1000.0), some(Knots(10.0)), none());
    /// assert!(bad.is_missing());
    /// ```
    #[inline]
    pub fn new(height: Meters, u: Optioned<Knots>, v: Optioned<Knots>) -> Self {
        WindProfileSample { height, u, v }
    }

    /// Create a sample from a wind that is known to be valid.
    #[inline]
    pub fn from_wind<W>(height: Meters, wind: W) -> Self
    where
        WindUV<Knots>: From<W>,
    {
        let WindUV { u, v } = WindUV::<Knots>::from(wind);
        WindProfileSample {
            height,
            u: Optioned::from(u),
            v: Optioned::from(v),
        }
    }

    /// True if either component of the wind is missing.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.u.is_none() || self.v.is_none()
    }

    /// The wind at this level, if both components are present.
    #[inline]
    pub fn wind(&self) -> Option<WindUV<Knots>> {
        match (self.u.into_option(), self.v.into_option()) {
            (Some(u), Some(v)) => Some(WindUV { u, v }),
            _ => None,
        }
    }
}

/// A valid point on the hodograph: a height and the full wind vector at that height.
#[derive(Clone, Copy, Debug)]
pub struct HodoPoint {
    /// Height of the point.
    pub height: Meters,
    /// Wind vector at the point.
    pub wind: WindUV<Knots>,
}

impl PartialEq for HodoPoint {
    #[inline]
    fn eq(&self, other: &HodoPoint) -> bool {
        self.height == other.height && self.wind.u == other.wind.u && self.wind.v == other.wind.v
    }
}

/// Remove samples with a missing wind component.
///
/// The surviving samples keep their original order and heights.
pub fn filter_missing(samples: &[WindProfileSample]) -> Vec<HodoPoint> {
    samples
        .iter()
        .filter_map(|sample| {
            sample.wind().map(|wind| HodoPoint {
                height: sample.height,
                wind,
            })
        })
        .collect()
}

/// Parallel profiles of height and wind.
///
/// This mirrors the way a sounding stores its upper air data: one vector per variable, all the
/// same length, with missing values marked in place. Use [`WindProfile::samples`] to turn it into
/// the per-level samples the hodograph is built from.
#[derive(Clone, Debug, Default)]
pub struct WindProfile {
    source: Option<String>,
    height: Vec<Optioned<Meters>>,
    u: Vec<Optioned<Knots>>,
    v: Vec<Optioned<Knots>>,
}

impl WindProfile {
    /// Create a new, empty profile. This is a proxy for default with a clearer name.
    #[inline]
    pub fn new() -> Self {
        WindProfile::default()
    }

    /// Add a source description to this profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_hodograph::WindProfile;
    ///
    /// let prof = WindProfile::new().with_source_description("KOUN 00Z".to_owned());
    /// assert_eq!(prof.source_description().unwrap(), "KOUN 00Z");
    ///
    /// let prof = prof.with_source_description(None);
    /// assert!(prof.source_description().is_none());
    /// ```
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve the source description for this profile.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Builder method for the height profile.
    #[inline]
    pub fn with_height_profile(self, height: Vec<Optioned<Meters>>) -> Self {
        Self { height, ..self }
    }

    /// Builder method for the wind profile given as speed and direction.
    ///
    /// The winds are stored as u-v components, a missing wind makes both components missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Knots, Meters, WindSpdDir};
    /// use optional::{none, some};
    /// use sounding_hodograph::WindProfile;
    ///
    /// let prof = WindProfile::new()
    ///     .with_height_profile(vec![some(Meters(0.0)), some(Meters(1000.0))])
    ///     .with_wind_profile(vec![
    ///         some(WindSpdDir { speed: Knots(10.0), direction: 180.0 }),
    ///         none(),
    ///     ]);
    ///
    /// let samples = prof.samples().unwrap();
    /// assert!(!samples[0].is_missing());
    /// assert!(samples[1].is_missing());
    /// ```
    pub fn with_wind_profile(self, wind: Vec<Optioned<WindSpdDir<Knots>>>) -> Self {
        let (u, v) = wind
            .into_iter()
            .map(|w| match w.into_option() {
                Some(w) => {
                    let WindUV { u, v } = WindUV::<Knots>::from(w);
                    (Optioned::from(u), Optioned::from(v))
                }
                None => (Optioned::default(), Optioned::default()),
            })
            .unzip();

        Self { u, v, ..self }
    }

    /// Builder method for the wind profile given as u-v components.
    #[inline]
    pub fn with_uv_profile(self, u: Vec<Optioned<Knots>>, v: Vec<Optioned<Knots>>) -> Self {
        Self { u, v, ..self }
    }

    /// Get the height profile.
    #[inline]
    pub fn height_profile(&self) -> &[Optioned<Meters>] {
        &self.height
    }

    /// Get the u component of the wind profile.
    #[inline]
    pub fn u_profile(&self) -> &[Optioned<Knots>] {
        &self.u
    }

    /// Get the v component of the wind profile.
    #[inline]
    pub fn v_profile(&self) -> &[Optioned<Knots>] {
        &self.v
    }

    /// Zip the parallel profiles into samples, one per level.
    ///
    /// Levels without a height are skipped, since they cannot be placed on the hodograph. Levels
    /// with a missing wind are kept and flagged as missing.
    pub fn samples(&self) -> Result<Vec<WindProfileSample>> {
        if self.height.is_empty() || self.u.is_empty() || self.v.is_empty() {
            return Err(HodographError::MissingProfile);
        }

        if self.height.len() != self.u.len() || self.height.len() != self.v.len() {
            return Err(HodographError::InvalidInput);
        }

        let samples = izip!(&self.height, &self.u, &self.v)
            .filter_map(|(h, u, v)| {
                h.into_option()
                    .map(|h| WindProfileSample::new(h, *u, *v))
            })
            .collect();

        Ok(samples)
    }
}
