//! Solar geometry for a time and place
//!
//! [`SolarGeometryCalculator`] runs the NREL Solar Position Algorithm for one
//! zoned timestamp and observer position and reports the sun's declination,
//! hour angle, altitude and azimuth together with the local sunrise, transit
//! and sunset times.
//!
//! The fuel conditioner only needs the sun's altitude and azimuth each hour.
//! It reads them through the [`SolarGeometrySource`] trait so callers can
//! substitute a precomputed table or the simplified model of Rothermel et al.
//! (1986).
//!
//! # Angle conventions
//! | Field | Range |
//! |-------|-------|
//! | `declination`, `topocentric_declination` | [-90, 90] |
//! | `right_ascension` | [0, 360) |
//! | `hour_angle` | [-180, 180), negative before local transit |
//! | `altitude` | [-90, 90], refraction corrected |
//! | `azimuth` | [0, 360), compass bearing clockwise from north |

mod simplified;
mod source;
mod spa;
mod spa_terms;

pub use simplified::SimplifiedGeometrySource;
pub use source::{HourlyGeometryTable, SolarGeometrySource, SpaGeometrySource, SunPosition};

use crate::core_types::geo::GeoPosition;
use crate::core_types::units::{Celsius, Degrees};
use crate::error::{ensure_finite, require_finite, FireBehaviorError, Result};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// Earliest year the periodic term tables cover
const MIN_YEAR: i32 = -2000;

/// Latest year the periodic term tables cover
const MAX_YEAR: i32 = 6000;

/// Atmospheric and time-scale settings for the solar position algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaOptions {
    /// Difference between terrestrial time and UT1 in seconds
    pub delta_t: f64,

    /// Annual mean local pressure in millibars
    pub pressure: f64,

    /// Annual mean local temperature
    pub temperature: Celsius,

    /// Atmospheric refraction at sunrise and sunset
    pub atmospheric_refraction: Degrees,
}

impl Default for SpaOptions {
    /// Standard atmosphere with ΔT for the 2020s
    fn default() -> Self {
        Self {
            delta_t: 69.0,
            pressure: 1013.25,
            temperature: Celsius::new(15.0),
            atmospheric_refraction: Degrees::new(0.5667),
        }
    }
}

impl SpaOptions {
    /// Check the options against the algorithm's documented input bounds.
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] for |ΔT| > 8000 s, pressure outside
    /// [0, 5000] mbar, temperature outside [-273, 6000] °C or |refraction| > 5°.
    pub fn validate(&self) -> Result<()> {
        if require_finite("delta t", self.delta_t)?.abs() > 8000.0 {
            return Err(FireBehaviorError::input(
                "delta t",
                format!("must be within ±8000 s, got {}", self.delta_t),
            ));
        }
        if !(0.0..=5000.0).contains(&require_finite("pressure", self.pressure)?) {
            return Err(FireBehaviorError::input(
                "pressure",
                format!("must be within [0, 5000] mbar, got {}", self.pressure),
            ));
        }
        if !(-273.0..=6000.0).contains(&require_finite("temperature", *self.temperature)?) {
            return Err(FireBehaviorError::input(
                "temperature",
                format!("must be within [-273, 6000] °C, got {}", *self.temperature),
            ));
        }
        if require_finite("atmospheric refraction", *self.atmospheric_refraction)?.abs() > 5.0 {
            return Err(FireBehaviorError::input(
                "atmospheric refraction",
                format!("must be within ±5°, got {}", *self.atmospheric_refraction),
            ));
        }
        Ok(())
    }
}

/// Position of the sun for one timestamp and observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarGeometry {
    /// Julian day (UT) of the timestamp
    pub julian_day: f64,

    /// Geocentric declination
    pub declination: Degrees,

    /// Geocentric right ascension
    pub right_ascension: Degrees,

    /// Declination corrected for the observer's parallax
    pub topocentric_declination: Degrees,

    /// Topocentric local hour angle
    pub hour_angle: Degrees,

    /// Elevation of the sun's center above the horizon
    pub altitude: Degrees,

    /// 90° minus altitude
    pub zenith: Degrees,

    /// Compass bearing of the sun
    pub azimuth: Degrees,

    /// Apparent minus mean solar time, in minutes
    pub equation_of_time: f64,

    /// Local clock hour of sunrise; `None` during polar day or night
    pub sunrise: Option<f64>,

    /// Local clock hour of solar transit
    pub transit: Option<f64>,

    /// Local clock hour of sunset
    pub sunset: Option<f64>,

    /// Local hour angle of the sun at sunrise
    pub sunrise_hour_angle: Option<Degrees>,

    /// Local hour angle of the sun at sunset
    pub sunset_hour_angle: Option<Degrees>,

    /// Altitude of the sun at transit
    pub transit_altitude: Option<Degrees>,
}

impl SolarGeometry {
    /// True when the sun's center is above the horizon
    pub fn is_daylight(&self) -> bool {
        *self.altitude > 0.0
    }

    /// Hours between sunrise and sunset, if the sun rises and sets
    pub fn day_length(&self) -> Option<f64> {
        match (self.sunrise, self.sunset) {
            (Some(rise), Some(set)) if set >= rise => Some(set - rise),
            (Some(rise), Some(set)) => Some(set + 24.0 - rise),
            _ => None,
        }
    }
}

/// Computes [`SolarGeometry`] with the NREL Solar Position Algorithm.
///
/// Stateless apart from its options; one calculator can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarGeometryCalculator {
    options: SpaOptions,
}

impl SolarGeometryCalculator {
    /// Create a calculator with validated options.
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] as for [`SpaOptions::validate`].
    pub fn new(options: SpaOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in effect
    pub fn options(&self) -> &SpaOptions {
        &self.options
    }

    /// Compute the sun's geometry at `timestamp` for an observer at `position`.
    ///
    /// The timestamp's UTC offset defines the local clock for sunrise, transit
    /// and sunset.
    ///
    /// # Errors
    /// - [`FireBehaviorError::Input`] if the position is out of range or the year
    ///   lies outside -2000..=6000
    /// - [`FireBehaviorError::Data`] if the algorithm produces a non-finite angle
    pub fn compute_geometry(
        &self,
        timestamp: DateTime<FixedOffset>,
        position: &GeoPosition,
    ) -> Result<SolarGeometry> {
        position.validate()?;
        let year = timestamp.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(FireBehaviorError::input(
                "timestamp",
                format!("year must be within {MIN_YEAR}..={MAX_YEAR}, got {year}"),
            ));
        }

        let input = spa::SpaInput {
            time: spa::CivilTime {
                year,
                month: timestamp.month(),
                day: timestamp.day(),
                hour: timestamp.hour(),
                minute: timestamp.minute(),
                second: f64::from(timestamp.second())
                    + f64::from(timestamp.nanosecond() % 1_000_000_000) * 1e-9,
                timezone: f64::from(timestamp.offset().local_minus_utc()) / 3600.0,
            },
            delta_t: self.options.delta_t,
            latitude: *position.latitude(),
            longitude: *position.longitude(),
            elevation: *position.elevation(),
            pressure: self.options.pressure,
            temperature: *self.options.temperature,
            atmospheric_refraction: *self.options.atmospheric_refraction,
        };
        let out = spa::calculate(&input);

        const STAGE: &str = "solar position";
        let rts = out.rise_transit_set;
        Ok(SolarGeometry {
            julian_day: out.julian_day,
            declination: Degrees::new(ensure_finite(STAGE, "declination", out.declination)?),
            right_ascension: Degrees::new(ensure_finite(
                STAGE,
                "right ascension",
                out.right_ascension,
            )?),
            topocentric_declination: Degrees::new(ensure_finite(
                STAGE,
                "topocentric declination",
                out.topocentric_declination,
            )?),
            hour_angle: Degrees::new(ensure_finite(STAGE, "hour angle", out.hour_angle)?)
                .normalized_signed(),
            altitude: Degrees::new(ensure_finite(STAGE, "altitude", out.elevation)?),
            zenith: Degrees::new(ensure_finite(STAGE, "zenith", out.zenith)?),
            azimuth: Degrees::new(ensure_finite(STAGE, "azimuth", out.azimuth)?).normalized(),
            equation_of_time: ensure_finite(STAGE, "equation of time", out.equation_of_time)?,
            sunrise: rts.map(|r| r.sunrise),
            transit: rts.map(|r| r.transit),
            sunset: rts.map(|r| r.sunset),
            sunrise_hour_angle: rts.map(|r| Degrees::new(r.sunrise_hour_angle)),
            sunset_hour_angle: rts.map(|r| Degrees::new(r.sunset_hour_angle)),
            transit_altitude: rts.map(|r| Degrees::new(r.transit_altitude)),
        })
    }
}
