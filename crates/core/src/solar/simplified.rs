//! Simplified sun model of Rothermel et al. (1986)
//!
//! Declination comes from the day of year alone and the hour angle from the
//! local clock, treating 12:00 as solar noon. Accuracy is a degree or two,
//! which is adequate for fuel heating and much cheaper than the full series.
//!
//! # References
//! - Rothermel, R.C., Wilson, R.A., Morris, G.A., Sackett, S.S. (1986).
//!   "Modeling moisture content of fine dead wildland fuels: input to the
//!   BEHAVE fire prediction system." USDA Forest Service Research Paper
//!   INT-359, pp. 10-11, 48.

use super::source::{SolarGeometrySource, SunPosition};
use crate::core_types::units::Degrees;
use crate::error::{ensure_finite, require_finite, FireBehaviorError, Result};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Sun position from latitude, day of year and clock time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedGeometrySource {
    latitude: Degrees,
}

impl SimplifiedGeometrySource {
    /// # Errors
    /// [`FireBehaviorError::Input`] when latitude is outside [-90, 90].
    pub fn new(latitude: Degrees) -> Result<Self> {
        if !(-90.0..=90.0).contains(&require_finite("latitude", *latitude)?) {
            return Err(FireBehaviorError::input(
                "latitude",
                format!("must be within [-90, 90], got {}", *latitude),
            ));
        }
        Ok(Self { latitude })
    }

    /// Solar declination for a day of year (1-366)
    ///
    /// `δ = 23.5° sin(0.9863° (284 + N))`
    pub fn declination(day_of_year: u32) -> Degrees {
        Degrees::new(23.5 * (0.9863 * (284.0 + f64::from(day_of_year))).to_radians().sin())
    }

    /// Hour angle measured from 06:00 local time (0 at 06:00, π/2 at noon), radians
    pub fn hour_angle_from_six(clock_hours: f64) -> f64 {
        let t = if clock_hours >= 6.0 {
            clock_hours
        } else {
            clock_hours + 24.0
        };
        (15.0 * (t - 6.0)).to_radians()
    }

    /// Local clock hour of sunrise for a day of year, `None` during polar day or night
    ///
    /// Sunset follows as `24 - sunrise`.
    pub fn sunrise_hour(&self, day_of_year: u32) -> Option<f64> {
        let phi = self.latitude.to_radians();
        let delta = Self::declination(day_of_year).to_radians();
        // Hour angle from 06:00 at which sin A = 0
        let sin_h = -(phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
        if !sin_h.is_finite() || sin_h.abs() > 1.0 {
            return None;
        }
        Some(sin_h.asin().to_degrees() / 15.0 + 6.0)
    }

    /// Altitude and azimuth for an hour angle from 06:00, radians
    ///
    /// The azimuth is measured from east toward the equator-side sky: clockwise
    /// in the northern hemisphere, counterclockwise in the southern.
    fn altitude_azimuth(&self, h: f64, delta: f64) -> (f64, f64) {
        let phi = self.latitude.to_radians();
        let sin_a = h.sin() * delta.cos() * phi.cos() + delta.sin() * phi.sin();
        let a = sin_a.clamp(-1.0, 1.0).asin();

        let cos_a = a.cos();
        if cos_a < 1e-9 {
            // Sun at the zenith or nadir; azimuth is undefined, face the equator
            return (a, PI / 2.0);
        }
        let mut tan_z = (h.sin() * delta.cos() * phi.sin() - delta.sin() * phi.cos())
            / (h.cos() * delta.cos());
        let cos_z = (h.cos() * delta.cos() / cos_a).clamp(-1.0, 1.0);

        // Noon altitude is positive in both hemispheres, so flip tan to match cos
        if *self.latitude < 0.0 {
            tan_z = -tan_z;
        }
        let z = if tan_z >= 0.0 && cos_z >= 0.0 {
            tan_z.atan()
        } else if tan_z < 0.0 && cos_z < 0.0 {
            cos_z.acos()
        } else if tan_z >= 0.0 {
            tan_z.atan() + PI
        } else {
            TAU - cos_z.acos()
        };
        (a, z)
    }
}

impl SolarGeometrySource for SimplifiedGeometrySource {
    fn sun_position(&self, timestamp: DateTime<FixedOffset>) -> Result<SunPosition> {
        let clock = f64::from(timestamp.hour()) + f64::from(timestamp.minute()) / 60.0;
        let delta = Self::declination(timestamp.ordinal()).to_radians();
        let (a, z) = self.altitude_azimuth(Self::hour_angle_from_six(clock), *delta);

        let z = ensure_finite("simplified sun", "azimuth", z)?.to_degrees();
        let compass = if *self.latitude < 0.0 {
            Degrees::new(90.0 - z)
        } else {
            Degrees::new(90.0 + z)
        };
        Ok(SunPosition {
            altitude: Degrees::new(ensure_finite("simplified sun", "altitude", a)?.to_degrees()),
            azimuth: compass.normalized(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 21, hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_declination_extremes() {
        // Summer solstice near +23.5°, winter near -23.5°
        assert!((*SimplifiedGeometrySource::declination(172) - 23.5).abs() < 0.01);
        assert!((*SimplifiedGeometrySource::declination(355) + 23.5).abs() < 0.01);
        assert!(SimplifiedGeometrySource::declination(81).abs() < 0.5);
    }

    #[test]
    fn test_northern_noon_sun_is_south() {
        let source = SimplifiedGeometrySource::new(Degrees::new(40.0)).unwrap();
        let noon = source.sun_position(at(12)).unwrap();
        assert!(
            (*noon.azimuth - 180.0).abs() < 1.0,
            "azimuth {}",
            noon.azimuth
        );
        // 90 - 40 + 23.5
        assert!(
            (*noon.altitude - 73.5).abs() < 0.1,
            "altitude {}",
            noon.altitude
        );

        let morning = source.sun_position(at(9)).unwrap();
        let evening = source.sun_position(at(15)).unwrap();
        assert!(*morning.azimuth > 90.0 && *morning.azimuth < 180.0);
        assert!(*evening.azimuth > 180.0 && *evening.azimuth < 270.0);
        assert!((*morning.altitude - *evening.altitude).abs() < 1e-9);

        assert!(*source.sun_position(at(0)).unwrap().altitude < 0.0);
    }

    #[test]
    fn test_southern_noon_sun_is_north() {
        let source = SimplifiedGeometrySource::new(Degrees::new(-35.0)).unwrap();
        let noon = source.sun_position(at(12)).unwrap();
        let bearing = noon.azimuth.normalized_signed();
        assert!(bearing.abs() < 1.0, "azimuth {}", noon.azimuth);
        let morning = source.sun_position(at(9)).unwrap();
        let evening = source.sun_position(at(15)).unwrap();
        assert!(*morning.azimuth < 90.0);
        assert!(*evening.azimuth > 270.0);
    }

    #[test]
    fn test_sunrise_hour() {
        let source = SimplifiedGeometrySource::new(Degrees::new(40.0)).unwrap();
        let rise = source.sunrise_hour(172).unwrap();
        // About 04:30 solar time at the June solstice
        assert!((rise - 4.5).abs() < 0.2, "sunrise {}", rise);
        let equinox = source.sunrise_hour(81).unwrap();
        assert!((equinox - 6.0).abs() < 0.1);

        let arctic = SimplifiedGeometrySource::new(Degrees::new(80.0)).unwrap();
        assert!(arctic.sunrise_hour(172).is_none());
        assert!(SimplifiedGeometrySource::new(Degrees::new(-91.0)).is_err());
    }
}
