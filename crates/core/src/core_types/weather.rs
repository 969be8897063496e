//! Hourly weather samples and a diurnal weather generator
//!
//! The generator shapes air temperature and relative humidity through the day
//! from four anchor values (sunrise, noon, 14:00, sunset): a cosine rise in
//! the morning, a linear segment over the early afternoon, a cosine decline to
//! sunset and a sine transition through the night. Wind and cloud cover are
//! step functions keyed by hour.
//!
//! # References
//! - Beck, J.A., Trevitt, A.C.F. (1989). "Forecasting diurnal variations in
//!   meteorological parameters for predicting fire behaviour."
//!   Canadian Journal of Forest Research, 19(6), 791-797.

use crate::core_types::units::{Celsius, Degrees, Fraction, KilometersPerHour, Percent};
use crate::error::{require_finite, FireBehaviorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weather observed or forecast for one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Hour of day (0-23) this sample applies to
    pub hour: u8,
    pub air_temperature: Celsius,
    pub relative_humidity: Percent,
    /// Open wind speed at 20 ft (6.1 m) above the vegetation
    pub wind_speed: KilometersPerHour,
    /// Compass direction the wind blows from
    pub wind_direction: Degrees,
    pub cloud_cover: Fraction,
}

impl WeatherSample {
    /// Create a validated sample.
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] for an hour outside 0..24, humidity outside
    /// [0, 100] %, negative wind, cloud cover outside [0, 1], or non-finite values.
    pub fn new(
        hour: u8,
        air_temperature: Celsius,
        relative_humidity: Percent,
        wind_speed: KilometersPerHour,
        wind_direction: Degrees,
        cloud_cover: Fraction,
    ) -> Result<Self> {
        let sample = WeatherSample {
            hour,
            air_temperature,
            relative_humidity,
            wind_speed,
            wind_direction: wind_direction.normalized(),
            cloud_cover,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Re-check the invariants of a sample that may have been built field by field
    ///
    /// # Errors
    /// As for [`WeatherSample::new`].
    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(FireBehaviorError::input(
                "hour",
                format!("must be within 0..=23, got {}", self.hour),
            ));
        }
        let t = require_finite("air temperature", *self.air_temperature)?;
        if t < *Celsius::ABSOLUTE_ZERO {
            return Err(FireBehaviorError::input(
                "air temperature",
                format!("below absolute zero: {t}"),
            ));
        }
        let rh = require_finite("relative humidity", *self.relative_humidity)?;
        if !(0.0..=100.0).contains(&rh) {
            return Err(FireBehaviorError::input(
                "relative humidity",
                format!("must be within [0, 100] %, got {rh}"),
            ));
        }
        if require_finite("wind speed", *self.wind_speed)? < 0.0 {
            return Err(FireBehaviorError::input(
                "wind speed",
                format!("must be non-negative, got {}", *self.wind_speed),
            ));
        }
        require_finite("wind direction", *self.wind_direction)?;
        let cc = require_finite("cloud cover", *self.cloud_cover)?;
        if !(0.0..=1.0).contains(&cc) {
            return Err(FireBehaviorError::input(
                "cloud cover",
                format!("must be within [0, 1], got {cc}"),
            ));
        }
        Ok(())
    }

    /// Repeat this sample for `hour_count` consecutive hours starting at `start_hour`
    pub fn repeated(&self, start_hour: u8, hour_count: usize) -> Vec<WeatherSample> {
        (0..hour_count)
            .map(|i| WeatherSample {
                hour: ((usize::from(start_hour) + i) % 24) as u8,
                ..*self
            })
            .collect()
    }
}

/// Values of a weather element at the four anchor times of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiurnalCurve {
    pub at_sunrise: f64,
    pub at_noon: f64,
    pub at_1400: f64,
    pub at_sunset: f64,
}

impl DiurnalCurve {
    /// Interpolated value at local hour `t` given local sunrise and sunset hours
    ///
    /// Requires sunrise < 12 and sunset > 14; callers check this.
    pub fn value_at(&self, t: f64, sunrise: f64, sunset: f64) -> f64 {
        if t < sunrise || t > sunset {
            // Night runs from sunset through midnight to the next sunrise
            let t_night = if t < sunset { t + 24.0 } else { t };
            let span = sunrise + 24.0 - sunset;
            let x = 90.0 * (t_night - sunset) / span;
            self.at_sunset + (self.at_sunrise - self.at_sunset) * x.to_radians().sin()
        } else if t < 12.0 {
            let x = 90.0 * (t - sunrise) / (12.0 - sunrise);
            self.at_noon + (self.at_sunrise - self.at_noon) * x.to_radians().cos()
        } else if t > 14.0 {
            let x = 90.0 * (t - 14.0) / (sunset - 14.0);
            self.at_1400 + (self.at_1400 - self.at_sunset) * (x.to_radians().cos() - 1.0)
        } else {
            self.at_noon + (self.at_1400 - self.at_noon) * (t - 12.0) / 2.0
        }
    }
}

/// Diurnal weather pattern that expands into hourly [`WeatherSample`]s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiurnalWeather {
    /// Air temperature anchors in °C
    pub air_temperature: DiurnalCurve,
    /// Relative humidity anchors in %
    pub relative_humidity: DiurnalCurve,
    /// Wind speed (km/h) in effect from the keyed hour onward
    pub wind_speed: BTreeMap<u8, f64>,
    /// Wind direction (degrees) in effect from the keyed hour onward
    pub wind_direction: BTreeMap<u8, f64>,
    /// Cloud cover (fraction) in effect from the keyed hour onward
    pub cloud_cover: BTreeMap<u8, f64>,
}

/// Step-function lookup: the latest entry at or before `hour`, else zero
fn step_value(schedule: &BTreeMap<u8, f64>, hour: u8) -> f64 {
    schedule
        .range(..=hour)
        .next_back()
        .map_or(0.0, |(_, v)| *v)
}

impl DiurnalWeather {
    /// Hourly samples for `hour_count` hours starting at `start_hour`
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] if sunrise/sunset do not bracket the
    /// 12:00-14:00 anchors, or if an interpolated sample is out of range.
    pub fn hourly_series(
        &self,
        start_hour: u8,
        hour_count: usize,
        sunrise_hour: f64,
        sunset_hour: f64,
    ) -> Result<Vec<WeatherSample>> {
        if !sunrise_hour.is_finite()
            || !sunset_hour.is_finite()
            || sunrise_hour >= 12.0
            || sunset_hour <= 14.0
        {
            return Err(FireBehaviorError::input(
                "sunrise/sunset",
                format!(
                    "need sunrise before 12:00 and sunset after 14:00, got {:.2}/{:.2}",
                    sunrise_hour, sunset_hour
                ),
            ));
        }
        (0..hour_count)
            .map(|i| {
                let hour = ((usize::from(start_hour) + i) % 24) as u8;
                let t = f64::from(hour);
                let rh = self
                    .relative_humidity
                    .value_at(t, sunrise_hour, sunset_hour)
                    .clamp(0.0, 100.0);
                WeatherSample::new(
                    hour,
                    Celsius::new(self.air_temperature.value_at(t, sunrise_hour, sunset_hour)),
                    Percent::new(rh),
                    KilometersPerHour::new(step_value(&self.wind_speed, hour)),
                    Degrees::new(step_value(&self.wind_direction, hour)),
                    Fraction::new(step_value(&self.cloud_cover, hour)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherSample {
        WeatherSample::new(
            14,
            Celsius::new(30.0),
            Percent::new(20.0),
            KilometersPerHour::new(15.0),
            Degrees::new(-45.0),
            Fraction::new(0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_sample_validation() {
        assert!((*sample().wind_direction - 315.0).abs() < 1e-9);
        let bad_rh = WeatherSample {
            relative_humidity: Percent::new(120.0),
            ..sample()
        };
        assert!(bad_rh.validate().is_err());
        let bad_cloud = WeatherSample {
            cloud_cover: Fraction::new(1.5),
            ..sample()
        };
        assert!(bad_cloud.validate().is_err());
        let bad_hour = WeatherSample {
            hour: 24,
            ..sample()
        };
        assert!(bad_hour.validate().is_err());
        let bad_wind = WeatherSample {
            wind_speed: KilometersPerHour::new(-1.0),
            ..sample()
        };
        assert!(bad_wind.validate().is_err());
    }

    #[test]
    fn test_repeated_wraps_clock() {
        let series = sample().repeated(22, 4);
        let hours: Vec<u8> = series.iter().map(|s| s.hour).collect();
        assert_eq!(hours, vec![22, 23, 0, 1]);
    }

    #[test]
    fn test_diurnal_curve_hits_anchors() {
        let curve = DiurnalCurve {
            at_sunrise: 10.0,
            at_noon: 25.0,
            at_1400: 28.0,
            at_sunset: 20.0,
        };
        let (sr, ss) = (6.0, 18.0);
        assert!((curve.value_at(6.0, sr, ss) - 10.0).abs() < 1e-9);
        assert!((curve.value_at(12.0, sr, ss) - 25.0).abs() < 1e-9);
        assert!((curve.value_at(13.0, sr, ss) - 26.5).abs() < 1e-9);
        assert!((curve.value_at(14.0, sr, ss) - 28.0).abs() < 1e-9);
        assert!((curve.value_at(18.0, sr, ss) - 20.0).abs() < 1e-9);
        // Night values stay between the sunset and sunrise anchors
        for t in [19.0, 23.0, 0.0, 3.0, 5.5] {
            let v = curve.value_at(t, sr, ss);
            assert!((10.0..=20.0).contains(&v), "night value {} at {}", v, t);
        }
    }

    #[test]
    fn test_hourly_series_uses_step_schedules() {
        let weather = DiurnalWeather {
            air_temperature: DiurnalCurve {
                at_sunrise: 12.0,
                at_noon: 26.0,
                at_1400: 29.0,
                at_sunset: 22.0,
            },
            relative_humidity: DiurnalCurve {
                at_sunrise: 70.0,
                at_noon: 25.0,
                at_1400: 18.0,
                at_sunset: 35.0,
            },
            wind_speed: BTreeMap::from([(0, 5.0), (10, 20.0), (20, 8.0)]),
            wind_direction: BTreeMap::from([(0, 270.0)]),
            cloud_cover: BTreeMap::new(),
        };
        let series = weather.hourly_series(8, 24, 6.2, 18.4).unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series[0].hour, 8);
        assert_eq!(*series[0].wind_speed, 5.0);
        assert_eq!(*series[2].wind_speed, 20.0); // 10:00
        assert_eq!(*series[12].wind_speed, 8.0); // 20:00
        assert_eq!(*series[16].wind_speed, 5.0); // 00:00
        assert_eq!(*series[5].cloud_cover, 0.0);

        assert!(weather.hourly_series(0, 24, 13.0, 18.0).is_err());
    }
}
