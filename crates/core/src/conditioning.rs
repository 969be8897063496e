//! Diurnal Fuel Conditioning
//!
//! Carries fine dead fuel moisture forward hour by hour under solar heating
//! and weather. Each hour:
//!
//! 1. The 20-ft open wind is reduced to the top of the fuel bed
//! 2. The sun position comes from a [`SolarGeometrySource`]
//! 3. Optical air mass and atmospheric attenuation give the beam irradiance
//! 4. The beam is projected onto the sloped, aspected ground
//! 5. Absorbed radiation against wind cooling gives the fuel temperature
//! 6. The warmer fuel-level air gives a lower near-fuel humidity
//! 7. The 1-hour moisture moves toward its equilibrium value
//!
//! The only state carried between hours is the moisture, threaded through a
//! fold, so a run is a pure function of its inputs.
//!
//! # Scientific References
//! - Rothermel, R.C., Wilson, R.A., Morris, G.A., Sackett, S.S. (1986). "Modeling
//!   moisture content of fine dead wildland fuels: input to the BEHAVE fire prediction
//!   system." USDA Forest Service Research Paper INT-359
//! - Van Wagner, C.E. (1977). "A method of computing fine fuel moisture content
//!   throughout the diurnal cycle." Canadian Forestry Service Information Report PS-X-69

use crate::core_types::fuel::FuelMoistureState;
use crate::core_types::geo::TerrainDescriptor;
use crate::core_types::units::{Celsius, Degrees, Fahrenheit, Meters, Percent, WattsPerSquareMeter};
use crate::core_types::weather::WeatherSample;
use crate::error::{ensure_finite, require_finite, FireBehaviorError, Result};
use crate::physics::fuel_moisture::hourly_fine_fuel_moisture;
use crate::physics::fuel_temperature::{
    attenuated_irradiance, fuel_temperature, irradiance_on_slope, optical_air_mass,
    relative_humidity_near_fuel, wind_at_fuel_level,
};
use crate::solar::{SolarGeometrySource, SunPosition};
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Tunables for a conditioning run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditioningConfig {
    /// Atmospheric transparency p, the fraction of the beam passing one air mass
    pub transparency: f64,
}

impl Default for ConditioningConfig {
    fn default() -> Self {
        Self { transparency: 0.7 }
    }
}

impl ConditioningConfig {
    /// # Errors
    /// [`FireBehaviorError::Input`] unless transparency lies in (0, 1].
    pub fn validate(&self) -> Result<()> {
        let p = require_finite("transparency", self.transparency)?;
        if p <= 0.0 || p > 1.0 {
            return Err(FireBehaviorError::input(
                "transparency",
                format!("must be within (0, 1], got {p}"),
            ));
        }
        Ok(())
    }
}

/// Fuel state at the end of one conditioned hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelCondition {
    pub timestamp: DateTime<FixedOffset>,
    pub air_temperature: Celsius,
    /// Fuel surface temperature after solar heating
    pub fuel_temperature: Celsius,
    pub relative_humidity_near_fuel: Percent,
    /// Irradiance reaching the fuel surface
    pub irradiance: WattsPerSquareMeter,
    /// Moisture with the 1-hour class updated; other classes carried through
    pub moisture: FuelMoistureState,
    /// Compass bearing of the sun
    pub solar_azimuth: Degrees,
    pub solar_altitude: Degrees,
}

/// One independent conditioning run, for [`DiurnalFuelConditioner::condition_many`]
#[derive(Clone, Copy)]
pub struct ConditioningRequest<'a> {
    pub initial: FuelMoistureState,
    pub weather: &'a [WeatherSample],
    pub solar: &'a dyn SolarGeometrySource,
    pub terrain: TerrainDescriptor,
    /// Vegetation (fuel bed) height
    pub fuel_bed_height: Meters,
    /// Local time of the first conditioned hour
    pub start: DateTime<FixedOffset>,
    pub hour_count: usize,
}

/// Hour-by-hour fuel conditioner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiurnalFuelConditioner {
    config: ConditioningConfig,
}

impl DiurnalFuelConditioner {
    /// # Errors
    /// [`FireBehaviorError::Input`] for an invalid configuration.
    pub fn new(config: ConditioningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConditioningConfig {
        &self.config
    }

    /// Condition the fuel for `hour_count` consecutive hours from `start`.
    ///
    /// `weather[i]` must be tagged with the hour of day of `start + i` hours;
    /// the clock wraps from 23 to 0. Samples beyond `hour_count` are ignored.
    ///
    /// # Errors
    /// - [`FireBehaviorError::Input`] when there are fewer samples than hours,
    ///   a sample's hour tag is out of sequence, or an input is invalid
    /// - [`FireBehaviorError::Data`] when a stage produces NaN or infinity
    /// - Whatever `solar` reports for a timestamp
    pub fn condition_fuel(
        &self,
        initial: FuelMoistureState,
        weather: &[WeatherSample],
        solar: &dyn SolarGeometrySource,
        terrain: &TerrainDescriptor,
        fuel_bed_height: Meters,
        start: DateTime<FixedOffset>,
        hour_count: usize,
    ) -> Result<Vec<FuelCondition>> {
        self.config.validate()?;
        initial.validate()?;
        terrain.validate()?;
        if require_finite("fuel bed height", *fuel_bed_height)? < 0.0 {
            return Err(FireBehaviorError::input(
                "fuel bed height",
                format!("must be non-negative, got {}", *fuel_bed_height),
            ));
        }
        if weather.len() < hour_count {
            return Err(FireBehaviorError::input(
                "weather series",
                format!("{} samples cannot cover {hour_count} hours", weather.len()),
            ));
        }
        if *fuel_bed_height == 0.0 {
            warn!("Fuel bed height is zero; fuel-level wind uses the minimum vegetation height");
        }

        let start_hour = start.hour() as usize;
        debug!(
            "Conditioning {} hours from {} (hour {}), slope={:.3} rad, aspect={:.3} rad",
            hour_count,
            start,
            start_hour,
            *terrain.slope(),
            *terrain.aspect()
        );

        let vegetation_height_ft = *fuel_bed_height.to_feet();
        let (_, conditions) = weather[..hour_count].iter().enumerate().try_fold(
            (initial, Vec::with_capacity(hour_count)),
            |(moisture, mut conditions), (i, sample)| -> Result<_> {
                let expected = (start_hour + i) % 24;
                if usize::from(sample.hour) != expected {
                    return Err(FireBehaviorError::input(
                        "weather series",
                        format!(
                            "sample {i} is tagged hour {} but hour {expected} was expected",
                            sample.hour
                        ),
                    ));
                }
                sample.validate()?;

                let timestamp = start + Duration::hours(i as i64);
                let sun = solar.sun_position(timestamp)?;
                let condition = self.condition_hour(
                    moisture,
                    sample,
                    sun,
                    terrain,
                    vegetation_height_ft,
                    timestamp,
                )?;
                trace!(
                    "{}: T_f={:.1}°C, H_f={:.1}%, I={:.0} W/m², m1={:.2}%",
                    timestamp.format("%Y-%m-%d %H:%M"),
                    *condition.fuel_temperature,
                    *condition.relative_humidity_near_fuel,
                    *condition.irradiance,
                    *condition.moisture.dead_1h().to_percent()
                );
                conditions.push(condition);
                Ok((condition.moisture, conditions))
            },
        )?;
        Ok(conditions)
    }

    /// Run independent conditioning requests in parallel.
    ///
    /// Each run is sequential; results are returned in request order.
    ///
    /// # Errors
    /// The first failing request's error, as for [`Self::condition_fuel`].
    pub fn condition_many(
        &self,
        requests: &[ConditioningRequest<'_>],
    ) -> Result<Vec<Vec<FuelCondition>>> {
        requests
            .par_iter()
            .map(|r| {
                self.condition_fuel(
                    r.initial,
                    r.weather,
                    r.solar,
                    &r.terrain,
                    r.fuel_bed_height,
                    r.start,
                    r.hour_count,
                )
            })
            .collect()
    }

    /// One step of the recurrence: heat the fuel and advance its moisture
    fn condition_hour(
        &self,
        previous: FuelMoistureState,
        sample: &WeatherSample,
        sun: SunPosition,
        terrain: &TerrainDescriptor,
        vegetation_height_ft: f64,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<FuelCondition> {
        let open_wind_mph = sample.wind_speed.miles_per_hour();
        let fuel_level_wind = ensure_finite(
            "wind reduction",
            "fuel-level wind",
            wind_at_fuel_level(open_wind_mph, vegetation_height_ft),
        )?;

        let altitude = *sun.altitude.to_radians();
        let air_mass = ensure_finite(
            "optical air mass",
            "air mass",
            optical_air_mass(altitude, *terrain.elevation().to_feet()),
        )?;
        let beam = ensure_finite(
            "atmospheric attenuation",
            "beam irradiance",
            attenuated_irradiance(air_mass, *sample.cloud_cover, self.config.transparency),
        )?;
        let irradiance = ensure_finite(
            "slope projection",
            "irradiance",
            irradiance_on_slope(
                *terrain.slope(),
                *terrain.aspect(),
                altitude,
                *sun.azimuth.to_radians(),
                beam,
            ),
        )?;

        let air_f = *sample.air_temperature.to_fahrenheit();
        let fuel_f = ensure_finite(
            "fuel heating",
            "fuel temperature",
            fuel_temperature(irradiance, air_f, fuel_level_wind),
        )?;
        let humidity = ensure_finite(
            "near-fuel humidity",
            "relative humidity",
            relative_humidity_near_fuel(*sample.relative_humidity, fuel_f, air_f),
        )?
        .clamp(0.0, 100.0);

        let fuel_c = Fahrenheit::new(fuel_f).to_celsius();
        let dead_1h = ensure_finite(
            "fine fuel moisture",
            "1-hour moisture",
            hourly_fine_fuel_moisture(
                *previous.dead_1h().to_percent(),
                humidity,
                *fuel_c,
                *sample.wind_speed,
            ),
        )?;

        Ok(FuelCondition {
            timestamp,
            air_temperature: sample.air_temperature,
            fuel_temperature: fuel_c,
            relative_humidity_near_fuel: Percent::new(humidity),
            irradiance: WattsPerSquareMeter::from_cal_per_cm2_minute(irradiance),
            moisture: previous.with_dead_1h(Percent::new(dead_1h.max(0.0)).to_fraction()),
            solar_azimuth: sun.azimuth,
            solar_altitude: sun.altitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Fraction, KilometersPerHour, Radians};
    use crate::physics::fuel_moisture::drying_equilibrium;
    use crate::solar::HourlyGeometryTable;
    use chrono::TimeZone;
    use std::f64::consts::PI;

    fn start(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(-7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 7, 15, hour, 0, 0)
            .unwrap()
    }

    fn sample(hour: u8, wind: f64, cloud: f64) -> WeatherSample {
        WeatherSample::new(
            hour,
            Celsius::new(30.0),
            Percent::new(20.0),
            KilometersPerHour::new(wind),
            Degrees::new(270.0),
            Fraction::new(cloud),
        )
        .unwrap()
    }

    fn fixed_sun(altitude: f64, azimuth: f64) -> HourlyGeometryTable {
        let sun = SunPosition::new(Degrees::new(altitude), Degrees::new(azimuth)).unwrap();
        HourlyGeometryTable::constant(sun)
    }

    fn night() -> HourlyGeometryTable {
        fixed_sun(-20.0, 0.0)
    }

    fn overhead() -> HourlyGeometryTable {
        fixed_sun(60.0, 180.0)
    }

    #[test]
    fn test_config_validation() {
        assert!(ConditioningConfig::default().validate().is_ok());
        assert!(DiurnalFuelConditioner::new(ConditioningConfig { transparency: 0.0 }).is_err());
        assert!(DiurnalFuelConditioner::new(ConditioningConfig { transparency: 1.2 }).is_err());
        assert!(DiurnalFuelConditioner::new(ConditioningConfig { transparency: 1.0 }).is_ok());
    }

    #[test]
    fn test_night_has_no_solar_heating() {
        let conditioner = DiurnalFuelConditioner::default();
        let weather = sample(22, 5.0, 0.0).repeated(22, 4);
        let out = conditioner
            .condition_fuel(
                FuelMoistureState::moderate(),
                &weather,
                &night(),
                &TerrainDescriptor::flat(Meters::new(500.0)),
                Meters::new(0.3),
                start(22),
                4,
            )
            .unwrap();
        assert_eq!(out.len(), 4);
        for c in &out {
            assert_eq!(*c.irradiance, 0.0);
            assert!((*c.fuel_temperature - 30.0).abs() < 1e-9);
            assert!((*c.relative_humidity_near_fuel - 20.0).abs() < 1e-9);
        }
        // Clock wraps past midnight
        assert_eq!(out[2].timestamp.hour(), 0);
    }

    #[test]
    fn test_sunlight_heats_and_dries_air_at_fuel() {
        let conditioner = DiurnalFuelConditioner::default();
        let weather = [sample(12, 0.0, 0.0)];
        let out = conditioner
            .condition_fuel(
                FuelMoistureState::moderate(),
                &weather,
                &overhead(),
                &TerrainDescriptor::flat(Meters::new(0.0)),
                Meters::new(0.3),
                start(12),
                1,
            )
            .unwrap();
        let c = out[0];
        assert!(*c.irradiance > 500.0, "irradiance {}", c.irradiance);
        assert!(*c.fuel_temperature > 30.0);
        assert!(*c.relative_humidity_near_fuel < 20.0);
        assert!((*c.solar_azimuth - 180.0).abs() < 1e-9);

        // Overcast sky removes the heating
        let cloudy = conditioner
            .condition_fuel(
                FuelMoistureState::moderate(),
                &[sample(12, 0.0, 1.0)],
                &overhead(),
                &TerrainDescriptor::flat(Meters::new(0.0)),
                Meters::new(0.3),
                start(12),
                1,
            )
            .unwrap();
        assert_eq!(*cloudy[0].irradiance, 0.0);
    }

    #[test]
    fn test_only_dead_1h_changes() {
        let initial = FuelMoistureState::moderate();
        let (slope, aspect) = (Radians::new(0.3), Radians::new(PI));
        let south_facing = TerrainDescriptor::new(slope, aspect, Meters::new(800.0)).unwrap();
        let out = DiurnalFuelConditioner::default()
            .condition_fuel(
                initial,
                &sample(9, 10.0, 0.2).repeated(9, 6),
                &overhead(),
                &south_facing,
                Meters::new(0.5),
                start(9),
                6,
            )
            .unwrap();
        let last = out[5].moisture;
        assert!(last.dead_1h() < initial.dead_1h());
        assert_eq!(last.dead_10h(), initial.dead_10h());
        assert_eq!(last.dead_100h(), initial.dead_100h());
        assert_eq!(last.live_herb(), initial.live_herb());
        assert_eq!(last.live_woody(), initial.live_woody());
    }

    #[test]
    fn test_zero_wind_converges_without_oscillation() {
        let weather = sample(0, 0.0, 0.0).repeated(0, 96);
        let out = DiurnalFuelConditioner::default()
            .condition_fuel(
                FuelMoistureState::cool_and_wet(),
                &weather,
                &night(),
                &TerrainDescriptor::flat(Meters::new(0.0)),
                Meters::new(0.3),
                start(0),
                96,
            )
            .unwrap();
        let target = drying_equilibrium(20.0, 30.0);
        let gaps: Vec<f64> = out
            .iter()
            .map(|c| *c.moisture.dead_1h().to_percent() - target)
            .collect();
        for pair in gaps.windows(2) {
            assert!(pair[1] >= 0.0 && pair[1] <= pair[0], "gaps {:?}", pair);
        }
        assert!(gaps[95] < gaps[0] * 0.1);
    }

    #[test]
    fn test_series_errors() {
        let conditioner = DiurnalFuelConditioner::default();
        let flat = TerrainDescriptor::flat(Meters::new(0.0));
        let run = |weather: &[WeatherSample], height: f64, hours: usize| {
            conditioner.condition_fuel(
                FuelMoistureState::moderate(),
                weather,
                &night(),
                &flat,
                Meters::new(height),
                start(10),
                hours,
            )
        };

        let short = sample(10, 5.0, 0.0).repeated(10, 3);
        let err = run(&short, 0.3, 4).unwrap_err();
        assert!(matches!(
            err,
            FireBehaviorError::Input {
                field: "weather series",
                ..
            }
        ));

        let misaligned = sample(11, 5.0, 0.0).repeated(11, 4);
        let err = run(&misaligned, 0.3, 4).unwrap_err();
        assert!(matches!(err, FireBehaviorError::Input { .. }));

        assert!(run(&[], 0.3, 0).unwrap().is_empty());
        assert!(run(&short, -1.0, 1).is_err());
    }

    #[test]
    fn test_condition_many_matches_sequential_runs() {
        let conditioner = DiurnalFuelConditioner::default();
        let weather = sample(6, 8.0, 0.1).repeated(6, 12);
        let sun = overhead();
        let dark = night();
        let requests: Vec<ConditioningRequest<'_>> = [&sun as &dyn SolarGeometrySource, &dark]
            .into_iter()
            .map(|solar| ConditioningRequest {
                initial: FuelMoistureState::moderate(),
                weather: &weather,
                solar,
                terrain: TerrainDescriptor::flat(Meters::new(100.0)),
                fuel_bed_height: Meters::new(0.3),
                start: start(6),
                hour_count: 12,
            })
            .collect();
        let batch = conditioner.condition_many(&requests).unwrap();
        assert_eq!(batch.len(), 2);
        for (request, result) in requests.iter().zip(&batch) {
            let single = conditioner
                .condition_fuel(
                    request.initial,
                    request.weather,
                    request.solar,
                    &request.terrain,
                    request.fuel_bed_height,
                    request.start,
                    request.hour_count,
                )
                .unwrap();
            assert_eq!(&single, result);
        }
        // Sunlit fuel ends drier
        assert!(batch[0][11].moisture.dead_1h() < batch[1][11].moisture.dead_1h());
    }
}
