//! Scenario files for the `run` command
//!
//! A scenario is a TOML document describing one site, one fuel model and a
//! diurnal weather pattern. See `scenarios/canberra_summer.toml`.

use chrono::{DateTime, Duration, FixedOffset};
use fireground_core::core_types::units::{Degrees, Meters};
use fireground_core::{
    catalog, ConditioningConfig, DiurnalCurve, DiurnalWeather, FuelModelParameters,
    FuelMoistureState, GeoPosition, SolarGeometryCalculator, SpaOptions, TerrainDescriptor,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;

/// Built-in scenario used when no file is given
pub const DEFAULT_SCENARIO: &str = include_str!("../scenarios/canberra_summer.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Local time of the first hour
    pub start: DateTime<FixedOffset>,
    pub hours: usize,
    /// Catalog code (`GR4`) or numeric ID
    pub fuel_model: String,
    /// Vegetation height in meters
    pub fuel_bed_height: f64,
    pub site: Site,
    pub terrain: Terrain,
    pub initial_moisture: InitialMoisture,
    #[serde(default)]
    pub conditioning: ConditioningConfig,
    #[serde(default)]
    pub solar: SpaOptions,
    pub weather: WeatherPattern,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Terrain {
    pub slope_percent: f64,
    /// Compass direction the slope faces
    pub aspect: f64,
}

/// Moisture of each class in percent
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InitialMoisture {
    pub dead_1h: f64,
    pub dead_10h: f64,
    pub dead_100h: f64,
    pub live_herb: f64,
    pub live_woody: f64,
}

/// Anchor curves plus `[hour, value]` step schedules
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPattern {
    pub air_temperature: DiurnalCurve,
    pub relative_humidity: DiurnalCurve,
    pub wind_speed: Vec<(u8, f64)>,
    pub wind_direction: Vec<(u8, f64)>,
    #[serde(default)]
    pub cloud_cover: Vec<(u8, f64)>,
}

impl From<&WeatherPattern> for DiurnalWeather {
    fn from(p: &WeatherPattern) -> Self {
        let steps = |s: &[(u8, f64)]| s.iter().copied().collect::<BTreeMap<_, _>>();
        DiurnalWeather {
            air_temperature: p.air_temperature,
            relative_humidity: p.relative_humidity,
            wind_speed: steps(&p.wind_speed),
            wind_direction: steps(&p.wind_direction),
            cloud_cover: steps(&p.cloud_cover),
        }
    }
}

impl Scenario {
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let content = match path {
            Some(p) => std::fs::read_to_string(p)?,
            None => DEFAULT_SCENARIO.to_string(),
        };
        Ok(toml::from_str(&content)?)
    }

    pub fn position(&self) -> Result<GeoPosition, Box<dyn Error>> {
        Ok(GeoPosition::new(
            Degrees::new(self.site.latitude),
            Degrees::new(self.site.longitude),
            Meters::new(self.site.elevation),
        )?)
    }

    pub fn terrain(&self) -> Result<TerrainDescriptor, Box<dyn Error>> {
        Ok(TerrainDescriptor::from_percent_slope(
            self.terrain.slope_percent,
            Degrees::new(self.terrain.aspect),
            Meters::new(self.site.elevation),
        )?)
    }

    pub fn initial_moisture(&self) -> Result<FuelMoistureState, Box<dyn Error>> {
        let m = self.initial_moisture;
        Ok(FuelMoistureState::from_percent(
            m.dead_1h,
            m.dead_10h,
            m.dead_100h,
            m.live_herb,
            m.live_woody,
        )?)
    }

    pub fn fuel(&self) -> Result<&'static FuelModelParameters, Box<dyn Error>> {
        lookup_fuel(&self.fuel_model)
    }

    /// Sunrise and sunset (local hours) on the first day, for the weather curves
    pub fn sun_times(
        &self,
        calculator: &SolarGeometryCalculator,
    ) -> Result<(f64, f64), Box<dyn Error>> {
        let noon = self.start + Duration::hours(12);
        let g = calculator.compute_geometry(noon, &self.position()?)?;
        match (g.sunrise, g.sunset) {
            (Some(rise), Some(set)) => Ok((rise, set)),
            _ => Err("the sun does not rise and set at this site and date".into()),
        }
    }
}

/// Fuel model by catalog code or numeric ID
pub fn lookup_fuel(key: &str) -> Result<&'static FuelModelParameters, Box<dyn Error>> {
    key.parse::<u32>()
        .ok()
        .and_then(catalog::get)
        .or_else(|| catalog::by_code(key))
        .ok_or_else(|| format!("unknown fuel model '{key}'").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_parses() {
        let scenario = Scenario::load(None).unwrap();
        assert_eq!(scenario.hours, 48);
        assert_eq!(scenario.fuel().unwrap().code, "GR4");
        assert!(scenario.terrain().is_ok());

        let weather = DiurnalWeather::from(&scenario.weather);
        assert_eq!(weather.wind_speed.get(&10), Some(&25.0));
    }

    #[test]
    fn test_lookup_fuel() {
        assert_eq!(lookup_fuel("1").unwrap().code, "FM1");
        assert_eq!(lookup_fuel("tu5").unwrap().model_id, 165);
        assert!(lookup_fuel("XX9").is_err());
    }
}
