//! Physics relations behind fuel conditioning and surface fire behavior

pub(crate) mod fuel_bed;
pub(crate) mod fuel_moisture;
pub(crate) mod fuel_temperature;
pub(crate) mod rothermel;

// ============================================================================
// PUBLIC RE-EXPORTS FOR VALIDATION TESTING
// ============================================================================
// Integration tests check these relations against published values, so
// they are reachable from outside the crate without widening the modules.

/// Public re-exports of validation test functions from fuel_moisture module
pub mod fuel_moisture_validation {
    pub use super::fuel_moisture::{
        daily_fine_fuel_moisture, drying_equilibrium, hourly_fine_fuel_moisture,
        wetting_equilibrium,
    };
}

/// Public re-exports of validation test functions from fuel_temperature module
pub mod fuel_temperature_validation {
    pub use super::fuel_temperature::{
        attenuated_irradiance, fuel_temperature, irradiance_on_slope, optical_air_mass,
        relative_humidity_near_fuel, wind_at_fuel_level,
    };
}

/// Public re-exports of validation test functions from rothermel module
pub mod rothermel_validation {
    pub use super::rothermel::{
        eccentricity, flame_length, midflame_wind_adjustment_factor, moisture_damping,
        residence_time, slope_coefficient, wind_coefficient,
    };
}
