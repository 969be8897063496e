//! Fireground Core Library
//!
//! Fuel conditioning and surface fire behavior for a point in the landscape.
//! Three calculations are chained bottom-up:
//!
//! - **Solar geometry**: sun position, sunrise, transit and sunset for a time
//!   and place (NREL Solar Position Algorithm)
//! - **Diurnal fuel conditioning**: hour-by-hour fuel temperature, near-fuel
//!   humidity and fine dead fuel moisture under sun and weather
//! - **Surface fire behavior**: Rothermel rate of spread, direction, fireline
//!   intensity and flame length from a fuel model, its moisture, wind and slope
//!
//! All calculations are pure: the library holds no state between calls and
//! independent requests may run on any thread.
//!
//! ## Example
//! ```
//! use fireground_core::{catalog, FuelMoistureState, SurfaceFireBehaviorModel};
//! use fireground_core::core_types::units::{Degrees, KilometersPerHour, Radians};
//!
//! let short_grass = catalog::get(1).expect("standard model 1");
//! let behavior = SurfaceFireBehaviorModel::default()
//!     .compute_behavior(
//!         short_grass,
//!         &FuelMoistureState::hot_and_dry(),
//!         KilometersPerHour::new(10.0),
//!         Degrees::new(270.0),
//!         Radians::new(0.0),
//!         Radians::new(0.0),
//!     )
//!     .expect("burnable fuel");
//! assert!(*behavior.max_spread.rate_of_spread > 40.0);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Calculations
pub mod behavior;
pub mod catalog;
pub mod conditioning;
pub mod physics;
pub mod solar;

// Re-export core types
pub use core_types::{
    DiurnalCurve, DiurnalWeather, FuelModelParameters, FuelMoistureState, GeoPosition,
    StandardFuelModel, TerrainDescriptor, WeatherSample,
};
pub use error::{FireBehaviorError, Result};

// Re-export calculation types
pub use behavior::{FireBehaviorResult, SpreadResult, SurfaceFireBehaviorModel, SurfaceFireConfig};
pub use conditioning::{
    ConditioningConfig, ConditioningRequest, DiurnalFuelConditioner, FuelCondition,
};
pub use solar::{
    HourlyGeometryTable, SimplifiedGeometrySource, SolarGeometry, SolarGeometryCalculator,
    SolarGeometrySource, SpaGeometrySource, SpaOptions, SunPosition,
};
