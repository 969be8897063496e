//! Core types and utilities

pub mod fuel;
pub mod geo;
pub mod units;
pub mod weather;

pub use fuel::{FuelModelParameters, FuelMoistureState, StandardFuelModel};
pub use geo::{GeoPosition, TerrainDescriptor};
pub use units::*;
pub use weather::{DiurnalCurve, DiurnalWeather, WeatherSample};
