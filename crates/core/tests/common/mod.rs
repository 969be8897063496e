//! Shared setup for integration tests

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use fireground_core::core_types::units::{Celsius, Degrees, Fraction, KilometersPerHour, Percent};
use fireground_core::WeatherSample;

/// Route `tracing` output through the test harness so `RUST_LOG=debug` shows it
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Local midnight at the given UTC offset in hours
pub fn local_midnight(offset_hours: i32, year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600)
        .unwrap()
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
}

/// Constant weather repeated for `hours` hours from midnight
pub fn steady_weather(
    temperature: f64,
    humidity: f64,
    wind_kmh: f64,
    cloud_cover: f64,
    hours: usize,
) -> Vec<WeatherSample> {
    WeatherSample::new(
        0,
        Celsius::new(temperature),
        Percent::new(humidity),
        KilometersPerHour::new(wind_kmh),
        Degrees::new(270.0),
        Fraction::new(cloud_cover),
    )
    .unwrap()
    .repeated(0, hours)
}
