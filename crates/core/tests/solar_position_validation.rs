//! Solar position validation against published reference values
//!
//! Checks the full solar position algorithm against the worked example of
//! Reda & Andreas, and checks the geometric behavior the fuel conditioner
//! relies on: symmetric days at the equinox, smooth tracks across midnight,
//! and polar day/night without rise or set times.
//!
//! # References
//! - Reda, I., Andreas, A. (2004). "Solar position algorithm for solar radiation
//!   applications." Solar Energy, 76(5), 577-589. NREL/TP-560-34302, Table A5.1
//! - Rothermel, R.C., Wilson, R.A., Morris, G.A., Sackett, S.S. (1986).
//!   "Modeling moisture content of fine dead wildland fuels." INT-359
//!
//! Run tests with: `cargo test --test solar_position_validation`

mod common;

use approx::assert_abs_diff_eq;
use chrono::{Duration, FixedOffset, TimeZone};
use fireground_core::core_types::units::{Celsius, Degrees, Meters};
use fireground_core::{
    FireBehaviorError, GeoPosition, HourlyGeometryTable, SimplifiedGeometrySource,
    SolarGeometryCalculator, SolarGeometrySource, SpaGeometrySource, SpaOptions,
};

fn golden_calculator() -> SolarGeometryCalculator {
    SolarGeometryCalculator::new(SpaOptions {
        delta_t: 67.0,
        pressure: 820.0,
        temperature: Celsius::new(11.0),
        ..SpaOptions::default()
    })
    .unwrap()
}

fn site(latitude: f64, longitude: f64, elevation: f64) -> GeoPosition {
    let (lat, lon) = (Degrees::new(latitude), Degrees::new(longitude));
    GeoPosition::new(lat, lon, Meters::new(elevation)).unwrap()
}

fn golden_site() -> GeoPosition {
    site(39.742476, -105.1786, 1830.14)
}

/// The published worked example: Golden, Colorado, 17 October 2003 12:30:30 MST
#[test]
fn test_nrel_worked_example() {
    let time = FixedOffset::west_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
        .unwrap();
    let site = golden_site();
    let g = golden_calculator().compute_geometry(time, &site).unwrap();

    assert_abs_diff_eq!(g.julian_day, 2452930.312847, epsilon = 1e-6);
    assert_abs_diff_eq!(*g.zenith, 50.11162, epsilon = 0.01);
    assert_abs_diff_eq!(*g.azimuth, 194.34024, epsilon = 0.01);
    assert_abs_diff_eq!(*g.declination, -9.31434, epsilon = 0.01);
    assert_abs_diff_eq!(*g.right_ascension, 202.22741, epsilon = 0.01);
    assert_abs_diff_eq!(g.equation_of_time, 14.641503, epsilon = 0.01);
    assert_abs_diff_eq!(g.sunrise.unwrap(), 6.212067, epsilon = 0.01);
    assert_abs_diff_eq!(g.transit.unwrap(), 11.768045, epsilon = 0.01);
    assert_abs_diff_eq!(g.sunset.unwrap(), 17.338667, epsilon = 0.01);
}

/// Altitude is always the complement of zenith and azimuth stays on the compass
#[test]
fn test_angle_ranges_over_a_day() {
    let calculator = golden_calculator();
    let site = golden_site();
    let start = common::local_midnight(-7, 2003, 10, 17);

    for hour in 0..24 {
        let g = calculator
            .compute_geometry(start + Duration::hours(hour), &site)
            .unwrap();
        assert_abs_diff_eq!(*g.altitude + *g.zenith, 90.0, epsilon = 1e-9);
        assert!(
            (0.0..360.0).contains(&*g.azimuth),
            "hour {hour}: azimuth {} off the compass",
            g.azimuth
        );
        assert!(
            (-180.0..=180.0).contains(&*g.hour_angle),
            "hour {hour}: hour angle {}",
            g.hour_angle
        );
        assert_eq!(
            g.is_daylight(),
            *g.altitude > 0.0,
            "hour {hour}: daylight flag disagrees with altitude"
        );
    }
}

/// At the equator on the March equinox the day is 12 h, centered on transit
#[test]
fn test_equinox_day_is_symmetric() {
    let calculator = SolarGeometryCalculator::default();
    let equator = site(0.0, 0.0, 0.0);
    let noon = common::local_midnight(0, 2024, 3, 20) + Duration::hours(12);
    let g = calculator.compute_geometry(noon, &equator).unwrap();

    let (rise, transit, set) = (g.sunrise.unwrap(), g.transit.unwrap(), g.sunset.unwrap());
    assert_abs_diff_eq!(transit - rise, set - transit, epsilon = 0.1);
    assert_abs_diff_eq!(g.day_length().unwrap(), 12.0, epsilon = 0.2);
    // Near overhead at transit
    assert!(
        *g.transit_altitude.unwrap() > 89.0,
        "transit altitude {}",
        g.transit_altitude.unwrap()
    );
}

/// Hour-by-hour geometry over two days has no jumps at midnight
#[test]
fn test_continuity_over_48_hours() {
    let calculator = SolarGeometryCalculator::default();
    let canberra = site(-35.28, 149.13, 580.0);
    let start = common::local_midnight(11, 2025, 1, 14);

    let track: Vec<_> = (0..=48)
        .map(|h| start + Duration::hours(h))
        .map(|t| calculator.compute_geometry(t, &canberra).unwrap())
        .collect();

    for pair in track.windows(2) {
        let step = (*pair[1].altitude - *pair[0].altitude).abs();
        // The sun moves at most 15 degrees of arc per hour
        assert!(step <= 15.5, "altitude stepped {step} degrees in one hour");
        assert!((*pair[1].declination - *pair[0].declination).abs() < 0.05);
    }
    // Same clock hour on consecutive days
    for h in 0..24 {
        assert_abs_diff_eq!(*track[h].altitude, *track[h + 24].altitude, epsilon = 1.0);
    }
}

/// Inside the polar circle the sun may neither rise nor set
#[test]
fn test_polar_day_and_night() {
    let calculator = SolarGeometryCalculator::default();
    let svalbard = site(78.2, 15.6, 0.0);

    let winter_noon = common::local_midnight(1, 2024, 12, 21) + Duration::hours(12);
    let winter = calculator.compute_geometry(winter_noon, &svalbard).unwrap();
    assert!(!winter.is_daylight());
    assert!(winter.sunrise.is_none() && winter.transit.is_none() && winter.sunset.is_none());
    assert!(winter.day_length().is_none());

    let summer = calculator
        .compute_geometry(common::local_midnight(1, 2024, 6, 21), &svalbard)
        .unwrap();
    // Midnight sun
    assert!(
        summer.is_daylight(),
        "altitude {} at midnight",
        summer.altitude
    );
    assert!(summer.sunrise.is_none() && summer.sunset.is_none());
}

/// Invalid positions and years are rejected before any computation
#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        GeoPosition::new(Degrees::new(0.0), Degrees::new(181.0), Meters::ZERO),
        Err(FireBehaviorError::Input { .. })
    ));
    let far_future = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(7000, 1, 1, 0, 0, 0)
        .unwrap();
    let result = SolarGeometryCalculator::default().compute_geometry(far_future, &golden_site());
    assert!(matches!(
        result,
        Err(FireBehaviorError::Input {
            field: "timestamp",
            ..
        })
    ));
}

/// The simplified model tracks the full algorithm to within a few degrees
#[test]
fn test_simplified_source_tracks_spa() {
    let sydney = site(-33.87, 151.21, 0.0);
    let spa = SpaGeometrySource::new(SolarGeometryCalculator::default(), sydney);
    let simple = SimplifiedGeometrySource::new(Degrees::new(-33.87)).unwrap();
    // Sydney keeps solar noon close to 12:00 standard time in autumn
    let start = common::local_midnight(10, 2024, 4, 10);

    for hour in 8..=16 {
        let t = start + Duration::hours(hour);
        let a = spa.sun_position(t).unwrap();
        let b = simple.sun_position(t).unwrap();
        assert!(
            (*a.altitude - *b.altitude).abs() < 5.0,
            "hour {hour}: altitude {} vs {}",
            a.altitude,
            b.altitude
        );
        // Southern hemisphere: the midday sun is to the north
        if hour == 12 {
            assert!(
                *b.azimuth < 90.0 || *b.azimuth > 270.0,
                "azimuth {}",
                b.azimuth
            );
        }
    }
}

/// A sampled day answers lookups in the same order as the live source
#[test]
fn test_hourly_table_matches_source() {
    let site = golden_site();
    let source = SpaGeometrySource::new(golden_calculator(), site);
    let day = common::local_midnight(-7, 2003, 10, 17);
    let table = HourlyGeometryTable::sample(&source, day).unwrap();

    for hour in [0_usize, 6, 12, 18, 23] {
        let t = day + Duration::hours(hour as i64);
        let direct = source.sun_position(t).unwrap();
        assert_eq!(table.at_hour(hour), Some(&direct), "hour {hour}");
    }
    assert!(table.at_hour(24).is_none());
}
