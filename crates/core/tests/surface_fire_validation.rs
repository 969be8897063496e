//! Surface fire behavior validation
//!
//! Checks the Rothermel model against hand-worked values for standard fuel
//! model 1, then sweeps the whole catalog for the properties every burnable
//! model must share: no spread at or above the moisture of extinction, the
//! no-wind reference equal to the head fire in calm flat conditions, and a
//! fire ellipse that is widest behind the head. The last test runs the full
//! chain from sun position to flame length.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread
//!   in wildland fuels." USDA Forest Service Research Paper INT-115
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30
//! - Anderson, H.E. (1982). "Aids to determining fuel models for estimating
//!   fire behavior." USDA Forest Service General Technical Report INT-122
//! - Scott, J.H., Burgan, R.E. (2005). "Standard fire behavior fuel models."
//!   USDA Forest Service General Technical Report RMRS-GTR-153
//!
//! Run tests with: `cargo test --test surface_fire_validation`

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::Duration;
use fireground_core::core_types::units::{Degrees, KilometersPerHour, Meters, Radians};
use fireground_core::{
    catalog, DiurnalCurve, DiurnalFuelConditioner, DiurnalWeather, FireBehaviorError,
    FuelMoistureState, GeoPosition, SolarGeometryCalculator, SpaGeometrySource,
    SurfaceFireBehaviorModel, SurfaceFireConfig, TerrainDescriptor,
};
use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_4;

fn flat() -> (Radians, Radians) {
    (Radians::new(0.0), Radians::new(0.0))
}

/// Short grass at 6 % dead moisture in a 10 km/h westerly
///
/// Expected values are fuel model 1 (Anderson 1982, INT-122) run through the
/// Rothermel (1972) equations as restated step by step in Andrews, P.L. (2018),
/// "The Rothermel surface fire spread model and associated developments",
/// USDA Forest Service RMRS-GTR-371: 159.4 ft/min (48.58 m/min) at the head
/// and 4.60 ft/min with neither wind nor slope.
#[test]
fn test_short_grass_reference() {
    let fm1 = catalog::get(1).unwrap();
    let (slope, aspect) = flat();
    let result = SurfaceFireBehaviorModel::default()
        .compute_behavior(
            fm1,
            &FuelMoistureState::hot_and_dry(),
            KilometersPerHour::new(10.0),
            Degrees::new(270.0),
            slope,
            aspect,
        )
        .unwrap();

    let head = result.max_spread;
    assert_relative_eq!(*head.rate_of_spread, 48.6, max_relative = 0.10);
    assert_abs_diff_eq!(*head.direction, 90.0, epsilon = 1e-6);
    assert_relative_eq!(*head.flame_length, 1.708, max_relative = 0.05);
    assert_relative_eq!(*head.fireline_intensity, 832.7, max_relative = 0.05);
    assert!(!result.wind_limit_reached);

    // 4.60 ft/min without wind or slope
    let calm = *result.no_wind_no_slope.rate_of_spread;
    assert_relative_eq!(calm, 1.4035, max_relative = 0.02);
    assert_eq!(result.no_wind_no_slope.eccentricity, 0.0);
}

/// Every burnable model is extinguished when dead fuel is wetter than its extinction moisture
#[test]
fn test_catalog_extinction() {
    let soaked = FuelMoistureState::from_percent(70.0, 70.0, 70.0, 300.0, 300.0).unwrap();
    let model = SurfaceFireBehaviorModel::default();
    let mut burnable = 0;

    for id in catalog::ids() {
        let fuel = catalog::get(id).unwrap();
        if !fuel.is_burnable() {
            continue;
        }
        burnable += 1;
        let result = model
            .compute_behavior(
                fuel,
                &soaked,
                KilometersPerHour::new(30.0),
                Degrees::new(0.0),
                Radians::new(0.3),
                Radians::new(0.0),
            )
            .unwrap();
        for spread in [result.max_spread, result.no_wind_no_slope] {
            assert!(
                spread.is_extinguished(),
                "{}: spread {}",
                fuel.code,
                spread.rate_of_spread
            );
            assert_eq!(*spread.flame_length, 0.0, "{}", fuel.code);
            assert_eq!(*spread.fireline_intensity, 0.0, "{}", fuel.code);
            assert_eq!(*spread.reaction_intensity, 0.0, "{}", fuel.code);
        }
    }
    assert_eq!(burnable, 53);
}

/// Calm air on flat ground: the head fire is the no-wind reference
#[test]
fn test_catalog_calm_flat_matches_reference() {
    let model = SurfaceFireBehaviorModel::default();
    let (slope, aspect) = flat();

    for id in catalog::ids() {
        let fuel = catalog::get(id).unwrap();
        if !fuel.is_burnable() {
            continue;
        }
        let result = model
            .compute_behavior(
                fuel,
                &FuelMoistureState::hot_and_dry(),
                KilometersPerHour::new(0.0),
                Degrees::new(0.0),
                slope,
                aspect,
            )
            .unwrap();
        let (head, reference) = (result.max_spread, result.no_wind_no_slope);
        assert!(
            *head.rate_of_spread > 0.0,
            "{} does not burn when hot and dry",
            fuel.code
        );
        assert_relative_eq!(
            *head.rate_of_spread,
            *reference.rate_of_spread,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            *head.fireline_intensity,
            *reference.fireline_intensity,
            max_relative = 1e-12
        );
        assert_eq!(head.eccentricity, 0.0, "{}", fuel.code);
    }
}

/// Wind and slope both speed the fire; more of either spreads it faster
#[test]
fn test_wind_and_slope_monotone() {
    let fuel = catalog::by_code("TL3").unwrap();
    let model = SurfaceFireBehaviorModel::default();
    let rate = |wind: f64, slope: f64| {
        *model
            .compute_behavior(
                fuel,
                &FuelMoistureState::moderate(),
                KilometersPerHour::new(wind),
                Degrees::new(0.0),
                Radians::new(slope),
                Radians::new(0.0),
            )
            .unwrap()
            .max_spread
            .rate_of_spread
    };
    assert!(rate(5.0, 0.0) > rate(0.0, 0.0));
    assert!(rate(10.0, 0.0) > rate(5.0, 0.0));
    assert!(rate(0.0, 0.2) > rate(0.0, 0.0));
    assert!(rate(0.0, FRAC_PI_4) > rate(0.0, 0.2));
    // The slope faces north, so a northerly blows upslope
    assert!(rate(10.0, 0.2) > rate(10.0, 0.0));
}

/// The ellipse is fastest at the head, slowest at the back
#[test]
fn test_fire_ellipse() {
    let fuel = catalog::by_code("SH5").unwrap();
    let result = SurfaceFireBehaviorModel::default()
        .compute_behavior(
            fuel,
            &FuelMoistureState::hot_and_dry(),
            KilometersPerHour::new(15.0),
            Degrees::new(315.0),
            Radians::new(0.0),
            Radians::new(0.0),
        )
        .unwrap();
    let head = result.max_spread;
    assert!(head.eccentricity > 0.0 && head.eccentricity < 1.0);
    assert!(*head.backing_spread() < *head.flanking_spread());
    assert!(*head.flanking_spread() < *head.rate_of_spread);
    assert!(head.length_to_width() > 1.0);
    let ahead = head.spread_at(Degrees::new(0.0));
    assert_abs_diff_eq!(*ahead, *head.rate_of_spread, epsilon = 1e-9);
    // Head runs to the south-east, away from a north-westerly
    assert_abs_diff_eq!(*head.direction, 135.0, epsilon = 1e-6);
}

/// Turning the wind limit off never slows a fire
#[test]
fn test_wind_limit_switch() {
    let fuel = catalog::get(1).unwrap();
    let run = |apply_wind_limit| {
        SurfaceFireBehaviorModel::new(SurfaceFireConfig { apply_wind_limit })
            .compute_behavior(
                fuel,
                &FuelMoistureState::hot_and_dry(),
                KilometersPerHour::new(80.0),
                Degrees::new(0.0),
                Radians::new(0.0),
                Radians::new(0.0),
            )
            .unwrap()
    };
    let (limited, unlimited) = (run(true), run(false));
    assert!(limited.wind_limit_reached);
    assert!(!unlimited.wind_limit_reached);
    assert!(*unlimited.max_spread.rate_of_spread > *limited.max_spread.rate_of_spread);
}

/// Non-burnable models and bad inputs are reported, not computed
#[test]
fn test_rejected_inputs() {
    let model = SurfaceFireBehaviorModel::default();
    let moisture = FuelMoistureState::moderate();
    let run = |fuel, wind: f64, slope: f64| {
        let (aspect, from_north) = (Radians::new(0.0), Degrees::new(0.0));
        let (wind, slope) = (KilometersPerHour::new(wind), Radians::new(slope));
        model.compute_behavior(fuel, &moisture, wind, from_north, slope, aspect)
    };

    let water = catalog::by_code("NB8").unwrap();
    assert!(matches!(
        run(water, 5.0, 0.0),
        Err(FireBehaviorError::Model { model_id: 98, .. })
    ));

    let fm1 = catalog::get(1).unwrap();
    assert!(matches!(run(fm1, -1.0, 0.0), Err(FireBehaviorError::Input { .. })));
    assert!(matches!(
        run(fm1, 5.0, 2.0),
        Err(FireBehaviorError::Input { field: "slope", .. })
    ));
}

/// Sun, weather and fuel chained: the afternoon fire outruns the pre-dawn one
#[test]
fn test_conditioned_day_drives_fire_behavior() {
    let calculator = SolarGeometryCalculator::default();
    let (lat, lon) = (Degrees::new(-37.5), Degrees::new(145.0));
    let site = GeoPosition::new(lat, lon, Meters::new(300.0)).unwrap();
    let start = common::local_midnight(11, 2025, 2, 1);
    let noon = calculator
        .compute_geometry(start + Duration::hours(12), &site)
        .unwrap();

    let pattern = DiurnalWeather {
        air_temperature: DiurnalCurve {
            at_sunrise: 16.0,
            at_noon: 35.0,
            at_1400: 39.0,
            at_sunset: 30.0,
        },
        relative_humidity: DiurnalCurve {
            at_sunrise: 60.0,
            at_noon: 15.0,
            at_1400: 9.0,
            at_sunset: 20.0,
        },
        wind_speed: BTreeMap::from([(0, 10.0), (10, 35.0), (19, 15.0)]),
        wind_direction: BTreeMap::from([(0, 330.0)]),
        cloud_cover: BTreeMap::new(),
    };
    let weather = pattern
        .hourly_series(0, 24, noon.sunrise.unwrap(), noon.sunset.unwrap())
        .unwrap();
    let terrain =
        TerrainDescriptor::from_percent_slope(20.0, Degrees::new(0.0), Meters::new(300.0)).unwrap();
    let conditions = DiurnalFuelConditioner::default()
        .condition_fuel(
            FuelMoistureState::moderate(),
            &weather,
            &SpaGeometrySource::new(calculator, site),
            &terrain,
            Meters::new(0.3),
            start,
            24,
        )
        .unwrap();

    let fuel = catalog::by_code("GR4").unwrap();
    let model = SurfaceFireBehaviorModel::default();
    let behavior: Vec<_> = conditions
        .iter()
        .zip(&weather)
        .map(|(condition, sample)| {
            model
                .compute_behavior_for_condition(fuel, condition, sample, &terrain)
                .unwrap()
        })
        .collect();

    let pre_dawn = *behavior[5].max_spread.rate_of_spread;
    let afternoon = *behavior[15].max_spread.rate_of_spread;
    assert!(afternoon > 0.0, "no afternoon spread");
    assert!(
        afternoon > 2.0 * pre_dawn,
        "afternoon {afternoon} vs pre-dawn {pre_dawn} m/min"
    );
    assert!(
        *behavior[15].max_spread.flame_length > *behavior[5].max_spread.flame_length,
        "flames did not lengthen"
    );
}
