mod scenario;

use chrono::{DateTime, Timelike};
use clap::{Parser, Subcommand};
use fireground_core::core_types::units::{Degrees, KilometersPerHour, Meters};
use fireground_core::{
    catalog, DiurnalFuelConditioner, DiurnalWeather, FireBehaviorResult, FuelCondition,
    FuelMoistureState, GeoPosition, SolarGeometryCalculator, SpaGeometrySource, SpaOptions,
    SurfaceFireBehaviorModel, SurfaceFireConfig, TerrainDescriptor,
};
use scenario::{lookup_fuel, Scenario};
use serde::Serialize;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fuel conditioning and surface fire behavior from the command line
#[derive(Parser, Debug)]
#[command(name = "fireground-demo")]
#[command(about = "Sun position, diurnal fuel moisture and Rothermel surface fire behavior", long_about = None)]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sun position, rise, transit and set for one place and time
    Solar {
        /// Latitude in degrees, positive north
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude in degrees, positive east
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// Elevation in meters
        #[arg(long, default_value_t = 0.0)]
        elevation: f64,

        /// Local time, RFC 3339 (e.g. 2025-01-14T15:00:00+11:00)
        #[arg(long)]
        time: String,
    },

    /// Fire behavior for one fuel model under fixed conditions
    Behavior {
        /// Fuel model code (e.g. GR4) or numeric ID
        #[arg(short, long, default_value = "FM1")]
        model: String,

        /// Dead 1-h / 10-h / 100-h moisture in %
        #[arg(long, num_args = 3, default_values_t = [6.0, 7.0, 8.0])]
        dead: Vec<f64>,

        /// Live herbaceous moisture in %
        #[arg(long, default_value_t = 70.0)]
        live_herb: f64,

        /// Live woody moisture in %
        #[arg(long, default_value_t = 70.0)]
        live_woody: f64,

        /// 20-ft open wind speed in km/h
        #[arg(short, long, default_value_t = 10.0)]
        wind_speed: f64,

        /// Treat the wind speed as already measured at midflame height
        #[arg(long)]
        midflame: bool,

        /// Direction the wind blows from in degrees (0=North, 90=East)
        #[arg(long, default_value_t = 270.0)]
        wind_direction: f64,

        /// Slope steepness in percent
        #[arg(long, default_value_t = 0.0)]
        slope: f64,

        /// Compass direction the slope faces in degrees
        #[arg(long, default_value_t = 0.0)]
        aspect: f64,

        /// Do not cap the effective wind speed
        #[arg(long)]
        no_wind_limit: bool,
    },

    /// Condition fuel hour by hour through a scenario and report fire behavior
    Run {
        /// Scenario TOML file (built-in Canberra summer scenario if omitted)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// List the standard fuel model catalog
    Models,
}

/// One conditioned hour and the fire it would carry
#[derive(Debug, Serialize)]
struct HourReport {
    condition: FuelCondition,
    behavior: FireBehaviorResult,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Solar {
            latitude,
            longitude,
            elevation,
            time,
        } => run_solar(*latitude, *longitude, *elevation, time, cli.json),
        Command::Behavior {
            model,
            dead,
            live_herb,
            live_woody,
            wind_speed,
            midflame,
            wind_direction,
            slope,
            aspect,
            no_wind_limit,
        } => {
            let fuel = lookup_fuel(model)?;
            let moisture = FuelMoistureState::from_percent(
                dead[0],
                dead[1],
                dead[2],
                *live_herb,
                *live_woody,
            )?;
            let aspect = Degrees::new(*aspect);
            let terrain = TerrainDescriptor::from_percent_slope(*slope, aspect, Meters::ZERO)?;
            let open = KilometersPerHour::new(*wind_speed);
            let midflame_wind = if *midflame {
                open
            } else {
                SurfaceFireBehaviorModel::midflame_wind_speed(open, fuel)
            };
            let model = SurfaceFireBehaviorModel::new(SurfaceFireConfig {
                apply_wind_limit: !*no_wind_limit,
            });
            let result = model.compute_behavior(
                fuel,
                &moisture,
                midflame_wind,
                Degrees::new(*wind_direction),
                terrain.slope(),
                terrain.aspect(),
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("=== {} {} ===", fuel.code, fuel.name);
                println!("Midflame wind: {:.1} km/h", *midflame_wind);
                print_behavior(&result);
            }
            Ok(())
        }
        Command::Run { scenario } => run_scenario(scenario.as_deref(), cli.json),
        Command::Models => {
            let models: Vec<_> = catalog::ids()
                .into_iter()
                .filter_map(catalog::get)
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&models)?);
            } else {
                println!(" ID  | Code | Dynamic | Depth(m) | Load(kg/m²) | Name");
                println!(
                    "-----|------|---------|----------|-------------|-----------------------------"
                );
                for m in models {
                    println!(
                        "{:4} | {:4} | {:7} | {:8.2} | {:11.3} | {}",
                        m.model_id,
                        m.code,
                        if m.dynamic { "yes" } else { "no" },
                        *m.fuel_bed_depth,
                        *m.total_load(),
                        m.name
                    );
                }
            }
            Ok(())
        }
    }
}

fn run_solar(
    latitude: f64,
    longitude: f64,
    elevation: f64,
    time: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let timestamp = DateTime::parse_from_rfc3339(time)?;
    let (lat, lon) = (Degrees::new(latitude), Degrees::new(longitude));
    let position = GeoPosition::new(lat, lon, Meters::new(elevation))?;
    let calculator = SolarGeometryCalculator::new(SpaOptions::default())?;
    let geometry = calculator.compute_geometry(timestamp, &position)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
        return Ok(());
    }
    let clock = |h: Option<f64>| match h {
        Some(h) => {
            let minutes = ((h.fract() * 60.0).round() as u32).min(59);
            format!("{:02}:{:02}", h.floor() as u32, minutes)
        }
        None => "none".to_string(),
    };
    println!("=== Sun at {timestamp} ===");
    println!("Zenith:      {:9.4}°", *geometry.zenith);
    println!("Azimuth:     {:9.4}°", *geometry.azimuth);
    println!("Altitude:    {:9.4}°", *geometry.altitude);
    println!("Declination: {:9.4}°", *geometry.declination);
    println!("Hour angle:  {:9.4}°", *geometry.hour_angle);
    println!(
        "Sunrise {}  Transit {}  Sunset {}",
        clock(geometry.sunrise),
        clock(geometry.transit),
        clock(geometry.sunset)
    );
    Ok(())
}

fn run_scenario(path: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let scenario = Scenario::load(path)?;
    let fuel = scenario.fuel()?;
    let terrain = scenario.terrain()?;
    let calculator = SolarGeometryCalculator::new(scenario.solar)?;
    let (sunrise, sunset) = scenario.sun_times(&calculator)?;

    let weather = DiurnalWeather::from(&scenario.weather).hourly_series(
        scenario.start.hour() as u8,
        scenario.hours,
        sunrise,
        sunset,
    )?;
    info!(
        "Scenario: {} for {} h from {}, sunrise {:.2} sunset {:.2}",
        fuel.code, scenario.hours, scenario.start, sunrise, sunset
    );

    let conditions = DiurnalFuelConditioner::new(scenario.conditioning)?.condition_fuel(
        scenario.initial_moisture()?,
        &weather,
        &SpaGeometrySource::new(calculator, scenario.position()?),
        &terrain,
        Meters::new(scenario.fuel_bed_height),
        scenario.start,
        scenario.hours,
    )?;

    let model = SurfaceFireBehaviorModel::default();
    let reports = conditions
        .iter()
        .zip(&weather)
        .map(|(condition, sample)| {
            Ok(HourReport {
                condition: *condition,
                behavior: model.compute_behavior_for_condition(fuel, condition, sample, &terrain)?,
            })
        })
        .collect::<Result<Vec<_>, Box<dyn Error>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("=== {} {} ===\n", fuel.code, fuel.name);
    println!(
        "Time        | Sun(°) | T_air | T_fuel | RH_fuel | 1-h(%) | ROS(m/min) | Flame(m) | Heading"
    );
    println!(
        "------------|--------|-------|--------|---------|--------|------------|----------|--------"
    );
    for r in &reports {
        let c = &r.condition;
        let head = &r.behavior.max_spread;
        println!(
            "{} | {:6.1} | {:5.1} | {:6.1} | {:7.1} | {:6.2} | {:10.2} | {:8.2} | {:6.0}°",
            c.timestamp.format("%m-%d %H:%M"),
            *c.solar_altitude,
            *c.air_temperature,
            *c.fuel_temperature,
            *c.relative_humidity_near_fuel,
            *c.moisture.dead_1h().to_percent(),
            *head.rate_of_spread,
            *head.flame_length,
            *head.direction
        );
    }

    let rate = |r: &&HourReport| *r.behavior.max_spread.rate_of_spread;
    let peak = reports.iter().max_by(|a, b| rate(a).total_cmp(&rate(b)));
    if let Some(peak) = peak {
        println!(
            "\nPeak spread {:.2} m/min at {}",
            *peak.behavior.max_spread.rate_of_spread,
            peak.condition.timestamp.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn print_behavior(result: &FireBehaviorResult) {
    let head = &result.max_spread;
    if head.is_extinguished() {
        println!("Fuel too moist to carry fire");
        return;
    }
    println!(
        "Rate of spread:      {:8.2} m/min toward {:.0}°",
        *head.rate_of_spread, *head.direction
    );
    println!(
        "No-wind, no-slope:   {:8.2} m/min",
        *result.no_wind_no_slope.rate_of_spread
    );
    println!(
        "Backing / flanking:  {:8.2} / {:.2} m/min",
        *head.backing_spread(),
        *head.flanking_spread()
    );
    println!("Fireline intensity:  {:8.0} kW/m", *head.fireline_intensity);
    println!("Flame length:        {:8.2} m", *head.flame_length);
    println!(
        "Reaction intensity:  {:8.1} kW/m²",
        *head.reaction_intensity
    );
    println!(
        "Heat per unit area:  {:8.0} kJ/m²",
        *head.heat_per_unit_area
    );
    println!(
        "Effective wind:      {:8.1} km/h",
        *head.effective_wind_speed
    );
    println!("Length-to-width:     {:8.2}", head.length_to_width());
    if *result.cured_fraction > 0.0 {
        println!(
            "Herbaceous cured:    {:8.0} %",
            *result.cured_fraction.to_percent()
        );
    }
    if result.wind_limit_reached {
        println!("Effective wind limit reached");
    }
}
