//! Surface Fire Behavior
//!
//! Rate of spread, direction, fireline intensity and flame length of a
//! surface fire from a fuel model, its moisture, midflame wind and terrain.
//!
//! Wind and slope effects are combined as vectors in the plane of the slope,
//! measured from the upslope direction, so a cross-slope wind turns the head
//! of the fire away from upslope. Every result is paired with the no-wind,
//! no-slope reference spread of the same fuel.
//!
//! # Scientific References
//! - Rothermel, R.C. (1972). USDA Forest Service Research Paper INT-115
//! - Albini, F.A. (1976). USDA Forest Service General Technical Report INT-30
//! - Andrews, P.L. (2018). "The Rothermel surface fire spread model and associated
//!   developments: a comprehensive explanation." USDA Forest Service RMRS-GTR-371
//! - Anderson, H.E. (1983). USDA Forest Service Research Paper INT-305

use crate::conditioning::FuelCondition;
use crate::core_types::fuel::{FuelModelParameters, FuelMoistureState};
use crate::core_types::geo::TerrainDescriptor;
use crate::core_types::units::{
    Degrees, Feet, FeetPerMinute, Fraction, KilometersPerHour, KilowattsPerMeter,
    KilowattsPerSquareMeter, KjPerSquareMeter, Meters, MetersPerMinute, Radians,
};
use crate::core_types::weather::WeatherSample;
use crate::error::{ensure_finite, require_finite, FireBehaviorError, Result};
use crate::physics::fuel_bed::FuelBed;
use crate::physics::rothermel::{
    base_spread, eccentricity, effective_wind_speed, fireline_intensity, flame_length,
    midflame_wind_adjustment_factor, residence_time, slope_coefficient, wind_coefficient,
    BaseSpread,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, warn};

/// Tunables for the surface fire model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceFireConfig {
    /// Cap the effective wind speed at 0.9 × reaction intensity (US units)
    pub apply_wind_limit: bool,
}

impl Default for SurfaceFireConfig {
    fn default() -> Self {
        Self {
            apply_wind_limit: true,
        }
    }
}

/// Spread of the fire head under one set of wind and slope conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
    pub rate_of_spread: MetersPerMinute,
    /// Compass bearing the head of the fire moves toward
    pub direction: Degrees,
    pub flame_length: Meters,
    /// Byram's fireline intensity
    pub fireline_intensity: KilowattsPerMeter,
    pub reaction_intensity: KilowattsPerSquareMeter,
    /// Heat released per unit area as the front passes
    pub heat_per_unit_area: KjPerSquareMeter,
    /// Wind speed that alone would produce the combined wind and slope effect
    pub effective_wind_speed: KilometersPerHour,
    /// Eccentricity of the elliptical fire shape, 0 for a circle
    pub eccentricity: f64,
}

impl SpreadResult {
    /// Spread rate at `azimuth` degrees off the heading (0 = head, 180 = back)
    ///
    /// `R(θ) = R (1 - e) / (1 - e cos θ)`
    pub fn spread_at(&self, azimuth: Degrees) -> MetersPerMinute {
        let e = self.eccentricity;
        let theta = *azimuth.to_radians();
        MetersPerMinute::new(*self.rate_of_spread * (1.0 - e) / (1.0 - e * theta.cos()))
    }

    /// Spread rate opposite the heading
    pub fn backing_spread(&self) -> MetersPerMinute {
        self.spread_at(Degrees::new(180.0))
    }

    /// Spread rate perpendicular to the heading
    pub fn flanking_spread(&self) -> MetersPerMinute {
        self.spread_at(Degrees::new(90.0))
    }

    /// Length-to-width ratio of the fire ellipse
    pub fn length_to_width(&self) -> f64 {
        1.0 / (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// True when the fuel bed does not carry fire
    pub fn is_extinguished(&self) -> bool {
        *self.rate_of_spread <= 0.0
    }

    fn extinguished(direction: Degrees) -> Self {
        SpreadResult {
            rate_of_spread: MetersPerMinute::ZERO,
            direction,
            flame_length: Meters::ZERO,
            fireline_intensity: KilowattsPerMeter::ZERO,
            reaction_intensity: KilowattsPerSquareMeter::ZERO,
            heat_per_unit_area: KjPerSquareMeter::ZERO,
            effective_wind_speed: KilometersPerHour::new(0.0),
            eccentricity: 0.0,
        }
    }
}

/// Maximum spread under the given wind and slope, plus the no-wind, no-slope reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireBehaviorResult {
    pub model_id: u32,
    pub max_spread: SpreadResult,
    pub no_wind_no_slope: SpreadResult,
    /// Whether the effective wind limit reduced the wind effect
    pub wind_limit_reached: bool,
    /// Share of the live herbaceous load treated as cured dead fuel
    pub cured_fraction: Fraction,
}

/// Rothermel surface fire spread model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFireBehaviorModel {
    config: SurfaceFireConfig,
}

impl SurfaceFireBehaviorModel {
    pub fn new(config: SurfaceFireConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurfaceFireConfig {
        &self.config
    }

    /// Midflame wind for an unsheltered fuel bed from the 20-ft open wind
    pub fn midflame_wind_speed(
        open_wind: KilometersPerHour,
        fuel: &FuelModelParameters,
    ) -> KilometersPerHour {
        let depth_ft = *fuel.fuel_bed_depth.to_feet();
        KilometersPerHour::new(*open_wind * midflame_wind_adjustment_factor(depth_ft))
    }

    /// Fire behavior for a fuel model at a moisture state.
    ///
    /// # Arguments
    /// * `fuel` - Fuel model parameters
    /// * `moisture` - Current fuel moisture
    /// * `midflame_wind` - Wind speed at midflame height
    /// * `wind_direction` - Compass direction the wind blows from
    /// * `slope` - Slope steepness
    /// * `aspect` - Compass direction the slope faces (downslope)
    ///
    /// # Errors
    /// - [`FireBehaviorError::Model`] when the fuel model has no valid fuel bed
    /// - [`FireBehaviorError::Input`] for negative wind, slope outside [0, π/2),
    ///   invalid moisture or non-finite values
    /// - [`FireBehaviorError::Data`] when a stage produces NaN or infinity
    pub fn compute_behavior(
        &self,
        fuel: &FuelModelParameters,
        moisture: &FuelMoistureState,
        midflame_wind: KilometersPerHour,
        wind_direction: Degrees,
        slope: Radians,
        aspect: Radians,
    ) -> Result<FireBehaviorResult> {
        moisture.validate()?;
        if require_finite("midflame wind", *midflame_wind)? < 0.0 {
            return Err(FireBehaviorError::input(
                "midflame wind",
                format!("must be non-negative, got {}", *midflame_wind),
            ));
        }
        require_finite("wind direction", *wind_direction)?;
        if !(0.0..FRAC_PI_2).contains(&require_finite("slope", *slope)?) {
            return Err(FireBehaviorError::input(
                "slope",
                format!("must be within [0, π/2) radians, got {}", *slope),
            ));
        }
        require_finite("aspect", *aspect)?;

        let bed = FuelBed::new(fuel, moisture)?;
        let base = base_spread(&bed);
        ensure_finite("base spread", "reaction intensity", base.reaction_intensity)?;
        ensure_finite("base spread", "no-wind spread rate", base.spread_rate)?;

        let upslope = (*aspect + PI).rem_euclid(2.0 * PI);
        let upslope_bearing = Radians::new(upslope).to_degrees().normalized();

        if base.is_extinguished() {
            debug!(
                "Fuel model {}: dead moisture {:.3} at or above extinction {:.3}, no spread",
                fuel.model_id, base.dead_moisture, base.dead_extinction
            );
            let none = SpreadResult::extinguished(upslope_bearing);
            return Ok(FireBehaviorResult {
                model_id: fuel.model_id,
                max_spread: none,
                no_wind_no_slope: none,
                wind_limit_reached: false,
                cured_fraction: Fraction::new(bed.cured_fraction),
            });
        }

        let wind_ft_min = *midflame_wind.to_feet_per_minute();
        let phi_w = wind_coefficient(base.sigma, base.relative_packing_ratio, wind_ft_min);
        let phi_s = slope_coefficient(base.packing_ratio, *slope);

        // Wind blows toward the opposite of where it comes from
        let wind_toward = (*wind_direction + 180.0).to_radians();
        let split = wind_toward - upslope;
        let combined = Vector2::new(phi_s + phi_w * split.cos(), phi_w * split.sin());
        let mut phi_e = ensure_finite("wind and slope", "combined coefficient", combined.norm())?;
        let heading = if phi_e > 0.0 {
            upslope + combined.y.atan2(combined.x)
        } else {
            upslope
        };

        let mut effective_wind = ensure_finite(
            "wind and slope",
            "effective wind",
            effective_wind_speed(base.sigma, base.relative_packing_ratio, phi_e),
        )?;
        let wind_limit = 0.9 * base.reaction_intensity;
        let wind_limit_reached = self.config.apply_wind_limit && effective_wind > wind_limit;
        if wind_limit_reached {
            warn!(
                "Fuel model {}: effective wind {:.0} ft/min exceeds limit {:.0} ft/min, capping",
                fuel.model_id, effective_wind, wind_limit
            );
            effective_wind = wind_limit;
            phi_e = wind_coefficient(base.sigma, base.relative_packing_ratio, effective_wind);
        }

        let max_rate = ensure_finite(
            "wind and slope",
            "spread rate",
            base.spread_rate * (1.0 + phi_e),
        )?;
        let max_spread = spread_result(
            &base,
            max_rate,
            Radians::new(heading).to_degrees().normalized(),
            effective_wind,
        )?;
        let no_wind_no_slope = spread_result(&base, base.spread_rate, upslope_bearing, 0.0)?;

        debug!(
            "Fuel model {}: R0={:.2}, phi_w={:.2}, phi_s={:.2}, R={:.2} ft/min toward {:.0}°",
            fuel.model_id, base.spread_rate, phi_w, phi_s, max_rate, *max_spread.direction
        );

        Ok(FireBehaviorResult {
            model_id: fuel.model_id,
            max_spread,
            no_wind_no_slope,
            wind_limit_reached,
            cured_fraction: Fraction::new(bed.cured_fraction),
        })
    }

    /// Fire behavior for a conditioned hour, using the sample's open wind
    /// reduced to midflame height and the terrain's slope and aspect.
    ///
    /// # Errors
    /// As for [`Self::compute_behavior`].
    pub fn compute_behavior_for_condition(
        &self,
        fuel: &FuelModelParameters,
        condition: &FuelCondition,
        weather: &WeatherSample,
        terrain: &TerrainDescriptor,
    ) -> Result<FireBehaviorResult> {
        self.compute_behavior(
            fuel,
            &condition.moisture,
            Self::midflame_wind_speed(weather.wind_speed, fuel),
            weather.wind_direction,
            terrain.slope(),
            terrain.aspect(),
        )
    }
}

/// Convert a US-unit spread rate (ft/min) into a metric result
fn spread_result(
    base: &BaseSpread,
    rate_ft_min: f64,
    direction: Degrees,
    effective_wind_ft_min: f64,
) -> Result<SpreadResult> {
    let intensity = ensure_finite(
        "fireline intensity",
        "intensity",
        fireline_intensity(base.reaction_intensity, base.sigma, rate_ft_min),
    )?;
    let flame = ensure_finite("flame length", "flame length", flame_length(intensity))?;
    Ok(SpreadResult {
        rate_of_spread: FeetPerMinute::new(rate_ft_min).to_meters_per_minute(),
        direction,
        flame_length: Feet::new(flame).to_meters(),
        fireline_intensity: KilowattsPerMeter::from_btu_per_foot_second(intensity),
        reaction_intensity: KilowattsPerSquareMeter::from_btu_per_square_foot_minute(
            base.reaction_intensity,
        ),
        heat_per_unit_area: KjPerSquareMeter::from_btu_per_square_foot(
            base.reaction_intensity * residence_time(base.sigma),
        ),
        effective_wind_speed: FeetPerMinute::new(effective_wind_ft_min).to_km_per_hour(),
        eccentricity: eccentricity(effective_wind_ft_min),
    })
}
