//! Solar heating of the fuel bed (Rothermel et al. 1986)
//!
//! Chains the relations that turn sun position and weather into the
//! temperature and humidity of the air immediately adjacent to fine fuels:
//! - Wind reduction from 20-ft open wind to fuel level
//! - Optical air mass and atmospheric attenuation of the solar beam
//! - Projection of the beam onto a sloped, aspected surface
//! - Fuel temperature rise from absorbed radiation against convective cooling
//! - Relative humidity correction for the warmer fuel-level air
//!
//! The relations were fitted in US customary units (°F, mph, ft, cal/cm²/min)
//! and are kept in those units here; the conditioner converts at the boundary.
//!
//! # Scientific References
//! - Rothermel, R.C., Wilson, R.A., Morris, G.A., Sackett, S.S. (1986). "Modeling
//!   moisture content of fine dead wildland fuels: input to the BEHAVE fire prediction
//!   system." USDA Forest Service Research Paper INT-359, pp. 9-11, 19
//! - Albini, F.A., Baughman, R.G. (1979). "Estimating windspeeds for predicting
//!   wildland fire behavior." USDA Forest Service Research Paper INT-221

/// Solar constant (cal/cm²/min)
pub(crate) const SOLAR_CONSTANT: f64 = 1.98;

/// Smallest vegetation height used by the wind profile (ft)
const MIN_VEGETATION_HEIGHT_FT: f64 = 0.1;

/// Reduce the 20-ft open wind to the top of the vegetation
///
/// # Formula
/// ```text
/// U_h = U_20 / ln((20 + 0.36 h) / (0.13 h))
/// ```
///
/// # Arguments
/// * `open_wind_mph` - Wind 20 ft above the vegetation (mph)
/// * `vegetation_height_ft` - Vegetation (fuel bed) height (ft); zero is treated as 0.1 ft
pub fn wind_at_fuel_level(open_wind_mph: f64, vegetation_height_ft: f64) -> f64 {
    let h = if vegetation_height_ft > 0.0 {
        vegetation_height_ft
    } else {
        MIN_VEGETATION_HEIGHT_FT
    };
    open_wind_mph / ((20.0 + 0.36 * h) / (0.13 * h)).ln()
}

/// Optical air mass: path length through the atmosphere relative to the zenith path at sea level
///
/// # Formula
/// ```text
/// M = e^(-0.0000448 E) / sin A      (A > 0, else 0)
/// ```
///
/// # Arguments
/// * `altitude` - Solar altitude (radians)
/// * `elevation_ft` - Site elevation (ft)
pub fn optical_air_mass(altitude: f64, elevation_ft: f64) -> f64 {
    if altitude <= 0.0 {
        return 0.0;
    }
    (-0.0000448 * elevation_ft).exp() / altitude.sin()
}

/// Beam irradiance at the fuel, perpendicular to the solar ray (cal/cm²/min)
///
/// # Formula
/// ```text
/// I_a = I_0 p^M (1 - S_c)
/// ```
///
/// Where:
/// - **I_0** = Solar constant, 1.98 cal/cm²/min
/// - **p** = Atmospheric transparency (0.6-0.8 typical)
/// - **M** = Optical air mass
/// - **S_c** = Cloud cover fraction
pub fn attenuated_irradiance(air_mass: f64, cloud_cover: f64, transparency: f64) -> f64 {
    if air_mass <= 0.0 {
        return 0.0;
    }
    SOLAR_CONSTANT * transparency.powf(air_mass) * (1.0 - cloud_cover)
}

/// Irradiance reaching a sloped surface (cal/cm²/min), never negative
///
/// # Formula
/// ```text
/// tan ψ = -tan α cos(Z - β)
/// sin ζ = sin(A - ψ) cos α / cos ψ
/// I     = max(0, I_a sin ζ)
/// ```
///
/// Where ψ is the slope angle in the vertical plane through the sun, positive
/// when the ground rises toward the sun.
///
/// # Arguments
/// * `slope` - Slope steepness α (radians)
/// * `aspect` - Compass direction the slope faces, β (radians)
/// * `altitude` - Solar altitude A (radians)
/// * `sun_azimuth` - Compass bearing of the sun Z (radians)
/// * `beam` - Attenuated beam irradiance I_a
pub fn irradiance_on_slope(
    slope: f64,
    aspect: f64,
    altitude: f64,
    sun_azimuth: f64,
    beam: f64,
) -> f64 {
    if altitude <= 0.0 || beam <= 0.0 {
        return 0.0;
    }
    let psi = (-slope.tan() * (sun_azimuth - aspect).cos()).atan();
    let sin_zeta = (altitude - psi).sin() * slope.cos() / psi.cos();
    (beam * sin_zeta).max(0.0)
}

/// Fuel surface temperature (°F)
///
/// # Formula
/// ```text
/// T_f = T_a + I / (0.015 U_h + 0.026)
/// ```
///
/// The 0.026 term keeps the denominator positive in calm air.
pub fn fuel_temperature(irradiance: f64, air_temperature_f: f64, fuel_level_wind_mph: f64) -> f64 {
    air_temperature_f + irradiance / (0.015 * fuel_level_wind_mph.max(0.0) + 0.026)
}

/// Relative humidity of the air adjacent to the fuel (%)
///
/// # Formula
/// ```text
/// H_f = H_a e^(-0.033 (T_f - T_a))      (temperatures in °F)
/// ```
pub fn relative_humidity_near_fuel(
    air_humidity: f64,
    fuel_temperature_f: f64,
    air_temperature_f: f64,
) -> f64 {
    air_humidity * (-0.033 * (fuel_temperature_f - air_temperature_f)).exp()
}
