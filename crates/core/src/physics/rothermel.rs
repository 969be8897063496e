//! Rothermel Fire Spread Model (1972)
//!
//! Implements the Rothermel surface fire spread relations with the Albini
//! (1976) multi-class extensions, as used by the BEHAVE family of systems.
//!
//! All quantities are US customary: ft, lb, Btu, min. Conversions happen in
//! [`crate::behavior`].
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects." USDA Forest Service
//!   General Technical Report INT-30.
//! - Byram, G.M. (1959). "Combustion of forest fuels." In: Forest Fire: Control and Use.
//! - Anderson, H.E. (1983). "Predicting wind-driven wild land fire size and shape."
//!   USDA Forest Service Research Paper INT-305.

use super::fuel_bed::{FuelBed, EFFECTIVE_MINERAL_CONTENT, PARTICLE_DENSITY};

/// No-wind, no-slope spread and the bed properties the wind and slope terms reuse
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BaseSpread {
    /// Characteristic surface-area-to-volume ratio σ (1/ft)
    pub sigma: f64,
    /// Packing ratio β
    pub packing_ratio: f64,
    /// β / β_op
    pub relative_packing_ratio: f64,
    /// Reaction intensity I_R (Btu/ft²/min)
    pub reaction_intensity: f64,
    /// Propagating flux ratio ξ
    pub propagating_flux_ratio: f64,
    /// Heat sink ρ_b ε Q_ig (Btu/ft³)
    pub heat_sink: f64,
    /// No-wind, no-slope rate of spread R_0 (ft/min)
    pub spread_rate: f64,
    /// Weighted dead fuel moisture (fraction)
    pub dead_moisture: f64,
    /// Dead fuel moisture of extinction (fraction)
    pub dead_extinction: f64,
}

impl BaseSpread {
    /// True when the dead fuel is too wet to carry fire
    pub(crate) fn is_extinguished(&self) -> bool {
        self.dead_moisture >= self.dead_extinction
    }
}

/// Moisture damping coefficient (η_M)
///
/// Reduces reaction intensity as fuel moisture increases.
///
/// # Formula
/// ```text
/// η_M = 1 - 2.59 r + 5.11 r² - 3.52 r³,   r = min(1, M_f / M_x)
/// ```
pub fn moisture_damping(moisture: f64, extinction: f64) -> f64 {
    if extinction <= 0.0 {
        return 0.0;
    }
    let r = (moisture / extinction).min(1.0);
    (1.0 - 2.59 * r + 5.11 * r.powi(2) - 3.52 * r.powi(3)).clamp(0.0, 1.0)
}

/// Mineral damping coefficient (η_s) for the standard effective mineral content
///
/// # Formula
/// ```text
/// η_s = 0.174 S_e^(-0.19)  (≤ 1)
/// ```
pub(crate) fn mineral_damping() -> f64 {
    (0.174 * EFFECTIVE_MINERAL_CONTENT.powf(-0.19)).min(1.0)
}

/// Optimum packing ratio β_op = 3.348 σ^(-0.8189)
pub(crate) fn optimum_packing_ratio(sigma: f64) -> f64 {
    3.348 * sigma.powf(-0.8189)
}

/// Optimum reaction velocity Γ' (1/min)
///
/// # Formula
/// ```text
/// Γ'_max = σ^1.5 / (495 + 0.0594 σ^1.5)
/// A      = 133 σ^(-0.7913)
/// Γ'     = Γ'_max (β/β_op)^A e^(A (1 - β/β_op))
/// ```
pub(crate) fn reaction_velocity(sigma: f64, relative_packing_ratio: f64) -> f64 {
    let sigma_15 = sigma.powf(1.5);
    let gamma_max = sigma_15 / (495.0 + 0.0594 * sigma_15);
    let a = 133.0 * sigma.powf(-0.7913);
    gamma_max * relative_packing_ratio.powf(a) * (a * (1.0 - relative_packing_ratio)).exp()
}

/// Propagating flux ratio (ξ)
///
/// The fraction of reaction intensity that goes into preheating adjacent fuel.
///
/// # Formula
/// ```text
/// ξ = exp((0.792 + 0.681 σ^0.5)(β + 0.1)) / (192 + 0.2595 σ)
/// ```
pub(crate) fn propagating_flux_ratio(sigma: f64, packing_ratio: f64) -> f64 {
    ((0.792 + 0.681 * sigma.sqrt()) * (packing_ratio + 0.1)).exp() / (192.0 + 0.2595 * sigma)
}

/// Wind factor constants `(C, B, E)` for a characteristic SAV ratio
///
/// # Formula
/// ```text
/// C = 7.47 e^(-0.133 σ^0.55)
/// B = 0.02526 σ^0.54
/// E = 0.715 e^(-0.000359 σ)
/// ```
pub(crate) fn wind_factor_constants(sigma: f64) -> (f64, f64, f64) {
    (
        7.47 * (-0.133 * sigma.powf(0.55)).exp(),
        0.02526 * sigma.powf(0.54),
        0.715 * (-0.000359 * sigma).exp(),
    )
}

/// Wind coefficient (Φ_w)
///
/// # Formula
/// ```text
/// Φ_w = C U^B (β/β_op)^(-E)
/// ```
///
/// # Arguments
/// * `midflame_wind` - Midflame wind speed U (ft/min)
pub fn wind_coefficient(sigma: f64, relative_packing_ratio: f64, midflame_wind: f64) -> f64 {
    if midflame_wind <= 0.0 {
        return 0.0;
    }
    let (c, b, e) = wind_factor_constants(sigma);
    c * midflame_wind.powf(b) * relative_packing_ratio.powf(-e)
}

/// Slope coefficient (Φ_s)
///
/// # Formula
/// ```text
/// Φ_s = 5.275 β^(-0.3) tan²θ
/// ```
pub fn slope_coefficient(packing_ratio: f64, slope: f64) -> f64 {
    5.275 * packing_ratio.powf(-0.3) * slope.tan().powi(2)
}

/// Wind speed that alone would produce a combined coefficient `phi` (ft/min)
///
/// Inverse of [`wind_coefficient`].
pub(crate) fn effective_wind_speed(sigma: f64, relative_packing_ratio: f64, phi: f64) -> f64 {
    if phi <= 0.0 {
        return 0.0;
    }
    let (c, b, e) = wind_factor_constants(sigma);
    (phi / (c * relative_packing_ratio.powf(-e))).powf(1.0 / b)
}

/// Flame residence time t_r = 384 / σ (min)
pub fn residence_time(sigma: f64) -> f64 {
    384.0 / sigma
}

/// Byram's fireline intensity (Btu/ft/s)
///
/// # Formula
/// ```text
/// I_B = I_R t_r R / 60
/// ```
pub(crate) fn fireline_intensity(reaction_intensity: f64, sigma: f64, spread_rate: f64) -> f64 {
    reaction_intensity * residence_time(sigma) * spread_rate / 60.0
}

/// Byram's flame length L = 0.45 I_B^0.46 (ft)
pub fn flame_length(fireline_intensity: f64) -> f64 {
    if fireline_intensity <= 0.0 {
        return 0.0;
    }
    0.45 * fireline_intensity.powf(0.46)
}

/// Midflame wind adjustment factor for an unsheltered fuel bed of depth `h` (ft)
///
/// # Formula
/// ```text
/// WAF = 1.83 / ln((20 + 0.36 h) / (0.13 h)),   clamped to [0, 1]
/// ```
///
/// A bed of zero depth gets no reduction.
pub fn midflame_wind_adjustment_factor(fuel_bed_depth: f64) -> f64 {
    if fuel_bed_depth <= 0.0 {
        return 1.0;
    }
    (1.83 / ((20.0 + 0.36 * fuel_bed_depth) / (0.13 * fuel_bed_depth)).ln()).clamp(0.0, 1.0)
}

/// Eccentricity of the elliptical fire shape for an effective wind speed (ft/min)
///
/// # Formula
/// ```text
/// L/W = 1 + 0.002840909 U_E
/// e   = sqrt((L/W)² - 1) / (L/W)
/// ```
pub fn eccentricity(effective_wind: f64) -> f64 {
    let length_to_width = 1.0 + 0.002840909 * effective_wind.max(0.0);
    (length_to_width.powi(2) - 1.0).sqrt() / length_to_width
}

/// Reaction intensity, heat sink and no-wind/no-slope spread for a fuel bed
///
/// # Formula
/// ```text
/// R_0 = I_R ξ / (ρ_b Σ_cat f_cat Σ_i f_i ε_i Q_ig,i)
/// ```
pub(crate) fn base_spread(bed: &FuelBed) -> BaseSpread {
    let (dead, live) = bed.weigh();
    let sigma = dead.area_fraction * dead.sav + live.area_fraction * live.sav;

    let bulk_density = bed.bulk_density();
    let packing_ratio = bulk_density / PARTICLE_DENSITY;
    let relative_packing_ratio = packing_ratio / optimum_packing_ratio(sigma);

    let damped_load = dead.net_load * moisture_damping(dead.moisture, dead.extinction)
        + live.net_load * moisture_damping(live.moisture, live.extinction);
    let reaction_intensity = reaction_velocity(sigma, relative_packing_ratio)
        * bed.heat_content
        * mineral_damping()
        * damped_load;

    let propagating_flux_ratio = propagating_flux_ratio(sigma, packing_ratio);
    let heat_sink = bulk_density
        * (dead.area_fraction * dead.preignition + live.area_fraction * live.preignition);
    let spread_rate = if heat_sink > 0.0 {
        reaction_intensity * propagating_flux_ratio / heat_sink
    } else {
        0.0
    };

    BaseSpread {
        sigma,
        packing_ratio,
        relative_packing_ratio,
        reaction_intensity,
        propagating_flux_ratio,
        heat_sink,
        spread_rate,
        dead_moisture: dead.moisture,
        dead_extinction: dead.extinction,
    }
}
