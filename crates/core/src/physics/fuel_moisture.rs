//! Fine dead fuel moisture (Canadian hourly and daily fine fuel moisture forms)
//!
//! Implements the moisture relations used by BEHAVE for 1-hour timelag fuels:
//! - Equilibrium moisture curves for drying and wetting
//! - Hourly fine fuel moisture recurrence (Van Wagner 1977)
//! - Standard daily fine fuel moisture from noon weather (Van Wagner 1974)
//!
//! All moisture values are percent of oven-dry weight, matching the published
//! coefficients. Callers convert to [`Fraction`](crate::core_types::units::Fraction).
//!
//! # Scientific References
//! - Van Wagner, C.E. (1977). "A method of computing fine fuel moisture content
//!   throughout the diurnal cycle." Canadian Forestry Service Information Report PS-X-69
//! - Van Wagner, C.E., Pickett, T.L. (1985). "Equations and FORTRAN program for the
//!   Canadian Forest Fire Weather Index System." Forestry Technical Report 33
//! - Rothermel, R.C., Wilson, R.A., Morris, G.A., Sackett, S.S. (1986). "Modeling
//!   moisture content of fine dead wildland fuels: input to the BEHAVE fire prediction
//!   system." USDA Forest Service Research Paper INT-359, p. 47
//! - Anderson, K. (2009). "A comparison of hourly fire fuel moisture code calculations
//!   within Canada." Canadian Forest Service Information Report NOR-X-417

/// Open wind above which the hourly drying rate stops increasing (km/h)
pub(crate) const HOURLY_WIND_LIMIT_KMH: f64 = 22.5;

/// Shared humidity/temperature term of the hourly equilibrium curves
#[inline]
fn temperature_term(humidity: f64, temperature: f64) -> f64 {
    0.18 * (21.1 - temperature) * (1.0 - (-0.115 * humidity).exp())
}

/// Equilibrium moisture content approached while drying (%)
///
/// # Formula
/// ```text
/// E_d = 0.942 H^0.679 + 11 e^((H - 100) / 10) + 0.18 (21.1 - T)(1 - e^(-0.115 H))
/// ```
///
/// # Arguments
/// * `humidity` - Relative humidity (%)
/// * `temperature` - Temperature (°C)
pub fn drying_equilibrium(humidity: f64, temperature: f64) -> f64 {
    0.942 * humidity.powf(0.679)
        + 11.0 * ((humidity - 100.0) / 10.0).exp()
        + temperature_term(humidity, temperature)
}

/// Equilibrium moisture content approached while wetting (%)
///
/// # Formula
/// ```text
/// E_w = 0.618 H^0.753 + 10 e^((H - 100) / 10) + 0.18 (21.1 - T)(1 - e^(-0.115 H))
/// ```
pub fn wetting_equilibrium(humidity: f64, temperature: f64) -> f64 {
    0.618 * humidity.powf(0.753)
        + 10.0 * ((humidity - 100.0) / 10.0).exp()
        + temperature_term(humidity, temperature)
}

/// Log drying/wetting rate (per hour, base 10) for a humidity factor
///
/// `x` is `H / 100` when drying and `(100 - H) / 100` when wetting.
fn log_rate(x: f64, wind_kmh: f64, temperature: f64) -> f64 {
    let k = 0.424 * (1.0 - x.powf(1.7)) + 0.0694 * wind_kmh.sqrt() * (1.0 - x.powi(8));
    k * 0.0579 * (0.0365 * temperature).exp()
}

/// Advance fine fuel moisture by one hour
///
/// Moisture above the drying curve decays toward `E_d`, moisture below the
/// wetting curve rises toward `E_w`, and moisture between the two curves is
/// unchanged. The result always lies between `m_0` and the curve it moves
/// toward, so the recurrence cannot overshoot.
///
/// # Formula
/// ```text
/// drying:  m = E_d + (m_0 - E_d) e^(-2.303 k_d)
/// wetting: m = E_w - (E_w - m_0) e^(-2.303 k_w)
/// ```
///
/// # Arguments
/// * `previous` - Previous hour's moisture (%)
/// * `humidity` - Relative humidity adjacent to the fuel (%)
/// * `temperature` - Temperature adjacent to the fuel (°C)
/// * `wind_kmh` - 20-ft open wind speed (km/h), clamped to [0, 22.5]
///
/// # Returns
/// Moisture after one hour (%)
///
/// # References
/// Van Wagner (1977); Rothermel et al. (1986) p. 48 for the wetting sign
pub fn hourly_fine_fuel_moisture(
    previous: f64,
    humidity: f64,
    temperature: f64,
    wind_kmh: f64,
) -> f64 {
    let wind = wind_kmh.clamp(0.0, HOURLY_WIND_LIMIT_KMH);
    let e_d = drying_equilibrium(humidity, temperature);
    let e_w = wetting_equilibrium(humidity, temperature);

    if previous > e_d {
        let k_d = log_rate(humidity / 100.0, wind, temperature);
        e_d + (previous - e_d) * (-2.303 * k_d).exp()
    } else if previous < e_w {
        let k_w = log_rate((100.0 - humidity) / 100.0, wind, temperature);
        e_w - (e_w - previous) * (-2.303 * k_w).exp()
    } else {
        previous
    }
}

/// Early-afternoon fine fuel moisture from noon weather (%)
///
/// Canadian standard daily fine fuel moisture code, including the rain
/// adjustment, converted back to moisture percent.
///
/// # Arguments
/// * `previous` - Yesterday's fine fuel moisture (%)
/// * `temperature_f` - Temperature adjacent to the fuel (°F)
/// * `humidity` - Relative humidity adjacent to the fuel (%)
/// * `wind_mph` - 20-ft wind speed (mph)
/// * `rain_inches` - Rainfall since yesterday (inches)
///
/// # References
/// Rothermel et al. (1986) p. 47
pub fn daily_fine_fuel_moisture(
    previous: f64,
    temperature_f: f64,
    humidity: f64,
    wind_mph: f64,
    rain_inches: f64,
) -> f64 {
    let f_0 = 101.0 - previous;

    // Rain adjustment to the starting code
    let f_r = if rain_inches > 0.02 {
        let r_a = rain_inches.min(1.5);
        let f = if r_a <= 0.055 {
            -56.0 - 55.6 * (r_a + 0.04).ln()
        } else if r_a <= 0.225 {
            -1.0 - 18.2 * (r_a - 0.04).ln()
        } else {
            14.0 - 8.25 * (r_a - 0.075).ln()
        };
        (f * f_0 / 100.0 + 1.0 - 8.73 * (-0.1117 * f_0).exp()).max(0.0)
    } else {
        f_0
    };
    let m_r = 101.0 - f_r;

    let e_d = 0.942 * humidity.powf(0.679) + 11.0 * (humidity / 10.0 - 10.0).exp();
    let e_w = 0.597 * humidity.powf(0.768) + 14.0 * (humidity / 8.0 - 12.5).exp();

    let m = if (m_r - e_d).abs() < 1e-9 {
        m_r
    } else if m_r < e_d {
        e_w + (m_r - e_w) / 1.9953
    } else {
        let w = wind_mph.clamp(1.0, 14.0);
        let x = 0.424 * (1.0 - (humidity / 100.0).powf(1.7))
            + 0.088 * w.sqrt() * (1.0 - (humidity / 100.0).powi(8));
        e_d + (m_r - e_d) / 10f64.powf(x)
    };

    let delta = if f_0 < 99.0 {
        ((temperature_f - 70.0) * (0.63 - 0.0065 * f_r)).max(-16.0)
    } else {
        0.0
    };
    let code = (101.0 - m + delta).clamp(0.0, 99.0);
    101.0 - code
}
