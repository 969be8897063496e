//! NREL Solar Position Algorithm (Reda & Andreas 2003)
//!
//! Computes the topocentric position of the sun with an uncertainty of
//! ±0.0003° for years -2000 to 6000, plus the equation of time and the
//! sunrise, transit and sunset times of the observer's local day.
//!
//! All angles in this module are plain `f64` degrees; the public wrapper in
//! [`crate::solar`] converts to the typed units.
//!
//! # References
//! - Reda, I., Andreas, A. (2003). "Solar Position Algorithm for Solar Radiation
//!   Applications." NREL/TP-560-34302, revised 2008.
//! - Meeus, J. (1998). "Astronomical Algorithms", 2nd ed. Willmann-Bell.

use super::spa_terms::{B_TERMS, L_TERMS, NUTATION_ARGUMENTS, NUTATION_COEFFICIENTS, R_TERMS};

/// Apparent solar radius, degrees
const SUN_RADIUS: f64 = 0.26667;

/// Julian day of the J2000.0 epoch
const J2000: f64 = 2451545.0;

/// Earth equatorial radius used for parallax, meters
const EARTH_RADIUS: f64 = 6378140.0;

/// Calendar date and time in the observer's zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Offset from UTC in hours, negative west of Greenwich
    pub timezone: f64,
}

/// Everything the algorithm needs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpaInput {
    pub time: CivilTime,
    /// TT - UT1 in seconds
    pub delta_t: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// Annual mean local pressure, millibars
    pub pressure: f64,
    /// Annual mean local temperature, °C
    pub temperature: f64,
    /// Atmospheric refraction at sunrise and sunset, degrees
    pub atmospheric_refraction: f64,
}

/// Sunrise, transit and sunset for the local day
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RiseTransitSet {
    /// Local fractional hours
    pub sunrise: f64,
    pub transit: f64,
    pub sunset: f64,
    pub sunrise_hour_angle: f64,
    pub sunset_hour_angle: f64,
    pub transit_altitude: f64,
}

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpaOutput {
    pub julian_day: f64,
    pub declination: f64,
    pub right_ascension: f64,
    pub topocentric_declination: f64,
    /// Topocentric local hour angle, [0, 360)
    pub hour_angle: f64,
    /// Refraction-corrected topocentric elevation
    pub elevation: f64,
    pub zenith: f64,
    /// Measured eastward from north, [0, 360)
    pub azimuth: f64,
    /// Minutes
    pub equation_of_time: f64,
    /// None when the sun neither rises nor sets on this day
    pub rise_transit_set: Option<RiseTransitSet>,
}

/// Sun position in the geocentric equatorial frame plus the terms reused later
#[derive(Debug, Clone, Copy)]
struct GeocentricSun {
    jme: f64,
    radius_vector: f64,
    del_psi: f64,
    epsilon: f64,
    /// Apparent sidereal time at Greenwich
    nu: f64,
    alpha: f64,
    delta: f64,
}

// ============================================================================
// ANGLE LIMITING
// ============================================================================

pub(crate) fn limit_degrees(degrees: f64) -> f64 {
    let d = degrees / 360.0;
    let limited = 360.0 * (d - d.floor());
    if limited < 0.0 {
        limited + 360.0
    } else {
        limited
    }
}

fn limit_degrees_180pm(degrees: f64) -> f64 {
    let d = degrees / 360.0;
    let mut limited = 360.0 * (d - d.floor());
    if limited < -180.0 {
        limited += 360.0;
    } else if limited > 180.0 {
        limited -= 360.0;
    }
    limited
}

fn limit_degrees_180(degrees: f64) -> f64 {
    let d = degrees / 180.0;
    let limited = 180.0 * (d - d.floor());
    if limited < 0.0 {
        limited + 180.0
    } else {
        limited
    }
}

fn limit_zero_to_one(value: f64) -> f64 {
    let limited = value - value.floor();
    if limited < 0.0 {
        limited + 1.0
    } else {
        limited
    }
}

fn limit_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

fn day_fraction_to_local_hour(day_fraction: f64, timezone: f64) -> f64 {
    24.0 * limit_zero_to_one(day_fraction + timezone / 24.0)
}

fn third_order_polynomial(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    ((a * x + b) * x + c) * x + d
}

// ============================================================================
// TIME SCALES
// ============================================================================

/// Julian day for a civil date and time (Meeus ch. 7)
///
/// # Formula
/// ```text
/// JD = INT(365.25 (Y + 4716)) + INT(30.6001 (M + 1)) + D + B - 1524.5
/// B  = 2 - A + INT(A / 4),  A = INT(Y / 100)   (Gregorian dates only)
/// ```
/// with January and February counted as months 13 and 14 of the prior year.
pub(crate) fn julian_day(time: &CivilTime) -> f64 {
    let day_decimal = f64::from(time.day)
        + (f64::from(time.hour) - time.timezone
            + (f64::from(time.minute) + time.second / 60.0) / 60.0)
            / 24.0;
    let (mut year, mut month) = (f64::from(time.year), f64::from(time.month));
    if month < 3.0 {
        month += 12.0;
        year -= 1.0;
    }
    let mut jd = (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + day_decimal
        - 1524.5;
    if jd > 2299160.0 {
        let a = (year / 100.0).trunc();
        jd += 2.0 - a + (a / 4.0).floor();
    }
    jd
}

fn earth_periodic_term_summation(terms: &[[f64; 3]], jme: f64) -> f64 {
    terms
        .iter()
        .map(|[a, b, c]| a * (b + c * jme).cos())
        .sum()
}

/// Polynomial in JME over the per-power term sums, scaled by 10⁻⁸
fn earth_values(term_sums: &[f64], jme: f64) -> f64 {
    let mut power = 1.0;
    let mut sum = 0.0;
    for term in term_sums {
        sum += term * power;
        power *= jme;
    }
    sum / 1.0e8
}

fn earth_series(tables: &[&[[f64; 3]]], jme: f64) -> f64 {
    let sums: Vec<f64> = tables
        .iter()
        .map(|terms| earth_periodic_term_summation(terms, jme))
        .collect();
    earth_values(&sums, jme)
}

// ============================================================================
// GEOCENTRIC POSITION
// ============================================================================

/// Nutation in longitude and obliquity, degrees
fn nutation(jce: f64) -> (f64, f64) {
    let x = [
        // Mean elongation of the moon from the sun
        third_order_polynomial(1.0 / 189474.0, -0.0019142, 445267.11148, 297.85036, jce),
        // Mean anomaly of the sun
        third_order_polynomial(-1.0 / 300000.0, -0.0001603, 35999.05034, 357.52772, jce),
        // Mean anomaly of the moon
        third_order_polynomial(1.0 / 56250.0, 0.0086972, 477198.867398, 134.96298, jce),
        // Moon's argument of latitude
        third_order_polynomial(1.0 / 327270.0, -0.0036825, 483202.017538, 93.27191, jce),
        // Longitude of the ascending node of the moon's orbit
        third_order_polynomial(1.0 / 450000.0, 0.0020708, -1934.136261, 125.04452, jce),
    ];

    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;
    for (args, coeffs) in NUTATION_ARGUMENTS.iter().zip(NUTATION_COEFFICIENTS.iter()) {
        let xy: f64 = args
            .iter()
            .zip(x.iter())
            .map(|(y, x)| f64::from(*y) * x)
            .sum();
        let xy = xy.to_radians();
        sum_psi += (coeffs[0] + jce * coeffs[1]) * xy.sin();
        sum_epsilon += (coeffs[2] + jce * coeffs[3]) * xy.cos();
    }
    (sum_psi / 36000000.0, sum_epsilon / 36000000.0)
}

/// Mean obliquity of the ecliptic, arc seconds (Laskar polynomial)
fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    let u = jme / 10.0;
    84381.448
        + u * (-4680.93
            + u * (-1.55
                + u * (1999.25
                    + u * (-51.38
                        + u * (-249.67
                            + u * (-39.05 + u * (7.12 + u * (27.87 + u * (5.79 + u * 2.45)))))))))
}

fn geocentric_sun(jd: f64, delta_t: f64) -> GeocentricSun {
    let jc = (jd - J2000) / 36525.0;
    let jde = jd + delta_t / 86400.0;
    let jce = (jde - J2000) / 36525.0;
    let jme = jce / 10.0;

    let l = limit_degrees(earth_series(&L_TERMS, jme).to_degrees());
    let b = earth_series(&B_TERMS, jme).to_degrees();
    let radius_vector = earth_series(&R_TERMS, jme);

    // Geocentric longitude and latitude
    let mut theta = l + 180.0;
    if theta >= 360.0 {
        theta -= 360.0;
    }
    let beta = -b;

    let (del_psi, del_epsilon) = nutation(jce);
    let epsilon = del_epsilon + ecliptic_mean_obliquity(jme) / 3600.0;

    let aberration = -20.4898 / (3600.0 * radius_vector);
    let lambda = theta + del_psi + aberration;

    let nu0 = limit_degrees(
        280.46061837 + 360.98564736629 * (jd - J2000) + jc * jc * (0.000387933 - jc / 38710000.0),
    );
    let nu = nu0 + del_psi * epsilon.to_radians().cos();

    let lambda_r = lambda.to_radians();
    let epsilon_r = epsilon.to_radians();
    let beta_r = beta.to_radians();
    let alpha = limit_degrees(
        (lambda_r.sin() * epsilon_r.cos() - beta_r.tan() * epsilon_r.sin())
            .atan2(lambda_r.cos())
            .to_degrees(),
    );
    let delta = (beta_r.sin() * epsilon_r.cos() + beta_r.cos() * epsilon_r.sin() * lambda_r.sin())
        .asin()
        .to_degrees();

    GeocentricSun {
        jme,
        radius_vector,
        del_psi,
        epsilon,
        nu,
        alpha,
        delta,
    }
}

// ============================================================================
// TOPOCENTRIC POSITION
// ============================================================================

/// Parallax in right ascension and topocentric declination, degrees
fn parallax(latitude: f64, elevation: f64, xi: f64, h: f64, delta: f64) -> (f64, f64) {
    let lat_r = latitude.to_radians();
    let xi_r = xi.to_radians();
    let h_r = h.to_radians();
    let delta_r = delta.to_radians();

    let u = (0.99664719 * lat_r.tan()).atan();
    let y = 0.99664719 * u.sin() + elevation * lat_r.sin() / EARTH_RADIUS;
    let x = u.cos() + elevation * lat_r.cos() / EARTH_RADIUS;

    let denominator = delta_r.cos() - x * xi_r.sin() * h_r.cos();
    let delta_alpha_r = (-x * xi_r.sin() * h_r.sin()).atan2(denominator);
    let delta_prime = ((delta_r.sin() - y * xi_r.sin()) * delta_alpha_r.cos())
        .atan2(denominator)
        .to_degrees();
    (delta_alpha_r.to_degrees(), delta_prime)
}

/// Refraction correction to the topocentric elevation, degrees
///
/// # Formula
/// ```text
/// Δe = (P / 1010) (283 / (273 + T)) × 1.02 / (60 tan(e₀ + 10.3 / (e₀ + 5.11)))
/// ```
/// applied only while the sun's upper limb is above the refracted horizon.
fn refraction_correction(
    pressure: f64,
    temperature: f64,
    atmospheric_refraction: f64,
    e0: f64,
) -> f64 {
    if e0 >= -(SUN_RADIUS + atmospheric_refraction) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * (e0 + 10.3 / (e0 + 5.11)).to_radians().tan())
    } else {
        0.0
    }
}

fn altitude(latitude: f64, delta: f64, h: f64) -> f64 {
    let (lat_r, delta_r) = (latitude.to_radians(), delta.to_radians());
    (lat_r.sin() * delta_r.sin() + lat_r.cos() * delta_r.cos() * h.to_radians().cos())
        .asin()
        .to_degrees()
}

/// Azimuth measured westward from south, [-180, 180]
fn astronomical_azimuth(h_prime: f64, latitude: f64, delta_prime: f64) -> f64 {
    let h_r = h_prime.to_radians();
    let lat_r = latitude.to_radians();
    h_r.sin()
        .atan2(h_r.cos() * lat_r.sin() - delta_prime.to_radians().tan() * lat_r.cos())
        .to_degrees()
}

fn sun_mean_longitude(jme: f64) -> f64 {
    let tail = 1.0 / 49931.0 + jme * (-1.0 / 15300.0 + jme * (-1.0 / 2000000.0));
    limit_degrees(280.4664567 + jme * (360007.6982779 + jme * (0.03032028 + jme * tail)))
}

/// Equation of time, minutes
fn equation_of_time(sun: &GeocentricSun) -> f64 {
    let m = sun_mean_longitude(sun.jme);
    limit_minutes(4.0 * (m - 0.0057183 - sun.alpha + sun.del_psi * sun.epsilon.to_radians().cos()))
}

// ============================================================================
// SUNRISE, TRANSIT, SUNSET
// ============================================================================

/// Interpolate right ascension or declination across the three days
fn interpolate_three_day(values: [f64; 3], n: f64) -> f64 {
    let mut a = values[1] - values[0];
    let mut b = values[2] - values[1];
    if a.abs() >= 2.0 {
        a = limit_zero_to_one(a);
    }
    if b.abs() >= 2.0 {
        b = limit_zero_to_one(b);
    }
    values[1] + n * (a + b + (b - a) * n) / 2.0
}

fn rise_transit_set(input: &SpaInput) -> Option<RiseTransitSet> {
    let midnight_ut = CivilTime {
        hour: 0,
        minute: 0,
        second: 0.0,
        timezone: 0.0,
        ..input.time
    };
    let jd0 = julian_day(&midnight_ut);
    let nu = geocentric_sun(jd0, input.delta_t).nu;

    let mut alpha = [0.0; 3];
    let mut delta = [0.0; 3];
    for (i, offset) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
        let sun = geocentric_sun(jd0 + offset, 0.0);
        alpha[i] = sun.alpha;
        delta[i] = sun.delta;
    }

    let latitude = input.latitude;
    let lat_r = latitude.to_radians();
    let h0_prime = -(SUN_RADIUS + input.atmospheric_refraction);

    let transit_approx = (alpha[1] - input.longitude - nu) / 360.0;

    let argument = (h0_prime.to_radians().sin() - lat_r.sin() * delta[1].to_radians().sin())
        / (lat_r.cos() * delta[1].to_radians().cos());
    if argument.abs() > 1.0 || !argument.is_finite() {
        return None;
    }
    let h0 = limit_degrees_180(argument.acos().to_degrees());

    // Order: transit, rise, set
    let m = [
        limit_zero_to_one(transit_approx),
        limit_zero_to_one(transit_approx - h0 / 360.0),
        limit_zero_to_one(transit_approx + h0 / 360.0),
    ];

    let mut h_prime = [0.0; 3];
    let mut delta_prime = [0.0; 3];
    let mut h_altitude = [0.0; 3];
    for i in 0..3 {
        let nu_i = nu + 360.985647 * m[i];
        let n = m[i] + input.delta_t / 86400.0;
        let alpha_prime = interpolate_three_day(alpha, n);
        delta_prime[i] = interpolate_three_day(delta, n);
        h_prime[i] = limit_degrees_180pm(nu_i + input.longitude - alpha_prime);
        h_altitude[i] = altitude(latitude, delta_prime[i], h_prime[i]);
    }

    let corrected = |i: usize| {
        m[i] + (h_altitude[i] - h0_prime)
            / (360.0
                * delta_prime[i].to_radians().cos()
                * lat_r.cos()
                * h_prime[i].to_radians().sin())
    };

    let tz = input.time.timezone;
    Some(RiseTransitSet {
        transit: day_fraction_to_local_hour(m[0] - h_prime[0] / 360.0, tz),
        sunrise: day_fraction_to_local_hour(corrected(1), tz),
        sunset: day_fraction_to_local_hour(corrected(2), tz),
        sunrise_hour_angle: h_prime[1],
        sunset_hour_angle: h_prime[2],
        transit_altitude: h_altitude[0],
    })
}

/// Run the full algorithm for one instant and observer
pub(crate) fn calculate(input: &SpaInput) -> SpaOutput {
    let jd = julian_day(&input.time);
    let sun = geocentric_sun(jd, input.delta_t);

    let h = limit_degrees(sun.nu + input.longitude - sun.alpha);
    let xi = 8.794 / (3600.0 * sun.radius_vector);
    let (delta_alpha, delta_prime) = parallax(input.latitude, input.elevation, xi, h, sun.delta);
    let h_prime = h - delta_alpha;

    let e0 = altitude(input.latitude, delta_prime, h_prime);
    let e = e0
        + refraction_correction(
            input.pressure,
            input.temperature,
            input.atmospheric_refraction,
            e0,
        );

    let azimuth = limit_degrees(astronomical_azimuth(h_prime, input.latitude, delta_prime) + 180.0);

    SpaOutput {
        julian_day: jd,
        declination: sun.delta,
        right_ascension: sun.alpha,
        topocentric_declination: delta_prime,
        hour_angle: limit_degrees(h_prime),
        elevation: e,
        zenith: 90.0 - e,
        azimuth,
        equation_of_time: equation_of_time(&sun),
        rise_transit_set: rise_transit_set(input),
    }
}
