//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for physical quantities to prevent
//! accidental mixing of incompatible units. The fire-spread relations are
//! published in US customary units (ft, lb, Btu, min) while callers work in
//! metric, so every metric/imperial crossing goes through a conversion here.
//!
//! # Design Philosophy
//! - All quantities use f64: the solar series and moisture recurrence need it
//! - Implements Add, Ord and Display where the crate needs them
//! - Provides explicit conversion methods between related types
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Constructors do not validate; range checks live at the API boundary and
//!   report [`FireBehaviorError::Input`](crate::FireBehaviorError::Input)
//!
//! # Usage
//! ```
//! use fireground_core::core_types::units::{Celsius, KilometersPerHour};
//!
//! let temp = Celsius::new(25.0);
//! assert!((*temp.to_fahrenheit() - 77.0).abs() < 1e-9);
//!
//! let wind = KilometersPerHour::new(10.0);
//! assert!((*wind.to_feet_per_minute() - 546.8066).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref};

/// Meters per foot (exact)
const METERS_PER_FOOT: f64 = 0.3048;

/// Pounds per square foot to kilograms per square meter
const KG_M2_PER_LB_FT2: f64 = 4.882427636383;

/// Short tons per acre to pounds per square foot (2000 lb / 43560 ft²)
const LB_FT2_PER_TON_ACRE: f64 = 2000.0 / 43560.0;

/// Kilojoules per Btu (International Table)
const KJ_PER_BTU: f64 = 1.05505585262;

/// Kilojoules per kilogram per Btu per pound
const KJ_KG_PER_BTU_LB: f64 = 2.326;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Convert to Fahrenheit
    #[inline]
    #[must_use]
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(self.0 * 9.0 / 5.0 + 32.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.0)
    }
}

/// Temperature in degrees Fahrenheit
///
/// Only used inside the fuel temperature and Rothermel relations, whose
/// empirical coefficients were fitted in °F.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Create a new Fahrenheit temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fahrenheit(value)
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius((self.0 - 32.0) * 5.0 / 9.0)
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°F", self.0)
    }
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Normalize to a compass bearing in [0, 360)
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Degrees {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        Degrees(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    /// Normalize to the signed range [-180, 180)
    #[inline]
    #[must_use]
    pub fn normalized_signed(self) -> Degrees {
        let shifted = Degrees(self.0 + 180.0).normalized();
        Degrees(shifted.0 - 180.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(f64);

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radians {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Normalize to [0, 2π)
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Radians {
        let wrapped = self.0.rem_euclid(std::f64::consts::TAU);
        Radians(if wrapped >= std::f64::consts::TAU {
            0.0
        } else {
            wrapped
        })
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} rad", self.0)
    }
}

// ============================================================================
// LENGTH TYPES
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Zero distance
    pub const ZERO: Meters = Meters(0.0);

    /// Create a new distance in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Convert to feet
    #[inline]
    #[must_use]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 / METERS_PER_FOOT)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

/// Distance in feet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Feet(f64);

impl Eq for Feet {}

impl PartialOrd for Feet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feet {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Feet {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Feet {
    /// Create a new distance in feet
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Feet(value)
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_FOOT)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ft", self.0)
    }
}

// ============================================================================
// SPEED TYPES
// ============================================================================

/// Speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    /// Create a new speed in km/h
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Speed in statute miles per hour
    #[inline]
    #[must_use]
    pub fn miles_per_hour(self) -> f64 {
        self.0 / 1.609344
    }

    /// Convert to feet per minute, the wind unit of the Rothermel relations
    #[inline]
    #[must_use]
    pub fn to_feet_per_minute(self) -> FeetPerMinute {
        FeetPerMinute(self.0 * 1000.0 / METERS_PER_FOOT / 60.0)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

/// Speed in feet per minute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FeetPerMinute(f64);

impl Eq for FeetPerMinute {}

impl PartialOrd for FeetPerMinute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeetPerMinute {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for FeetPerMinute {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl FeetPerMinute {
    /// Create a new speed in ft/min
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        FeetPerMinute(value)
    }

    /// Convert to meters per minute
    #[inline]
    #[must_use]
    pub fn to_meters_per_minute(self) -> MetersPerMinute {
        MetersPerMinute(self.0 * METERS_PER_FOOT)
    }

    /// Convert to km/h
    #[inline]
    #[must_use]
    pub fn to_km_per_hour(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * METERS_PER_FOOT * 60.0 / 1000.0)
    }
}

impl fmt::Display for FeetPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ft/min", self.0)
    }
}

/// Rate of spread in meters per minute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerMinute(f64);

impl Eq for MetersPerMinute {}

impl PartialOrd for MetersPerMinute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerMinute {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MetersPerMinute {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerMinute {
    /// Zero spread rate
    pub const ZERO: MetersPerMinute = MetersPerMinute(0.0);

    /// Create a new rate in m/min
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerMinute(value)
    }
}

impl fmt::Display for MetersPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/min", self.0)
    }
}

// ============================================================================
// AREAL FUEL LOAD TYPES
// ============================================================================

/// Areal fuel load in kilograms per square meter
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsPerSquareMeter(f64);

impl Eq for KilogramsPerSquareMeter {}

impl PartialOrd for KilogramsPerSquareMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilogramsPerSquareMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilogramsPerSquareMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilogramsPerSquareMeter {
    /// No fuel
    pub const ZERO: KilogramsPerSquareMeter = KilogramsPerSquareMeter(0.0);

    /// Create a new load in kg/m²
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilogramsPerSquareMeter(value)
    }

    /// Create from short tons per acre, the unit of the published fuel model tables
    #[inline]
    #[must_use]
    pub fn from_tons_per_acre(value: f64) -> Self {
        KilogramsPerSquareMeter(value * LB_FT2_PER_TON_ACRE * KG_M2_PER_LB_FT2)
    }

    /// Load in pounds per square foot
    #[inline]
    #[must_use]
    pub fn pounds_per_square_foot(self) -> f64 {
        self.0 / KG_M2_PER_LB_FT2
    }
}

impl Add for KilogramsPerSquareMeter {
    type Output = KilogramsPerSquareMeter;
    fn add(self, rhs: Self) -> KilogramsPerSquareMeter {
        KilogramsPerSquareMeter(self.0 + rhs.0)
    }
}

impl fmt::Display for KilogramsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kg/m²", self.0)
    }
}

// ============================================================================
// FUEL PARTICLE AND ENERGY TYPES
// ============================================================================

/// Surface-area-to-volume ratio (m²/m³ = 1/m)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SurfaceAreaToVolume(f64);

impl Eq for SurfaceAreaToVolume {}

impl PartialOrd for SurfaceAreaToVolume {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SurfaceAreaToVolume {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for SurfaceAreaToVolume {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl SurfaceAreaToVolume {
    /// Create a new ratio in 1/m
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        SurfaceAreaToVolume(value)
    }

    /// Create from a ratio in 1/ft as tabulated for the standard fuel models
    #[inline]
    #[must_use]
    pub fn from_per_foot(value: f64) -> Self {
        SurfaceAreaToVolume(value / METERS_PER_FOOT)
    }

    /// Ratio in 1/ft
    #[inline]
    #[must_use]
    pub fn per_foot(self) -> f64 {
        self.0 * METERS_PER_FOOT
    }
}

impl fmt::Display for SurfaceAreaToVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m⁻¹", self.0)
    }
}

/// Specific energy in kilojoules per kilogram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KjPerKg(f64);

impl Eq for KjPerKg {}

impl PartialOrd for KjPerKg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KjPerKg {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KjPerKg {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KjPerKg {
    /// Create a new specific energy in kJ/kg
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KjPerKg(value)
    }

    /// Create from Btu/lb
    #[inline]
    #[must_use]
    pub fn from_btu_per_pound(value: f64) -> Self {
        KjPerKg(value * KJ_KG_PER_BTU_LB)
    }

    /// Value in Btu/lb
    #[inline]
    #[must_use]
    pub fn btu_per_pound(self) -> f64 {
        self.0 / KJ_KG_PER_BTU_LB
    }
}

impl fmt::Display for KjPerKg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kJ/kg", self.0)
    }
}

/// Fireline intensity in kilowatts per meter of fire front
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattsPerMeter(f64);

impl Eq for KilowattsPerMeter {}

impl PartialOrd for KilowattsPerMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilowattsPerMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilowattsPerMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilowattsPerMeter {
    /// No heat release
    pub const ZERO: KilowattsPerMeter = KilowattsPerMeter(0.0);

    /// Create a new intensity in kW/m
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilowattsPerMeter(value)
    }

    /// Create from Btu/ft/s
    #[inline]
    #[must_use]
    pub fn from_btu_per_foot_second(value: f64) -> Self {
        KilowattsPerMeter(value * KJ_PER_BTU / METERS_PER_FOOT)
    }

    /// Value in Btu/ft/s
    #[inline]
    #[must_use]
    pub fn btu_per_foot_second(self) -> f64 {
        self.0 * METERS_PER_FOOT / KJ_PER_BTU
    }
}

impl fmt::Display for KilowattsPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kW/m", self.0)
    }
}

/// Energy per unit area in kilojoules per square meter
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KjPerSquareMeter(f64);

impl Deref for KjPerSquareMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KjPerSquareMeter {
    /// Zero energy
    pub const ZERO: KjPerSquareMeter = KjPerSquareMeter(0.0);

    /// Create a new value in kJ/m²
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KjPerSquareMeter(value)
    }

    /// Create from Btu/ft²
    #[inline]
    #[must_use]
    pub fn from_btu_per_square_foot(value: f64) -> Self {
        KjPerSquareMeter(value * KJ_PER_BTU / (METERS_PER_FOOT * METERS_PER_FOOT))
    }
}

impl fmt::Display for KjPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kJ/m²", self.0)
    }
}

/// Reaction intensity in kilowatts per square meter of fire front
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattsPerSquareMeter(f64);

impl Deref for KilowattsPerSquareMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilowattsPerSquareMeter {
    /// No heat release
    pub const ZERO: KilowattsPerSquareMeter = KilowattsPerSquareMeter(0.0);

    /// Create a new value in kW/m²
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilowattsPerSquareMeter(value)
    }

    /// Create from Btu/ft²/min
    #[inline]
    #[must_use]
    pub fn from_btu_per_square_foot_minute(value: f64) -> Self {
        KilowattsPerSquareMeter(value * KJ_PER_BTU / (METERS_PER_FOOT * METERS_PER_FOOT) / 60.0)
    }
}

impl fmt::Display for KilowattsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kW/m²", self.0)
    }
}

// ============================================================================
// RADIATION TYPES
// ============================================================================

/// Watts per square meter per calorie per square centimeter per minute
const W_M2_PER_CAL_CM2_MIN: f64 = 41840.0 / 60.0;

/// Solar irradiance in W/m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WattsPerSquareMeter(f64);

impl Deref for WattsPerSquareMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl WattsPerSquareMeter {
    /// Create a new irradiance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        WattsPerSquareMeter(value)
    }

    /// From cal/cm²/min (langleys per minute), the unit of the fuel temperature relation
    #[inline]
    #[must_use]
    pub fn from_cal_per_cm2_minute(value: f64) -> Self {
        WattsPerSquareMeter(value * W_M2_PER_CAL_CM2_MIN)
    }

    /// As cal/cm²/min
    #[inline]
    #[must_use]
    pub fn cal_per_cm2_minute(self) -> f64 {
        self.0 / W_M2_PER_CAL_CM2_MIN
    }
}

impl fmt::Display for WattsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} W/m²", self.0)
    }
}

// ============================================================================
// RATIO TYPES
// ============================================================================

/// Dimensionless ratio, nominally 0-1 (fuel moisture may exceed 1)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fraction(f64);

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fraction {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fraction {
    /// Create a new fraction
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fraction(value)
    }

    /// Convert to percentage (0-100)
    #[inline]
    #[must_use]
    pub fn to_percent(self) -> Percent {
        Percent(self.0 * 100.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Percentage (0-100 for humidity, may exceed 100 for live fuel moisture)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Convert to fraction
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> Fraction {
        Fraction(self.0 / 100.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_conversions() {
        let c = Celsius::new(100.0);
        assert!((*c.to_fahrenheit() - 212.0).abs() < 1e-9);
        let f = Fahrenheit::new(32.0);
        assert!(f.to_celsius().abs() < 1e-9);
        // Differences in °F are 9/5 of differences in °C
        let warm = Celsius::new(30.0).to_fahrenheit();
        let cool = Celsius::new(20.0).to_fahrenheit();
        assert!(((*warm - *cool) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_normalization() {
        assert!((*Degrees::new(-10.0).normalized() - 350.0).abs() < 1e-9);
        assert!((*Degrees::new(720.0).normalized()).abs() < 1e-9);
        assert!((*Degrees::new(190.0).normalized_signed() + 170.0).abs() < 1e-9);
        assert!((*Degrees::new(-180.0).normalized_signed() + 180.0).abs() < 1e-9);
        let r = Radians::new(-std::f64::consts::FRAC_PI_2).normalized();
        assert!((*r - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        assert!((*Degrees::new(90.0).to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_speed_conversions() {
        // 1 mph = 88 ft/min exactly
        let kmh = KilometersPerHour::new(8.04672);
        assert!((kmh.miles_per_hour() - 5.0).abs() < 1e-9);
        assert!((*kmh.to_feet_per_minute() - 440.0).abs() < 1e-9);
        let back = FeetPerMinute::new(440.0).to_km_per_hour();
        assert!((*back - 8.04672).abs() < 1e-9);
        assert!((*FeetPerMinute::new(100.0).to_meters_per_minute() - 30.48).abs() < 1e-9);
    }

    #[test]
    fn test_fuel_load_conversions() {
        // Short grass: 0.74 t/ac ≈ 0.166 kg/m²
        let load = KilogramsPerSquareMeter::from_tons_per_acre(0.74);
        assert!((*load - 0.166).abs() < 0.001, "load {}", *load);
        assert!((load.pounds_per_square_foot() - 0.74 * 2000.0 / 43560.0).abs() < 1e-9);
        let total = load + KilogramsPerSquareMeter::new(0.5);
        assert!((*total - *load - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_energy_and_ratio_conversions() {
        let h = KjPerKg::from_btu_per_pound(8000.0);
        assert!((*h - 18608.0).abs() < 1e-6);
        assert!((h.btu_per_pound() - 8000.0).abs() < 1e-9);

        let sav = SurfaceAreaToVolume::from_per_foot(3500.0);
        assert!((*sav - 11482.94).abs() < 0.01);
        assert!((sav.per_foot() - 3500.0).abs() < 1e-9);

        let i = KilowattsPerMeter::from_btu_per_foot_second(100.0);
        assert!((*i - 346.15).abs() < 0.01);
        assert!((i.btu_per_foot_second() - 100.0).abs() < 1e-9);
        let ir = KilowattsPerSquareMeter::from_btu_per_square_foot_minute(1.0);
        assert!((*ir - 0.18927).abs() < 1e-4);

        // Solar constant, 1.98 ly/min ≈ 1381 W/m²
        let solar = WattsPerSquareMeter::from_cal_per_cm2_minute(1.98);
        assert!((*solar - 1380.72).abs() < 0.01);
        assert!((solar.cal_per_cm2_minute() - 1.98).abs() < 1e-12);

        assert!((*Percent::new(6.0).to_fraction() - 0.06).abs() < 1e-12);
        assert_eq!(Fraction::new(0.25).to_percent(), Percent::new(25.0));
    }

    #[test]
    fn test_total_ordering() {
        let a = MetersPerMinute::new(1.0);
        let b = MetersPerMinute::new(2.0);
        assert_eq!(a.max(b), b);
        assert!(Celsius::new(-5.0) < Celsius::new(5.0));
    }
}
