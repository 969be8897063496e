//! Per-hour sun position providers for the fuel conditioner

use super::{SolarGeometry, SolarGeometryCalculator};
use crate::core_types::geo::GeoPosition;
use crate::core_types::units::Degrees;
use crate::error::{require_finite, FireBehaviorError, Result};
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// Sun altitude and compass azimuth at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SunPosition {
    /// Height of the sun above the horizon; negative at night
    pub altitude: Degrees,
    /// Compass bearing, clockwise from north
    pub azimuth: Degrees,
}

impl SunPosition {
    /// Create a validated sun position; azimuth is normalized to [0, 360).
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] if altitude is outside [-90, 90] or a value is non-finite.
    pub fn new(altitude: Degrees, azimuth: Degrees) -> Result<Self> {
        if !(-90.0..=90.0).contains(&require_finite("solar altitude", *altitude)?) {
            return Err(FireBehaviorError::input(
                "solar altitude",
                format!("must be within [-90, 90], got {}", *altitude),
            ));
        }
        require_finite("solar azimuth", *azimuth)?;
        Ok(Self {
            altitude,
            azimuth: azimuth.normalized(),
        })
    }
}

impl From<&SolarGeometry> for SunPosition {
    fn from(g: &SolarGeometry) -> Self {
        Self {
            altitude: g.altitude,
            azimuth: g.azimuth,
        }
    }
}

/// Anything that can report where the sun is at a given local time
///
/// Implementations must be pure: the same timestamp always yields the same
/// position, which keeps conditioning runs deterministic.
pub trait SolarGeometrySource: Send + Sync {
    /// Sun position at `timestamp`.
    ///
    /// # Errors
    /// Implementations report invalid input or non-finite results.
    fn sun_position(&self, timestamp: DateTime<FixedOffset>) -> Result<SunPosition>;
}

/// Full solar position algorithm evaluated at every requested timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaGeometrySource {
    calculator: SolarGeometryCalculator,
    position: GeoPosition,
}

impl SpaGeometrySource {
    pub fn new(calculator: SolarGeometryCalculator, position: GeoPosition) -> Self {
        Self {
            calculator,
            position,
        }
    }

    pub fn position(&self) -> &GeoPosition {
        &self.position
    }
}

impl SolarGeometrySource for SpaGeometrySource {
    fn sun_position(&self, timestamp: DateTime<FixedOffset>) -> Result<SunPosition> {
        let geometry = self.calculator.compute_geometry(timestamp, &self.position)?;
        Ok(SunPosition::from(&geometry))
    }
}

/// Precomputed sun positions for each hour of the local day
///
/// Lookups use the timestamp's hour of day only, so one table serves a
/// multi-day run at the cost of ignoring the day-to-day drift in declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyGeometryTable {
    positions: [SunPosition; 24],
}

impl HourlyGeometryTable {
    pub fn new(positions: [SunPosition; 24]) -> Self {
        Self { positions }
    }

    /// The same position at every hour
    pub fn constant(position: SunPosition) -> Self {
        Self {
            positions: [position; 24],
        }
    }

    /// Sample `source` on the hour for the 24 hours starting at `day_start`.
    ///
    /// `day_start` should be local midnight; slot `h` holds the position at
    /// `day_start + h` hours.
    ///
    /// # Errors
    /// Whatever `source` reports.
    pub fn sample(
        source: &dyn SolarGeometrySource,
        day_start: DateTime<FixedOffset>,
    ) -> Result<Self> {
        let mut positions = [SunPosition::default(); 24];
        for offset in 0..24 {
            let at = day_start + Duration::hours(offset);
            positions[at.hour() as usize] = source.sun_position(at)?;
        }
        Ok(Self { positions })
    }

    /// Position stored for a clock hour (0-23)
    pub fn at_hour(&self, hour: usize) -> Option<&SunPosition> {
        self.positions.get(hour)
    }
}

impl SolarGeometrySource for HourlyGeometryTable {
    fn sun_position(&self, timestamp: DateTime<FixedOffset>) -> Result<SunPosition> {
        Ok(self.positions[timestamp.hour() as usize])
    }
}
