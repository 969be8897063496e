//! Observer position and terrain descriptors

use crate::core_types::units::{Degrees, Meters, Radians};
use crate::error::{require_finite, FireBehaviorError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Geographic position of an observer or fuel bed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    latitude: Degrees,
    longitude: Degrees,
    elevation: Meters,
}

impl GeoPosition {
    /// Create a validated position.
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] when latitude is outside [-90, 90], longitude
    /// outside [-180, 180], or any value is non-finite.
    pub fn new(latitude: Degrees, longitude: Degrees, elevation: Meters) -> Result<Self> {
        let position = GeoPosition {
            latitude,
            longitude,
            elevation,
        };
        position.validate()?;
        Ok(position)
    }

    /// Re-check a position that bypassed [`GeoPosition::new`], e.g. one deserialized from a file
    ///
    /// # Errors
    /// As for [`GeoPosition::new`].
    pub fn validate(&self) -> Result<()> {
        let lat = require_finite("latitude", *self.latitude)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(FireBehaviorError::input(
                "latitude",
                format!("must be within [-90, 90], got {lat}"),
            ));
        }
        let lon = require_finite("longitude", *self.longitude)?;
        if !(-180.0..=180.0).contains(&lon) {
            return Err(FireBehaviorError::input(
                "longitude",
                format!("must be within [-180, 180], got {lon}"),
            ));
        }
        require_finite("elevation", *self.elevation)?;
        Ok(())
    }

    /// Latitude, positive north
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive east
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Elevation above mean sea level
    pub fn elevation(&self) -> Meters {
        self.elevation
    }
}

/// Slope and orientation of the ground under a fuel bed
///
/// Aspect is the compass direction the slope faces, i.e. the downslope
/// direction. A south-facing slope has aspect π.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainDescriptor {
    slope: Radians,
    aspect: Radians,
    elevation: Meters,
}

impl TerrainDescriptor {
    /// Create a validated terrain descriptor; aspect is normalized to [0, 2π).
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] when slope is outside [0, π/2) or a value
    /// is non-finite.
    pub fn new(slope: Radians, aspect: Radians, elevation: Meters) -> Result<Self> {
        require_finite("aspect", *aspect)?;
        let terrain = TerrainDescriptor {
            slope,
            aspect: aspect.normalized(),
            elevation,
        };
        terrain.validate()?;
        Ok(terrain)
    }

    /// Re-check a descriptor that may have been deserialized
    ///
    /// # Errors
    /// As for [`TerrainDescriptor::new`].
    pub fn validate(&self) -> Result<()> {
        let s = require_finite("slope", *self.slope)?;
        if !(0.0..FRAC_PI_2).contains(&s) {
            return Err(FireBehaviorError::input(
                "slope",
                format!("must be within [0, π/2) radians, got {s}"),
            ));
        }
        require_finite("aspect", *self.aspect)?;
        require_finite("elevation", *self.elevation)?;
        Ok(())
    }

    /// Level ground at the given elevation
    pub fn flat(elevation: Meters) -> Self {
        TerrainDescriptor {
            slope: Radians::new(0.0),
            aspect: Radians::new(0.0),
            elevation,
        }
    }

    /// Create from a slope given in percent (rise over run × 100) and an aspect in degrees
    ///
    /// # Errors
    /// As for [`TerrainDescriptor::new`]; negative percent slopes are rejected.
    pub fn from_percent_slope(
        slope_percent: f64,
        aspect: Degrees,
        elevation: Meters,
    ) -> Result<Self> {
        if require_finite("slope", slope_percent)? < 0.0 {
            return Err(FireBehaviorError::input(
                "slope",
                format!("percent slope must be non-negative, got {slope_percent}"),
            ));
        }
        Self::new(
            Radians::new((slope_percent / 100.0).atan()),
            aspect.to_radians(),
            elevation,
        )
    }

    /// Slope steepness
    pub fn slope(&self) -> Radians {
        self.slope
    }

    /// Downslope compass direction
    pub fn aspect(&self) -> Radians {
        self.aspect
    }

    /// Ground elevation
    pub fn elevation(&self) -> Meters {
        self.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn position(latitude: f64, longitude: f64) -> Result<GeoPosition> {
        let (lat, lon) = (Degrees::new(latitude), Degrees::new(longitude));
        GeoPosition::new(lat, lon, Meters::ZERO)
    }

    fn terrain(slope: f64, aspect: f64) -> Result<TerrainDescriptor> {
        TerrainDescriptor::new(Radians::new(slope), Radians::new(aspect), Meters::ZERO)
    }

    fn percent_slope(percent: f64, aspect: f64) -> Result<TerrainDescriptor> {
        TerrainDescriptor::from_percent_slope(percent, Degrees::new(aspect), Meters::ZERO)
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(position(90.0, 0.0).is_ok());
        assert!(position(-90.0, 0.0).is_ok());
        assert!(matches!(
            position(90.5, 0.0),
            Err(FireBehaviorError::Input {
                field: "latitude",
                ..
            })
        ));
        assert!(position(f64::NAN, 0.0).is_err());
        assert!(matches!(
            position(10.0, 181.0),
            Err(FireBehaviorError::Input {
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_terrain_validation() {
        let t = TerrainDescriptor::new(
            Radians::new(0.3),
            Radians::new(-FRAC_PI_2),
            Meters::new(500.0),
        )
        .unwrap();
        // West-facing after normalization
        assert!((*t.aspect() - 1.5 * PI).abs() < 1e-12);

        assert!(terrain(-0.1, 0.0).is_err());
        assert!(terrain(FRAC_PI_2, 0.0).is_err());
    }

    #[test]
    fn test_percent_slope() {
        let t = percent_slope(100.0, 180.0).unwrap();
        assert!((*t.slope() - FRAC_PI_4).abs() < 1e-12);
        assert!((*t.aspect() - PI).abs() < 1e-12);
        assert!(percent_slope(-5.0, 0.0).is_err());
    }
}
