use crate::core_types::units::{
    Feet, Fraction, KilogramsPerSquareMeter, KjPerKg, Meters, Percent, SurfaceAreaToVolume,
};
use crate::error::{require_finite, FireBehaviorError, Result};
use serde::{Deserialize, Serialize};

/// Surface-area-to-volume ratio of 10-hour fuels, 1/ft
pub(crate) const DEAD_10H_SAV_PER_FOOT: f64 = 109.0;

/// Surface-area-to-volume ratio of 100-hour fuels, 1/ft
pub(crate) const DEAD_100H_SAV_PER_FOOT: f64 = 30.0;

/// Parameters of a surface fuel model (Anderson 1982, Scott & Burgan 2005)
///
/// Values are stored in metric units; the published tables are US customary
/// and go through [`FuelModelParameters::from_us_customary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModelParameters {
    pub model_id: u32,
    pub code: String,
    pub name: String,

    pub dead_1h_load: KilogramsPerSquareMeter,
    pub dead_10h_load: KilogramsPerSquareMeter,
    pub dead_100h_load: KilogramsPerSquareMeter,
    pub live_herb_load: KilogramsPerSquareMeter,
    pub live_woody_load: KilogramsPerSquareMeter,

    pub dead_1h_sav: SurfaceAreaToVolume,
    pub dead_10h_sav: SurfaceAreaToVolume,
    pub dead_100h_sav: SurfaceAreaToVolume,
    pub live_herb_sav: SurfaceAreaToVolume,
    pub live_woody_sav: SurfaceAreaToVolume,

    pub fuel_bed_depth: Meters,
    /// Dead fuel moisture of extinction
    pub moisture_of_extinction: Fraction,
    /// Low heat content of both dead and live fuel
    pub heat_content: KjPerKg,
    /// Dynamic models transfer cured live herbaceous load to the dead pool
    pub dynamic: bool,
}

/// Row of a published fuel model table in its native units
///
/// Loads in tons/acre, SAV in 1/ft, depth in ft, extinction in percent,
/// heat content in Btu/lb.
#[derive(Debug, Clone, Copy)]
pub struct StandardFuelModel {
    pub id: u32,
    pub code: &'static str,
    pub name: &'static str,
    pub dead_1h: f64,
    pub dead_10h: f64,
    pub dead_100h: f64,
    pub live_herb: f64,
    pub live_woody: f64,
    pub dynamic: bool,
    pub sav_1h: f64,
    pub sav_herb: f64,
    pub sav_woody: f64,
    pub depth: f64,
    pub extinction: f64,
    pub heat: f64,
}

impl FuelModelParameters {
    /// Convert a published table row into metric parameters
    pub fn from_us_customary(row: &StandardFuelModel) -> Self {
        let load = KilogramsPerSquareMeter::from_tons_per_acre;
        // Coarse dead classes use fixed ratios, only when the class is loaded
        let fixed_sav = |tons: f64, per_foot: f64| {
            if tons > 0.0 {
                SurfaceAreaToVolume::from_per_foot(per_foot)
            } else {
                SurfaceAreaToVolume::new(0.0)
            }
        };
        FuelModelParameters {
            model_id: row.id,
            code: row.code.to_string(),
            name: row.name.to_string(),
            dead_1h_load: load(row.dead_1h),
            dead_10h_load: load(row.dead_10h),
            dead_100h_load: load(row.dead_100h),
            live_herb_load: load(row.live_herb),
            live_woody_load: load(row.live_woody),
            dead_1h_sav: SurfaceAreaToVolume::from_per_foot(row.sav_1h),
            dead_10h_sav: fixed_sav(row.dead_10h, DEAD_10H_SAV_PER_FOOT),
            dead_100h_sav: fixed_sav(row.dead_100h, DEAD_100H_SAV_PER_FOOT),
            live_herb_sav: SurfaceAreaToVolume::from_per_foot(row.sav_herb),
            live_woody_sav: SurfaceAreaToVolume::from_per_foot(row.sav_woody),
            fuel_bed_depth: Feet::new(row.depth).to_meters(),
            moisture_of_extinction: Percent::new(row.extinction).to_fraction(),
            heat_content: KjPerKg::from_btu_per_pound(row.heat),
            dynamic: row.dynamic,
        }
    }

    /// Total fuel load over all classes
    pub fn total_load(&self) -> KilogramsPerSquareMeter {
        self.dead_1h_load
            + self.dead_10h_load
            + self.dead_100h_load
            + self.live_herb_load
            + self.live_woody_load
    }

    /// True when the model carries any fuel on a bed of positive depth
    pub fn is_burnable(&self) -> bool {
        *self.total_load() > 0.0 && *self.fuel_bed_depth > 0.0
    }

    /// Check the parameters describe a physically valid fuel bed.
    ///
    /// # Errors
    /// [`FireBehaviorError::Model`] for a non-positive bed depth, no fuel at all,
    /// a loaded class without a positive SAV ratio, or a non-positive
    /// moisture of extinction or heat content.
    pub fn validate(&self) -> Result<()> {
        let id = self.model_id;
        let depth = *self.fuel_bed_depth;
        if !depth.is_finite() || depth <= 0.0 {
            return Err(FireBehaviorError::model(
                id,
                format!("fuel bed depth must be positive, got {depth} m"),
            ));
        }
        let classes = [
            ("1-h", self.dead_1h_load, self.dead_1h_sav),
            ("10-h", self.dead_10h_load, self.dead_10h_sav),
            ("100-h", self.dead_100h_load, self.dead_100h_sav),
            ("live herbaceous", self.live_herb_load, self.live_herb_sav),
            ("live woody", self.live_woody_load, self.live_woody_sav),
        ];
        for (class, load, sav) in classes {
            if !load.is_finite() || *load < 0.0 {
                return Err(FireBehaviorError::model(
                    id,
                    format!("{class} load must be a non-negative number, got {}", *load),
                ));
            }
            if *load > 0.0 && (!sav.is_finite() || *sav <= 0.0) {
                return Err(FireBehaviorError::model(
                    id,
                    format!("{class} fuel is loaded but its SAV ratio is {}", *sav),
                ));
            }
        }
        if *self.total_load() <= 0.0 {
            return Err(FireBehaviorError::model(id, "all fuel loads are zero"));
        }
        let extinction = *self.moisture_of_extinction;
        if !extinction.is_finite() || extinction <= 0.0 {
            return Err(FireBehaviorError::model(id, "moisture of extinction must be positive"));
        }
        let heat = *self.heat_content;
        if !heat.is_finite() || heat <= 0.0 {
            return Err(FireBehaviorError::model(id, "heat content must be positive"));
        }
        Ok(())
    }
}

/// Moisture content of each fuel class, as fractions of oven-dry weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelMoistureState {
    dead_1h: Fraction,
    dead_10h: Fraction,
    dead_100h: Fraction,
    live_herb: Fraction,
    live_woody: Fraction,
}

impl FuelMoistureState {
    /// Create a validated moisture state.
    ///
    /// # Errors
    /// [`FireBehaviorError::Input`] if any class is negative or non-finite.
    pub fn new(
        dead_1h: Fraction,
        dead_10h: Fraction,
        dead_100h: Fraction,
        live_herb: Fraction,
        live_woody: Fraction,
    ) -> Result<Self> {
        let state = FuelMoistureState {
            dead_1h,
            dead_10h,
            dead_100h,
            live_herb,
            live_woody,
        };
        state.validate()?;
        Ok(state)
    }

    /// Re-check a state that may have been deserialized
    ///
    /// # Errors
    /// As for [`FuelMoistureState::new`].
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("dead 1-h moisture", self.dead_1h),
            ("dead 10-h moisture", self.dead_10h),
            ("dead 100-h moisture", self.dead_100h),
            ("live herbaceous moisture", self.live_herb),
            ("live woody moisture", self.live_woody),
        ] {
            if require_finite(field, *value)? < 0.0 {
                return Err(FireBehaviorError::input(
                    field,
                    format!("must be non-negative, got {}", *value),
                ));
            }
        }
        Ok(())
    }

    /// Create from percentages (6.0 = 6 %)
    ///
    /// # Errors
    /// As for [`FuelMoistureState::new`].
    pub fn from_percent(
        dead_1h: f64,
        dead_10h: f64,
        dead_100h: f64,
        live_herb: f64,
        live_woody: f64,
    ) -> Result<Self> {
        Self::new(
            Percent::new(dead_1h).to_fraction(),
            Percent::new(dead_10h).to_fraction(),
            Percent::new(dead_100h).to_fraction(),
            Percent::new(live_herb).to_fraction(),
            Percent::new(live_woody).to_fraction(),
        )
    }

    /// Fuels after a week of hot, dry weather (Rothermel et al. 1986)
    pub fn hot_and_dry() -> Self {
        Self::preset(6.0, 7.0, 8.0, 70.0, 70.0)
    }

    /// Fuels after a week between hot/dry and cool/wet weather
    pub fn moderate() -> Self {
        Self::preset(16.0, 17.0, 18.0, 76.0, 76.0)
    }

    /// Fuels after a week of cool, wet weather
    pub fn cool_and_wet() -> Self {
        Self::preset(76.0, 77.0, 78.0, 100.0, 100.0)
    }

    fn preset(d1: f64, d10: f64, d100: f64, herb: f64, woody: f64) -> Self {
        FuelMoistureState {
            dead_1h: Percent::new(d1).to_fraction(),
            dead_10h: Percent::new(d10).to_fraction(),
            dead_100h: Percent::new(d100).to_fraction(),
            live_herb: Percent::new(herb).to_fraction(),
            live_woody: Percent::new(woody).to_fraction(),
        }
    }

    /// Copy of this state with a new 1-hour dead moisture
    pub(crate) fn with_dead_1h(self, dead_1h: Fraction) -> Self {
        FuelMoistureState { dead_1h, ..self }
    }

    pub fn dead_1h(&self) -> Fraction {
        self.dead_1h
    }

    pub fn dead_10h(&self) -> Fraction {
        self.dead_10h
    }

    pub fn dead_100h(&self) -> Fraction {
        self.dead_100h
    }

    pub fn live_herb(&self) -> Fraction {
        self.live_herb
    }

    pub fn live_woody(&self) -> Fraction {
        self.live_woody
    }
}
