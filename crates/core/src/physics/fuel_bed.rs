//! Fuel bed characterization (Rothermel 1972, Albini 1976)
//!
//! Reduces a fuel model and a moisture state to the bed-level quantities the
//! spread relations need: characteristic surface-area-to-volume ratio, packing
//! ratio, weighted net loads and moistures per category, live moisture of
//! extinction and heat sink.
//!
//! Particles are weighted by their share of the bed's surface area, first
//! within the dead or live category and then between categories. All values
//! are US customary (lb/ft², 1/ft, ft, Btu/lb).
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in
//!   wildland fuels." USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects." USDA Forest
//!   Service General Technical Report INT-30.
//! - Scott, J.H., Burgan, R.E. (2005). "Standard fire behavior fuel models."
//!   USDA Forest Service General Technical Report RMRS-GTR-153 (dynamic curing).

use crate::core_types::fuel::{FuelModelParameters, FuelMoistureState};
use crate::core_types::units::KilogramsPerSquareMeter;
use crate::error::{FireBehaviorError, Result};

/// Oven-dry particle density (lb/ft³)
pub(crate) const PARTICLE_DENSITY: f64 = 32.0;

/// Total mineral content (fraction)
pub(crate) const TOTAL_MINERAL_CONTENT: f64 = 0.0555;

/// Effective (silica-free) mineral content (fraction)
pub(crate) const EFFECTIVE_MINERAL_CONTENT: f64 = 0.010;

/// Live herbaceous moisture at and above which no herbaceous load is cured (fraction)
const UNCURED_HERB_MOISTURE: f64 = 1.2;

/// Live herbaceous moisture at and below which all herbaceous load is cured (fraction)
const CURED_HERB_MOISTURE: f64 = 0.3;

/// One size class of fuel
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Particle {
    /// Oven-dry load (lb/ft²)
    pub load: f64,
    /// Surface-area-to-volume ratio (1/ft)
    pub sav: f64,
    /// Moisture content (fraction)
    pub moisture: f64,
}

impl Particle {
    /// Mean surface area per unit bed area
    fn surface_area(&self) -> f64 {
        self.load * self.sav / PARTICLE_DENSITY
    }

    /// Effective heating number `e^(-138/σ)`
    fn heating_number(&self) -> f64 {
        (-138.0 / self.sav).exp()
    }
}

/// Area-weighted totals for the dead or live category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct CategoryTotals {
    /// Share of the bed's surface area held by this category
    pub area_fraction: f64,
    /// Weighted surface-area-to-volume ratio (1/ft)
    pub sav: f64,
    /// Weighted net (mineral-free) load (lb/ft²)
    pub net_load: f64,
    /// Weighted moisture (fraction)
    pub moisture: f64,
    /// Moisture of extinction (fraction)
    pub extinction: f64,
    /// Weighted heat of preignition factor `Σ f_i e^(-138/σ_i)(250 + 1116 M_i)` (Btu/lb)
    pub preignition: f64,
}

impl CategoryTotals {
    fn from_particles(particles: &[Particle], bed_area: f64) -> Self {
        let area: f64 = particles.iter().map(Particle::surface_area).sum();
        if area <= 0.0 {
            return Self::default();
        }
        let mut totals = CategoryTotals {
            area_fraction: area / bed_area,
            ..Self::default()
        };
        for p in particles {
            let f = p.surface_area() / area;
            totals.sav += f * p.sav;
            totals.net_load += f * p.load * (1.0 - TOTAL_MINERAL_CONTENT);
            totals.moisture += f * p.moisture;
            totals.preignition += f * p.heating_number() * (250.0 + 1116.0 * p.moisture);
        }
        totals
    }
}

/// Particle description of a fuel bed with curing already applied
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FuelBed {
    pub model_id: u32,
    pub dead: Vec<Particle>,
    pub live: Vec<Particle>,
    /// Bed depth (ft)
    pub depth: f64,
    /// Dead fuel moisture of extinction (fraction)
    pub dead_extinction: f64,
    /// Low heat content (Btu/lb)
    pub heat_content: f64,
    /// Share of the live herbaceous load moved to the dead pool
    pub cured_fraction: f64,
}

/// Fraction of herbaceous load cured at a live herbaceous moisture (fraction)
///
/// # Formula
/// ```text
/// c = 1                               M_herb ≤ 0.30
/// c = 1 - (M_herb - 0.30) / 0.90      0.30 < M_herb < 1.20
/// c = 0                               M_herb ≥ 1.20
/// ```
pub(crate) fn cured_fraction(live_herb_moisture: f64) -> f64 {
    if live_herb_moisture >= UNCURED_HERB_MOISTURE {
        0.0
    } else if live_herb_moisture <= CURED_HERB_MOISTURE {
        1.0
    } else {
        1.0 - (live_herb_moisture - CURED_HERB_MOISTURE)
            / (UNCURED_HERB_MOISTURE - CURED_HERB_MOISTURE)
    }
}

impl FuelBed {
    /// Build the particle set for a fuel model at a moisture state.
    ///
    /// Dynamic models move the cured share of their herbaceous load into a
    /// dead herbaceous particle carrying the 1-hour moisture.
    ///
    /// # Errors
    /// [`FireBehaviorError::Model`] when the parameters do not describe a
    /// burnable fuel bed.
    pub(crate) fn new(model: &FuelModelParameters, moisture: &FuelMoistureState) -> Result<Self> {
        model.validate()?;

        let load = KilogramsPerSquareMeter::pounds_per_square_foot;
        let herb_load = load(model.live_herb_load);
        let herb_sav = model.live_herb_sav.per_foot();

        let cured = if model.dynamic && herb_load > 0.0 {
            cured_fraction(*moisture.live_herb())
        } else {
            0.0
        };

        let candidates_dead = [
            Particle {
                load: load(model.dead_1h_load),
                sav: model.dead_1h_sav.per_foot(),
                moisture: *moisture.dead_1h(),
            },
            Particle {
                load: load(model.dead_10h_load),
                sav: model.dead_10h_sav.per_foot(),
                moisture: *moisture.dead_10h(),
            },
            Particle {
                load: load(model.dead_100h_load),
                sav: model.dead_100h_sav.per_foot(),
                moisture: *moisture.dead_100h(),
            },
            Particle {
                load: herb_load * cured,
                sav: herb_sav,
                moisture: *moisture.dead_1h(),
            },
        ];
        let candidates_live = [
            Particle {
                load: herb_load * (1.0 - cured),
                sav: herb_sav,
                moisture: *moisture.live_herb(),
            },
            Particle {
                load: load(model.live_woody_load),
                sav: model.live_woody_sav.per_foot(),
                moisture: *moisture.live_woody(),
            },
        ];
        let present = |p: &&Particle| p.load > 0.0 && p.sav > 0.0;

        let bed = FuelBed {
            model_id: model.model_id,
            dead: candidates_dead.iter().filter(present).copied().collect(),
            live: candidates_live.iter().filter(present).copied().collect(),
            depth: *model.fuel_bed_depth.to_feet(),
            dead_extinction: *model.moisture_of_extinction,
            heat_content: model.heat_content.btu_per_pound(),
            cured_fraction: cured,
        };
        if bed.dead.is_empty() && bed.live.is_empty() {
            return Err(FireBehaviorError::model(model.model_id, "no fuel particles"));
        }
        Ok(bed)
    }

    /// Bulk density, oven-dry load per unit bed volume (lb/ft³)
    pub(crate) fn bulk_density(&self) -> f64 {
        let load: f64 = self.dead.iter().chain(&self.live).map(|p| p.load).sum();
        load / self.depth
    }

    /// Live fuel moisture of extinction (fraction)
    ///
    /// # Formula
    /// ```text
    /// W    = Σ_dead w e^(-138/σ) / Σ_live w e^(-500/σ)
    /// M'f  = Σ_dead w e^(-138/σ) M / Σ_dead w e^(-138/σ)
    /// Mx_l = max(Mx_d, 2.9 W (1 - M'f / Mx_d) - 0.226)
    /// ```
    pub(crate) fn live_extinction(&self) -> f64 {
        let fine_dead: f64 = self.dead.iter().map(|p| p.load * p.heating_number()).sum();
        let fine_live: f64 = self
            .live
            .iter()
            .map(|p| p.load * (-500.0 / p.sav).exp())
            .sum();
        if fine_live <= 0.0 || fine_dead <= 0.0 {
            return self.dead_extinction;
        }
        let fine_dead_moisture = self
            .dead
            .iter()
            .map(|p| p.load * p.heating_number() * p.moisture)
            .sum::<f64>()
            / fine_dead;
        let ratio = fine_dead / fine_live;
        let mx = 2.9 * ratio * (1.0 - fine_dead_moisture / self.dead_extinction) - 0.226;
        mx.max(self.dead_extinction)
    }

    /// Area-weighted totals for both categories
    pub(crate) fn weigh(&self) -> (CategoryTotals, CategoryTotals) {
        let bed_area: f64 = self
            .dead
            .iter()
            .chain(&self.live)
            .map(Particle::surface_area)
            .sum();
        let mut dead = CategoryTotals::from_particles(&self.dead, bed_area);
        dead.extinction = self.dead_extinction;
        let mut live = CategoryTotals::from_particles(&self.live, bed_area);
        live.extinction = self.live_extinction();
        (dead, live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::fuel::StandardFuelModel;

    fn short_grass() -> FuelModelParameters {
        FuelModelParameters::from_us_customary(&StandardFuelModel {
            id: 1,
            code: "FM1",
            name: "Short Grass (1 foot)",
            dead_1h: 0.74,
            dead_10h: 0.0,
            dead_100h: 0.0,
            live_herb: 0.0,
            live_woody: 0.0,
            dynamic: false,
            sav_1h: 3500.0,
            sav_herb: 0.0,
            sav_woody: 0.0,
            depth: 1.0,
            extinction: 12.0,
            heat: 8000.0,
        })
    }

    fn gr2() -> FuelModelParameters {
        FuelModelParameters::from_us_customary(&StandardFuelModel {
            id: 102,
            code: "GR2",
            name: "Low Load, Dry Climate Grass",
            dead_1h: 0.10,
            dead_10h: 0.0,
            dead_100h: 0.0,
            live_herb: 1.0,
            live_woody: 0.0,
            dynamic: true,
            sav_1h: 2000.0,
            sav_herb: 1800.0,
            sav_woody: 0.0,
            depth: 1.0,
            extinction: 15.0,
            heat: 8000.0,
        })
    }

    #[test]
    fn test_curing_fraction() {
        assert_eq!(cured_fraction(1.5), 0.0);
        assert_eq!(cured_fraction(1.2), 0.0);
        assert_eq!(cured_fraction(0.3), 1.0);
        assert_eq!(cured_fraction(0.0), 1.0);
        assert!((cured_fraction(0.75) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_class_bed() {
        let bed = FuelBed::new(&short_grass(), &FuelMoistureState::hot_and_dry()).unwrap();
        assert_eq!(bed.dead.len(), 1);
        assert!(bed.live.is_empty());
        assert!((bed.depth - 1.0).abs() < 1e-9);
        // 0.74 t/ac over 1 ft
        assert!((bed.bulk_density() - 0.034).abs() < 1e-3);

        let (dead, live) = bed.weigh();
        assert!((dead.area_fraction - 1.0).abs() < 1e-12);
        assert!((dead.sav - 3500.0).abs() < 1e-6);
        assert!((dead.moisture - 0.06).abs() < 1e-12);
        assert_eq!(live.area_fraction, 0.0);
    }

    #[test]
    fn test_dynamic_model_cures_herbaceous_load() {
        let model = gr2();
        // Live herb at 60 % cures two thirds of the load
        let moisture = FuelMoistureState::from_percent(6.0, 7.0, 8.0, 60.0, 90.0).unwrap();
        let bed = FuelBed::new(&model, &moisture).unwrap();
        assert!((bed.cured_fraction - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(bed.dead.len(), 2);
        assert_eq!(bed.live.len(), 1);
        let dead_herb = bed.dead[1];
        assert!((dead_herb.moisture - 0.06).abs() < 1e-12);
        let total: f64 = bed.dead.iter().chain(&bed.live).map(|p| p.load).sum();
        assert!(
            (total - 1.10 * 2000.0 / 43560.0).abs() < 1e-9,
            "load is conserved"
        );

        // Fully green herbs stay live
        let green = FuelMoistureState::from_percent(6.0, 7.0, 8.0, 150.0, 150.0).unwrap();
        let bed = FuelBed::new(&model, &green).unwrap();
        assert_eq!(bed.cured_fraction, 0.0);
        assert_eq!(bed.dead.len(), 1);
    }

    #[test]
    fn test_live_extinction_not_below_dead() {
        let bed = FuelBed::new(&gr2(), &FuelMoistureState::hot_and_dry()).unwrap();
        assert!(bed.live_extinction() >= bed.dead_extinction);
    }

    #[test]
    fn test_invalid_bed_is_rejected() {
        let mut model = short_grass();
        model.fuel_bed_depth = crate::core_types::units::Meters::ZERO;
        let err = FuelBed::new(&model, &FuelMoistureState::hot_and_dry());
        assert!(matches!(err, Err(FireBehaviorError::Model { model_id: 1, .. })));
    }
}
