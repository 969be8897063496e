//! Standard Fire Behavior Fuel Models
//!
//! Registry of the original 13 fuel models (Anderson 1982), the 40 models of
//! Scott & Burgan (2005) and the nonburnable codes, keyed by numeric model ID.
//! Rows are stored as published (tons/acre, 1/ft, ft, %, Btu/lb) and
//! converted to metric [`FuelModelParameters`] once, on first use.
//!
//! # References
//! - Anderson, H.E. (1982). "Aids to determining fuel models for estimating fire
//!   behavior." USDA Forest Service General Technical Report INT-122
//! - Scott, J.H., Burgan, R.E. (2005). "Standard fire behavior fuel models: a
//!   comprehensive set for use with Rothermel's surface fire spread model."
//!   USDA Forest Service General Technical Report RMRS-GTR-153

use crate::core_types::fuel::{FuelModelParameters, StandardFuelModel};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static CATALOG: LazyLock<FxHashMap<u32, FuelModelParameters>> = LazyLock::new(|| {
    STANDARD_FUEL_MODELS
        .iter()
        .map(|row| (row.id, FuelModelParameters::from_us_customary(row)))
        .collect()
});

/// Fuel model by numeric ID
pub fn get(model_id: u32) -> Option<&'static FuelModelParameters> {
    CATALOG.get(&model_id)
}

/// Fuel model by code, e.g. `"FM1"` or `"GR2"` (case-insensitive)
pub fn by_code(code: &str) -> Option<&'static FuelModelParameters> {
    STANDARD_FUEL_MODELS
        .iter()
        .find(|row| row.code.eq_ignore_ascii_case(code))
        .and_then(|row| get(row.id))
}

/// All model IDs in ascending order
pub fn ids() -> Vec<u32> {
    let mut ids: Vec<u32> = CATALOG.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// The published rows the registry is built from
pub fn standard_rows() -> &'static [StandardFuelModel] {
    STANDARD_FUEL_MODELS
}

#[rustfmt::skip]
static STANDARD_FUEL_MODELS: &[StandardFuelModel] = &[
    StandardFuelModel { id: 1, code: "FM1", name: "Short Grass (1 foot)", dead_1h: 0.74, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 3500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 1.0, extinction: 12.0, heat: 8000.0 },
    StandardFuelModel { id: 2, code: "FM2", name: "Timber (grass and understory)", dead_1h: 2.0, dead_10h: 1.0, dead_100h: 0.5, live_herb: 0.0, live_woody: 0.5, dynamic: false, sav_1h: 3000.0, sav_herb: 0.0, sav_woody: 1500.0, depth: 1.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 3, code: "FM3", name: "Tall grass (2.5 feet)", dead_1h: 3.01, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 2.5, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 4, code: "FM4", name: "Chaparral (6 feet)", dead_1h: 5.01, dead_10h: 4.01, dead_100h: 2.0, live_herb: 0.0, live_woody: 5.01, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1500.0, depth: 6.0, extinction: 20.0, heat: 8000.0 },
    StandardFuelModel { id: 5, code: "FM5", name: "Brush (2 feet)", dead_1h: 1.0, dead_10h: 0.5, dead_100h: 0.0, live_herb: 0.0, live_woody: 2.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1500.0, depth: 2.0, extinction: 20.0, heat: 8000.0 },
    StandardFuelModel { id: 6, code: "FM6", name: "Dormant brush, hardwood slash", dead_1h: 1.5, dead_10h: 2.5, dead_100h: 2.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1750.0, sav_herb: 0.0, sav_woody: 0.0, depth: 2.5, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 7, code: "FM7", name: "Southern rough", dead_1h: 1.13, dead_10h: 1.87, dead_100h: 1.5, live_herb: 0.0, live_woody: 0.37, dynamic: false, sav_1h: 1750.0, sav_herb: 0.0, sav_woody: 1550.0, depth: 2.5, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 8, code: "FM8", name: "Closed timber litter", dead_1h: 1.5, dead_10h: 1.0, dead_100h: 2.5, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.2, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 9, code: "FM9", name: "Hardwood litter", dead_1h: 2.92, dead_10h: 0.41, dead_100h: 0.15, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.2, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 10, code: "FM10", name: "Timber (litter and understory)", dead_1h: 3.01, dead_10h: 2.0, dead_100h: 5.01, live_herb: 0.0, live_woody: 2.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1500.0, depth: 1.0, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 11, code: "FM11", name: "Light logging slash", dead_1h: 1.5, dead_10h: 4.51, dead_100h: 5.51, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 1.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 12, code: "FM12", name: "Medium logging slash", dead_1h: 4.01, dead_10h: 14.03, dead_100h: 16.53, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 2.3, extinction: 20.0, heat: 8000.0 },
    StandardFuelModel { id: 13, code: "FM13", name: "Heavy logging slash", dead_1h: 7.01, dead_10h: 23.04, dead_100h: 28.05, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1500.0, sav_herb: 0.0, sav_woody: 0.0, depth: 3.0, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 101, code: "GR1", name: "Short, Sparse Dry Climate Grass", dead_1h: 0.1, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.3, live_woody: 0.0, dynamic: true, sav_1h: 2200.0, sav_herb: 2000.0, sav_woody: 0.0, depth: 0.4, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 102, code: "GR2", name: "Low Load, Dry Climate Grass", dead_1h: 0.1, dead_10h: 0.0, dead_100h: 0.0, live_herb: 1.0, live_woody: 0.0, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 0.0, depth: 1.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 103, code: "GR3", name: "Low Load, Very Coarse, Humid Climate Grass", dead_1h: 0.1, dead_10h: 0.4, dead_100h: 0.0, live_herb: 1.5, live_woody: 0.0, dynamic: true, sav_1h: 1500.0, sav_herb: 1300.0, sav_woody: 0.0, depth: 2.0, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 104, code: "GR4", name: "Moderate Load, Dry Climate Grass", dead_1h: 0.25, dead_10h: 0.0, dead_100h: 0.0, live_herb: 1.9, live_woody: 0.0, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 0.0, depth: 2.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 105, code: "GR5", name: "Low Load, Humid Climate Grass", dead_1h: 0.4, dead_10h: 0.0, dead_100h: 0.0, live_herb: 2.5, live_woody: 0.0, dynamic: true, sav_1h: 1800.0, sav_herb: 1600.0, sav_woody: 0.0, depth: 1.5, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 106, code: "GR6", name: "Moderate Load, Humid Climate Grass", dead_1h: 0.1, dead_10h: 0.0, dead_100h: 0.0, live_herb: 3.4, live_woody: 0.0, dynamic: true, sav_1h: 2200.0, sav_herb: 2000.0, sav_woody: 0.0, depth: 1.5, extinction: 40.0, heat: 9000.0 },
    StandardFuelModel { id: 107, code: "GR7", name: "High Load, Dry Climate Grass", dead_1h: 1.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 5.4, live_woody: 0.0, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 0.0, depth: 3.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 108, code: "GR8", name: "High Load, Very Coarse, Humid Climate Grass", dead_1h: 0.5, dead_10h: 1.0, dead_100h: 0.0, live_herb: 7.3, live_woody: 0.0, dynamic: true, sav_1h: 1500.0, sav_herb: 1300.0, sav_woody: 0.0, depth: 4.0, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 109, code: "GR9", name: "Very High Load, Humid Climate Grass", dead_1h: 1.0, dead_10h: 1.0, dead_100h: 0.0, live_herb: 9.0, live_woody: 0.0, dynamic: true, sav_1h: 1800.0, sav_herb: 1600.0, sav_woody: 0.0, depth: 5.0, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 121, code: "GS1", name: "Low Load, Dry Climate Grass-Shrub", dead_1h: 0.2, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.5, live_woody: 0.65, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 1800.0, depth: 0.9, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 122, code: "GS2", name: "Moderate Load, Dry Climate Grass-Shrub", dead_1h: 0.5, dead_10h: 0.5, dead_100h: 0.0, live_herb: 0.6, live_woody: 1.0, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 1800.0, depth: 1.5, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 123, code: "GS3", name: "Moderate Load, Humid Climate Grass-Shrub", dead_1h: 0.3, dead_10h: 0.25, dead_100h: 0.0, live_herb: 1.45, live_woody: 1.25, dynamic: true, sav_1h: 1800.0, sav_herb: 1600.0, sav_woody: 1600.0, depth: 1.8, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 124, code: "GS4", name: "High Load, Humid Climate Grass-Shrub", dead_1h: 1.9, dead_10h: 0.3, dead_100h: 0.1, live_herb: 3.4, live_woody: 7.1, dynamic: true, sav_1h: 1800.0, sav_herb: 1600.0, sav_woody: 1600.0, depth: 2.1, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 141, code: "SH1", name: "Low Load Dry Climate Shrub", dead_1h: 0.25, dead_10h: 0.25, dead_100h: 0.0, live_herb: 0.15, live_woody: 1.3, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 1600.0, depth: 1.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 142, code: "SH2", name: "Moderate Load Dry Climate Shrub", dead_1h: 1.35, dead_10h: 2.4, dead_100h: 0.75, live_herb: 0.0, live_woody: 3.85, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 1.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 143, code: "SH3", name: "Moderate Load, Humid Climate Shrub", dead_1h: 0.45, dead_10h: 3.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 6.2, dynamic: false, sav_1h: 1600.0, sav_herb: 0.0, sav_woody: 1400.0, depth: 2.4, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 144, code: "SH4", name: "Low Load, Humid Climate Timber-Shrub", dead_1h: 0.85, dead_10h: 1.15, dead_100h: 0.2, live_herb: 0.0, live_woody: 2.55, dynamic: false, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 1600.0, depth: 3.0, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 145, code: "SH5", name: "High Load, Dry Climate Shrub", dead_1h: 3.6, dead_10h: 2.1, dead_100h: 0.0, live_herb: 0.0, live_woody: 2.9, dynamic: false, sav_1h: 750.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 6.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 146, code: "SH6", name: "Low Load, Humid Climate Shrub", dead_1h: 2.9, dead_10h: 1.45, dead_100h: 0.0, live_herb: 0.0, live_woody: 1.4, dynamic: false, sav_1h: 750.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 2.0, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 147, code: "SH7", name: "Very High Load, Dry Climate Shrub", dead_1h: 3.5, dead_10h: 5.3, dead_100h: 2.2, live_herb: 0.0, live_woody: 3.4, dynamic: false, sav_1h: 750.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 6.0, extinction: 15.0, heat: 8000.0 },
    StandardFuelModel { id: 148, code: "SH8", name: "High Load, Humid Climate Shrub", dead_1h: 2.05, dead_10h: 3.4, dead_100h: 0.85, live_herb: 0.0, live_woody: 4.35, dynamic: false, sav_1h: 750.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 3.0, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 149, code: "SH9", name: "Very High Load, Humid Climate Shrub", dead_1h: 4.5, dead_10h: 2.45, dead_100h: 0.0, live_herb: 1.55, live_woody: 7.0, dynamic: true, sav_1h: 750.0, sav_herb: 1800.0, sav_woody: 1500.0, depth: 4.4, extinction: 40.0, heat: 8000.0 },
    StandardFuelModel { id: 161, code: "TU1", name: "Low Load Dry Climate Timber-Grass-Shrub", dead_1h: 0.2, dead_10h: 0.9, dead_100h: 1.5, live_herb: 0.2, live_woody: 0.9, dynamic: true, sav_1h: 2000.0, sav_herb: 1800.0, sav_woody: 1600.0, depth: 0.6, extinction: 20.0, heat: 8000.0 },
    StandardFuelModel { id: 162, code: "TU2", name: "Moderate Load, Humid Climate Timber-Shrub", dead_1h: 0.95, dead_10h: 1.8, dead_100h: 1.25, live_herb: 0.0, live_woody: 0.2, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 1.0, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 163, code: "TU3", name: "Moderate Load, Humid Climate Timber-Grass-Shrub", dead_1h: 1.1, dead_10h: 0.15, dead_100h: 0.25, live_herb: 0.65, live_woody: 1.1, dynamic: true, sav_1h: 1800.0, sav_herb: 1600.0, sav_woody: 1400.0, depth: 1.3, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 164, code: "TU4", name: "Dwarf Conifer With Understory", dead_1h: 4.5, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 2.0, dynamic: false, sav_1h: 2300.0, sav_herb: 0.0, sav_woody: 2000.0, depth: 0.5, extinction: 12.0, heat: 8000.0 },
    StandardFuelModel { id: 165, code: "TU5", name: "Very High Load, Dry Climate Timber-Shrub", dead_1h: 4.0, dead_10h: 4.0, dead_100h: 3.0, live_herb: 0.0, live_woody: 3.0, dynamic: false, sav_1h: 1500.0, sav_herb: 0.0, sav_woody: 750.0, depth: 1.0, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 181, code: "TL1", name: "Low Load Compact Conifer Litter", dead_1h: 1.0, dead_10h: 2.2, dead_100h: 3.6, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.2, extinction: 30.0, heat: 8000.0 },
    StandardFuelModel { id: 182, code: "TL2", name: "Low Load Broadleaf Litter", dead_1h: 1.4, dead_10h: 2.3, dead_100h: 2.2, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.2, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 183, code: "TL3", name: "Moderate Load Conifer Litter", dead_1h: 0.5, dead_10h: 2.2, dead_100h: 2.8, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.3, extinction: 20.0, heat: 8000.0 },
    StandardFuelModel { id: 184, code: "TL4", name: "Small Downed Logs", dead_1h: 0.5, dead_10h: 1.5, dead_100h: 4.2, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.4, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 185, code: "TL5", name: "High Load Conifer Litter", dead_1h: 1.15, dead_10h: 2.5, dead_100h: 4.4, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 0.6, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 186, code: "TL6", name: "Moderate Load Broadleaf Litter", dead_1h: 2.4, dead_10h: 1.2, dead_100h: 1.2, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.3, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 187, code: "TL7", name: "Large Downed Logs", dead_1h: 0.3, dead_10h: 1.4, dead_100h: 8.1, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.4, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 188, code: "TL8", name: "Long-Needle Litter", dead_1h: 5.8, dead_10h: 1.4, dead_100h: 1.1, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1800.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.3, extinction: 35.0, heat: 8000.0 },
    StandardFuelModel { id: 189, code: "TL9", name: "Very High Load Broadleaf Litter", dead_1h: 6.65, dead_10h: 3.3, dead_100h: 4.15, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 1800.0, sav_herb: 0.0, sav_woody: 1600.0, depth: 0.6, extinction: 35.0, heat: 8000.0 },
    StandardFuelModel { id: 201, code: "SB1", name: "Low Load Activity Fuel", dead_1h: 1.5, dead_10h: 3.0, dead_100h: 11.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 1.0, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 202, code: "SB2", name: "Moderate Load Activity Fuel or Low Load Blowdown", dead_1h: 4.5, dead_10h: 4.25, dead_100h: 4.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 1.0, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 203, code: "SB3", name: "High Load Activity Fuel or Moderate Load Blowdown", dead_1h: 5.5, dead_10h: 2.75, dead_100h: 3.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 1.2, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 204, code: "SB4", name: "High Load Blowdown", dead_1h: 5.25, dead_10h: 3.5, dead_100h: 5.25, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 2000.0, sav_herb: 0.0, sav_woody: 0.0, depth: 2.7, extinction: 25.0, heat: 8000.0 },
    StandardFuelModel { id: 91, code: "NB1", name: "Urban/Developed", dead_1h: 0.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 0.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.0, extinction: 0.0, heat: 0.0 },
    StandardFuelModel { id: 92, code: "NB2", name: "Snow/Ice", dead_1h: 0.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 0.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.0, extinction: 0.0, heat: 0.0 },
    StandardFuelModel { id: 93, code: "NB3", name: "Agriculture", dead_1h: 0.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 0.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.0, extinction: 0.0, heat: 0.0 },
    StandardFuelModel { id: 98, code: "NB8", name: "Open Water", dead_1h: 0.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 0.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.0, extinction: 0.0, heat: 0.0 },
    StandardFuelModel { id: 99, code: "NB9", name: "Bare Ground", dead_1h: 0.0, dead_10h: 0.0, dead_100h: 0.0, live_herb: 0.0, live_woody: 0.0, dynamic: false, sav_1h: 0.0, sav_herb: 0.0, sav_woody: 0.0, depth: 0.0, extinction: 0.0, heat: 0.0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        let ids = ids();
        assert_eq!(ids.len(), 13 + 40 + 5);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids[0], 1);
    }

    #[test]
    fn test_lookup_by_id_and_code() {
        let fm1 = get(1).unwrap();
        assert_eq!(fm1.code, "FM1");
        assert!((*fm1.dead_1h_load - 0.166).abs() < 0.001);
        assert_eq!(by_code("gr2").unwrap().model_id, 102);
        assert!(get(14).is_none());
        assert!(by_code("XX9").is_none());
    }

    #[test]
    fn test_burnable_rows_are_valid() {
        for row in standard_rows() {
            let model = get(row.id).unwrap();
            if model.is_burnable() {
                assert!(model.validate().is_ok(), "{} failed validation", row.code);
            } else {
                assert!(row.code.starts_with("NB"), "{} has no fuel", row.code);
            }
        }
    }
}
