use crate::core::units::{round_to_dp, watts_to_kilowatts};
use crate::input::{Orientation, PvArray};

/// Annual yield estimation for UK installations.
///
/// The model is the flat-factor estimate used for initial system sizing:
/// a UK-average specific yield per kWp, scaled by orientation and tilt
/// factors in the style of the MCS MGD 003 irradiance tables, then derated
/// by the surveyed shading loss fraction. It deliberately ignores weather
/// data and inter-annual variation, which belong to a full irradiance model,
/// not a sizing form.

/// UK-average specific yield for an unshaded, optimally oriented system,
/// in kWh per kWp per year.
const UK_BASE_SPECIFIC_YIELD: f64 = 950.;

/// Tilt from horizontal at which the base specific yield applies, in degrees.
const OPTIMAL_TILT_DEGREES: f64 = 35.;

const ORIENTATION_FACTOR_SOUTH: f64 = 1.0;
const ORIENTATION_FACTOR_SOUTH_EAST_WEST: f64 = 0.95;
const ORIENTATION_FACTOR_EAST_WEST: f64 = 0.85;
const ORIENTATION_FACTOR_NORTH_EAST_WEST: f64 = 0.72;
const ORIENTATION_FACTOR_NORTH: f64 = 0.6;

fn orientation_factor(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::South => ORIENTATION_FACTOR_SOUTH,
        Orientation::SouthEast | Orientation::SouthWest => ORIENTATION_FACTOR_SOUTH_EAST_WEST,
        Orientation::East | Orientation::West => ORIENTATION_FACTOR_EAST_WEST,
        Orientation::NorthEast | Orientation::NorthWest => ORIENTATION_FACTOR_NORTH_EAST_WEST,
        Orientation::North => ORIENTATION_FACTOR_NORTH,
    }
}

/// Quadratic falloff either side of the optimal tilt. Worst case within the
/// physical 0-90 degree range is a vertical south wall at around 0.79 of the
/// optimal-tilt yield, consistent with the MGD 003 table corners.
fn tilt_factor(tilt_degrees: f64) -> f64 {
    let tilt = tilt_degrees.clamp(0., 90.);
    1. - ((tilt - OPTIMAL_TILT_DEGREES) / 120.).powi(2)
}

/// Estimate the annual yield of one array in kWh, unrounded.
///
/// The shading factor is a loss fraction: 0 means no shading loss, 1 means
/// fully shaded (zero yield). Values outside 0-1 are clamped. The estimate
/// is monotone non-decreasing in capacity for fixed orientation, tilt and
/// shading.
pub fn estimate_annual_yield_kwh(
    capacity_kw: f64,
    orientation: Orientation,
    tilt_degrees: f64,
    shading_factor: f64,
) -> f64 {
    let shading_derate = 1. - shading_factor.clamp(0., 1.);
    capacity_kw
        * UK_BASE_SPECIFIC_YIELD
        * orientation_factor(orientation)
        * tilt_factor(tilt_degrees)
        * shading_derate
}

/// Total estimated annual yield across all arrays, rounded to the nearest
/// whole kWh. Each array contributes according to its own orientation, tilt
/// and shading.
pub fn total_annual_yield_kwh(arrays: &[PvArray]) -> f64 {
    let total: f64 = arrays
        .iter()
        .map(|array| {
            estimate_annual_yield_kwh(
                watts_to_kilowatts(array.panel_wattage * array.panel_count as f64),
                array.orientation,
                array.tilt_degrees,
                array.shading_factor,
            )
        })
        .sum();
    round_to_dp(total, 0)
}
