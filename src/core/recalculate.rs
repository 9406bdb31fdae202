use crate::core::array_electrics::{calculate_array_electrics, total_capacity_kwp};
use crate::core::carbon::GridCarbonIntensity;
use crate::core::yield_estimate::total_annual_yield_kwh;
use crate::input::{PvArray, SolarPvFormData};
use tracing::debug;

/// A single field write against the externally-owned form state. Patches are
/// plain data so the state owner can apply them however it stores fields.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldPatch {
    Arrays(Vec<PvArray>),
    /// Total system capacity in kWp.
    TotalCapacity(f64),
    /// Estimated annual yield in kWh.
    EstimatedAnnualYield(f64),
    /// Annual CO2 avoided in kg.
    Co2SavingsAnnual(f64),
}

/// Recompute every derived field across the form after an edit.
///
/// Patches are always emitted in the order arrays, total capacity, annual
/// yield, CO2 savings. Each later value is computed from the locally
/// recomputed array list, never from a re-read of the external store, so
/// the result does not depend on when (or whether) the owner commits the
/// earlier patches. The whole operation is referentially transparent:
/// re-running it on the same snapshot yields identical patches.
pub fn recalculate(form: &SolarPvFormData, grid_intensity: GridCarbonIntensity) -> Vec<FieldPatch> {
    let arrays: Vec<PvArray> = form
        .arrays
        .iter()
        .map(|array| {
            let electrics = calculate_array_electrics(array);
            PvArray {
                array_capacity: Some(electrics.array_capacity),
                string_voltage_voc: Some(electrics.string_voltage_voc),
                string_voltage_vmp: Some(electrics.string_voltage_vmp),
                string_current_isc: Some(electrics.string_current_isc),
                string_current_imp: Some(electrics.string_current_imp),
                ..array.clone()
            }
        })
        .collect();

    let total_capacity = total_capacity_kwp(&arrays);
    let annual_yield = total_annual_yield_kwh(&arrays);
    let co2_savings = grid_intensity.annual_savings_kg(annual_yield);
    debug!(
        arrays = arrays.len(),
        total_capacity, annual_yield, co2_savings, "form recalculated"
    );

    vec![
        FieldPatch::Arrays(arrays),
        FieldPatch::TotalCapacity(total_capacity),
        FieldPatch::EstimatedAnnualYield(annual_yield),
        FieldPatch::Co2SavingsAnnual(co2_savings),
    ]
}

/// Apply a patch list to a snapshot, producing the new snapshot. Provided
/// for callers (and tests) that hold plain values rather than a field store.
pub fn apply_patches(form: &SolarPvFormData, patches: Vec<FieldPatch>) -> SolarPvFormData {
    let mut next = form.clone();
    for patch in patches {
        match patch {
            FieldPatch::Arrays(arrays) => next.arrays = arrays,
            FieldPatch::TotalCapacity(value) => next.total_capacity = Some(value),
            FieldPatch::EstimatedAnnualYield(value) => next.estimated_annual_yield = Some(value),
            FieldPatch::Co2SavingsAnnual(value) => next.co2_savings_annual = Some(value),
        }
    }
    next
}
