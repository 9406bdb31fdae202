use crate::input::{ArrayTestResult, Inverter, InverterTestResult, PvArray};

/// Commissioning test-record initialization. Both operations follow the
/// same merge rule: a record already present for an entity's id is kept
/// verbatim, a missing record is created blank, and the returned list
/// replaces the previous one wholesale, so there is exactly one record per
/// current entity with no orphans and no duplicates. Calling either
/// operation twice on an unchanged list is a no-op.

/// Build the array test-record list for the current arrays. New records are
/// pre-filled with expected Voc/Isc from the array's derived string values.
pub fn initialise_array_tests(
    arrays: &[PvArray],
    existing: &[ArrayTestResult],
) -> Vec<ArrayTestResult> {
    arrays
        .iter()
        .map(|array| {
            existing
                .iter()
                .find(|record| record.array_id == array.id)
                .cloned()
                .unwrap_or_else(|| ArrayTestResult {
                    array_id: array.id.clone(),
                    expected_voc: array.string_voltage_voc,
                    expected_isc: array.string_current_isc,
                    ..Default::default()
                })
        })
        .collect()
}

/// Build the inverter test-record list for the current inverters.
pub fn initialise_inverter_tests(
    inverters: &[Inverter],
    existing: &[InverterTestResult],
) -> Vec<InverterTestResult> {
    inverters
        .iter()
        .map(|inverter| {
            existing
                .iter()
                .find(|record| record.inverter_id == inverter.id)
                .cloned()
                .unwrap_or_else(|| InverterTestResult {
                    inverter_id: inverter.id.clone(),
                    ..Default::default()
                })
        })
        .collect()
}
