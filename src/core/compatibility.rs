use crate::catalog::Catalog;
use crate::core::units::watts_to_kilowatts;
use crate::input::PvArray;
use tracing::debug;

/// Outcome of checking a set of arrays against one inverter's input limits.
/// Errors are hard electrical violations and make the pairing incompatible;
/// warnings flag questionable sizing but never block compatibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// DC arrays above this multiple of the inverter's rated DC power draw an
/// oversizing warning, the conventional limit in inverter warranty terms.
pub const DC_OVERSIZE_RATIO_LIMIT: f64 = 1.3;

/// Validate every array's string electrics against the named inverter.
///
/// Arrays whose derived string values have not been computed yet are
/// skipped rather than failing the whole validation. Messages from the
/// per-string check are prefixed with the array's 1-based position so they
/// can be traced back to a row on the form.
pub fn validate_inverter_compatibility(
    catalog: &dyn Catalog,
    inverter_id: &str,
    arrays: &[PvArray],
) -> CompatibilityReport {
    let Some(inverter) = catalog.find_inverter_by_id(inverter_id) else {
        return CompatibilityReport {
            compatible: false,
            warnings: vec![],
            errors: vec!["Inverter not found".to_string()],
        };
    };

    let mut warnings = vec![];
    let mut errors = vec![];

    for (index, array) in arrays.iter().enumerate() {
        let (Some(voc), Some(isc)) = (array.string_voltage_voc, array.string_current_isc) else {
            debug!(
                array_id = %array.id,
                "skipping compatibility check for array without derived string values"
            );
            continue;
        };
        let check = catalog.check_inverter_compatibility(inverter_id, voc, isc);
        let prefix = format!("Array {}: ", index + 1);
        warnings.extend(check.warnings.into_iter().map(|w| format!("{prefix}{w}")));
        errors.extend(check.errors.into_iter().map(|e| format!("{prefix}{e}")));
    }

    let total_dc_kw: f64 = arrays
        .iter()
        .map(|array| {
            array
                .array_capacity
                .unwrap_or(array.panel_wattage * array.panel_count as f64)
        })
        .map(watts_to_kilowatts)
        .sum();
    let oversize_limit_kw = DC_OVERSIZE_RATIO_LIMIT * inverter.rated_power_dc;
    if total_dc_kw > oversize_limit_kw {
        warnings.push(format!(
            "Total array capacity {total_dc_kw:.1} kWp exceeds the recommended DC oversizing limit of {oversize_limit_kw:.1} kWp for this inverter"
        ));
    }

    debug!(
        inverter_id,
        warnings = warnings.len(),
        errors = errors.len(),
        "inverter compatibility validated"
    );
    CompatibilityReport {
        compatible: errors.is_empty(),
        warnings,
        errors,
    }
}
