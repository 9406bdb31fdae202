use crate::core::units::{round_to_dp, watts_to_kilowatts};
use crate::input::PvArray;

/// Derived electrical characteristics of one array, all pure functions of
/// the array's panel ratings and wiring topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayElectrics {
    /// Nameplate capacity in W.
    pub array_capacity: f64,
    /// Open-circuit voltage of one string, in V.
    pub string_voltage_voc: f64,
    /// Maximum-power-point voltage of one string, in V.
    pub string_voltage_vmp: f64,
    /// Short-circuit current of the paralleled strings, in A.
    pub string_current_isc: f64,
    /// Maximum-power-point current of the paralleled strings, in A.
    pub string_current_imp: f64,
}

/// Derive capacity and string-level voltage/current for one array.
///
/// Voltages scale with panels in series per string; currents scale with
/// strings in parallel. Capacity is panel wattage times panel count, in W,
/// with no rounding at this stage.
pub fn calculate_array_electrics(array: &PvArray) -> ArrayElectrics {
    let panels_per_string = array.panels_per_string() as f64;
    let strings_in_parallel = array.strings_in_parallel() as f64;
    ArrayElectrics {
        array_capacity: array.panel_wattage * array.panel_count as f64,
        string_voltage_voc: array.voc_rated * panels_per_string,
        string_voltage_vmp: array.vmp_rated * panels_per_string,
        string_current_isc: array.isc_rated * strings_in_parallel,
        string_current_imp: array.imp_rated * strings_in_parallel,
    }
}

/// Total system capacity in kWp across all arrays, rounded to 2 decimal
/// places half away from zero.
pub fn total_capacity_kwp(arrays: &[PvArray]) -> f64 {
    let total_watts: f64 = arrays
        .iter()
        .map(|array| array.panel_wattage * array.panel_count as f64)
        .sum();
    round_to_dp(watts_to_kilowatts(total_watts), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::test_support::array;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(400., 10, 4000.)]
    #[case(410., 1, 410.)]
    #[case(350., 16, 5600.)]
    fn should_calculate_capacity_as_exact_product(
        #[case] wattage: f64,
        #[case] count: u32,
        #[case] expected: f64,
    ) {
        assert_eq!(
            calculate_array_electrics(&array(wattage, count)).array_capacity,
            expected
        );
    }

    #[rstest]
    fn should_assume_single_series_string_when_topology_unset() {
        let electrics = calculate_array_electrics(&array(400., 10));
        assert_relative_eq!(electrics.string_voltage_voc, 410.);
        assert_relative_eq!(electrics.string_voltage_vmp, 345.);
        assert_relative_eq!(electrics.string_current_isc, 13.2);
        assert_relative_eq!(electrics.string_current_imp, 12.4);
    }

    #[rstest]
    fn should_scale_voltage_by_series_and_current_by_parallel() {
        let mut two_strings = array(400., 10);
        two_strings.panels_per_string = Some(5);
        two_strings.strings_in_parallel = Some(2);
        let electrics = calculate_array_electrics(&two_strings);
        assert_relative_eq!(electrics.string_voltage_voc, 205.);
        assert_relative_eq!(electrics.string_current_isc, 26.4);
        assert_relative_eq!(electrics.array_capacity, 4000.);
    }

    #[rstest]
    fn should_total_capacity_across_arrays_in_kwp() {
        let arrays = vec![array(4000., 1), array(3000., 2)];
        assert_eq!(total_capacity_kwp(&arrays), 10.00);
    }

    #[rstest]
    fn should_round_total_capacity_to_two_decimal_places() {
        // 3 x 406 W = 1218 W = 1.218 kWp -> 1.22
        let arrays = vec![array(406., 3)];
        assert_eq!(total_capacity_kwp(&arrays), 1.22);
    }

    #[rstest]
    fn should_total_empty_array_list_to_zero() {
        assert_eq!(total_capacity_kwp(&[]), 0.);
    }
}
