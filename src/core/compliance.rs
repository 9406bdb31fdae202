use crate::core::array_electrics::total_capacity_kwp;
use crate::core::dno::{resolve_dno, DnoRecord};
use crate::core::grid_connection::{suggest_connection_category, ConnectionCategory};
use crate::core::mpan::{validate_mpan, MpanValidation};
use crate::input::{PhaseConfiguration, SolarPvFormData};

/// Header block for the installation certificate: the compliance facts an
/// assessor reads before the test schedules. Pure composition of the other
/// calculators over one form snapshot, no rules of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceSummary {
    pub total_capacity_kwp: f64,
    pub connection_category: ConnectionCategory,
    /// True when there is at least one array and every array's panel model
    /// is MCS certified.
    pub arrays_mcs_certified: bool,
    /// True when there is at least one inverter and every inverter carries
    /// G98/G99 type-test certification.
    pub inverters_g98_g99_certified: bool,
    pub dno: Option<&'static DnoRecord>,
    pub mpan: MpanValidation,
}

pub fn compliance_summary(
    form: &SolarPvFormData,
    phases: PhaseConfiguration,
    postcode: &str,
    mpan: &str,
) -> ComplianceSummary {
    let total_capacity_kwp = total_capacity_kwp(&form.arrays);
    ComplianceSummary {
        total_capacity_kwp,
        connection_category: suggest_connection_category(total_capacity_kwp, phases),
        arrays_mcs_certified: !form.arrays.is_empty()
            && form.arrays.iter().all(|array| array.mcs_certified),
        inverters_g98_g99_certified: !form.inverters.is_empty()
            && form.inverters.iter().all(|inverter| inverter.g98_g99_certified),
        dno: resolve_dno(postcode),
        mpan: validate_mpan(mpan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::test_support::{array, inverter};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn form() -> SolarPvFormData {
        SolarPvFormData {
            arrays: vec![array(400., 10)],
            inverters: vec![inverter("inverter-1", 4.0)],
            ..Default::default()
        }
    }

    #[rstest]
    fn should_compose_the_certificate_header_facts(form: SolarPvFormData) {
        let summary = compliance_summary(
            &form,
            PhaseConfiguration::Single,
            "BN1 1AA",
            "1234567890123",
        );
        assert_eq!(summary.total_capacity_kwp, 4.00);
        assert_eq!(summary.connection_category, ConnectionCategory::G99);
        assert!(summary.arrays_mcs_certified);
        assert!(summary.inverters_g98_g99_certified);
        assert_eq!(summary.dno.unwrap().name, "UK Power Networks");
        assert!(summary.mpan.valid);
    }

    #[rstest]
    fn should_not_claim_certification_for_an_empty_system() {
        let summary = compliance_summary(
            &SolarPvFormData::default(),
            PhaseConfiguration::Single,
            "",
            "",
        );
        assert!(!summary.arrays_mcs_certified);
        assert!(!summary.inverters_g98_g99_certified);
        assert_eq!(summary.connection_category, ConnectionCategory::G98);
        assert_eq!(summary.dno, None);
        assert!(!summary.mpan.valid);
    }

    #[rstest]
    fn should_surface_a_single_uncertified_panel_model(mut form: SolarPvFormData) {
        form.arrays.push({
            let mut uncertified = array(350., 4);
            uncertified.mcs_certified = false;
            uncertified
        });
        let summary = compliance_summary(
            &form,
            PhaseConfiguration::Single,
            "BN1 1AA",
            "1234567890123",
        );
        assert!(!summary.arrays_mcs_certified);
    }
}
