use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::PhaseConfiguration;

/// This module models the panel/inverter reference catalog as an injected,
/// immutable dataset rather than a global, so callers can substitute their
/// own data source and tests can use fixtures.

/// Datasheet record for one panel model.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSpec {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    /// Nameplate power at STC, in W.
    pub wattage: f64,
    pub voc: f64,
    pub isc: f64,
    pub vmp: f64,
    pub imp: f64,
    pub mcs_certified: bool,
}

/// Datasheet record for one inverter model.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterSpec {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    /// Rated AC output power, in kW.
    pub rated_power_ac: f64,
    /// Rated DC input power, in kW.
    pub rated_power_dc: f64,
    pub mppt_count: u32,
    pub mppt_voltage_min: f64,
    pub mppt_voltage_max: f64,
    pub max_input_voltage: f64,
    pub max_input_current: f64,
    pub phases: PhaseConfiguration,
    pub mcs_certified: bool,
    pub g98_g99_certified: bool,
    pub battery_compatible: bool,
}

/// Result of checking one string's electrical values against an inverter's
/// input limits. Errors are hard violations of absolute limits; warnings
/// indicate operation outside the MPPT window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringCheck {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl InverterSpec {
    /// Check a single string's open-circuit voltage and short-circuit
    /// current against this inverter's DC input limits.
    pub fn check_string(&self, voc: f64, isc: f64) -> StringCheck {
        let mut check = StringCheck::default();
        if voc > self.max_input_voltage {
            check.errors.push(format!(
                "string Voc {voc:.1}V exceeds maximum input voltage {:.1}V",
                self.max_input_voltage
            ));
        } else if voc > self.mppt_voltage_max {
            check.warnings.push(format!(
                "string Voc {voc:.1}V is above the MPPT window maximum {:.1}V",
                self.mppt_voltage_max
            ));
        }
        if voc < self.mppt_voltage_min {
            check.warnings.push(format!(
                "string Voc {voc:.1}V is below the MPPT window minimum {:.1}V, the inverter may not start",
                self.mppt_voltage_min
            ));
        }
        if isc > self.max_input_current {
            check.errors.push(format!(
                "string Isc {isc:.1}A exceeds maximum input current {:.1}A",
                self.max_input_current
            ));
        }
        check
    }
}

/// Read-only lookup over the panel/inverter reference data.
pub trait Catalog {
    fn find_panel_by_id(&self, id: &str) -> Option<&PanelSpec>;

    fn find_inverter_by_id(&self, id: &str) -> Option<&InverterSpec>;

    /// Check one string's Voc/Isc against the named inverter's input limits.
    /// An unknown inverter id yields a single error.
    fn check_inverter_compatibility(&self, inverter_id: &str, voc: f64, isc: f64) -> StringCheck {
        match self.find_inverter_by_id(inverter_id) {
            Some(inverter) => inverter.check_string(voc, isc),
            None => StringCheck {
                warnings: vec![],
                errors: vec!["Inverter not found".to_string()],
            },
        }
    }
}

/// An in-memory catalog, insertion-ordered so listings render the way the
/// dataset was authored.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    panels: IndexMap<String, PanelSpec>,
    inverters: IndexMap<String, InverterSpec>,
}

impl InMemoryCatalog {
    pub fn new(
        panels: impl IntoIterator<Item = PanelSpec>,
        inverters: impl IntoIterator<Item = InverterSpec>,
    ) -> Self {
        Self {
            panels: panels
                .into_iter()
                .map(|panel| (panel.id.clone(), panel))
                .collect(),
            inverters: inverters
                .into_iter()
                .map(|inverter| (inverter.id.clone(), inverter))
                .collect(),
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn find_panel_by_id(&self, id: &str) -> Option<&PanelSpec> {
        self.panels.get(id)
    }

    fn find_inverter_by_id(&self, id: &str) -> Option<&InverterSpec> {
        self.inverters.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    pub fn inverter() -> InverterSpec {
        InverterSpec {
            id: "solis-mini-3600".to_string(),
            manufacturer: "Solis".to_string(),
            model: "Mini 3600 4G".to_string(),
            rated_power_ac: 3.6,
            rated_power_dc: 4.0,
            mppt_count: 2,
            mppt_voltage_min: 90.,
            mppt_voltage_max: 520.,
            max_input_voltage: 600.,
            max_input_current: 11.,
            phases: PhaseConfiguration::Single,
            mcs_certified: true,
            g98_g99_certified: true,
            battery_compatible: false,
        }
    }

    #[fixture]
    fn catalog(inverter: InverterSpec) -> InMemoryCatalog {
        InMemoryCatalog::new([], [inverter])
    }

    #[rstest]
    fn should_pass_a_string_within_all_limits(inverter: InverterSpec) {
        assert_eq!(inverter.check_string(410., 10.5), StringCheck::default());
    }

    #[rstest]
    fn should_error_on_voltage_above_absolute_maximum(inverter: InverterSpec) {
        let check = inverter.check_string(650., 10.5);
        assert_eq!(
            check.errors,
            vec!["string Voc 650.0V exceeds maximum input voltage 600.0V"]
        );
        assert_eq!(check.warnings, Vec::<String>::new());
    }

    #[rstest]
    fn should_warn_on_voltage_outside_mppt_window(inverter: InverterSpec) {
        let high = inverter.check_string(550., 10.5);
        assert_eq!(
            high.warnings,
            vec!["string Voc 550.0V is above the MPPT window maximum 520.0V"]
        );
        assert!(high.errors.is_empty());

        let low = inverter.check_string(60., 10.5);
        assert_eq!(
            low.warnings,
            vec!["string Voc 60.0V is below the MPPT window minimum 90.0V, the inverter may not start"]
        );
    }

    #[rstest]
    fn should_error_on_current_above_maximum(inverter: InverterSpec) {
        let check = inverter.check_string(410., 14.);
        assert_eq!(
            check.errors,
            vec!["string Isc 14.0A exceeds maximum input current 11.0A"]
        );
    }

    #[rstest]
    fn should_report_unknown_inverter_through_the_trait(catalog: InMemoryCatalog) {
        let check = catalog.check_inverter_compatibility("no-such-id", 410., 10.5);
        assert_eq!(check.errors, vec!["Inverter not found"]);
    }

    #[rstest]
    fn should_find_inverter_by_id(catalog: InMemoryCatalog) {
        assert!(catalog.find_inverter_by_id("solis-mini-3600").is_some());
        assert!(catalog.find_panel_by_id("solis-mini-3600").is_none());
    }
}
