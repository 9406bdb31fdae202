use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use strum_macros::{Display, EnumString};

/// Parse a form-data snapshot from the external form-state owner.
///
/// The engine never holds form state between calls; callers pass the current
/// snapshot in and apply the returned patches themselves.
pub fn ingest_form_data(json: impl Read) -> Result<SolarPvFormData, EngineError> {
    let form = serde_json::from_reader(BufReader::new(json)).map_err(anyhow::Error::new)?;
    Ok(form)
}

/// Compass orientation of an array plane.
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Phase configuration of the supply the generation connects to.
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PhaseConfiguration {
    Single,
    Three,
}

/// Strings-in-parallel assumed when the field is left blank.
pub const DEFAULT_STRINGS_IN_PARALLEL: u32 = 1;

/// One physical string/sub-array of panels.
///
/// The fields under "derived" are always written by the engine from the input
/// fields above them and must be recomputed whenever any input field changes;
/// a stale derived value is a defect, not a cache.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PvArray {
    pub id: String,
    pub panel_manufacturer: String,
    pub panel_model: String,
    /// Nameplate power of one panel, in W.
    pub panel_wattage: f64,
    pub panel_count: u32,
    /// Panels wired in series per string. Blank means every panel is in one
    /// series string (see [`PvArray::panels_per_string`]).
    #[serde(default)]
    pub panels_per_string: Option<u32>,
    /// Parallel string count. Blank means [`DEFAULT_STRINGS_IN_PARALLEL`].
    #[serde(default)]
    pub strings_in_parallel: Option<u32>,
    /// Open-circuit voltage of one panel at STC, in V.
    pub voc_rated: f64,
    /// Short-circuit current of one panel at STC, in A.
    pub isc_rated: f64,
    /// Voltage at maximum power point of one panel, in V.
    pub vmp_rated: f64,
    /// Current at maximum power point of one panel, in A.
    pub imp_rated: f64,
    pub orientation: Orientation,
    /// Tilt from horizontal, 0 to 90 degrees.
    pub tilt_degrees: f64,
    /// Shading loss fraction, 0 (no shading loss) to 1 (fully shaded).
    pub shading_factor: f64,
    pub mcs_certified: bool,
    // derived
    /// Array nameplate capacity in W (panel wattage x panel count).
    #[serde(default)]
    pub array_capacity: Option<f64>,
    #[serde(default)]
    pub string_voltage_voc: Option<f64>,
    #[serde(default)]
    pub string_voltage_vmp: Option<f64>,
    #[serde(default)]
    pub string_current_isc: Option<f64>,
    #[serde(default)]
    pub string_current_imp: Option<f64>,
}

impl PvArray {
    /// Effective series length of one string. A blank field means the whole
    /// array is a single series string, so the panel count is used.
    pub fn panels_per_string(&self) -> u32 {
        self.panels_per_string.unwrap_or(self.panel_count)
    }

    /// Effective parallel string count, defaulting to
    /// [`DEFAULT_STRINGS_IN_PARALLEL`].
    pub fn strings_in_parallel(&self) -> u32 {
        self.strings_in_parallel
            .unwrap_or(DEFAULT_STRINGS_IN_PARALLEL)
    }
}

/// One inverter unit serving one or more arrays.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inverter {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    /// Rated AC output power, in kW.
    pub rated_power_ac: f64,
    /// Rated DC input power, in kW.
    pub rated_power_dc: f64,
    pub mppt_count: u32,
    /// Lower bound of the MPPT operating window, in V.
    pub mppt_voltage_min: f64,
    /// Upper bound of the MPPT operating window, in V.
    pub mppt_voltage_max: f64,
    /// Absolute maximum DC input voltage, in V.
    pub max_input_voltage: f64,
    /// Maximum DC input current per MPPT, in A.
    pub max_input_current: f64,
    /// Peak DC to AC conversion efficiency, 0 to 1.
    pub efficiency: f64,
    pub phases: PhaseConfiguration,
    pub mcs_certified: bool,
    pub g98_g99_certified: bool,
    pub battery_compatible: bool,
}

/// The full solar PV form snapshot, owned externally.
///
/// The engine reads a snapshot and produces patches against it (see
/// [`crate::core::recalculate`]); it never mutates hidden state of its own.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPvFormData {
    #[serde(default)]
    pub arrays: Vec<PvArray>,
    #[serde(default)]
    pub inverters: Vec<Inverter>,
    /// Total system capacity in kWp, engine-written.
    #[serde(default)]
    pub total_capacity: Option<f64>,
    /// Estimated annual yield in kWh, engine-written.
    #[serde(default)]
    pub estimated_annual_yield: Option<f64>,
    /// Annual CO2 avoided in kg, engine-written.
    #[serde(default)]
    pub co2_savings_annual: Option<f64>,
    #[serde(default)]
    pub test_results: TestResults,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResults {
    #[serde(default)]
    pub array_tests: Vec<ArrayTestResult>,
    #[serde(default)]
    pub inverter_tests: Vec<InverterTestResult>,
}

/// Commissioning test record for one array, keyed by the array's id.
///
/// Expected values are pre-filled from the array's derived string electrics;
/// measured values are entered on site.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTestResult {
    pub array_id: String,
    #[serde(default)]
    pub expected_voc: Option<f64>,
    #[serde(default)]
    pub expected_isc: Option<f64>,
    #[serde(default)]
    pub measured_voc: Option<f64>,
    #[serde(default)]
    pub measured_isc: Option<f64>,
    /// Insulation resistance of the string cabling, in megohms.
    #[serde(default)]
    pub insulation_resistance: Option<f64>,
    #[serde(default)]
    pub polarity_verified: Option<bool>,
}

/// Commissioning test record for one inverter, keyed by the inverter's id.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterTestResult {
    pub inverter_id: String,
    #[serde(default)]
    pub measured_ac_voltage: Option<f64>,
    #[serde(default)]
    pub measured_frequency: Option<f64>,
    #[serde(default)]
    pub protection_settings_verified: Option<bool>,
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn array_json() -> &'static str {
        r#"{
            "arrays": [{
                "id": "array-1",
                "panelManufacturer": "Longi",
                "panelModel": "LR5-54HPH-410M",
                "panelWattage": 410,
                "panelCount": 10,
                "vocRated": 37.4,
                "iscRated": 13.9,
                "vmpRated": 31.2,
                "impRated": 13.1,
                "orientation": "South",
                "tiltDegrees": 35,
                "shadingFactor": 0.0,
                "mcsCertified": true
            }]
        }"#
    }

    #[rstest]
    fn should_ingest_snapshot_with_blank_derived_fields(array_json: &str) {
        let form = ingest_form_data(array_json.as_bytes()).unwrap();
        let array = &form.arrays[0];
        assert_eq!(array.panel_count, 10);
        assert_eq!(array.array_capacity, None);
        assert_eq!(array.string_voltage_voc, None);
        assert_eq!(form.test_results, TestResults::default());
    }

    #[rstest]
    fn should_default_wiring_topology_to_single_series_string(array_json: &str) {
        let form = ingest_form_data(array_json.as_bytes()).unwrap();
        let array = &form.arrays[0];
        assert_eq!(array.panels_per_string(), 10);
        assert_eq!(array.strings_in_parallel(), DEFAULT_STRINGS_IN_PARALLEL);
    }

    #[rstest]
    fn should_reject_structurally_invalid_snapshot() {
        let result = ingest_form_data(r#"{"arrays": [{"id": "array-1"}]}"#.as_bytes());
        assert!(result.is_err());
    }

    #[rstest]
    fn should_round_trip_phase_configuration_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&PhaseConfiguration::Single).unwrap(),
            r#""single""#
        );
        assert_eq!(PhaseConfiguration::Three.to_string(), "three");
    }
}
