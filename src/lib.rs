//! A pure calculation engine for sizing solar PV systems and preparing UK
//! grid-connection compliance paperwork: array string electrics, annual
//! yield and CO2 estimates, G98/G99 classification, DNO resolution by
//! postcode, inverter compatibility validation and MPAN format checks.
//!
//! Every operation is a synchronous pure function over an externally-owned
//! form snapshot. The engine reads a snapshot and returns plain values or
//! field patches for the state owner to apply; it holds no state of its own,
//! so repeated invocation on the same input always yields the same output.

pub mod catalog;
pub mod core;
mod errors;
pub mod input;

pub use crate::catalog::{Catalog, InMemoryCatalog, InverterSpec, PanelSpec, StringCheck};
pub use crate::core::array_electrics::{
    calculate_array_electrics, total_capacity_kwp, ArrayElectrics,
};
pub use crate::core::carbon::GridCarbonIntensity;
pub use crate::core::compatibility::{validate_inverter_compatibility, CompatibilityReport};
pub use crate::core::compliance::{compliance_summary, ComplianceSummary};
pub use crate::core::dno::{resolve_dno, DnoRecord};
pub use crate::core::grid_connection::{suggest_connection_category, ConnectionCategory};
pub use crate::core::mpan::{validate_mpan, MpanValidation};
pub use crate::core::recalculate::{apply_patches, recalculate, FieldPatch};
pub use crate::core::test_results::{initialise_array_tests, initialise_inverter_tests};
pub use crate::core::yield_estimate::{estimate_annual_yield_kwh, total_annual_yield_kwh};
pub use crate::errors::EngineError;
pub use crate::input::{
    ingest_form_data, ArrayTestResult, Inverter, InverterTestResult, Orientation,
    PhaseConfiguration, PvArray, SolarPvFormData, TestResults,
};
