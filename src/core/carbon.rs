use serde::{Deserialize, Serialize};

/// Grid carbon intensity used to convert generated energy into an avoided
/// emissions figure, in kg CO2e per kWh.
///
/// The default is the BEIS/DESNZ published figure for grid electricity as
/// carried by the certificate templates. It is a time-varying statistical
/// figure, so callers sit it in configuration rather than relying on the
/// default staying current.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GridCarbonIntensity(f64);

const DEFAULT_GRID_INTENSITY_KG_PER_KWH: f64 = 0.233;

impl Default for GridCarbonIntensity {
    fn default() -> Self {
        Self(DEFAULT_GRID_INTENSITY_KG_PER_KWH)
    }
}

impl GridCarbonIntensity {
    pub fn new(kg_co2e_per_kwh: f64) -> Self {
        Self(kg_co2e_per_kwh)
    }

    pub fn kg_co2e_per_kwh(&self) -> f64 {
        self.0
    }

    /// Annual CO2 avoided in kg, rounded to the nearest whole kilogram.
    pub fn annual_savings_kg(&self, annual_yield_kwh: f64) -> f64 {
        (annual_yield_kwh * self.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_convert_yield_with_default_intensity() {
        assert_eq!(GridCarbonIntensity::default().annual_savings_kg(3400.), 792.);
    }

    #[rstest]
    fn should_round_to_whole_kilograms() {
        // 1000 kWh x 0.233 = 233 kg exactly; 10 kWh x 0.233 = 2.33 -> 2
        let intensity = GridCarbonIntensity::default();
        assert_eq!(intensity.annual_savings_kg(1000.), 233.);
        assert_eq!(intensity.annual_savings_kg(10.), 2.);
    }

    #[rstest]
    fn should_honour_a_configured_intensity() {
        let low_carbon_grid = GridCarbonIntensity::new(0.1);
        assert_eq!(low_carbon_grid.annual_savings_kg(3400.), 340.);
        assert_eq!(low_carbon_grid.kg_co2e_per_kwh(), 0.1);
    }
}
