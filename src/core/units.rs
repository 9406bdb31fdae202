pub const WATTS_PER_KILOWATT: u32 = 1_000;

pub(crate) fn watts_to_kilowatts(watts: f64) -> f64 {
    watts / WATTS_PER_KILOWATT as f64
}

/// Round to the given number of decimal places, half away from zero
/// (the rounding mode of f64::round applied to the scaled value).
pub(crate) fn round_to_dp(value: f64, decimal_places: u32) -> f64 {
    let scale = 10f64.powi(decimal_places as i32);
    (value * scale).round() / scale
}
