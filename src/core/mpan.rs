/// Meter Point Administration Number format validation.
///
/// An MPAN is quoted either as the 13-digit core or the full 21-digit form
/// including the top line (profile class, meter time-switch code and line
/// loss factor). Only the digit-count format is validated here; check-digit
/// and registry validation belong to the supplier systems.

/// Digit count of the MPAN core (bottom line).
pub const MPAN_CORE_DIGITS: usize = 13;
/// Digit count of a full MPAN including the top line.
pub const MPAN_FULL_DIGITS: usize = 21;

const MPAN_FORMAT_ERROR: &str =
    "MPAN must be 13 digits (core) or 21 digits (full), ignoring spaces and hyphens";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MpanValidation {
    pub valid: bool,
    pub error: Option<String>,
}

/// Validate an MPAN's format: after stripping whitespace and hyphens, the
/// remainder must be exactly 13 or exactly 21 decimal digits. No partial or
/// fuzzy validation is attempted.
pub fn validate_mpan(raw: &str) -> MpanValidation {
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let digits_only = stripped.chars().all(|c| c.is_ascii_digit());
    if digits_only && matches!(stripped.len(), MPAN_CORE_DIGITS | MPAN_FULL_DIGITS) {
        MpanValidation {
            valid: true,
            error: None,
        }
    } else {
        MpanValidation {
            valid: false,
            error: Some(MPAN_FORMAT_ERROR.to_string()),
        }
    }
}
