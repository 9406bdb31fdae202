use crate::input::PhaseConfiguration;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// UK grid-connection application category for embedded generation.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ConnectionCategory {
    G98,
    G99,
}

/// 16 A per phase at 230 V nominal.
pub const G98_LIMIT_SINGLE_PHASE_KW: f64 = 3.68;
pub const G98_LIMIT_THREE_PHASE_KW: f64 = 11.04;

/// Classify a total generation capacity into a G98 or G99 application.
///
/// The boundary is inclusive on G98: a system at exactly 16 A per phase can
/// still connect-and-notify. Total function; zero or nonsensical negative
/// capacity classifies as G98, with positivity validation left to the
/// caller.
pub fn suggest_connection_category(
    total_capacity_kw: f64,
    phases: PhaseConfiguration,
) -> ConnectionCategory {
    let limit = match phases {
        PhaseConfiguration::Single => G98_LIMIT_SINGLE_PHASE_KW,
        PhaseConfiguration::Three => G98_LIMIT_THREE_PHASE_KW,
    };
    if total_capacity_kw <= limit {
        ConnectionCategory::G98
    } else {
        ConnectionCategory::G99
    }
}
