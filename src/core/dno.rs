use indexmap::IndexMap;
use serde::Serialize;
use std::sync::OnceLock;

/// Static mapping from postcode area to distribution network operator.
///
/// The table is an approximation of the GB licence areas by postcode area
/// plus BT for Northern Ireland. Licence boundaries do not follow postcode
/// boundaries exactly, so edge postcodes near a boundary may resolve to the
/// neighbouring operator; the form presents the result as a suggestion to
/// confirm against the operator's own postcode search.

/// One distribution network operator licence area.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DnoRecord {
    pub name: &'static str,
    pub region: &'static str,
}

const NGED: &str = "National Grid Electricity Distribution";
const NORTHERN_POWERGRID: &str = "Northern Powergrid";
const ENWL: &str = "Electricity North West";
const SP_ENERGY_NETWORKS: &str = "SP Energy Networks";
const SSEN: &str = "Scottish and Southern Electricity Networks";
const UKPN: &str = "UK Power Networks";
const NIE: &str = "NIE Networks";

#[rustfmt::skip]
const DNO_BY_POSTCODE_AREA: &[(&str, DnoRecord)] = &[
    // London
    ("E", DnoRecord { name: UKPN, region: "London" }),
    ("EC", DnoRecord { name: UKPN, region: "London" }),
    ("N", DnoRecord { name: UKPN, region: "London" }),
    ("NW", DnoRecord { name: UKPN, region: "London" }),
    ("SE", DnoRecord { name: UKPN, region: "London" }),
    ("SW", DnoRecord { name: UKPN, region: "London" }),
    ("W", DnoRecord { name: UKPN, region: "London" }),
    ("WC", DnoRecord { name: UKPN, region: "London" }),
    ("HA", DnoRecord { name: UKPN, region: "London" }),
    ("TW", DnoRecord { name: UKPN, region: "London" }),
    ("UB", DnoRecord { name: UKPN, region: "London" }),
    // South East England
    ("BN", DnoRecord { name: UKPN, region: "South East England" }),
    ("BR", DnoRecord { name: UKPN, region: "South East England" }),
    ("CR", DnoRecord { name: UKPN, region: "South East England" }),
    ("CT", DnoRecord { name: UKPN, region: "South East England" }),
    ("DA", DnoRecord { name: UKPN, region: "South East England" }),
    ("KT", DnoRecord { name: UKPN, region: "South East England" }),
    ("ME", DnoRecord { name: UKPN, region: "South East England" }),
    ("RH", DnoRecord { name: UKPN, region: "South East England" }),
    ("SM", DnoRecord { name: UKPN, region: "South East England" }),
    ("TN", DnoRecord { name: UKPN, region: "South East England" }),
    // East of England
    ("AL", DnoRecord { name: UKPN, region: "East of England" }),
    ("CB", DnoRecord { name: UKPN, region: "East of England" }),
    ("CM", DnoRecord { name: UKPN, region: "East of England" }),
    ("CO", DnoRecord { name: UKPN, region: "East of England" }),
    ("EN", DnoRecord { name: UKPN, region: "East of England" }),
    ("HP", DnoRecord { name: UKPN, region: "East of England" }),
    ("IG", DnoRecord { name: UKPN, region: "East of England" }),
    ("IP", DnoRecord { name: UKPN, region: "East of England" }),
    ("LU", DnoRecord { name: UKPN, region: "East of England" }),
    ("MK", DnoRecord { name: UKPN, region: "East of England" }),
    ("NR", DnoRecord { name: UKPN, region: "East of England" }),
    ("PE", DnoRecord { name: UKPN, region: "East of England" }),
    ("RM", DnoRecord { name: UKPN, region: "East of England" }),
    ("SG", DnoRecord { name: UKPN, region: "East of England" }),
    ("SS", DnoRecord { name: UKPN, region: "East of England" }),
    ("WD", DnoRecord { name: UKPN, region: "East of England" }),
    // East Midlands
    ("DE", DnoRecord { name: NGED, region: "East Midlands" }),
    ("LE", DnoRecord { name: NGED, region: "East Midlands" }),
    ("LN", DnoRecord { name: NGED, region: "East Midlands" }),
    ("NG", DnoRecord { name: NGED, region: "East Midlands" }),
    ("NN", DnoRecord { name: NGED, region: "East Midlands" }),
    // West Midlands
    ("B", DnoRecord { name: NGED, region: "West Midlands" }),
    ("CV", DnoRecord { name: NGED, region: "West Midlands" }),
    ("DY", DnoRecord { name: NGED, region: "West Midlands" }),
    ("HR", DnoRecord { name: NGED, region: "West Midlands" }),
    ("ST", DnoRecord { name: NGED, region: "West Midlands" }),
    ("TF", DnoRecord { name: NGED, region: "West Midlands" }),
    ("WR", DnoRecord { name: NGED, region: "West Midlands" }),
    ("WS", DnoRecord { name: NGED, region: "West Midlands" }),
    ("WV", DnoRecord { name: NGED, region: "West Midlands" }),
    // South West England
    ("BS", DnoRecord { name: NGED, region: "South West England" }),
    ("EX", DnoRecord { name: NGED, region: "South West England" }),
    ("GL", DnoRecord { name: NGED, region: "South West England" }),
    ("PL", DnoRecord { name: NGED, region: "South West England" }),
    ("TA", DnoRecord { name: NGED, region: "South West England" }),
    ("TQ", DnoRecord { name: NGED, region: "South West England" }),
    ("TR", DnoRecord { name: NGED, region: "South West England" }),
    // South Wales
    ("CF", DnoRecord { name: NGED, region: "South Wales" }),
    ("LD", DnoRecord { name: NGED, region: "South Wales" }),
    ("NP", DnoRecord { name: NGED, region: "South Wales" }),
    ("SA", DnoRecord { name: NGED, region: "South Wales" }),
    // Merseyside, Cheshire and North Wales
    ("CH", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Merseyside, Cheshire and North Wales" }),
    ("CW", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Merseyside, Cheshire and North Wales" }),
    ("L", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Merseyside, Cheshire and North Wales" }),
    ("LL", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Merseyside, Cheshire and North Wales" }),
    ("SY", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Merseyside, Cheshire and North Wales" }),
    // North West England
    ("BB", DnoRecord { name: ENWL, region: "North West England" }),
    ("BL", DnoRecord { name: ENWL, region: "North West England" }),
    ("CA", DnoRecord { name: ENWL, region: "North West England" }),
    ("FY", DnoRecord { name: ENWL, region: "North West England" }),
    ("LA", DnoRecord { name: ENWL, region: "North West England" }),
    ("M", DnoRecord { name: ENWL, region: "North West England" }),
    ("OL", DnoRecord { name: ENWL, region: "North West England" }),
    ("PR", DnoRecord { name: ENWL, region: "North West England" }),
    ("SK", DnoRecord { name: ENWL, region: "North West England" }),
    ("WA", DnoRecord { name: ENWL, region: "North West England" }),
    ("WN", DnoRecord { name: ENWL, region: "North West England" }),
    // North East England
    ("DH", DnoRecord { name: NORTHERN_POWERGRID, region: "North East England" }),
    ("DL", DnoRecord { name: NORTHERN_POWERGRID, region: "North East England" }),
    ("NE", DnoRecord { name: NORTHERN_POWERGRID, region: "North East England" }),
    ("SR", DnoRecord { name: NORTHERN_POWERGRID, region: "North East England" }),
    ("TS", DnoRecord { name: NORTHERN_POWERGRID, region: "North East England" }),
    // Yorkshire
    ("BD", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("DN", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("HD", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("HG", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("HU", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("HX", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("LS", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("S", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("WF", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    ("YO", DnoRecord { name: NORTHERN_POWERGRID, region: "Yorkshire" }),
    // Northern Scotland
    ("AB", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("DD", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("HS", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("IV", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("KW", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("PH", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    ("ZE", DnoRecord { name: SSEN, region: "Northern Scotland" }),
    // Central and Southern Scotland
    ("DG", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("EH", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("FK", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("G", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("KA", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("KY", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("ML", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("PA", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    ("TD", DnoRecord { name: SP_ENERGY_NETWORKS, region: "Central and Southern Scotland" }),
    // Central Southern England
    ("BH", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("DT", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("GU", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("OX", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("PO", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("RG", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("SL", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("SN", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("SO", DnoRecord { name: SSEN, region: "Central Southern England" }),
    ("SP", DnoRecord { name: SSEN, region: "Central Southern England" }),
    // Northern Ireland
    ("BT", DnoRecord { name: NIE, region: "Northern Ireland" }),
];

fn dno_table() -> &'static IndexMap<&'static str, DnoRecord> {
    static TABLE: OnceLock<IndexMap<&'static str, DnoRecord>> = OnceLock::new();
    TABLE.get_or_init(|| DNO_BY_POSTCODE_AREA.iter().copied().collect())
}

/// Resolve the distribution network operator for a free-text postcode.
///
/// The leading alphabetic run of the trimmed, upper-cased postcode is looked
/// up in full; if absent, the first letter alone is tried so that a
/// multi-letter area missing from the table still resolves to the nearest
/// licence area sharing its leading letter. Exact entries always win over
/// the single-letter fallback. Unknown prefixes return None.
pub fn resolve_dno(postcode: &str) -> Option<&'static DnoRecord> {
    let trimmed = postcode.trim().to_uppercase();
    let prefix: String = trimmed
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    if prefix.is_empty() {
        return None;
    }
    let table = dno_table();
    table
        .get(prefix.as_str())
        .or_else(|| table.get(&prefix[..1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("BN1 1AA", UKPN, "South East England")]
    #[case("B1 1AA", NGED, "West Midlands")]
    #[case("M60 1QD", ENWL, "North West England")]
    #[case("EH1 1YZ", SP_ENERGY_NETWORKS, "Central and Southern Scotland")]
    #[case("IV2 3BL", SSEN, "Northern Scotland")]
    #[case("BT1 5GS", NIE, "Northern Ireland")]
    #[case("EX4 4QJ", NGED, "South West England")]
    fn should_resolve_known_postcode_areas(
        #[case] postcode: &str,
        #[case] name: &str,
        #[case] region: &str,
    ) {
        let record = resolve_dno(postcode).unwrap();
        assert_eq!(record.name, name);
        assert_eq!(record.region, region);
    }

    #[rstest]
    fn should_normalise_case_and_surrounding_whitespace() {
        assert_eq!(resolve_dno("  sw1a 1aa "), resolve_dno("SW1A 1AA"));
        assert!(resolve_dno("sw1a 1aa").is_some());
    }

    #[rstest]
    fn should_fall_back_to_single_letter_for_unknown_multi_letter_area() {
        // "EB" is not a postcode area; its first letter resolves to London
        let record = resolve_dno("EB1 2CD").unwrap();
        assert_eq!(record.region, "London");
    }

    #[rstest]
    fn should_return_none_when_neither_tier_matches() {
        assert_eq!(resolve_dno("ZZ1 1AA"), None);
        assert_eq!(resolve_dno("123"), None);
        assert_eq!(resolve_dno(""), None);
    }

    #[rstest]
    fn should_be_a_pure_function_of_its_input() {
        assert_eq!(resolve_dno("YO1 7HH"), resolve_dno("YO1 7HH"));
    }

    #[rstest]
    fn should_prefer_exact_area_over_single_letter_fallback() {
        // SA is South Wales even though S alone is Yorkshire
        assert_eq!(resolve_dno("SA1 1AA").unwrap().region, "South Wales");
        assert_eq!(resolve_dno("S1 1AA").unwrap().region, "Yorkshire");
    }
}
