pub mod array_electrics;
pub mod carbon;
pub mod compatibility;
pub mod compliance;
pub mod dno;
pub mod grid_connection;
pub mod mpan;
pub mod recalculate;
pub mod test_results;
pub(crate) mod units;
pub mod yield_estimate;
