// Skill Gap & Readiness Engine.
// Pure functions over caller-supplied snapshots; handlers load the snapshot
// from the store and hand it in. Nothing here touches the database.

pub mod aggregator;
pub mod comparator;
pub mod handlers;
pub mod jd_scorer;
