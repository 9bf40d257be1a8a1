// Persistence of tracked companies and the user's skill list (PostgreSQL),
// plus their HTTP handlers. The readiness engine only sees snapshots loaded here.

pub mod companies;
pub mod handlers;
pub mod skills;
