pub mod roster;

pub use roster::{load_roster_catalog, RosterCatalog, RosterDataError};
