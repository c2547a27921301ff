//! Console message formatting

/// Confirmation printed after a record is stored
pub fn entity_added(label: &str, id: u64) -> String {
    format!("{label} with id={id} added!")
}

/// Confirmation printed after a record is deleted
pub fn entity_deleted(label: &str, id: u64) -> String {
    format!("{label}:{id} deleted!")
}

/// Message printed when a delete target does not exist
pub fn entity_not_found(label: &str, id: u64) -> String {
    format!("{label} with id {id} not found!")
}

/// One result line of a path query
pub fn route_line(source: &str, destination: &str, road: &str, takes: &str) -> String {
    format!("{source}:{destination} via Road {road}: Takes {takes}")
}
