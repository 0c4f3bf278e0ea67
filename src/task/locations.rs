//! Location suggestions for the task form

/// Star chart locations offered as suggestions. Task locations are free text
/// and are never validated against this list.
pub const LOCATIONS: &[&str] = &[
    "Earth", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto", "Ceres", "Eris",
    "Sedna", "Europa", "Deimos", "Void", "Railjack", "Duviri",
];

/// Suggestions containing `query`, case-insensitively, in list order.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    LOCATIONS
        .iter()
        .copied()
        .filter(|loc| loc.to_lowercase().contains(&query))
        .collect()
}
