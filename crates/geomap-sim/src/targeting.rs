//! Targeting resolver — nearest eligible friendly to a selected hostile.
//!
//! Pure function over plain data; no retained state, no side effects.
//! The caller applies the eligibility filter before invocation.

use geomap_core::asset::Asset;

/// Find the candidate nearest to `hostile` by planar Euclidean distance
/// on the raw (lat, lon) pair.
///
/// Strict `<` comparison: the first candidate in input order with the
/// minimal distance wins, so ties resolve deterministically to the
/// earliest entry. An empty candidate sequence yields `None` — the
/// resolver never synthesizes a source.
pub fn find_nearest<'a>(
    hostile: &Asset,
    candidates: impl IntoIterator<Item = &'a Asset>,
) -> Option<&'a Asset> {
    let mut nearest: Option<&Asset> = None;
    let mut min_distance = f64::INFINITY;

    for candidate in candidates {
        let dist = hostile.position.distance_to(&candidate.position);
        if dist < min_distance {
            min_distance = dist;
            nearest = Some(candidate);
        }
    }

    nearest
}
