//! Same-day conflict detection.
//!
//! Intervals are closed: an event ending at 10:00 conflicts with one
//! starting at 10:00.

use crate::event::{Event, Scheduled};

/// True if `a` and `b` are on the same day and their time ranges intersect.
pub fn conflicts(a: &impl Scheduled, b: &impl Scheduled) -> bool {
    a.day() == b.day() && !(a.end_time() < b.start_time() || a.start_time() > b.end_time())
}

/// True if `candidate` conflicts with any event in `existing`, ignoring the
/// event whose id is `exclude_id`.
pub fn overlaps(existing: &[Event], candidate: &impl Scheduled, exclude_id: Option<&str>) -> bool {
    existing
        .iter()
        .filter(|event| exclude_id != Some(event.id.as_str()))
        .any(|event| conflicts(candidate, event))
}
