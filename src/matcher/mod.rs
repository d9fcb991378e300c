//! Single-line detectors
//!
//! Every matcher looks at one raw line and reports at most one match. They
//! keep no state; the classifier decides what a match means.

mod fields;
mod patterns;

#[cfg(test)]
mod tests;

pub use fields::{FieldMatchers, CONTINENTAL_BREAKFAST};
pub use patterns::{
    company_header, event_header, is_date_header, is_event_header, is_guest_count,
    match_time_range, TimeRange, FOLIO_MARKER, QUOTE_MARKER,
};
