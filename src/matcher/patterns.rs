use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that identifies a company header line
pub const QUOTE_MARKER: &str = "Quote #:";

/// Marker that identifies an event header line
pub const FOLIO_MARKER: &str = "Folio #:";

/// Two clock times with a meridiem, joined by a hyphen, en dash or em dash.
static TIME_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}:\d{2}\s?[AP]M)\s*[-–—]\s*(\d{1,2}:\d{2}\s?[AP]M)").unwrap()
});

static DATE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday), .* \d{4}$")
        .unwrap()
});

/// Event name is everything before the first whitespace-preceded folio marker.
static EVENT_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+Folio #:").unwrap());

/// Expected/guaranteed/set counts such as "120/115/__".
static GUEST_COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+/\d+/(?:\d+|__)$").unwrap());

/// Start and end time of a function line, verbatim from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Find the first time range in a line
pub fn match_time_range(line: &str) -> Option<TimeRange> {
    let caps = TIME_RANGE_RE.captures(line)?;
    Some(TimeRange {
        start: caps[1].to_string(),
        end: caps[2].to_string(),
    })
}

/// Whether the whole line is a "Weekday, ... YYYY" date header
pub fn is_date_header(line: &str) -> bool {
    DATE_HEADER_RE.is_match(line)
}

/// Company named by a quote header line, if this is one
pub fn company_header(line: &str) -> Option<&str> {
    line.split_once(QUOTE_MARKER)
        .map(|(company, _)| company.trim())
}

pub fn is_event_header(line: &str) -> bool {
    line.contains(FOLIO_MARKER)
}

/// Event named by a folio header line
///
/// Returns `None` for header lines with nothing in front of the marker.
pub fn event_header(line: &str) -> Option<&str> {
    EVENT_HEADER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Whether a value is a guest-count artifact rather than a room name
pub fn is_guest_count(value: &str) -> bool {
    GUEST_COUNT_RE.is_match(value.trim())
}
