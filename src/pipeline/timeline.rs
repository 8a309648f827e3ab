//! Timeline Normalizer
//!
//! Prepares `timeline_ranges` for the journey gantt chart:
//! - resolves start/end dates (`end` falls back to today when missing or unparseable)
//! - classifies each lane as Client or Internal by the `"Internal"` prefix of the
//!   trimmed lane name
//! - orders lanes Client first, Internal last, alphabetically within each group
//!
//! Entries whose `start` cannot be parsed are kept with `start = None`. They sort
//! after every dated entry of the same lane and draw no bar.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

use crate::content::TimeRange;

const INTERNAL_PREFIX: &str = "Internal";
const CLIENT_PREFIX: &str = "Client — ";

/// Fields every timeline needs at least one entry to carry.
const REQUIRED_FIELDS: [&str; 4] = ["lane", "start", "end", "label"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("Add timeline_ranges in data/content.json to render the bar timeline.")]
    Empty,

    #[error("timeline_ranges missing '{0}'")]
    MissingField(&'static str),
}

/// Work type of a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LaneCategory {
    Client,
    Internal,
}

impl LaneCategory {
    pub fn of(lane: &str) -> Self {
        if lane.starts_with(INTERNAL_PREFIX) {
            LaneCategory::Internal
        } else {
            LaneCategory::Client
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LaneCategory::Client => "Client",
            LaneCategory::Internal => "Internal",
        }
    }

    /// Bar colour on the chart.
    pub fn color(&self) -> &'static str {
        match self {
            LaneCategory::Client => "#6366F1",
            LaneCategory::Internal => "#94A3B8",
        }
    }
}

/// One chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub name: String,
    /// Axis label: `name` without a leading `"Client — "`.
    pub label: String,
    pub category: LaneCategory,
}

/// One resolved bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub lane: String,
    pub lane_label: String,
    pub category: LaneCategory,
    pub label: String,
    pub start: Option<NaiveDate>,
    pub end: NaiveDate,
    /// True when `end` was missing or unparseable and resolved to today.
    pub end_defaulted: bool,
}

/// Render-ready timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub lanes: Vec<Lane>,
    pub entries: Vec<TimelineEntry>,
    /// Entries without a usable start date.
    pub undated: usize,
}

impl Timeline {
    /// Earliest start and latest end over the dated entries.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dated = self
            .entries
            .iter()
            .filter_map(|e| e.start.map(|start| (start, e.end)));
        let (first_start, first_end) = dated.next()?;
        let (start, end) = dated.fold((first_start, first_end), |(lo, hi), (s, e)| {
            (lo.min(s), hi.max(e))
        });
        Some((start, end.max(start)))
    }

    /// Position of `lane` in the chart's row order.
    pub fn lane_index(&self, lane: &str) -> Option<usize> {
        self.lanes.iter().position(|l| l.name == lane)
    }
}

/// Normalize raw ranges against `today`.
pub fn normalize_timeline(
    ranges: &[TimeRange],
    today: NaiveDate,
) -> Result<Timeline, TimelineError> {
    if ranges.is_empty() {
        return Err(TimelineError::Empty);
    }

    for field in REQUIRED_FIELDS {
        if !ranges.iter().any(|r| r.has(field)) {
            return Err(TimelineError::MissingField(field));
        }
    }

    let mut resolved: Vec<(usize, TimelineEntry)> = Vec::with_capacity(ranges.len());
    for (idx, range) in ranges.iter().enumerate() {
        let lane = match range.lane().map(str::trim) {
            Some(lane) if !lane.is_empty() => lane.to_string(),
            _ => {
                tracing::debug!("Dropping timeline range #{} without a lane", idx);
                continue;
            }
        };

        let start = range.start().and_then(parse_date);
        if start.is_none() {
            tracing::debug!(
                "Timeline range '{}' has no usable start ({:?}); placing it last in its lane",
                lane,
                range.start()
            );
        }

        let parsed_end = range.end().and_then(parse_date);
        let end_defaulted = parsed_end.is_none();

        resolved.push((
            idx,
            TimelineEntry {
                lane_label: lane_label(&lane),
                category: LaneCategory::of(&lane),
                label: range.label().unwrap_or_default().to_string(),
                start,
                end: parsed_end.unwrap_or(today),
                end_defaulted,
                lane,
            },
        ));
    }

    if resolved.is_empty() {
        return Err(TimelineError::Empty);
    }

    let mut lane_names: Vec<&str> = Vec::new();
    for (_, entry) in &resolved {
        if !lane_names.contains(&entry.lane.as_str()) {
            lane_names.push(entry.lane.as_str());
        }
    }
    lane_names.sort_by(|a, b| lane_sort_key(a).cmp(&lane_sort_key(b)));

    let lanes: Vec<Lane> = lane_names
        .iter()
        .map(|name| Lane {
            name: name.to_string(),
            label: lane_label(name),
            category: LaneCategory::of(name),
        })
        .collect();

    let lane_position = |lane: &str| lanes.iter().position(|l| l.name == lane).unwrap_or(usize::MAX);
    resolved.sort_by_key(|(idx, entry)| {
        (lane_position(&entry.lane), entry.start.is_none(), entry.start, *idx)
    });

    let undated = resolved.iter().filter(|(_, e)| e.start.is_none()).count();
    let entries = resolved.into_iter().map(|(_, entry)| entry).collect();

    Ok(Timeline { lanes, entries, undated })
}

/// Lane ordering key: Client lanes before Internal lanes, then by name.
pub fn lane_sort_key(lane: &str) -> (bool, &str) {
    (lane.starts_with(INTERNAL_PREFIX), lane)
}

/// Axis label for a lane.
pub fn lane_label(lane: &str) -> String {
    lane.strip_prefix(CLIENT_PREFIX).unwrap_or(lane).trim().to_string()
}

/// Parse the date formats found in content files. Returns `None` for anything else,
/// including empty strings.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts.date());
        }
    }

    // Year precision: "2023" means 1 January.
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    // Month precision: "2023-04" means the first of the month.
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(lane: &str, start: &str, end: &str, label: &str) -> TimeRange {
        TimeRange::new(lane, start, end, label)
    }

    #[test]
    fn test_client_before_internal_and_end_defaults_to_today() {
        let today = date("2026-10-19");
        let ranges = vec![
            range("Internal — Training", "2023-02-01", "", "Y"),
            range("Client — Acme", "2023-01-01", "2023-06-01", "X"),
        ];

        let timeline = normalize_timeline(&ranges, today).unwrap();

        let lanes: Vec<&str> = timeline.lanes.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(lanes, vec!["Client — Acme", "Internal — Training"]);

        let acme = &timeline.entries[0];
        assert_eq!(acme.category, LaneCategory::Client);
        assert_eq!(acme.lane_label, "Acme");
        assert_eq!(acme.end, date("2023-06-01"));
        assert!(!acme.end_defaulted);

        let training = &timeline.entries[1];
        assert_eq!(training.category, LaneCategory::Internal);
        assert_eq!(training.lane_label, "Internal — Training");
        assert_eq!(training.end, today);
        assert!(training.end_defaulted);
    }

    #[test]
    fn test_missing_end_key_defaults_only_that_entry() {
        let today = date("2026-10-19");
        let mut open = range("Client — Beta", "2024-01-01", "", "open");
        open.end = None;
        let ranges = vec![open, range("Client — Acme", "2023-01-01", "2023-03-01", "closed")];

        let timeline = normalize_timeline(&ranges, today).unwrap();
        let beta = timeline.entries.iter().find(|e| e.label == "open").unwrap();
        let acme = timeline.entries.iter().find(|e| e.label == "closed").unwrap();
        assert_eq!(beta.end, today);
        assert_eq!(acme.end, date("2023-03-01"));
    }

    #[test]
    fn test_lane_order_is_total_and_stable() {
        let today = date("2026-10-19");
        let ranges = vec![
            range("Internal — Pre-sales", "2023-05-01", "2023-06-01", "a"),
            range("Client — Zeta", "2023-01-01", "2023-02-01", "b"),
            range("Internal — Academy", "2023-03-01", "2023-04-01", "c"),
            range("Client — Acme", "2023-07-01", "2023-08-01", "d"),
            range("Client — Zeta", "2022-01-01", "2022-02-01", "e"),
        ];

        let timeline = normalize_timeline(&ranges, today).unwrap();
        let lanes: Vec<&str> = timeline.lanes.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            lanes,
            vec![
                "Client — Acme",
                "Client — Zeta",
                "Internal — Academy",
                "Internal — Pre-sales",
            ]
        );

        let mut resorted = lanes.clone();
        resorted.sort_by(|a, b| lane_sort_key(a).cmp(&lane_sort_key(b)));
        assert_eq!(resorted, lanes);

        let labels: Vec<&str> = timeline.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["d", "e", "b", "c", "a"]);

        let again = normalize_timeline(&ranges, today).unwrap();
        assert_eq!(again, timeline);
    }

    #[test]
    fn test_unparseable_start_sorts_last_in_lane() {
        let today = date("2026-10-19");
        let ranges = vec![
            range("Client — Acme", "someday", "2023-06-01", "undated"),
            range("Client — Acme", "2023-01-01", "2023-06-01", "dated"),
            range("Client — Acme", "", "2023-06-01", "blank"),
        ];

        let timeline = normalize_timeline(&ranges, today).unwrap();
        let labels: Vec<&str> = timeline.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["dated", "undated", "blank"]);
        assert_eq!(timeline.undated, 2);
        assert_eq!(timeline.span(), Some((date("2023-01-01"), date("2023-06-01"))));
    }

    #[test]
    fn test_empty_input_is_skipped() {
        assert_eq!(
            normalize_timeline(&[], date("2026-10-19")),
            Err(TimelineError::Empty)
        );
    }

    #[test]
    fn test_field_missing_everywhere_is_skipped() {
        let mut a = range("Client — Acme", "2023-01-01", "2023-02-01", "X");
        let mut b = range("Internal — Ops", "2023-01-01", "", "Y");
        a.label = None;
        b.label = None;

        let err = normalize_timeline(&[a, b], date("2026-10-19")).unwrap_err();
        assert_eq!(err, TimelineError::MissingField("label"));
        assert_eq!(err.to_string(), "timeline_ranges missing 'label'");
    }

    #[test]
    fn test_field_missing_in_some_entries_is_tolerated() {
        let mut a = range("Client — Acme", "2023-01-01", "2023-02-01", "X");
        a.label = None;
        let b = range("Internal — Ops", "2023-01-01", "", "Y");

        let timeline = normalize_timeline(&[a, b], date("2026-10-19")).unwrap();
        assert_eq!(timeline.entries[0].label, "");
    }

    #[test]
    fn test_entry_without_lane_is_dropped() {
        let mut a = range("Client — Acme", "2023-01-01", "2023-02-01", "X");
        a.lane = None;
        let b = range("Internal — Ops", "2023-01-01", "", "Y");

        let timeline = normalize_timeline(&[a, b], date("2026-10-19")).unwrap();
        assert_eq!(timeline.entries.len(), 1);
        assert_eq!(timeline.lanes.len(), 1);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2023-04-05"), Some(date("2023-04-05")));
        assert_eq!(parse_date(" 2023/04/05 "), Some(date("2023-04-05")));
        assert_eq!(parse_date("2023-04"), Some(date("2023-04-01")));
        assert_eq!(parse_date("2023-04-05T10:00:00+10:00"), Some(date("2023-04-05")));
        assert_eq!(parse_date("2023-04-05 08:30:00"), Some(date("2023-04-05")));
        assert_eq!(parse_date("2023-04-05T10:00"), Some(date("2023-04-05")));
        assert_eq!(parse_date("2023-04-05 10:00"), Some(date("2023-04-05")));
        assert_eq!(parse_date("2023"), Some(date("2023-01-01")));
        assert_eq!(parse_date("23"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("Q3 2023"), None);
        assert_eq!(parse_date("2023-13-01"), None);
    }

    #[test]
    fn test_null_end_in_every_entry_ends_today() {
        let today = date("2026-10-19");
        let mut a = range("Client — Acme", "2024-01-01", "", "X");
        let mut b = range("Internal — Ops", "2024-03-01", "", "Y");
        a.end = Some(None);
        b.end = Some(None);

        let timeline = normalize_timeline(&[a, b], today).unwrap();
        assert!(timeline.entries.iter().all(|e| e.end == today && e.end_defaulted));
    }

    #[test]
    fn test_null_lane_is_present_but_dropped() {
        let mut a = range("Client — Acme", "2024-01-01", "2024-02-01", "X");
        a.lane = Some(None);

        assert_eq!(normalize_timeline(&[a], date("2026-10-19")), Err(TimelineError::Empty));
    }

    #[test]
    fn test_lane_is_classified_after_trimming() {
        let timeline =
            normalize_timeline(&[range(" Internal X ", "2024-01-01", "", "Y")], date("2026-10-19"))
                .unwrap();
        assert_eq!(timeline.lanes[0].name, "Internal X");
        assert_eq!(timeline.lanes[0].category, LaneCategory::Internal);
    }

    #[test]
    fn test_lane_label_strips_client_prefix() {
        assert_eq!(lane_label("Client — Acme Corp"), "Acme Corp");
        assert_eq!(lane_label("Internal — Guild"), "Internal — Guild");
        assert_eq!(lane_label("Acme"), "Acme");
    }
}
