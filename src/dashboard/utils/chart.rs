//! Inline SVG gantt chart for the journey timeline.
//!
//! Lanes are rows in `Timeline::lanes` order; each dated entry is a rounded bar from
//! start to end, coloured by lane category, with a native tooltip. Undated entries
//! are listed in their row without a bar.

use chrono::{Datelike, NaiveDate};

use crate::dashboard::utils::html::escape;
use crate::pipeline::{LaneCategory, Timeline};

const WIDTH: f64 = 960.0;
const LABEL_WIDTH: f64 = 300.0;
const ROW_HEIGHT: f64 = 34.0;
const BAR_HEIGHT: f64 = 22.0;
const TOP_PAD: f64 = 8.0;
const AXIS_HEIGHT: f64 = 28.0;
const RIGHT_PAD: f64 = 16.0;
const MAX_TICKS: usize = 12;
const MIN_BAR_WIDTH: f64 = 3.0;

/// Render the chart plus its legend.
pub fn gantt(timeline: &Timeline) -> String {
    let plot_left = LABEL_WIDTH;
    let plot_width = WIDTH - LABEL_WIDTH - RIGHT_PAD;
    let rows_height = ROW_HEIGHT * timeline.lanes.len() as f64;
    let height = TOP_PAD + rows_height + AXIS_HEIGHT;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        "<svg class=\"timeline-chart\" viewBox=\"0 0 {w} {h}\" width=\"100%\" role=\"img\" aria-label=\"Journey timeline\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = WIDTH,
        h = height
    ));

    // Lane labels and row guides
    for (row, lane) in timeline.lanes.iter().enumerate() {
        let y = TOP_PAD + ROW_HEIGHT * row as f64;
        svg.push_str(&format!(
            "<text class=\"lane-label\" x=\"{x}\" y=\"{y:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\">{label}</text>\n",
            x = plot_left - 10.0,
            y = y + ROW_HEIGHT / 2.0,
            label = escape(&lane.label)
        ));
        svg.push_str(&format!(
            "<line class=\"row-guide\" x1=\"{x1}\" x2=\"{x2}\" y1=\"{y:.1}\" y2=\"{y:.1}\" />\n",
            x1 = plot_left,
            x2 = plot_left + plot_width,
            y = y + ROW_HEIGHT
        ));
    }

    match timeline.span() {
        Some((span_start, span_end)) => {
            let scale = DateScale::new(span_start, span_end, plot_left, plot_width);

            for tick in month_ticks(span_start, span_end) {
                let x = scale.x(tick);
                svg.push_str(&format!(
                    "<line class=\"tick\" x1=\"{x:.1}\" x2=\"{x:.1}\" y1=\"{top}\" y2=\"{bottom:.1}\" />\n",
                    top = TOP_PAD,
                    bottom = TOP_PAD + rows_height
                ));
                svg.push_str(&format!(
                    "<text class=\"tick-label\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\">{label}</text>\n",
                    y = TOP_PAD + rows_height + AXIS_HEIGHT * 0.7,
                    label = tick.format("%b %Y")
                ));
            }

            for entry in &timeline.entries {
                let (Some(start), Some(row)) = (entry.start, timeline.lane_index(&entry.lane)) else {
                    continue;
                };
                let x1 = scale.x(start);
                let x2 = scale.x(entry.end.max(start));
                let y = TOP_PAD + ROW_HEIGHT * row as f64 + (ROW_HEIGHT - BAR_HEIGHT) / 2.0;
                svg.push_str(&format!(
                    "<rect class=\"bar\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h}\" rx=\"6\" fill=\"{fill}\" stroke=\"white\" stroke-width=\"0.6\"><title>{tip}</title></rect>\n",
                    x = x1,
                    w = (x2 - x1).max(MIN_BAR_WIDTH),
                    h = BAR_HEIGHT,
                    fill = entry.category.color(),
                    tip = escape(&format!(
                        "Work: {}\nLane: {}\nStart: {}\nEnd: {}",
                        entry.label,
                        entry.lane,
                        start.format("%Y-%m-%d"),
                        entry.end.format("%Y-%m-%d")
                    ))
                ));
            }
        }
        None => {
            tracing::debug!("Timeline has no dated entries; drawing lanes only");
        }
    }

    // Undated entries: a note in their row instead of a bar
    for entry in timeline.entries.iter().filter(|e| e.start.is_none()) {
        if let Some(row) = timeline.lane_index(&entry.lane) {
            let y = TOP_PAD + ROW_HEIGHT * row as f64 + ROW_HEIGHT / 2.0;
            svg.push_str(&format!(
                "<text class=\"undated\" x=\"{x}\" y=\"{y:.1}\" dominant-baseline=\"middle\">{label} (no start date)</text>\n",
                x = plot_left + 6.0,
                label = escape(&entry.label)
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg.push_str(&legend());
    svg
}

fn legend() -> String {
    let mut out = String::from("<div class=\"legend\"><span class=\"legend-title\">Work type</span>");
    for category in [LaneCategory::Client, LaneCategory::Internal] {
        out.push_str(&format!(
            "<span class=\"legend-item\"><span class=\"swatch\" style=\"background:{}\"></span>{}</span>",
            category.color(),
            category.as_str()
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Linear day scale from the span onto the plot area.
struct DateScale {
    origin: NaiveDate,
    days: f64,
    left: f64,
    width: f64,
}

impl DateScale {
    fn new(start: NaiveDate, end: NaiveDate, left: f64, width: f64) -> Self {
        let days = (end - start).num_days().max(1) as f64;
        Self { origin: start, days, left, width }
    }

    fn x(&self, date: NaiveDate) -> f64 {
        let offset = (date - self.origin).num_days() as f64;
        self.left + (offset / self.days).clamp(0.0, 1.0) * self.width
    }
}

/// First-of-month ticks inside the span, thinned to at most `MAX_TICKS`.
fn month_ticks(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut cursor = first_of_next_month(start, start.day() == 1);
    while cursor <= end {
        months.push(cursor);
        cursor = first_of_next_month(cursor, false);
    }

    let step = months.len().div_ceil(MAX_TICKS).max(1);
    months.into_iter().step_by(step).collect()
}

fn first_of_next_month(date: NaiveDate, inclusive: bool) -> NaiveDate {
    if inclusive {
        return date;
    }
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TimeRange;
    use crate::pipeline::normalize_timeline;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(lane: &str, start: &str, end: &str, label: &str) -> TimeRange {
        TimeRange::new(lane, start, end, label)
    }

    #[test]
    fn test_month_ticks() {
        let ticks = month_ticks(date("2023-01-01"), date("2023-04-15"));
        assert_eq!(
            ticks,
            vec![date("2023-01-01"), date("2023-02-01"), date("2023-03-01"), date("2023-04-01")]
        );

        let ticks = month_ticks(date("2023-11-20"), date("2024-01-05"));
        assert_eq!(ticks, vec![date("2023-12-01"), date("2024-01-01")]);
    }

    #[test]
    fn test_month_ticks_are_thinned() {
        let ticks = month_ticks(date("2020-01-01"), date("2024-12-31"));
        assert!(ticks.len() <= MAX_TICKS);
        assert_eq!(ticks[0], date("2020-01-01"));
    }

    #[test]
    fn test_gantt_draws_one_bar_per_dated_entry() {
        let timeline = normalize_timeline(
            &[
                range("Client — Acme", "2023-01-01", "2023-06-01", "Data platform"),
                range("Internal — Training", "2023-02-01", "", "Academy"),
                range("Internal — Training", "soon", "", "Undated work"),
            ],
            date("2023-12-31"),
        )
        .unwrap();

        let svg = gantt(&timeline);
        assert_eq!(svg.matches("<rect class=\"bar\"").count(), 2);
        assert!(svg.contains(">Acme</text>"));
        assert!(svg.contains("#6366F1"));
        assert!(svg.contains("#94A3B8"));
        assert!(svg.contains("Undated work (no start date)"));
        assert!(svg.contains("Jan 2023"));
        assert!(svg.contains("Work type"));
    }

    #[test]
    fn test_scale_clamps_to_plot() {
        let scale = DateScale::new(date("2023-01-01"), date("2023-01-11"), 100.0, 200.0);
        assert_eq!(scale.x(date("2023-01-01")), 100.0);
        assert_eq!(scale.x(date("2023-01-06")), 200.0);
        assert_eq!(scale.x(date("2024-01-01")), 300.0);
    }
}
