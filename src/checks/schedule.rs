//! 24-hour schedule coverage.
//!
//! Shows are normalized into minute-of-day slots, sorted by start, and treated
//! as a circular sequence: each slot is compared against its immediate
//! successor, and the last slot against the end of the day with the first
//! slot named as its neighbour. Only adjacent slots are compared, so a show
//! nested inside a longer one is not reported as an overlap.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::model::Show;
use crate::report::{CheckCategory, Finding};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Strict `HH:MM`, 00:00 through 23:59
const CLOCK_PATTERN: &str = r"^([01][0-9]|2[0-3]):([0-5][0-9])$";

static CLOCK_RE: OnceLock<Regex> = OnceLock::new();

fn clock_re() -> &'static Regex {
    CLOCK_RE.get_or_init(|| Regex::new(CLOCK_PATTERN).expect("CLOCK_PATTERN is a valid regex"))
}

/// A show's time window as minutes of the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub show_id: String,
    /// In `[0, 1440)`
    pub start_minute: u32,
    /// In `(0, 1440]`
    pub end_minute: u32,
}

impl ScheduleSlot {
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end_minute) - i64::from(self.start_minute)
    }
}

/// Timeline row: `id: HH:MM - HH:MM (N.Nh)`
impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({:.1}h)",
            self.show_id,
            format_clock(self.start_minute),
            format_clock(self.end_minute),
            self.duration_minutes() as f64 / 60.0
        )
    }
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_clock(value: &str) -> Option<u32> {
    let caps = clock_re().captures(value)?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Format minutes of the day as `HH:MM` (1440 renders as `24:00`).
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Normalize shows into slots sorted by start minute.
///
/// An end time of `00:00` means end of day (1440). Shows with a malformed
/// time produce a finding and no slot, and shows whose schedule did not decode
/// are skipped. The sort is stable, so shows sharing a start minute keep their
/// input order.
pub fn normalize(shows: &[Show]) -> (Vec<ScheduleSlot>, Vec<Finding>) {
    let mut slots = Vec::with_capacity(shows.len());
    let mut findings = Vec::new();

    for show in shows {
        let Some(schedule) = &show.schedule else {
            continue;
        };
        let start = parse_clock(&schedule.start_time_utc);
        let end = parse_clock(&schedule.end_time_utc);

        for (field, raw, parsed) in [
            ("start_time_utc", &schedule.start_time_utc, start),
            ("end_time_utc", &schedule.end_time_utc, end),
        ] {
            if parsed.is_none() {
                findings.push(
                    Finding::error(
                        CheckCategory::Schedule,
                        format!("Invalid {} '{}' (expected HH:MM)", field, raw),
                    )
                    .for_subject(&show.id),
                );
            }
        }

        if let (Some(start_minute), Some(end_minute)) = (start, end) {
            slots.push(ScheduleSlot {
                show_id: show.id.clone(),
                start_minute,
                end_minute: if end_minute == 0 {
                    MINUTES_PER_DAY
                } else {
                    end_minute
                },
            });
        }
    }

    slots.sort_by_key(|slot| slot.start_minute);
    (slots, findings)
}

/// Gap/overlap and total coverage findings for sorted slots.
pub fn check_slots(slots: &[ScheduleSlot]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let n = slots.len();

    for (i, current) in slots.iter().enumerate() {
        let neighbor = &slots[(i + 1) % n];
        let expected_end = if i == n - 1 {
            MINUTES_PER_DAY
        } else {
            neighbor.start_minute
        };

        if current.end_minute < expected_end {
            findings.push(Finding::error(
                CheckCategory::Schedule,
                format!(
                    "Gap of {} minutes between {} and {}",
                    expected_end - current.end_minute,
                    current.show_id,
                    neighbor.show_id
                ),
            ));
        } else if current.end_minute > expected_end {
            findings.push(Finding::error(
                CheckCategory::Schedule,
                format!(
                    "Overlap of {} minutes between {} and {}",
                    current.end_minute - expected_end,
                    current.show_id,
                    neighbor.show_id
                ),
            ));
        }
    }

    let covered = total_minutes(slots);
    if covered != i64::from(MINUTES_PER_DAY) {
        findings.push(Finding::error(
            CheckCategory::Schedule,
            format!(
                "Total coverage is {:.1} hours, not 24",
                covered as f64 / 60.0
            ),
        ));
    }

    findings
}

/// Sum of slot durations. Slots that end before they start count negatively.
pub fn total_minutes(slots: &[ScheduleSlot]) -> i64 {
    slots.iter().map(ScheduleSlot::duration_minutes).sum()
}
