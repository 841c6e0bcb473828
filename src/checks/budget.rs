//! AI resource budgets derived from show duration and ratios.
//!
//! Drift between declared and derived budgets is reported as a warning.

use crate::config::Tolerances;
use crate::model::{AiBudget, Ratios, Show, ShowSchedule};
use crate::report::{CheckCategory, Finding};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Budgets implied by a show's duration and music/talk split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedBudget {
    pub tts_seconds: f64,
    pub music_minutes: f64,
}

impl ExpectedBudget {
    pub fn new(schedule: &ShowSchedule, ratios: &Ratios) -> Self {
        let total_seconds = schedule.duration_hours * SECONDS_PER_HOUR;
        Self {
            tts_seconds: total_seconds * ratios.talk_fraction.value(),
            music_minutes: (total_seconds * ratios.music_fraction.value()) / 60.0,
        }
    }
}

/// Compare declared budgets with the derived ones.
///
/// Needs the schedule, ratios and budget sections; a show missing any of them
/// is skipped.
pub fn check_budgets(shows: &[Show], tolerances: &Tolerances) -> Vec<Finding> {
    let mut findings = Vec::new();

    for show in shows {
        let (Some(schedule), Some(ratios), Some(budget)) =
            (&show.schedule, &show.ratios, &show.ai_budget)
        else {
            continue;
        };

        let expected = ExpectedBudget::new(schedule, ratios);
        let tts_budget = budget.max_tts_seconds_per_show;
        let music_budget = budget.max_music_minutes_per_show;
        let warning = |message: String| {
            Finding::warning(CheckCategory::Budget, message).for_subject(&show.id)
        };

        if (tts_budget.value() - expected.tts_seconds).abs() > tolerances.tts_seconds {
            findings.push(warning(format!(
                "TTS budget {}s differs from expected {:.0}s",
                tts_budget, expected.tts_seconds
            )));
        }

        if (music_budget.value() - expected.music_minutes).abs() > tolerances.music_minutes {
            findings.push(warning(format!(
                "Music budget {}min differs from expected {:.0}min",
                music_budget, expected.music_minutes
            )));
        }
    }

    findings
}

/// `TTS 4320s, Music 108min` summary line for a show
pub fn budget_summary(budget: &AiBudget) -> String {
    format!(
        "TTS {}s, Music {}min",
        budget.max_tts_seconds_per_show, budget.max_music_minutes_per_show
    )
}
