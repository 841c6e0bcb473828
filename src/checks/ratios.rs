//! Music/talk ratio policy.

use crate::loader::LoadedDocument;
use crate::model::{Ratios, Show, StationPolicy};
use crate::report::{CheckCategory, Finding};

/// Message reported once when the station policy is unusable
pub const STATION_UNAVAILABLE: &str = "Failed to load station.json";

/// Decode the station policy, or return the single blocking finding.
pub fn load_policy(station: &LoadedDocument) -> Result<StationPolicy, Finding> {
    station
        .value()
        .and_then(|v| StationPolicy::from_value(v).ok())
        .ok_or_else(|| Finding::error(CheckCategory::Ratios, STATION_UNAVAILABLE))
}

/// Check each show's ratios against the policy.
///
/// The three checks are independent; a show can fail all of them. The bounds
/// are strict comparisons, only the sum uses `sum_tolerance`. Values render in
/// the form they were declared, so `1.0` stays `1.0` and `1` stays `1`.
pub fn check_ratios(shows: &[Show], policy: &StationPolicy, sum_tolerance: f64) -> Vec<Finding> {
    let max_music = policy.max_music_fraction();
    let min_talk = policy.min_talk_fraction();
    let mut findings = Vec::new();

    for show in shows {
        let Some(ratios) = show.ratios else {
            continue;
        };
        let music = ratios.music_fraction;
        let talk = ratios.talk_fraction;
        let error = |message: String| {
            Finding::error(CheckCategory::Ratios, message).for_subject(&show.id)
        };

        if music.value() > max_music.value() {
            findings.push(error(format!("Music {} exceeds maximum {}", music, max_music)));
        }

        if talk.value() < min_talk.value() {
            findings.push(error(format!("Talk {} below minimum {}", talk, min_talk)));
        }

        let total = music + talk;
        if (total.value() - 1.0).abs() > sum_tolerance {
            findings.push(error(format!("Ratios sum to {}, not 1.0", total)));
        }

        tracing::trace!(
            show = %show.id,
            music = music.value(),
            talk = talk.value(),
            "checked ratios"
        );
    }

    findings
}

/// `60% music, 40% talk` summary line for a show
pub fn ratio_summary(ratios: &Ratios) -> String {
    format!(
        "{:.0}% music, {:.0}% talk",
        ratios.music_fraction.value() * 100.0,
        ratios.talk_fraction.value() * 100.0
    )
}
