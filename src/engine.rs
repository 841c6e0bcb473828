//! Validation engine.
//!
//! Runs every checker over a [`ConfigSet`] and merges their findings into one
//! [`Report`]. Checker order is fixed (syntax, cross-references, ratios,
//! schedule, budgets), which keeps reports identical across runs.
//!
//! A missing roster or vocabulary skips only the cross-reference check, and a
//! missing station policy skips only the ratio check. The schedule and budget
//! checks always run over whichever show sections decoded. Alongside findings,
//! each checker records informational notes for the text report.

use crate::checks::{
    budget_summary, check_budgets, check_ratios, check_references, check_slots, check_syntax,
    decode_shows, load_policy, normalize, ratio_summary, total_minutes, MINUTES_PER_DAY,
};
use crate::config::Tolerances;
use crate::index::ReferenceIndex;
use crate::loader::ConfigSet;
use crate::model::Show;
use crate::report::{CheckCategory, Report};

/// Validate a configuration set with the given tolerances.
pub fn validate(set: &ConfigSet, tolerances: &Tolerances) -> Report {
    let mut report = Report::new();

    report.extend(check_syntax(set));

    let (shows, decode_findings) = decode_shows(&set.shows);
    report.extend(decode_findings);
    tracing::debug!(
        documents = set.shows.len(),
        decoded = shows.len(),
        "decoded show documents"
    );

    report.merge(cross_references(set, &shows));
    report.merge(ratios(set, &shows, tolerances));
    report.merge(schedule(&shows));
    report.merge(budgets(&shows, tolerances));

    tracing::debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    report
}

fn cross_references(set: &ConfigSet, shows: &[Show]) -> Report {
    let mut report = Report::new();
    let index = match ReferenceIndex::from_documents(&set.presenters, &set.tags) {
        Ok(index) => index,
        Err(blocking) => {
            tracing::warn!("reference index unavailable, skipping cross-reference check");
            report.push(blocking);
            return report;
        }
    };

    let category = CheckCategory::CrossReference;
    report.note(category, format!("Found {} presenters", index.presenter_count()));
    report.note(category, format!("Found {} allowed topic tags", index.tag_count()));

    let findings = check_references(shows, &index);
    if findings.is_empty() {
        report.note(category, "All cross-references valid");
    }
    report.extend(findings);
    report
}

fn ratios(set: &ConfigSet, shows: &[Show], tolerances: &Tolerances) -> Report {
    let mut report = Report::new();
    let policy = match load_policy(&set.station) {
        Ok(policy) => policy,
        Err(blocking) => {
            tracing::warn!("station policy unavailable, skipping ratio check");
            report.push(blocking);
            return report;
        }
    };

    report.extend(check_ratios(shows, &policy, tolerances.ratio_sum));
    for show in shows {
        if let Some(ratios) = &show.ratios {
            report.note(
                CheckCategory::Ratios,
                format!("{}: {}", show.id, ratio_summary(ratios)),
            );
        }
    }
    report
}

fn schedule(shows: &[Show]) -> Report {
    let mut report = Report::new();
    let (slots, parse_findings) = normalize(shows);
    tracing::debug!(slots = slots.len(), "normalized schedule");

    report.extend(parse_findings);
    report.extend(check_slots(&slots));

    if total_minutes(&slots) == i64::from(MINUTES_PER_DAY) {
        report.note(
            CheckCategory::Schedule,
            format!("All {} shows cover 24 hours", slots.len()),
        );
    }
    for slot in &slots {
        report.note(CheckCategory::Schedule, slot.to_string());
    }
    report
}

fn budgets(shows: &[Show], tolerances: &Tolerances) -> Report {
    let mut report = Report::new();
    report.extend(check_budgets(shows, tolerances));
    for show in shows {
        if let Some(budget) = &show.ai_budget {
            report.note(
                CheckCategory::Budget,
                format!("{}: {}", show.id, budget_summary(budget)),
            );
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;
    use serde_json::{json, Value};

    fn station() -> Value {
        json!({ "default_ratios": { "max_music_fraction": 0.6, "min_talk_fraction": 0.4 } })
    }

    fn presenters() -> Value {
        json!({ "presenters": [{ "id": "dj_alex" }, { "id": "dj_sam" }] })
    }

    fn tags() -> Value {
        json!({ "allowed_topic_tags": ["weather", "commute"] })
    }

    fn show(id: &str, start: &str, end: &str, hours: f64) -> Value {
        json!({
            "id": id,
            "presenters": { "primary_duo": ["dj_alex", "dj_sam"] },
            "topics": { "primary_tags": ["weather"] },
            "ratios": { "music_fraction": 0.6, "talk_fraction": 0.4 },
            "schedule": { "start_time_utc": start, "end_time_utc": end, "duration_hours": hours },
            "ai_budget": {
                "max_tts_seconds_per_show": hours * 3600.0 * 0.4,
                "max_music_minutes_per_show": hours * 60.0 * 0.6
            }
        })
    }

    fn full_day() -> Vec<Value> {
        vec![
            show("day", "00:00", "12:00", 12.0),
            show("night", "12:00", "00:00", 12.0),
        ]
    }

    fn complete_set(shows: Vec<Value>) -> ConfigSet {
        ConfigSet::from_values(Some(station()), Some(presenters()), Some(tags()), shows)
    }

    #[test]
    fn test_clean_configuration() {
        let report = validate(&complete_set(full_day()), &Tolerances::default());

        assert_eq!(report.outcome(), Outcome::Success);
        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_missing_roster_skips_only_cross_references() {
        let mut shows = full_day();
        shows[0]["presenters"]["primary_duo"][0] = json!("dj_unknown");
        shows[1]["ratios"]["music_fraction"] = json!(0.7);

        let set = ConfigSet::from_values(Some(station()), None, Some(tags()), shows);
        let report = validate(&set, &Tolerances::default());

        let cross: Vec<String> = report
            .by_category(CheckCategory::CrossReference)
            .map(|f| f.to_string())
            .collect();
        assert_eq!(cross, vec!["Failed to load base configuration files"]);
        assert!(report
            .errors()
            .contains(&"night: Music 0.7 exceeds maximum 0.6".to_string()));
    }

    #[test]
    fn test_missing_station_still_checks_schedule() {
        let shows = vec![show("day", "00:00", "12:00", 12.0)];
        let set = ConfigSet::from_values(None, Some(presenters()), Some(tags()), shows);
        let report = validate(&set, &Tolerances::default());

        assert_eq!(
            report.errors(),
            vec![
                "File not found: station.json",
                "Failed to load station.json",
                "Gap of 720 minutes between day and day",
                "Total coverage is 12.0 hours, not 24",
            ]
        );
    }

    #[test]
    fn test_undecodable_show_is_isolated() {
        let mut shows = full_day();
        shows.push(json!({ "id": "half_written", "ratios": { "music_fraction": 0.5 } }));

        let report = validate(&complete_set(shows), &Tolerances::default());

        assert_eq!(report.error_count(), 1);
        assert!(report.errors()[0].starts_with("half_written: Invalid show definition:"));
    }

    #[test]
    fn test_show_without_budget_still_covers_schedule() {
        let mut shows = full_day();
        shows[1].as_object_mut().unwrap().remove("ai_budget");

        let report = validate(&complete_set(shows), &Tolerances::default());

        assert_eq!(
            report.errors(),
            vec!["night: Invalid show definition: missing field `ai_budget`"]
        );
        assert_eq!(report.by_category(CheckCategory::Schedule).count(), 0);
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_budget_drift_only_warns() {
        let mut shows = full_day();
        shows[0]["ai_budget"]["max_tts_seconds_per_show"] = json!(100);

        let report = validate(&complete_set(shows), &Tolerances::default());

        assert_eq!(report.outcome(), Outcome::Success);
        assert_eq!(
            report.warnings(),
            vec!["day: TTS budget 100s differs from expected 17280s"]
        );
    }

    #[test]
    fn test_declared_number_form_is_preserved() {
        let mut shows = vec![show("all_day", "00:00", "00:00", 24.0)];
        shows[0]["ratios"] = json!({ "music_fraction": 1.0, "talk_fraction": 0.0 });
        shows[0]["ai_budget"]["max_tts_seconds_per_show"] = json!(100.0);

        let report = validate(&complete_set(shows), &Tolerances::default());

        assert_eq!(
            report.errors(),
            vec![
                "all_day: Music 1.0 exceeds maximum 0.6",
                "all_day: Talk 0.0 below minimum 0.4",
            ]
        );
        assert_eq!(
            report.warnings()[0],
            "all_day: TTS budget 100.0s differs from expected 0s"
        );
    }

    #[test]
    fn test_notes_describe_each_section() {
        let report = validate(&complete_set(full_day()), &Tolerances::default());

        let cross: Vec<&str> = report.notes_for(CheckCategory::CrossReference).collect();
        assert_eq!(
            cross,
            vec![
                "Found 2 presenters",
                "Found 2 allowed topic tags",
                "All cross-references valid",
            ]
        );

        let ratios: Vec<&str> = report.notes_for(CheckCategory::Ratios).collect();
        assert_eq!(ratios[0], "day: 60% music, 40% talk");

        let schedule: Vec<&str> = report.notes_for(CheckCategory::Schedule).collect();
        assert_eq!(
            schedule,
            vec![
                "All 2 shows cover 24 hours",
                "day: 00:00 - 12:00 (12.0h)",
                "night: 12:00 - 24:00 (12.0h)",
            ]
        );

        let budgets: Vec<&str> = report.notes_for(CheckCategory::Budget).collect();
        assert_eq!(budgets[1], "night: TTS 17280.0s, Music 432.0min");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut shows = full_day();
        shows[0]["topics"]["primary_tags"] = json!(["jazz", "weather", "sport"]);
        shows[1]["schedule"]["start_time_utc"] = json!("13:00");

        let set = complete_set(shows);
        let first = validate(&set, &Tolerances::default());
        let second = validate(&set, &Tolerances::default());

        assert_eq!(first, second);
        assert_eq!(first.errors(), second.errors());
    }
}
