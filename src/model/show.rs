//! A scheduled show (`shows/*.json`).
//!
//! Shows are decoded section by section. A broken section is recorded as a
//! problem and left as `None`, so a checker that needs only the schedule still
//! sees a show whose budget block is malformed.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::Quantity;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowPresenters {
    /// Expected to hold two presenter IDs; only resolution is checked
    pub primary_duo: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowTopics {
    pub primary_tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ratios {
    pub music_fraction: Quantity,
    pub talk_fraction: Quantity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowSchedule {
    /// `HH:MM`, 24-hour, UTC
    pub start_time_utc: String,
    /// `HH:MM`, 24-hour, UTC; `"00:00"` means end of day
    pub end_time_utc: String,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AiBudget {
    pub max_tts_seconds_per_show: Quantity,
    pub max_music_minutes_per_show: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: String,
    pub presenters: Option<ShowPresenters>,
    pub topics: Option<ShowTopics>,
    pub ratios: Option<Ratios>,
    pub schedule: Option<ShowSchedule>,
    pub ai_budget: Option<AiBudget>,
}

/// Result of decoding one show document
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedShow {
    /// `None` when the document is not a JSON object
    pub show: Option<Show>,
    /// One entry per absent or malformed field, in field order
    pub problems: Vec<String>,
}

impl DecodedShow {
    pub fn is_complete(&self) -> bool {
        self.show.is_some() && self.problems.is_empty()
    }
}

impl Show {
    /// Decode a show document.
    ///
    /// `fallback_id` (usually the file stem) names the show when `id` is
    /// absent or not a string.
    pub fn decode(value: &Value, fallback_id: &str) -> DecodedShow {
        let Some(object) = value.as_object() else {
            return DecodedShow {
                show: None,
                problems: vec!["expected a JSON object".to_string()],
            };
        };

        let mut problems = Vec::new();
        let id = match object.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(_) => {
                problems.push("invalid `id`: expected a string".to_string());
                fallback_id.to_string()
            }
            None => {
                problems.push("missing field `id`".to_string());
                fallback_id.to_string()
            }
        };

        let show = Show {
            id,
            presenters: section(object, "presenters", &mut problems),
            topics: section(object, "topics", &mut problems),
            ratios: section(object, "ratios", &mut problems),
            schedule: section(object, "schedule", &mut problems),
            ai_budget: section(object, "ai_budget", &mut problems),
        };

        DecodedShow {
            show: Some(show),
            problems,
        }
    }
}

fn section<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
    problems: &mut Vec<String>,
) -> Option<T> {
    let Some(raw) = object.get(key) else {
        problems.push(format!("missing field `{}`", key));
        return None;
    };

    match T::deserialize(raw) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            problems.push(format!("invalid `{}`: {}", key, e));
            None
        }
    }
}
