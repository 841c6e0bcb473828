use serde_json::{json, Value};

use super::builders::ShowBuilder;

pub fn station() -> Value {
    json!({
        "name": "Lofield FM",
        "default_ratios": { "max_music_fraction": 0.6, "min_talk_fraction": 0.4 }
    })
}

pub fn presenters() -> Value {
    json!({
        "presenters": [
            { "id": "dj_alex", "name": "Alex", "bio": "Thinks the bypass was a mistake" },
            { "id": "dj_sam", "name": "Sam" },
            { "id": "dj_riley", "name": "Riley" },
            { "id": "dj_morgan", "name": "Morgan" }
        ]
    })
}

pub fn tags() -> Value {
    json!({
        "allowed_topic_tags": ["weather", "commute", "local_news", "music_trivia", "community"]
    })
}

/// Eight contiguous three-hour shows covering the whole day
pub fn standard_day() -> Vec<ShowBuilder> {
    [
        ("night_shift", "00:00", "03:00"),
        ("early_risers", "03:00", "06:00"),
        ("morning_commute", "06:00", "09:00"),
        ("mid_morning", "09:00", "12:00"),
        ("lunch_break", "12:00", "15:00"),
        ("afternoon_drift", "15:00", "18:00"),
        ("evening_wind_down", "18:00", "21:00"),
        ("late_lounge", "21:00", "00:00"),
    ]
    .into_iter()
    .map(|(id, start, end)| ShowBuilder::new(id, start, end, 3.0))
    .collect()
}
