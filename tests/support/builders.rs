use serde_json::{json, Value};

/// Builds a show document. Budgets default to the values implied by the
/// duration and ratios, so a built show is clean unless a test changes it.
pub struct ShowBuilder {
    id: String,
    start: String,
    end: String,
    duration_hours: f64,
    presenters: Vec<String>,
    tags: Vec<String>,
    music_fraction: f64,
    talk_fraction: f64,
    tts_seconds: Option<f64>,
    music_minutes: Option<f64>,
}

impl ShowBuilder {
    pub fn new(id: &str, start: &str, end: &str, duration_hours: f64) -> Self {
        Self {
            id: id.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            duration_hours,
            presenters: vec!["dj_alex".to_string(), "dj_sam".to_string()],
            tags: vec!["weather".to_string(), "local_news".to_string()],
            music_fraction: 0.6,
            talk_fraction: 0.4,
            tts_seconds: None,
            music_minutes: None,
        }
    }

    pub fn with_presenters(mut self, ids: &[&str]) -> Self {
        self.presenters = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_ratios(mut self, music: f64, talk: f64) -> Self {
        self.music_fraction = music;
        self.talk_fraction = talk;
        self
    }

    pub fn with_budget(mut self, tts_seconds: f64, music_minutes: f64) -> Self {
        self.tts_seconds = Some(tts_seconds);
        self.music_minutes = Some(music_minutes);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn build(self) -> Value {
        let total_seconds = self.duration_hours * 3600.0;
        let tts = self
            .tts_seconds
            .unwrap_or(total_seconds * self.talk_fraction);
        let music = self
            .music_minutes
            .unwrap_or(total_seconds * self.music_fraction / 60.0);

        json!({
            "id": self.id,
            "name": format!("{} (Lofield FM)", self.id),
            "presenters": { "primary_duo": self.presenters },
            "topics": { "primary_tags": self.tags },
            "ratios": {
                "music_fraction": self.music_fraction,
                "talk_fraction": self.talk_fraction
            },
            "schedule": {
                "start_time_utc": self.start,
                "end_time_utc": self.end,
                "duration_hours": self.duration_hours
            },
            "ai_budget": {
                "max_tts_seconds_per_show": tts,
                "max_music_minutes_per_show": music
            }
        })
    }
}
