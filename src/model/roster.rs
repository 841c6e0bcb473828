//! Presenter roster (`presenters.json`) and topic vocabulary (`tags.json`).

use serde::Deserialize;
use serde_json::Value;

/// A presenter entry. Only the identifier is validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Presenter {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Roster {
    pub presenters: Vec<Presenter>,
}

impl Roster {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

/// Closed set of topic tags shows may use
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicVocabulary {
    pub allowed_topic_tags: Vec<String>,
}

impl TopicVocabulary {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}
