//! Station-wide ratio policy (`station.json`).

use serde::Deserialize;
use serde_json::Value;

use super::Quantity;

/// Bounds every show's music/talk split must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DefaultRatios {
    pub max_music_fraction: Quantity,
    pub min_talk_fraction: Quantity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationPolicy {
    pub default_ratios: DefaultRatios,
}

impl StationPolicy {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    pub fn max_music_fraction(&self) -> Quantity {
        self.default_ratios.max_music_fraction
    }

    pub fn min_talk_fraction(&self) -> Quantity {
        self.default_ratios.min_talk_fraction
    }
}
