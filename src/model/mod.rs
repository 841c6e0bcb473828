//! Strongly-typed station configuration model.
//!
//! Documents arrive as weakly-typed `serde_json::Value`s. Decoding them into
//! these types is a separate phase from semantic checking. Show documents
//! decode per section, and a checker skips only the sections it cannot use.

pub mod quantity;
pub mod roster;
pub mod show;
pub mod station;

pub use quantity::Quantity;
pub use roster::{Presenter, Roster, TopicVocabulary};
pub use show::{
    AiBudget, DecodedShow, Ratios, Show, ShowPresenters, ShowSchedule, ShowTopics,
};
pub use station::{DefaultRatios, StationPolicy};
