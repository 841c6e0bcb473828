//! Validation checkers.
//!
//! Each checker is a pure function over already-decoded documents that returns
//! the findings it produced, in emission order. Checkers never fail: malformed
//! input for one show becomes a finding scoped to that show, and a show section
//! that did not decode is skipped only by the checkers that read it.

pub mod budget;
pub mod ratios;
pub mod references;
pub mod schedule;
pub mod syntax;

pub use budget::{budget_summary, check_budgets};
pub use ratios::{check_ratios, load_policy, ratio_summary};
pub use references::check_references;
pub use schedule::{check_slots, normalize, total_minutes, ScheduleSlot, MINUTES_PER_DAY};
pub use syntax::{check_syntax, decode_shows};
