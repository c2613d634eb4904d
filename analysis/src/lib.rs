//! Derives per-match statistics from a Quake 3 Arena server log.
//!
//! Lines are classified by [`event::classify`] and folded into match records
//! by [`matches::Accumulator`].

pub mod event;
pub mod matches;

pub use matches::{parse, parse_str, MatchRecord};
