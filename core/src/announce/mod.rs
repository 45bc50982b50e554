//! Announcement decision policy
//!
//! Maps a one-second countdown transition to at most one announcement.
//! The decision is pure: it looks only at the numbers handed in, never at
//! the clock, so the whole policy can be simulated second by second in
//! tests.

mod policy;

#[cfg(test)]
mod policy_tests;

pub use policy::{Announcement, TickTransition, announcement_text, decide};
