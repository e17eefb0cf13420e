//! Standalone hydration helper.
//!
//! Watches a water bottle on the scale and answers with light: a sparkle
//! after every drink, a dim blue breath after a refill and red breaths of
//! growing brightness when nothing was drunk for a while. After an hour
//! without drinking and with the bottle off the scale the lights go out.
//!
//! [`HydrationTracker`] holds the drinking state and is free of hardware.
//! [`HydrationHelper`] runs it on a scale and a ring, including the startup
//! sequence that tares the empty scale.

mod helper;
mod tracker;

pub use helper::{HydrationHelper, Stage};
pub use tracker::{HydrationTracker, REMINDERS};
