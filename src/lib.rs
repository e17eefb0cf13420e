#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Hsv` / `Rgb`**: 8-bit color values with deterministic conversion between them
//! - **`LightRing`**: Buffered ring of `N` LEDs with global brightness and flush debouncing
//! - **`LedStrip`**: Trait to implement for your strip hardware (or use `SmartLedsStrip`)
//! - **`Pattern`**: Tick-driven animation with `initialize` and `advance`
//! - **`LightPattern`**: Closed set of patterns (`Solid`, `Pulse`, `ColorCycle`, `RainbowChase`, `Sparkle`)
//! - **`PatternCatalog`**: One pre-built pattern per `PatternId`
//! - **`PatternManager`**: Owns ring and catalog, selects patterns, advances the active one per tick
//! - **`Command`**: Remote commands parsed from topic/payload pairs
//! - **`Scale`**: Load cell averaging with tare and outlier rejection
//! - **`Firmware`**: Boot order and periodic jobs of the networked device
//! - **`HydrationHelper`**: Standalone device turning drinks, refills and idle time into light cues
//!
//! Patterns count time in ticks. The tick driver calls
//! `PatternManager::advance_frame` at a roughly constant rate (40 Hz on the
//! device); a slower rate slows the animation down but never breaks it.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod catalog;
pub mod colors;
pub mod command;
pub mod config;
pub mod firmware;
pub mod hydration;
pub mod manager;
pub mod pattern;
pub mod ring;
pub mod scale;
pub mod strip;
pub mod time;
pub mod types;

pub use catalog::PatternCatalog;
pub use colors::{Hsv, Rgb};
pub use command::{Command, CommandError, LightAction};
pub use firmware::{Firmware, FirmwareError, Publisher};
pub use hydration::{HydrationHelper, HydrationTracker, Stage};
pub use manager::{ManagerError, ManagerState, PatternManager};
pub use pattern::{ColorCycle, LightPattern, Pattern, Pulse, RainbowChase, Solid, Sparkle};
pub use ring::{LedStrip, LightRing, RingError};
pub use scale::{LoadCell, Scale};
pub use strip::SmartLedsStrip;
pub use time::{Interval, TimeDuration, TimeInstant, TimeSource};
pub use types::{ColorPhase, CycleError, PatternId, Ticks, UnknownPattern};
