#![no_std]

//! # Indoor-rs
//! ## A humidity keeper for an indoor grow box in Rust
//!
//! Features:
//! - Humidity monitoring with a two-point (hysteresis) relay band
//! - Three button menu on a 16x2 character LCD
//! - Live adjustment of the upper and lower humidity limits
//! - Capacitive soil probe calibration and averaging
//!
//! Hardware access goes through the `embedded-hal` 1.0 traits so the whole
//! control core runs (and is tested) on the host. `src/main.rs` wires it to a
//! Raspberry Pi Pico.

#[macro_use]
mod fmt;

pub mod buttons;
pub mod config;
pub mod controller;
pub mod display;
pub mod editor;
pub mod error;
pub mod lcd;
pub mod menu;
pub mod relay;
pub mod rendering;
pub mod sensors;
pub mod thresholds;
pub mod timer;

#[cfg(test)]
mod testing;

pub use buttons::{ButtonEvent, ButtonReader, ButtonSource, DebouncedButtons};
pub use config::Settings;
pub use controller::{Context, Station};
pub use display::DisplaySink;
pub use error::HardwareFault;
pub use menu::{Menu, MenuSelection, MenuState};
pub use relay::{decide, Relay, RelayPolarity, RelayState};
pub use thresholds::{ThresholdField, ThresholdPair};
pub use timer::{Clock, Duration, Instant};
