//! Common types and logic for the oil debris wear monitor.
//!
//! This crate contains platform-agnostic code used by the Pico 2 W firmware
//! and tested on the host:
//!
//! - [`shared`]: single-writer, many-reader latest-value channel
//! - [`channels`]: the fine/coarse wear channel pair and [`WearSample`]
//! - [`voltage`]: raw ADC count to volts scaling
//! - [`acquire`]: probe sampling behind the [`WearSensor`] trait
//! - [`render`]: CSV and HTML page rendering
//! - [`config`]: sampling and report constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Host tests run with `std` so they
//! can use threads and the standard test harness:
//! ```bash
//! cargo test -p debris-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod acquire;
pub mod channels;
pub mod config;
pub mod render;
pub mod shared;
pub mod voltage;

// Re-export commonly used items
pub use acquire::{AcquireError, Acquisition, DemoSensor, Probe, WearSensor};
pub use channels::{WearChannels, WearSample};
pub use shared::{Share, SharedScalar};
pub use voltage::{AdcScale, WEAR_SCALE};
