//! Debris monitor library - testable modules for the Pico 2 W firmware.
//!
//! This library contains the board-side logic that can be tested on the host
//! machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific tasks and drivers.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p debris-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p debris-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// Configuration
pub mod config;

// HTTP routing
pub mod pages;

pub use pages::Route;
