//! Application configuration.
//!
//! - `network`: access point / station credentials and addressing
//! - `http`: web server port, worker pool and buffer sizes
//!
//! Sampling and report constants live in [`debris_common::config`].
//!
//! # Pins (Pico 2 W)
//!
//! - GP26 / ADC0: fine wear probe
//! - GP27 / ADC1: coarse wear probe
//! - GP23, GP24, GP25, GP29: CYW43439 Wi-Fi (power, data, chip select, clock)

pub mod http;
pub mod network;

// Re-export at config level for convenience
pub use http::{
    HTTP_BUFFER_SIZE,
    HTTP_PORT,
    PERSISTENT_READ_TIMEOUT_MS,
    READ_TIMEOUT_MS,
    START_READ_TIMEOUT_MS,
    TCP_RX_BUFFER_SIZE,
    TCP_TX_BUFFER_SIZE,
    WEB_TASK_POOL_SIZE,
    WRITE_TIMEOUT_MS,
};
#[cfg(feature = "lan")]
pub use network::{LAN_PASSWORD, LAN_SSID};
pub use network::{
    AP_ADDRESS,
    AP_CHANNEL,
    AP_PASSWORD,
    AP_PREFIX_LEN,
    AP_SSID,
    DHCP_BUFFER_SIZE,
    DHCP_MAX_LEASES,
    DHCP_RANGE_END,
    DHCP_RANGE_START,
    DHCP_RESTART_MS,
    DHCP_SOCKETS,
    JOIN_RETRY_MS,
    SEED_SALT,
    STACK_SOCKETS,
    format_ipv4,
};
