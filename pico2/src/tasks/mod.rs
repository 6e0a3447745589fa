//! Async tasks for the debris monitor firmware.
//!
//! - `acquire`: periodic wear probe sampling (the only writer of the channels)
//! - `dhcp`: DHCP server for access point clients (not built with `lan`)
//! - `net`: CYW43 and embassy-net runners
//! - `web`: picoserve HTTP workers (readers of the channels)

mod acquire;
#[cfg(not(feature = "lan"))]
mod dhcp;
mod net;
mod web;

pub use acquire::{Sensor, acquisition_task};
#[cfg(not(feature = "lan"))]
pub use dhcp::dhcp_server_task;
pub use net::{cyw43_task, net_task};
pub use web::web_task;
