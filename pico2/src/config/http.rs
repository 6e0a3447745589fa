//! HTTP server configuration.

/// TCP port the web workers listen on.
pub const HTTP_PORT: u16 = 80;

/// Number of concurrent web workers (each owns one socket).
pub const WEB_TASK_POOL_SIZE: usize = 2;

/// Per-socket TCP receive buffer, in bytes.
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// Per-socket TCP transmit buffer, in bytes.
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Request parsing buffer per worker, in bytes.
pub const HTTP_BUFFER_SIZE: usize = 2048;

/// Time allowed for a new connection to send its first request.
pub const START_READ_TIMEOUT_MS: u64 = 5000;

/// Time allowed for a kept-alive connection to send its next request.
pub const PERSISTENT_READ_TIMEOUT_MS: u64 = 1000;

/// Time allowed to read the remainder of a request.
pub const READ_TIMEOUT_MS: u64 = 1000;

/// Time allowed to write a response.
pub const WRITE_TIMEOUT_MS: u64 = 1000;

const _: () = assert!(WEB_TASK_POOL_SIZE > 0);
