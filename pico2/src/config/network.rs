//! Wi-Fi and IP configuration.
//!
//! By default the board starts its own WPA2 access point, hands out client
//! addresses over DHCP and serves pages at a fixed address. With the `lan` feature it joins an existing network
//! instead; those credentials are read from the build environment so they
//! never end up in the repository:
//!
//! ```bash
//! DEBRIS_WIFI_SSID=... DEBRIS_WIFI_PASSWORD=... cargo build --release --features lan
//! ```

// =============================================================================
// Access Point Mode (default)
// =============================================================================

/// Network name broadcast by the access point.
pub const AP_SSID: &str = "debris_tester";

/// WPA2 passphrase of the access point (8 characters minimum).
pub const AP_PASSWORD: &str = "password";

/// 2.4 GHz channel used by the access point.
pub const AP_CHANNEL: u8 = 5;

/// Board address on its own network. The board is also the gateway.
pub const AP_ADDRESS: [u8; 4] = [192, 168, 5, 1];

/// Prefix length of the access point subnet (255.255.255.0).
pub const AP_PREFIX_LEN: u8 = 24;

/// First address leased to access point clients.
pub const DHCP_RANGE_START: [u8; 4] = [192, 168, 5, 50];

/// Last address leased to access point clients.
pub const DHCP_RANGE_END: [u8; 4] = [192, 168, 5, 200];

/// Clients the DHCP server tracks at once.
pub const DHCP_MAX_LEASES: usize = 16;

/// UDP sockets used by the DHCP server.
pub const DHCP_SOCKETS: usize = 1;

/// DHCP datagram buffer, one Ethernet MTU.
pub const DHCP_BUFFER_SIZE: usize = 1500;

/// Delay before restarting the DHCP server after an I/O error, in milliseconds.
pub const DHCP_RESTART_MS: u64 = 500;

const _: () = assert!(AP_PASSWORD.len() >= 8);
const _: () = assert!(AP_PASSWORD.len() <= 63);
const _: () = assert!(AP_SSID.len() <= 32);
const _: () = assert!(AP_CHANNEL >= 1 && AP_CHANNEL <= 13);
const _: () = assert!(AP_PREFIX_LEN <= 32);
const _: () = assert!(DHCP_RANGE_START[3] <= DHCP_RANGE_END[3]);
const _: () = assert!(DHCP_MAX_LEASES > 0);

// =============================================================================
// Station Mode (`lan` feature)
// =============================================================================

/// Network to join.
#[cfg(feature = "lan")]
pub const LAN_SSID: &str = env!("DEBRIS_WIFI_SSID");

/// Passphrase of the network to join.
#[cfg(feature = "lan")]
pub const LAN_PASSWORD: &str = env!("DEBRIS_WIFI_PASSWORD");

/// Delay between failed join attempts, in milliseconds.
pub const JOIN_RETRY_MS: u64 = 1000;

// =============================================================================
// Network Stack
// =============================================================================

/// Sockets reserved in the network stack (web workers, DHCP server or client, DNS).
pub const STACK_SOCKETS: usize = 5;

/// Mixed into the TCP sequence number seed.
pub const SEED_SALT: u64 = 0x0DEB_0215_7E57_0001;

/// Render an IPv4 address as dotted quad.
pub fn format_ipv4(addr: [u8; 4]) -> heapless::String<15> {
    use core::fmt::Write;

    let mut out = heapless::String::new();
    // 15 bytes always fit "255.255.255.255"
    let _ = write!(out, "{}.{}.{}.{}", addr[0], addr[1], addr[2], addr[3]);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ap_address_is_private() {
        assert_eq!(AP_ADDRESS[0], 192);
        assert_eq!(AP_ADDRESS[1], 168);
    }

    #[test]
    fn test_format_ipv4() {
        assert_eq!(format_ipv4(AP_ADDRESS).as_str(), "192.168.5.1");
        assert_eq!(format_ipv4([255, 255, 255, 255]).as_str(), "255.255.255.255");
    }

    fn in_ap_subnet(addr: [u8; 4]) -> bool {
        let mask = u32::MAX << (32 - u32::from(AP_PREFIX_LEN));
        u32::from_be_bytes(addr) & mask == u32::from_be_bytes(AP_ADDRESS) & mask
    }

    #[test]
    fn test_dhcp_range_is_inside_ap_subnet() {
        assert!(in_ap_subnet(DHCP_RANGE_START));
        assert!(in_ap_subnet(DHCP_RANGE_END));
        assert!(!in_ap_subnet([192, 168, 6, 1]));
    }

    #[test]
    fn test_dhcp_range_excludes_board_address() {
        let board = u32::from_be_bytes(AP_ADDRESS);
        let start = u32::from_be_bytes(DHCP_RANGE_START);
        let end = u32::from_be_bytes(DHCP_RANGE_END);
        assert!(start <= end);
        assert!(!(start..=end).contains(&board));
    }

    #[test]
    fn test_dhcp_range_covers_lease_table() {
        let span = u32::from_be_bytes(DHCP_RANGE_END) - u32::from_be_bytes(DHCP_RANGE_START) + 1;
        assert!(span as usize >= DHCP_MAX_LEASES);
    }

    #[test]
    fn test_stack_has_room_for_web_workers_and_dhcp() {
        assert!(STACK_SOCKETS > crate::config::WEB_TASK_POOL_SIZE + DHCP_SOCKETS);
    }
}
