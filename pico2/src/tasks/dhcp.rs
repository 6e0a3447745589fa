//! DHCP server for clients of the access point.
//!
//! Leases addresses from [`DHCP_RANGE_START`] to [`DHCP_RANGE_END`] and
//! advertises the board as gateway, so a phone joining the access point can
//! open the pages without manual network setup.

use core::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use defmt::{info, warn};
use edge_dhcp::io::{self, DEFAULT_SERVER_PORT};
use edge_dhcp::server::{Server, ServerOptions};
use edge_nal::UdpBind;
use edge_nal_embassy::{Udp, UdpBuffers};
use embassy_net::Stack;
use embassy_time::{Instant, Timer};

use crate::config::{
    AP_ADDRESS,
    DHCP_BUFFER_SIZE,
    DHCP_MAX_LEASES,
    DHCP_RANGE_END,
    DHCP_RANGE_START,
    DHCP_RESTART_MS,
    DHCP_SOCKETS,
};

#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>) -> ! {
    let board = Ipv4Addr::from(AP_ADDRESS);

    let buffers = UdpBuffers::<DHCP_SOCKETS, DHCP_BUFFER_SIZE, DHCP_BUFFER_SIZE, 2>::new();
    let udp = Udp::new(stack, &buffers);
    let local = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_SERVER_PORT));

    let mut server = Server::<_, DHCP_MAX_LEASES>::new(|| Instant::now().as_secs(), board);
    server.range_start = Ipv4Addr::from(DHCP_RANGE_START);
    server.range_end = Ipv4Addr::from(DHCP_RANGE_END);

    let mut gateways = [board];
    let options = ServerOptions::new(board, Some(&mut gateways));

    let mut buf = [0; DHCP_BUFFER_SIZE];

    loop {
        match udp.bind(local).await {
            Ok(mut socket) => {
                info!("DHCP server listening on UDP:{}", DEFAULT_SERVER_PORT);
                if let Err(err) = io::server::run(&mut server, &options, &mut socket, &mut buf).await {
                    warn!("DHCP server error: {}, restarting", defmt::Debug2Format(&err));
                }
            }
            Err(err) => warn!("DHCP bind failed: {}", defmt::Debug2Format(&err)),
        }
        Timer::after_millis(DHCP_RESTART_MS).await;
    }
}
