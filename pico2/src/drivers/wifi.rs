//! CYW43439 Wi-Fi bring-up and network stack configuration.
//!
//! The radio is driven over PIO-based SPI. Firmware blobs are loaded from
//! `cyw43-firmware/` (see the README there). Depending on the `lan` feature
//! the board either starts its own WPA2 access point with a static address,
//! or joins an existing network and asks for an address over DHCP.

use cyw43::Control;
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::info;
use embassy_executor::Spawner;
use embassy_net::{Config, Stack, StackResources};
use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::Pio;
use embassy_time::Instant;
use static_cell::StaticCell;

use crate::Irqs;
use crate::config::{SEED_SALT, STACK_SOCKETS};
use crate::tasks::{cyw43_task, net_task};

/// Peripherals wired to the CYW43439 on the Pico 2 W.
pub struct WifiPins {
    pub pwr: Peri<'static, PIN_23>,
    pub dio: Peri<'static, PIN_24>,
    pub cs: Peri<'static, PIN_25>,
    pub clk: Peri<'static, PIN_29>,
    pub pio: Peri<'static, PIO0>,
    pub dma: Peri<'static, DMA_CH0>,
}

/// Power up the radio, spawn its runner tasks and bring the network up.
///
/// Returns the network stack for the web workers and the radio control
/// handle (also used for the on-board LED).
pub async fn start_network(
    spawner: Spawner,
    pins: WifiPins,
) -> (Stack<'static>, Control<'static>) {
    let fw = include_bytes!("../../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../../cyw43-firmware/43439A0_clm.bin");

    let pwr = Output::new(pins.pwr, Level::Low);
    let cs = Output::new(pins.cs, Level::High);
    let mut pio = Pio::new(pins.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        pins.dio,
        pins.clk,
        pins.dma,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.spawn(cyw43_task(runner)).unwrap();

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;
    info!("CYW43 initialized");

    let config = bring_up_link(&mut control).await;

    // TCP sequence numbers only, not used for anything security relevant
    let seed = Instant::now().as_ticks() ^ SEED_SALT;

    static RESOURCES: StaticCell<StackResources<STACK_SOCKETS>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());
    let (stack, runner) = embassy_net::new(net_device, config, resources, seed);
    spawner.spawn(net_task(runner)).unwrap();

    stack.wait_config_up().await;
    if let Some(v4) = stack.config_v4() {
        info!("Network up at {}", v4.address);
    }

    (stack, control)
}

/// Start the access point and return its static addressing.
#[cfg(not(feature = "lan"))]
async fn bring_up_link(control: &mut Control<'static>) -> Config {
    use embassy_net::{Ipv4Address, Ipv4Cidr, StaticConfigV4};

    use crate::config::{AP_ADDRESS, AP_CHANNEL, AP_PASSWORD, AP_PREFIX_LEN, AP_SSID};

    info!("Starting access point '{}' on channel {}", AP_SSID, AP_CHANNEL);
    control.start_ap_wpa2(AP_SSID, AP_PASSWORD, AP_CHANNEL).await;

    let [a, b, c, d] = AP_ADDRESS;
    let address = Ipv4Address::new(a, b, c, d);
    Config::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(address, AP_PREFIX_LEN),
        gateway: Some(address),
        dns_servers: heapless::Vec::new(),
    })
}

/// Join the configured network, retrying until it succeeds, then use DHCP.
#[cfg(feature = "lan")]
async fn bring_up_link(control: &mut Control<'static>) -> Config {
    use cyw43::JoinOptions;
    use defmt::warn;
    use embassy_time::Timer;

    use crate::config::{JOIN_RETRY_MS, LAN_PASSWORD, LAN_SSID};

    info!("Joining '{}'", LAN_SSID);
    loop {
        match control
            .join(LAN_SSID, JoinOptions::new(LAN_PASSWORD.as_bytes()))
            .await
        {
            Ok(()) => break,
            Err(err) => {
                warn!("Join failed with status {}, retrying", err.status);
                Timer::after_millis(JOIN_RETRY_MS).await;
            }
        }
    }
    info!("Joined '{}'", LAN_SSID);

    Config::dhcpv4(Default::default())
}
