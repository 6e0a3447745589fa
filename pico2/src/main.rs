//! Oil Debris Wear Monitor Firmware for Raspberry Pi Pico 2 W (RP2350)
//!
//! Samples the fine and coarse wear probes on the on-chip ADC and serves the
//! latest voltages over Wi-Fi.
//!
//! # Architecture
//!
//! - Acquisition task: samples both probes every 500 ms and publishes to the
//!   shared wear channels (single writer)
//! - Web tasks: picoserve workers answering `/` and `/csv` (many readers)
//! - Network tasks: CYW43 radio runner, embassy-net stack runner and, in
//!   access point mode, a DHCP server for clients
//! - Main task: blinks the on-board LED as a heartbeat
//!
//! # Network
//!
//! By default the board starts the access point `debris_tester`, leases
//! client addresses over DHCP and serves on `http://192.168.5.1/`. Build with
//! `--features lan` to join an existing network instead (credentials from
//! `DEBRIS_WIFI_SSID` / `DEBRIS_WIFI_PASSWORD`).

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

// Modules only used in the binary (not testable on host)
mod drivers;
mod tasks;

// Re-export testable modules from library for local use
// (These are defined in lib.rs with host-testable code)
mod config {
    pub use debris_pico2::config::*;
}
mod pages {
    pub use debris_pico2::pages::*;
}

use debris_common::{Acquisition, WEAR_SCALE, WearChannels};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::config::WEB_TASK_POOL_SIZE;
use crate::drivers::{WifiPins, start_network};
use crate::tasks::{Sensor, acquisition_task, web_task};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Half period of the heartbeat LED.
const HEARTBEAT_MS: u64 = 500;

/// CYW43 GPIO driving the on-board LED.
const LED_GPIO: u8 = 0;

/// Latest wear voltages, written by acquisition and read by the web workers.
static CHANNELS: StaticCell<WearChannels> = StaticCell::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-debris-monitor"),
    embassy_rp::binary_info::rp_program_description!(c"Oil debris wear monitor with CSV web export"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Oil debris monitor starting...");

    let p = embassy_rp::init(Default::default());

    let channels: &'static WearChannels = CHANNELS.init(WearChannels::new());

    #[cfg(not(feature = "demo"))]
    let sensor: Sensor = drivers::WearAdc::new(p.ADC, p.PIN_26, p.PIN_27);
    #[cfg(feature = "demo")]
    let sensor: Sensor = debris_common::DemoSensor::new();

    // Sampling starts before the network so the first page already has data
    spawner
        .spawn(acquisition_task(Acquisition::new(sensor, WEAR_SCALE), channels))
        .unwrap();
    info!("Acquisition task spawned");

    let pins = WifiPins {
        pwr: p.PIN_23,
        dio: p.PIN_24,
        cs: p.PIN_25,
        clk: p.PIN_29,
        pio: p.PIO0,
        dma: p.DMA_CH0,
    };
    let (stack, mut control) = start_network(spawner, pins).await;

    #[cfg(not(feature = "lan"))]
    {
        spawner.spawn(tasks::dhcp_server_task(stack)).unwrap();
        info!("DHCP server task spawned");
    }

    for id in 0..WEB_TASK_POOL_SIZE {
        spawner.spawn(web_task(id, stack, channels)).unwrap();
    }
    info!("{} web tasks spawned", WEB_TASK_POOL_SIZE);

    #[cfg(not(feature = "lan"))]
    info!(
        "Join '{}' and open http://{}/",
        config::AP_SSID,
        config::format_ipv4(config::AP_ADDRESS).as_str()
    );

    let mut led_on = false;
    loop {
        led_on = !led_on;
        control.gpio_set(LED_GPIO, led_on).await;
        Timer::after_millis(HEARTBEAT_MS).await;
    }
}
