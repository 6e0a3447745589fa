//! RP2350 ADC driver for the two wear probes.
//!
//! Pin mapping:
//! - Fine probe: GPIO26 (ADC0)
//! - Coarse probe: GPIO27 (ADC1)
//!
//! Pins are configured without pulls so the probe output is not loaded.

use debris_common::{Probe, WearSensor};
use embassy_rp::Peri;
use embassy_rp::adc::{self, Adc, Async, Channel};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{ADC, PIN_26, PIN_27};

use crate::Irqs;

/// Both wear probes on the on-chip 12-bit ADC.
pub struct WearAdc {
    adc: Adc<'static, Async>,
    fine: Channel<'static>,
    coarse: Channel<'static>,
}

impl WearAdc {
    pub fn new(
        adc: Peri<'static, ADC>,
        fine_pin: Peri<'static, PIN_26>,
        coarse_pin: Peri<'static, PIN_27>,
    ) -> Self {
        Self {
            adc: Adc::new(adc, Irqs, adc::Config::default()),
            fine: Channel::new_pin(fine_pin, Pull::None),
            coarse: Channel::new_pin(coarse_pin, Pull::None),
        }
    }
}

impl WearSensor for WearAdc {
    type Error = adc::Error;

    async fn read_raw(
        &mut self,
        probe: Probe,
    ) -> Result<u16, Self::Error> {
        let channel = match probe {
            Probe::Fine => &mut self.fine,
            Probe::Coarse => &mut self.coarse,
        };
        self.adc.read(channel).await
    }
}
