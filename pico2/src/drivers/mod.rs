//! Hardware drivers for the debris monitor.
//!
//! - `wear_adc`: on-chip ADC reading of the fine and coarse wear probes
//! - `wifi`: CYW43439 bring-up and network stack configuration

mod wear_adc;
mod wifi;

pub use wear_adc::WearAdc;
pub use wifi::{WifiPins, start_network};
