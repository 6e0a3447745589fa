//! Wear probe acquisition task.
//!
//! Samples both probes every [`SAMPLE_PERIOD_MS`] and publishes the result.
//! A failed read is logged and skipped, so the web pages keep serving the
//! previous sample.

use debris_common::config::SAMPLE_PERIOD_MS;
use debris_common::{Acquisition, WearChannels};
use defmt::{info, warn};
use embassy_time::{Duration, Ticker};

/// Probe source compiled into this build.
#[cfg(not(feature = "demo"))]
pub type Sensor = crate::drivers::WearAdc;

/// Probe source compiled into this build.
#[cfg(feature = "demo")]
pub type Sensor = debris_common::DemoSensor;

#[embassy_executor::task]
pub async fn acquisition_task(
    mut acquisition: Acquisition<Sensor>,
    channels: &'static WearChannels,
) -> ! {
    info!("Acquisition task started ({}ms period)", SAMPLE_PERIOD_MS);

    // Fixed period, independent of read duration
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        match acquisition.sample_and_publish(channels).await {
            Ok(sample) => info!(
                "Fine: {}V Coarse: {}V Sum: {}V",
                sample.fine,
                sample.coarse,
                sample.sum()
            ),
            Err(err) if channels.has_data() => {
                warn!("{} probe read failed, keeping previous sample", err.probe())
            }
            Err(err) => warn!("{} probe read failed, no sample published yet", err.probe()),
        }

        ticker.next().await;
    }
}
