//! Wear probe acquisition.
//!
//! [`Acquisition`] reads both probes from a [`WearSensor`], scales the raw
//! counts to volts and publishes the result to [`WearChannels`]. The sensor
//! is a trait so the firmware can plug in the RP2350 ADC while tests and the
//! `demo` build use [`DemoSensor`].

use crate::channels::{WearChannels, WearSample};
use crate::config::{ADC_MAX_COUNT, SAMPLE_PERIOD_MS};
use crate::voltage::AdcScale;

/// The two debris probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Probe {
    Fine,
    Coarse,
}

/// Source of raw converter counts.
#[allow(async_fn_in_trait)]
pub trait WearSensor {
    type Error;

    /// Read one raw count from `probe`.
    async fn read_raw(
        &mut self,
        probe: Probe,
    ) -> Result<u16, Self::Error>;
}

/// A probe read failed during an acquisition cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquireError<E> {
    #[error("fine wear probe read failed")]
    Fine(E),
    #[error("coarse wear probe read failed")]
    Coarse(E),
}

impl<E> AcquireError<E> {
    /// Probe whose read failed.
    pub const fn probe(&self) -> Probe {
        match self {
            Self::Fine(_) => Probe::Fine,
            Self::Coarse(_) => Probe::Coarse,
        }
    }
}

/// Sensor plus the scale applied to its counts.
pub struct Acquisition<S> {
    sensor: S,
    scale: AdcScale,
}

impl<S: WearSensor> Acquisition<S> {
    pub const fn new(
        sensor: S,
        scale: AdcScale,
    ) -> Self {
        Self { sensor, scale }
    }

    /// Read both probes and convert them to volts.
    pub async fn sample(&mut self) -> Result<WearSample, AcquireError<S::Error>> {
        let fine = self.sensor.read_raw(Probe::Fine).await.map_err(AcquireError::Fine)?;
        let coarse = self
            .sensor
            .read_raw(Probe::Coarse)
            .await
            .map_err(AcquireError::Coarse)?;

        Ok(WearSample::new(self.scale.to_volts(fine), self.scale.to_volts(coarse)))
    }

    /// One acquisition cycle: sample, then publish on success.
    ///
    /// Nothing is published when a read fails, so readers keep the previous sample.
    pub async fn sample_and_publish(
        &mut self,
        channels: &WearChannels,
    ) -> Result<WearSample, AcquireError<S::Error>> {
        let sample = self.sample().await?;
        channels.publish(sample);
        Ok(sample)
    }

    #[cfg(test)]
    fn sensor_mut(&mut self) -> &mut S { &mut self.sensor }
}

// =============================================================================
// Demo Sensor
// =============================================================================

/// Synthetic probes for boards without sensors attached.
///
/// Each probe follows its own sine wave around mid-scale. Time advances by one
/// sample period per coarse read, so output is deterministic.
pub struct DemoSensor {
    tick: u32,
}

impl DemoSensor {
    pub const fn new() -> Self { Self { tick: 0 } }

    fn wave(
        &self,
        amplitude: f32,
        rate: f32,
    ) -> u16 {
        let t = self.tick as f32 * (SAMPLE_PERIOD_MS as f32 / 1000.0);
        let mid = f32::from(ADC_MAX_COUNT) / 2.0;
        let value = mid + amplitude * micromath::F32(t * rate).sin().0;
        value.clamp(0.0, f32::from(ADC_MAX_COUNT)) as u16
    }
}

impl Default for DemoSensor {
    fn default() -> Self { Self::new() }
}

impl WearSensor for DemoSensor {
    type Error = core::convert::Infallible;

    async fn read_raw(
        &mut self,
        probe: Probe,
    ) -> Result<u16, Self::Error> {
        let raw = match probe {
            Probe::Fine => self.wave(1500.0, 0.5),
            Probe::Coarse => {
                let raw = self.wave(900.0, 0.2);
                self.tick = self.tick.wrapping_add(1);
                raw
            }
        };
        Ok(raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::voltage::WEAR_SCALE;

    /// Replays fixed counts, optionally failing one probe.
    struct ScriptedSensor {
        fine: u16,
        coarse: u16,
        fail: Option<Probe>,
        reads: usize,
    }

    impl ScriptedSensor {
        fn new(
            fine: u16,
            coarse: u16,
        ) -> Self {
            Self {
                fine,
                coarse,
                fail: None,
                reads: 0,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct BusFault;

    impl WearSensor for ScriptedSensor {
        type Error = BusFault;

        async fn read_raw(
            &mut self,
            probe: Probe,
        ) -> Result<u16, Self::Error> {
            self.reads += 1;
            if self.fail == Some(probe) {
                return Err(BusFault);
            }
            Ok(match probe {
                Probe::Fine => self.fine,
                Probe::Coarse => self.coarse,
            })
        }
    }

    #[test]
    fn test_sample_scales_both_probes() {
        let mut acq = Acquisition::new(ScriptedSensor::new(0, ADC_MAX_COUNT), WEAR_SCALE);
        let sample = block_on(acq.sample()).unwrap();
        assert_eq!(sample.fine, 0.0);
        assert!((sample.coarse - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_sample_and_publish_updates_channels() {
        let channels = WearChannels::new();
        let mut acq = Acquisition::new(ScriptedSensor::new(819, 2457), WEAR_SCALE);

        let sample = block_on(acq.sample_and_publish(&channels)).unwrap();

        assert_eq!(channels.latest(), sample);
        assert!(channels.has_data());
        assert!((sample.fine - 1.0).abs() < 1e-3);
        assert!((sample.coarse - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_failed_fine_read_publishes_nothing() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(1.5, 2.5));

        let mut sensor = ScriptedSensor::new(100, 200);
        sensor.fail = Some(Probe::Fine);
        let mut acq = Acquisition::new(sensor, WEAR_SCALE);

        let err = block_on(acq.sample_and_publish(&channels)).unwrap_err();
        assert_eq!(err, AcquireError::Fine(BusFault));
        assert_eq!(err.probe(), Probe::Fine);
        // Coarse probe is not read after the fine probe fails
        assert_eq!(acq.sensor_mut().reads, 1);
        assert_eq!(channels.latest(), WearSample::new(1.5, 2.5));
    }

    #[test]
    fn test_failed_coarse_read_publishes_nothing() {
        let channels = WearChannels::new();

        let mut sensor = ScriptedSensor::new(100, 200);
        sensor.fail = Some(Probe::Coarse);
        let mut acq = Acquisition::new(sensor, WEAR_SCALE);

        let err = block_on(acq.sample_and_publish(&channels)).unwrap_err();
        assert_eq!(err.probe(), Probe::Coarse);
        assert_eq!(err, AcquireError::Coarse(BusFault));
        assert!(!channels.has_data());
    }

    #[test]
    fn test_error_messages() {
        use core::fmt::Write;

        let mut msg: heapless::String<64> = heapless::String::new();
        write!(msg, "{}", AcquireError::Coarse(BusFault)).unwrap();
        assert_eq!(msg.as_str(), "coarse wear probe read failed");
    }

    #[test]
    fn test_demo_sensor_in_range() {
        let mut acq = Acquisition::new(DemoSensor::new(), WEAR_SCALE);
        for _ in 0..200 {
            let sample = block_on(acq.sample()).unwrap();
            assert!((0.0..=5.0).contains(&sample.fine));
            assert!((0.0..=5.0).contains(&sample.coarse));
        }
    }

    #[test]
    fn test_demo_sensor_starts_mid_scale() {
        let mut sensor = DemoSensor::new();
        let fine = block_on(sensor.read_raw(Probe::Fine)).unwrap();
        assert_eq!(fine, ADC_MAX_COUNT / 2);
    }

    #[test]
    fn test_demo_sensor_is_deterministic() {
        let mut a = Acquisition::new(DemoSensor::new(), WEAR_SCALE);
        let mut b = Acquisition::new(DemoSensor::new(), WEAR_SCALE);
        for _ in 0..10 {
            assert_eq!(block_on(a.sample()).unwrap(), block_on(b.sample()).unwrap());
        }
    }

    #[test]
    fn test_demo_sensor_varies() {
        let mut acq = Acquisition::new(DemoSensor::new(), WEAR_SCALE);
        let first = block_on(acq.sample()).unwrap();
        let later = (0..5).map(|_| block_on(acq.sample()).unwrap()).last().unwrap();
        assert_ne!(first, later);
    }
}
