//! The two wear channels shared between acquisition and presentation.
//!
//! [`WearChannels`] is built once at startup and handed to every task by
//! reference. The acquisition task is its only writer.

use crate::shared::Share;

/// One acquisition result, in volts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WearSample {
    /// Fine debris probe voltage.
    pub fine: f32,
    /// Coarse debris probe voltage.
    pub coarse: f32,
}

impl WearSample {
    pub const fn new(
        fine: f32,
        coarse: f32,
    ) -> Self {
        Self { fine, coarse }
    }

    /// Combined voltage of both probes.
    #[inline]
    pub fn sum(&self) -> f32 { self.fine + self.coarse }
}

/// Latest fine and coarse voltages.
pub struct WearChannels {
    pub fine: Share<f32>,
    pub coarse: Share<f32>,
}

impl WearChannels {
    /// Both channels read as `0.0` until the first publish.
    pub const fn new() -> Self {
        Self {
            fine: Share::new(0.0),
            coarse: Share::new(0.0),
        }
    }

    /// Publish both voltages. The pair is not published atomically.
    pub fn publish(
        &self,
        sample: WearSample,
    ) {
        self.fine.publish(sample.fine);
        self.coarse.publish(sample.coarse);
    }

    /// Independent reads of both channels.
    ///
    /// A publish racing this call may land between the two reads, so the
    /// result can pair a new fine value with an old coarse one.
    pub fn latest(&self) -> WearSample { WearSample::new(self.fine.read(), self.coarse.read()) }

    /// Whether the acquisition task has published at least once.
    pub fn has_data(&self) -> bool { self.fine.is_published() && self.coarse.is_published() }
}

impl Default for WearChannels {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_channels_start_at_zero() {
        let channels = WearChannels::new();
        assert_eq!(channels.latest(), WearSample::new(0.0, 0.0));
        assert!(!channels.has_data());
    }

    #[test]
    fn test_publish_routes_each_voltage() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(1.0, 2.0));
        assert_eq!(channels.fine.read(), 1.0);
        assert_eq!(channels.coarse.read(), 2.0);
        assert!(channels.has_data());
    }

    #[test]
    fn test_latest_sample_wins() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(0.5, 0.25));
        channels.publish(WearSample::new(4.5, 3.75));
        assert_eq!(channels.latest(), WearSample::new(4.5, 3.75));
    }

    #[test]
    fn test_sum() {
        let sample = WearSample::new(1.25, 2.5);
        assert!((sample.sum() - 3.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reader_thread_sees_published_values() {
        let channels = WearChannels::new();

        thread::scope(|s| {
            s.spawn(|| {
                for i in 1..=1_000 {
                    let v = i as f32;
                    channels.publish(WearSample::new(v, -v));
                }
            });

            s.spawn(|| {
                for _ in 0..1_000 {
                    let sample = channels.latest();
                    // Each channel individually only holds values its writer produced
                    assert!(sample.fine >= 0.0 && sample.fine <= 1_000.0);
                    assert!(sample.coarse <= 0.0 && sample.coarse >= -1_000.0);
                }
            });
        });

        assert_eq!(channels.latest(), WearSample::new(1_000.0, -1_000.0));
    }
}
