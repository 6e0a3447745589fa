//! Raw ADC count to probe voltage conversion.
//!
//! The wear probes are read through a fixed linear transform:
//! `volts = raw * (full_scale / max_count)`. Counts above `max_count` are
//! clamped so a glitching converter can never report more than full scale.

use crate::config::{ADC_FULL_SCALE_VOLTS, ADC_MAX_COUNT};

/// Scale used for both wear probes.
pub const WEAR_SCALE: AdcScale = AdcScale::new(ADC_FULL_SCALE_VOLTS, ADC_MAX_COUNT);

/// Linear mapping from converter counts to volts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdcScale {
    full_scale_volts: f32,
    max_count: u16,
}

impl AdcScale {
    /// `max_count` must be non-zero.
    pub const fn new(
        full_scale_volts: f32,
        max_count: u16,
    ) -> Self {
        assert!(max_count > 0);
        Self {
            full_scale_volts,
            max_count,
        }
    }

    /// Volts per converter count.
    #[inline]
    pub fn volts_per_count(self) -> f32 { self.full_scale_volts / f32::from(self.max_count) }

    /// Convert a raw reading to volts.
    #[inline]
    pub fn to_volts(
        self,
        raw: u16,
    ) -> f32 {
        f32::from(raw.min(self.max_count)) * self.volts_per_count()
    }

    #[inline]
    pub const fn full_scale_volts(self) -> f32 { self.full_scale_volts }

    #[inline]
    pub const fn max_count(self) -> u16 { self.max_count }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(
        a: f32,
        b: f32,
    ) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_zero_count_is_zero_volts() {
        assert_eq!(WEAR_SCALE.to_volts(0), 0.0);
    }

    #[test]
    fn test_max_count_is_full_scale() {
        assert!(approx(WEAR_SCALE.to_volts(ADC_MAX_COUNT), ADC_FULL_SCALE_VOLTS));
    }

    #[test]
    fn test_mid_scale() {
        // 2048 * 5 / 4095
        assert!(approx(WEAR_SCALE.to_volts(2048), 2.500_61));
    }

    #[test]
    fn test_over_range_is_clamped() {
        assert!(approx(WEAR_SCALE.to_volts(u16::MAX), ADC_FULL_SCALE_VOLTS));
        assert!(approx(WEAR_SCALE.to_volts(4096), ADC_FULL_SCALE_VOLTS));
    }

    #[test]
    fn test_custom_scale() {
        let scale = AdcScale::new(3.3, 1023);
        assert!(approx(scale.to_volts(1023), 3.3));
        assert_eq!(scale.max_count(), 1023);
        assert!(approx(scale.full_scale_volts(), 3.3));
    }
}
