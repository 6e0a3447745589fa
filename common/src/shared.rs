//! Latest-value-wins scalar shared between one writer and many readers.
//!
//! A [`SharedScalar`] holds a single `Copy` value behind a blocking raw mutex.
//! The critical section is a copy-in ([`SharedScalar::publish`]) or a copy-out
//! ([`SharedScalar::read`]) of a [`Cell`], so it is O(1) in the size of `T`
//! and never contains an `.await` or any I/O. Readers therefore never see a
//! torn value, even when `T` is wider than the native atomic width.
//!
//! # Ownership
//!
//! Instances are constructed explicitly and handed to tasks by reference
//! (`&'static` from a `StaticCell` on the device, `&` or `Arc` on the host).
//! Exactly one task is expected to publish; any number may read.
//!
//! ```ignore
//! use debris_common::shared::Share;
//!
//! static FINE: Share<f32> = Share::new(0.0);
//!
//! FINE.publish(3.3);
//! assert_eq!(FINE.read(), 3.3);
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};

/// [`SharedScalar`] guarded by a critical section, usable from any task or interrupt.
pub type Share<T> = SharedScalar<CriticalSectionRawMutex, T>;

/// Held value plus whether a publish has ever happened.
#[derive(Clone, Copy)]
struct Slot<T> {
    value: T,
    published: bool,
}

/// Single-writer, many-reader latest value.
pub struct SharedScalar<M: RawMutex, T: Copy> {
    slot: Mutex<M, Cell<Slot<T>>>,
}

impl<M: RawMutex, T: Copy> SharedScalar<M, T> {
    /// Create a channel that reads as `default` until the first publish.
    pub const fn new(default: T) -> Self {
        Self {
            slot: Mutex::new(Cell::new(Slot {
                value: default,
                published: false,
            })),
        }
    }

    /// Replace the held value. Never blocks on readers and never fails.
    #[inline]
    pub fn publish(
        &self,
        value: T,
    ) {
        self.slot.lock(|slot| {
            slot.set(Slot {
                value,
                published: true,
            })
        });
    }

    /// Latest published value, or the construction default.
    #[inline]
    pub fn read(&self) -> T { self.slot.lock(|slot| slot.get().value) }

    /// Latest published value, `None` if nothing was published yet.
    pub fn try_read(&self) -> Option<T> {
        let slot = self.slot.lock(Cell::get);
        slot.published.then_some(slot.value)
    }

    /// Whether [`publish`](Self::publish) has been called at least once.
    #[inline]
    pub fn is_published(&self) -> bool { self.slot.lock(|slot| slot.get().published) }
}

impl<M: RawMutex, T: Copy + Default> Default for SharedScalar<M, T> {
    fn default() -> Self { Self::new(T::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
