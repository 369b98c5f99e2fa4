// crates/wfp-core/src/winnow/window.rs

use crate::config::WinnowConfig;
use crate::error::Result;
use crate::winnow::ring::ShiftBuffer;

/// "No minimum yet". A real checksum equal to this value still selects
/// correctly since the comparison is strict and the window is never empty.
pub const NO_MINIMUM: u32 = u32::MAX;

/// Sliding window over gram checksums that yields one minimum per full window.
pub struct WindowSelector {
    ring: ShiftBuffer<u32>,
}

impl WindowSelector {
    pub fn new(config: &WinnowConfig) -> Result<Self> {
        Ok(Self {
            ring: ShiftBuffer::new(config.window, config.buffer_rate)?,
        })
    }

    /// Feed one gram checksum; returns the window minimum once the window is full.
    #[inline]
    pub fn push(&mut self, hash: u32) -> Option<u32> {
        self.ring.push_with(hash, smallest)
    }
}

/// Minimum by increasing index; on ties the earliest one wins.
#[inline]
pub fn smallest(window: &[u32]) -> u32 {
    let mut hash = NO_MINIMUM;
    for &h in window {
        if h < hash {
            hash = h;
        }
    }
    hash
}
