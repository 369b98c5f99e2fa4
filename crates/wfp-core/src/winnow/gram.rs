// crates/wfp-core/src/winnow/gram.rs

use crate::config::WinnowConfig;
use crate::error::Result;
use crate::winnow::ring::ShiftBuffer;

/// Collects normalized bytes into overlapping k-grams of `config.gram` bytes.
pub struct GramAssembler {
    ring: ShiftBuffer<u8>,
}

impl GramAssembler {
    pub fn new(config: &WinnowConfig) -> Result<Self> {
        Ok(Self {
            ring: ShiftBuffer::new(config.gram, config.buffer_rate)?,
        })
    }

    /// Feed one normalized byte. When it completes a gram, `f` sees the gram
    /// bytes (oldest first) and its result is returned.
    #[inline]
    pub fn push_with<R>(&mut self, byte: u8, f: impl FnOnce(&[u8]) -> R) -> Option<R> {
        self.ring.push_with(byte, f)
    }
}
