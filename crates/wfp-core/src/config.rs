// crates/wfp-core/src/config.rs

/// Gram size in normalized bytes.
pub const DEFAULT_GRAM: usize = 30;

/// Window size in grams.
pub const DEFAULT_WINDOW: usize = 64;

/// Backing store multiplier for the gram and window shift buffers.
/// A buffer of `span * BUFFER_RATE` slots compacts once every
/// `(BUFFER_RATE - 1) * span` advances, so each value is copied at most
/// about twice over its lifetime.
pub const BUFFER_RATE: usize = 4;

/// Immutable fingerprinting parameters.
///
/// `gram` and `window` must match between whoever produced a fingerprint and
/// whoever compares against it. `buffer_rate` only affects memory/copy
/// trade-off, never the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinnowConfig {
    pub gram: usize,
    pub window: usize,
    pub buffer_rate: usize,
}

impl WinnowConfig {
    pub fn new(gram: usize, window: usize) -> Self {
        Self {
            gram,
            window,
            buffer_rate: BUFFER_RATE,
        }
    }

    pub fn with_buffer_rate(mut self, buffer_rate: usize) -> Self {
        self.buffer_rate = buffer_rate;
        self
    }

    /// Minimum number of significant bytes before the first entry can appear.
    pub fn min_significant_bytes(&self) -> usize {
        self.gram.saturating_add(self.window).saturating_sub(1)
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        default_config()
    }
}

pub fn default_config() -> WinnowConfig {
    WinnowConfig::new(DEFAULT_GRAM, DEFAULT_WINDOW)
}
