// crates/wfp-core/src/winnow/emit.rs

use crate::checksum::Checksum32;

/// Destination for emitted (hash, line) entries.
pub trait EntrySink {
    fn len(&self) -> usize;
    fn record(&mut self, hash: u32, line: u32);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writes into caller-owned parallel slices.
///
/// The driver never records more than `limit` entries and validates
/// `limit <= min(hashes.len(), lines.len())` up front.
pub struct SliceSink<'a> {
    hashes: &'a mut [u32],
    lines: &'a mut [u32],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(hashes: &'a mut [u32], lines: &'a mut [u32]) -> Self {
        Self {
            hashes,
            lines,
            len: 0,
        }
    }
}

impl EntrySink for SliceSink<'_> {
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn record(&mut self, hash: u32, line: u32) {
        self.hashes[self.len] = hash;
        self.lines[self.len] = line;
        self.len += 1;
    }
}

/// Drops consecutive repeats of the selected minimum and re-hashes survivors.
///
/// A minimum that stays put while the window slides over it would otherwise
/// be emitted once per window.
#[derive(Debug, Default)]
pub struct HashEmitter {
    last: u32,
}

impl HashEmitter {
    /// `last` starts at 0, so a first minimum of exactly 0 is suppressed.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns true if an entry was recorded.
    #[inline]
    pub fn offer<C, S>(&mut self, min: u32, line: u32, checksum: &C, sink: &mut S) -> bool
    where
        C: Checksum32 + ?Sized,
        S: EntrySink + ?Sized,
    {
        if min == self.last {
            return false;
        }
        // Window minima skew small; hashing the 4 raw bytes again spreads them out.
        let spread = checksum.checksum(&min.to_le_bytes());
        sink.record(spread, line);
        self.last = min;
        true
    }
}
