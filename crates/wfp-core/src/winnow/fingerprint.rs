// crates/wfp-core/src/winnow/fingerprint.rs

use crate::error::{Result, WfpError};
use crate::winnow::emit::EntrySink;

/// Owned fingerprint: parallel `hashes` / `lines`, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fingerprint {
    pub hashes: Vec<u32>,
    pub lines: Vec<u32>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty fingerprint with room for `n` entries; allocation failure is reported, not aborted on.
    pub fn with_capacity(n: usize) -> Result<Self> {
        let mut fp = Self::new();
        fp.hashes
            .try_reserve_exact(n)
            .map_err(|e| WfpError::Alloc(format!("fingerprint hashes ({n} entries): {e}")))?;
        fp.lines
            .try_reserve_exact(n)
            .map_err(|e| WfpError::Alloc(format!("fingerprint lines ({n} entries): {e}")))?;
        Ok(fp)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// (hash, line) pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.hashes.iter().copied().zip(self.lines.iter().copied())
    }

    /// Runs of consecutive entries sharing a line number.
    ///
    /// Lines are non-decreasing, so each line appears at most once.
    pub fn by_line(&self) -> Vec<(u32, &[u32])> {
        let mut out = Vec::new();
        let mut start = 0usize;
        while start < self.lines.len() {
            let line = self.lines[start];
            let mut end = start + 1;
            while end < self.lines.len() && self.lines[end] == line {
                end += 1;
            }
            out.push((line, &self.hashes[start..end]));
            start = end;
        }
        out
    }
}

impl EntrySink for Fingerprint {
    fn len(&self) -> usize {
        self.hashes.len()
    }

    #[inline]
    fn record(&mut self, hash: u32, line: u32) {
        self.hashes.push(hash);
        self.lines.push(line);
    }
}
