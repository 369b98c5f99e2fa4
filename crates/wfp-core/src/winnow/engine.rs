// crates/wfp-core/src/winnow/engine.rs

use crate::checksum::{Checksum32, Crc32c};
use crate::config::{default_config, WinnowConfig};
use crate::error::Result;
use crate::repr::text_norm::normalize_byte;
use crate::validate::{validate_config, validate_limit};
use crate::winnow::emit::{EntrySink, HashEmitter, SliceSink};
use crate::winnow::fingerprint::Fingerprint;
use crate::winnow::gram::GramAssembler;
use crate::winnow::stats::ScanStats;
use crate::winnow::window::WindowSelector;

/// Fingerprints byte buffers with a fixed configuration and checksum.
///
/// Holds no per-scan state: every call allocates its own gram and window
/// buffers and drops them on return, so one `Winnower` can serve many
/// threads as long as `C` is `Sync`.
#[derive(Clone, Debug)]
pub struct Winnower<C = Crc32c> {
    config: WinnowConfig,
    checksum: C,
}

impl Winnower<Crc32c> {
    pub fn new(config: WinnowConfig) -> Result<Self> {
        Self::with_checksum(config, Crc32c)
    }
}

impl<C: Checksum32> Winnower<C> {
    pub fn with_checksum(config: WinnowConfig, checksum: C) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self { config, checksum })
    }

    pub fn config(&self) -> &WinnowConfig {
        &self.config
    }

    pub fn checksum(&self) -> &C {
        &self.checksum
    }

    /// Fill caller-owned `hashes` / `lines` with at most `limit` entries and
    /// return how many were written.
    ///
    /// On `Err` the slice contents are unspecified. A count below `limit` is
    /// a complete result; a count equal to `limit` means the scan stopped
    /// there.
    pub fn fingerprint_into(
        &self,
        src: &[u8],
        hashes: &mut [u32],
        lines: &mut [u32],
        limit: usize,
    ) -> Result<usize> {
        let stats = self.scan_into(src, hashes, lines, limit)?;
        Ok(stats.emitted as usize)
    }

    /// Same as [`fingerprint_into`](Self::fingerprint_into), returning the run counters.
    pub fn scan_into(
        &self,
        src: &[u8],
        hashes: &mut [u32],
        lines: &mut [u32],
        limit: usize,
    ) -> Result<ScanStats> {
        validate_limit(limit, hashes.len(), lines.len())?;
        let mut sink = SliceSink::new(hashes, lines);
        self.run(src, limit, &mut sink)
    }

    pub fn fingerprint(&self, src: &[u8], limit: usize) -> Result<Fingerprint> {
        Ok(self.fingerprint_with_stats(src, limit)?.0)
    }

    pub fn fingerprint_with_stats(&self, src: &[u8], limit: usize) -> Result<(Fingerprint, ScanStats)> {
        validate_limit(limit, usize::MAX, usize::MAX)?;
        // Every entry closes a window and every window ends on a distinct
        // input byte, so the result never outgrows the input.
        let cap = limit.min(src.len());
        let mut fp = Fingerprint::with_capacity(cap)?;
        let stats = self.run(src, limit, &mut fp)?;
        Ok((fp, stats))
    }

    fn run<S: EntrySink>(&self, src: &[u8], limit: usize, sink: &mut S) -> Result<ScanStats> {
        let mut grams = GramAssembler::new(&self.config)?;
        let mut windows = WindowSelector::new(&self.config)?;
        let mut emitter = HashEmitter::new();
        let mut stats = ScanStats::default();
        let checksum = &self.checksum;

        let mut line: u32 = 1;
        for &raw in src {
            stats.bytes_scanned += 1;
            if raw == b'\n' {
                line = line.saturating_add(1);
            }

            let Some(byte) = normalize_byte(raw) else {
                continue;
            };
            stats.significant_bytes += 1;

            let Some(gram_hash) = grams.push_with(byte, |g| checksum.checksum(g)) else {
                continue;
            };
            stats.grams += 1;

            let Some(min) = windows.push(gram_hash) else {
                continue;
            };
            stats.windows += 1;

            if emitter.offer(min, line, checksum, sink) {
                stats.emitted += 1;
            } else {
                stats.suppressed += 1;
            }

            if sink.len() >= limit {
                stats.limit_reached = true;
                break;
            }
        }

        stats.last_line = line;
        Ok(stats)
    }
}

/// Fingerprint `src` with the default configuration and CRC-32C.
pub fn fingerprint(src: &[u8], limit: usize) -> Result<Fingerprint> {
    Winnower::new(default_config())?.fingerprint(src, limit)
}
