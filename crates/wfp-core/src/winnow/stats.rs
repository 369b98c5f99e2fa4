// crates/wfp-core/src/winnow/stats.rs

/// Per-call counters for one fingerprinting pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Raw input bytes consumed (stops short of the input on early termination).
    pub bytes_scanned: u64,
    pub significant_bytes: u64,
    pub grams: u64,
    pub windows: u64,
    pub emitted: u64,
    /// Window minima equal to the previously emitted one.
    pub suppressed: u64,
    /// Line number at the point the scan ended.
    pub last_line: u32,
    pub limit_reached: bool,
}

impl ScanStats {
    /// Fraction of windows that produced an entry.
    pub fn density(&self) -> f64 {
        if self.windows == 0 {
            0.0
        } else {
            (self.emitted as f64) / (self.windows as f64)
        }
    }
}
