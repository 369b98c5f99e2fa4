// crates/wfp-core/src/winnow/ring.rs

use crate::error::{Result, WfpError};

/// Fixed-capacity arena holding a sliding run of `span` values.
///
/// Capacity is `span * rate`. The live run always sits contiguously at
/// `buf[base..base + span]`, so callers can hand it to checksum or scan
/// routines as a plain slice. Advancing moves `base` forward by one; once
/// `base` reaches `(rate - 1) * span`, the newest `span - 1` values are copied
/// back to the front and `base` resets to zero. That compaction happens once
/// per `(rate - 1) * span` advances, which keeps the per-value cost O(1)
/// amortized instead of O(span) for shifting on every step.
#[derive(Debug)]
pub struct ShiftBuffer<T> {
    buf: Vec<T>,
    span: usize,
    base: usize,
    fill: usize,
    wrap_at: usize,
    compactions: u64,
}

impl<T: Copy + Default> ShiftBuffer<T> {
    pub fn new(span: usize, rate: usize) -> Result<Self> {
        if span == 0 {
            return Err(WfpError::Config("shift buffer span must be non-zero".into()));
        }
        if rate < 2 {
            return Err(WfpError::Config(format!(
                "shift buffer rate must be >= 2, got {}",
                rate
            )));
        }
        let cap = span
            .checked_mul(rate)
            .ok_or_else(|| WfpError::Config(format!("shift buffer overflow: span={span} rate={rate}")))?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)
            .map_err(|e| WfpError::Alloc(format!("shift buffer of {cap} slots: {e}")))?;
        buf.resize(cap, T::default());

        Ok(Self {
            buf,
            span,
            base: 0,
            fill: 0,
            wrap_at: (rate - 1) * span,
            compactions: 0,
        })
    }

    /// Append one value to the current run. Returns true once the run holds `span` values.
    #[inline]
    pub fn push(&mut self, v: T) -> bool {
        debug_assert!(self.fill < self.span, "push on a full run without advance");
        self.buf[self.base + self.fill] = v;
        self.fill += 1;
        self.fill >= self.span
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.fill >= self.span
    }

    /// The current run. Only meaningful once `is_full()`.
    #[inline]
    pub fn view(&self) -> &[T] {
        debug_assert!(self.is_full());
        &self.buf[self.base..self.base + self.span]
    }

    /// Drop the oldest value of a full run.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.is_full());
        self.base += 1;
        if self.base >= self.wrap_at {
            let keep = self.span - 1;
            self.buf.copy_within(self.wrap_at..self.wrap_at + keep, 0);
            self.base = 0;
            self.compactions += 1;
        }
        self.fill = self.span - 1;
    }

    /// Push `v`; if that completes a run, apply `f` to it, advance, and return the result.
    #[inline]
    pub fn push_with<R>(&mut self, v: T, f: impl FnOnce(&[T]) -> R) -> Option<R> {
        if !self.push(v) {
            return None;
        }
        let out = f(self.view());
        self.advance();
        Some(out)
    }

    pub fn span(&self) -> usize {
        self.span
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// Offset of the current run inside the arena.
    pub fn base(&self) -> usize {
        self.base
    }

    /// How many times the tail has been copied back to the front.
    pub fn compactions(&self) -> u64 {
        self.compactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(span: usize, rate: usize, n: u32) -> (ShiftBuffer<u32>, Vec<Vec<u32>>) {
        let mut sb = ShiftBuffer::new(span, rate).unwrap();
        let mut views = Vec::new();
        for v in 0..n {
            if let Some(run) = sb.push_with(v, |w| w.to_vec()) {
                views.push(run);
            }
        }
        (sb, views)
    }

    #[test]
    fn view_is_always_the_last_span_values() {
        for &(span, rate) in &[(1usize, 2usize), (3, 2), (5, 4), (30, 4), (64, 4), (7, 9)] {
            let n = (span * rate * 5) as u32 + 3;
            let (_, views) = drive(span, rate, n);
            assert_eq!(views.len(), n as usize - span + 1, "span={span} rate={rate}");
            for (i, run) in views.iter().enumerate() {
                let want: Vec<u32> = (i as u32..(i + span) as u32).collect();
                assert_eq!(run, &want, "span={span} rate={rate} i={i}");
            }
        }
    }

    #[test]
    fn compacts_once_per_rate_minus_one_spans() {
        let span = 5;
        let rate = 4;
        let wrap = (rate - 1) * span;
        // One advance per full run: runs = n - span + 1.
        let runs = wrap * 3 + 2;
        let n = (runs + span - 1) as u32;
        let (sb, _) = drive(span, rate, n);
        assert_eq!(sb.compactions(), 3);
        assert_eq!(sb.base(), 2);
        assert_eq!(sb.capacity(), span * rate);
        assert!(sb.base() + sb.span() <= sb.capacity());
    }

    #[test]
    fn run_stays_inside_arena() {
        let mut sb: ShiftBuffer<u8> = ShiftBuffer::new(4, 2).unwrap();
        for i in 0..1000u32 {
            sb.push_with(i as u8, |_| ());
            assert!(sb.base() + sb.span() <= sb.capacity());
            assert_eq!(sb.len(), 3.min(i as usize + 1));
        }
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(matches!(ShiftBuffer::<u8>::new(0, 4), Err(WfpError::Config(_))));
        assert!(matches!(ShiftBuffer::<u8>::new(4, 1), Err(WfpError::Config(_))));
        assert!(matches!(ShiftBuffer::<u8>::new(usize::MAX, 4), Err(WfpError::Config(_))));
    }
}
