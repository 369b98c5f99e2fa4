use crate::config::WinnowConfig;
use crate::error::{Result, WfpError};

pub fn validate_config(c: &WinnowConfig) -> Result<()> {
    if c.gram == 0 {
        return Err(WfpError::Config("gram must be non-zero".into()));
    }
    if c.window == 0 {
        return Err(WfpError::Config("window must be non-zero".into()));
    }
    // A rate of 1 leaves no room to advance before compacting.
    if c.buffer_rate < 2 {
        return Err(WfpError::Config(format!(
            "buffer_rate must be >= 2, got {}",
            c.buffer_rate
        )));
    }
    if c.gram.checked_mul(c.buffer_rate).is_none() || c.window.checked_mul(c.buffer_rate).is_none() {
        return Err(WfpError::Config(format!(
            "buffer size overflow: gram={} window={} buffer_rate={}",
            c.gram, c.window, c.buffer_rate
        )));
    }
    Ok(())
}

/// `limit` must be at least one and both output slices must hold `limit` entries.
pub fn validate_limit(limit: usize, hashes_len: usize, lines_len: usize) -> Result<()> {
    if limit == 0 {
        return Err(WfpError::Config("limit must be >= 1".into()));
    }
    if hashes_len < limit || lines_len < limit {
        return Err(WfpError::Config(format!(
            "output capacity too small: limit={} hashes={} lines={}",
            limit, hashes_len, lines_len
        )));
    }
    Ok(())
}
