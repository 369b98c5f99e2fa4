// crates/wfp-cli/src/cmd/args.rs

use clap::Args;
use wfp_core::checksum::ChecksumKind;
use wfp_core::config::{BUFFER_RATE, DEFAULT_GRAM, DEFAULT_WINDOW};
use wfp_core::{Winnower, WinnowConfig};

/// Default cap on entries per file.
pub const DEFAULT_LIMIT: usize = 65_535;

/// Fingerprint parameters shared by every subcommand.
/// Producer and consumer must agree on all three.
#[derive(Args, Debug, Clone)]
pub struct WinnowArgs {
    /// Gram size in significant bytes
    #[arg(long, default_value_t = DEFAULT_GRAM)]
    pub gram: usize,

    /// Window size in grams
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Checksum primitive: "crc32c" (reference) or "crc32"
    #[arg(long, default_value = "crc32c")]
    pub checksum: String,
}

impl WinnowArgs {
    pub fn config(&self) -> WinnowConfig {
        WinnowConfig {
            gram: self.gram,
            window: self.window,
            buffer_rate: BUFFER_RATE,
        }
    }

    pub fn build(&self) -> anyhow::Result<Winnower<ChecksumKind>> {
        let kind: ChecksumKind = self.checksum.parse()?;
        let w = Winnower::with_checksum(self.config(), kind)?;
        Ok(w)
    }
}
