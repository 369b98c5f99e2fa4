pub mod error;
pub mod validate;

pub mod checksum;
pub mod config;
pub mod repr;
pub mod winnow;

pub use crate::checksum::{Checksum32, Crc32Ieee, Crc32c};
pub use crate::config::WinnowConfig;
pub use crate::error::{Result, WfpError};
pub use crate::winnow::engine::{fingerprint, Winnower};
pub use crate::winnow::fingerprint::Fingerprint;
pub use crate::winnow::stats::ScanStats;
