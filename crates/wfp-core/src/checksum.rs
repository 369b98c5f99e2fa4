// crates/wfp-core/src/checksum.rs
//
// 32-bit checksum primitives used for gram hashing and minimum re-hashing.
// Fingerprints are only comparable when produced with the same primitive;
// CRC-32C is the reference one.

use crate::error::{Result, WfpError};

/// A fixed, deterministic 32-bit checksum over a byte span.
pub trait Checksum32 {
    fn checksum(&self, bytes: &[u8]) -> u32;
}

/// CRC-32C (Castagnoli, reflected, init/xorout 0xFFFF_FFFF).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32c;

impl Checksum32 for Crc32c {
    #[inline]
    fn checksum(&self, bytes: &[u8]) -> u32 {
        crc32c::crc32c(bytes)
    }
}

/// CRC-32 (IEEE 802.3), as used by zlib/gzip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32Ieee;

impl Checksum32 for Crc32Ieee {
    #[inline]
    fn checksum(&self, bytes: &[u8]) -> u32 {
        let mut h = crc32fast::Hasher::new();
        h.update(bytes);
        h.finalize()
    }
}

/// Adapter for ad-hoc checksum functions (tests, experiments).
#[derive(Clone, Copy, Debug)]
pub struct FnChecksum<F>(pub F);

impl<F> Checksum32 for FnChecksum<F>
where
    F: Fn(&[u8]) -> u32,
{
    #[inline]
    fn checksum(&self, bytes: &[u8]) -> u32 {
        (self.0)(bytes)
    }
}

/// Runtime-selectable primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChecksumKind {
    #[default]
    Crc32c,
    Crc32,
}

impl ChecksumKind {
    pub fn name(self) -> &'static str {
        match self {
            ChecksumKind::Crc32c => "crc32c",
            ChecksumKind::Crc32 => "crc32",
        }
    }
}

impl std::str::FromStr for ChecksumKind {
    type Err = WfpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "crc32c" | "castagnoli" => Ok(ChecksumKind::Crc32c),
            "crc32" | "ieee" => Ok(ChecksumKind::Crc32),
            other => Err(WfpError::Config(format!("unknown checksum: {other}"))),
        }
    }
}

impl Checksum32 for ChecksumKind {
    #[inline]
    fn checksum(&self, bytes: &[u8]) -> u32 {
        match self {
            ChecksumKind::Crc32c => Crc32c.checksum(bytes),
            ChecksumKind::Crc32 => Crc32Ieee.checksum(bytes),
        }
    }
}

/// First 16 bytes of the BLAKE3 digest; identifies a whole source file.
pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}
