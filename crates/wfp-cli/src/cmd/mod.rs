// crates/wfp-cli/src/cmd/mod.rs

pub mod args;
pub mod fingerprint;
pub mod inspect;
