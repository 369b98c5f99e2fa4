pub mod emit;
pub mod engine;
pub mod fingerprint;
pub mod gram;
pub mod ring;
pub mod stats;
pub mod window;
