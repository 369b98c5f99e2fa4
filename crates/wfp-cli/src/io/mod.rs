pub mod jsonl;
pub mod wfp;
