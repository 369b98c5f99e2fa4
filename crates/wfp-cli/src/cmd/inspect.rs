// crates/wfp-cli/src/cmd/inspect.rs

use anyhow::Context;
use clap::Args;
use wfp_core::repr::text_norm::significant_len;

use crate::cmd::args::{WinnowArgs, DEFAULT_LIMIT};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input file path
    #[arg(long)]
    pub r#in: String,

    #[command(flatten)]
    pub winnow: WinnowArgs,

    /// Entry cap applied during the scan
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in).with_context(|| format!("read input {}", args.r#in))?;
    let winnower = args.winnow.build()?;
    let cfg = *winnower.config();

    let (fp, stats) = winnower
        .fingerprint_with_stats(&bytes, args.limit)
        .with_context(|| format!("fingerprint {}", args.r#in))?;

    let distinct_lines = fp.by_line().len();

    eprintln!("--- inspect ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("bytes           = {}", bytes.len());
    eprintln!("significant     = {}", significant_len(&bytes));
    eprintln!("gram/window     = {}/{}", cfg.gram, cfg.window);
    eprintln!("checksum        = {}", winnower.checksum().name());
    eprintln!("--- scan ---");
    eprintln!("bytes_scanned   = {}", stats.bytes_scanned);
    eprintln!("grams           = {}", stats.grams);
    eprintln!("windows         = {}", stats.windows);
    eprintln!("emitted         = {}", stats.emitted);
    eprintln!("suppressed      = {}", stats.suppressed);
    eprintln!("density         = {:.4}", stats.density());
    eprintln!("lines_with_hash = {}", distinct_lines);
    eprintln!("last_line       = {}", stats.last_line);
    eprintln!("limit_reached   = {}", stats.limit_reached);

    if !bytes.is_empty() && stats.windows == 0 {
        eprintln!(
            "note: needs at least {} significant bytes for one entry",
            cfg.min_significant_bytes()
        );
    }

    Ok(())
}
