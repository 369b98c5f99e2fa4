// crates/wfp-cli/src/cmd/fingerprint.rs

use anyhow::Context;
use clap::Args;

use crate::cmd::args::{WinnowArgs, DEFAULT_LIMIT};
use crate::io::{jsonl, wfp};

#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Input file path(s)
    #[arg(long, required = true, num_args = 1..)]
    pub r#in: Vec<String>,

    #[command(flatten)]
    pub winnow: WinnowArgs,

    /// Maximum entries per file; scanning stops once reached
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output format: "wfp" or "jsonl"
    #[arg(long, default_value = "wfp")]
    pub out: String,

    /// Output file path; if omitted, prints to stdout.
    #[arg(long)]
    pub output: Option<String>,

    /// Per-file counters on stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn run(args: FingerprintArgs) -> anyhow::Result<()> {
    match args.out.as_str() {
        "wfp" | "jsonl" => {}
        other => anyhow::bail!("unknown --out format: {other}"),
    }
    let winnower = args.winnow.build()?;

    let mut text = String::new();
    for path in &args.r#in {
        let bytes = std::fs::read(path).with_context(|| format!("read input {path}"))?;
        let (fp, stats) = winnower
            .fingerprint_with_stats(&bytes, args.limit)
            .with_context(|| format!("fingerprint {path}"))?;

        if args.verbose {
            eprintln!(
                "[wfp] {} bytes={} entries={} windows={} suppressed={}{}",
                path,
                bytes.len(),
                fp.len(),
                stats.windows,
                stats.suppressed,
                if stats.limit_reached { " (limit reached)" } else { "" }
            );
        }

        match args.out.as_str() {
            "jsonl" => jsonl::render_file(&mut text, path, &fp),
            _ => wfp::render_file(&mut text, path, &bytes, &fp),
        }
    }

    if let Some(p) = args.output.as_deref() {
        std::fs::write(p, &text).with_context(|| format!("write output {p}"))?;
        if args.verbose {
            eprintln!("[wfp] wrote {} ({} bytes)", p, text.len());
        }
    } else {
        print!("{text}");
    }

    Ok(())
}
