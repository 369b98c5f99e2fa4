// crates/wfp-cli/src/io/jsonl.rs

use wfp_core::Fingerprint;

/// Append one JSON object per entry.
/// Format: {"file":"...","line":N,"hash":"xxxxxxxx"}
pub fn render_file(out: &mut String, path: &str, fp: &Fingerprint) {
    let file = escape(path);
    for (hash, line) in fp.iter() {
        out.push_str(&format!(
            "{{\"file\":\"{}\",\"line\":{},\"hash\":\"{:08x}\"}}\n",
            file, line, hash
        ));
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
