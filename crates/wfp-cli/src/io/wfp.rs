// crates/wfp-cli/src/io/wfp.rs

use wfp_core::checksum::blake3_16;
use wfp_core::Fingerprint;

/// Append one file's fingerprint in line-grouped text form.
///
/// Format:
///   file=<blake3_16 hex>,<size>,<path>
///   <line>=<hash>,<hash>,...     (hashes as 8-digit lowercase hex)
///
/// A file without entries contributes only its header.
pub fn render_file(out: &mut String, path: &str, bytes: &[u8], fp: &Fingerprint) {
    out.push_str(&format!("file={},{},{}\n", hex(&blake3_16(bytes)), bytes.len(), path));
    for (line, hashes) in fp.by_line() {
        let joined: Vec<String> = hashes.iter().map(|h| format!("{:08x}", h)).collect();
        out.push_str(&format!("{}={}\n", line, joined.join(",")));
    }
}

fn hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
