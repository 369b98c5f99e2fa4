// crates/wfp-core/src/repr/text_norm.rs
//
// Byte-level normalization ahead of gram construction.
//
// Rules:
// - '0'..='9' and 'a'..='z' pass through.
// - 'A'..='Z' fold to lowercase.
// - Everything else (whitespace, punctuation, control, non-ASCII) is dropped.
//
// Plain range checks on the byte value; no locale or char classification.

#[inline]
pub fn normalize_byte(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' | b'a'..=b'z' => Some(b),
        b'A'..=b'Z' => Some(b + 32),
        _ => None,
    }
}

/// The significant byte stream the gram assembler would see for `input`.
pub fn normalized(input: &[u8]) -> Vec<u8> {
    input.iter().filter_map(|&b| normalize_byte(b)).collect()
}

/// Number of significant bytes in `input`.
pub fn significant_len(input: &[u8]) -> usize {
    input.iter().filter(|&&b| normalize_byte(b).is_some()).count()
}
