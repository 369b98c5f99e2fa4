use wfp_core::checksum::FnChecksum;
use wfp_core::repr::text_norm::{normalize_byte, normalized, significant_len};
use wfp_core::{fingerprint, WfpError, Winnower, WinnowConfig};

#[test]
fn normalizer_folds_case_and_drops_the_rest() {
    assert_eq!(normalize_byte(b'a'), Some(b'a'));
    assert_eq!(normalize_byte(b'Z'), Some(b'z'));
    assert_eq!(normalize_byte(b'7'), Some(b'7'));
    for b in [b' ', b'\n', b'\t', b'_', b'{', b'@', b'[', b'`', 0u8, 0x7f, 0xc3, 0xff] {
        assert_eq!(normalize_byte(b), None, "byte 0x{b:02x}");
    }
    assert_eq!(normalized(b"Hello, World! 42"), b"helloworld42".to_vec());
    assert_eq!(significant_len(b"a-b-c"), 3);
}

#[test]
fn case_and_formatting_do_not_matter() {
    let cfg = WinnowConfig::new(4, 3);
    let w = Winnower::new(cfg).unwrap();
    let a = w.fingerprint(b"Hello World", 100).unwrap();
    let b = w.fingerprint(b"hello   world", 100).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn constant_minimum_emits_once() {
    // Every gram is "aaa...a", so every window has the same minimum.
    let src = vec![b'a'; 300];
    let w = Winnower::new(WinnowConfig::default()).unwrap();
    let (fp, stats) = w.fingerprint_with_stats(&src, 1000).unwrap();

    assert_eq!(fp.len(), 1);
    assert_eq!(stats.windows, (300 - 30 + 1 - 64 + 1) as u64);
    assert_eq!(stats.suppressed, stats.windows - 1);
}

#[test]
fn limit_caps_output_and_stops_scanning() {
    let src: Vec<u8> = (0..4000u32)
        .flat_map(|i| format!("tok{} ", i * 31).into_bytes())
        .collect();
    let w = Winnower::new(WinnowConfig::default()).unwrap();
    let full = w.fingerprint(&src, 100_000).unwrap();
    assert!(full.len() > 10);

    for limit in [1usize, 2, 7, 10] {
        let (fp, stats) = w.fingerprint_with_stats(&src, limit).unwrap();
        assert_eq!(fp.len(), limit);
        assert_eq!(fp.hashes, full.hashes[..limit].to_vec());
        assert!(stats.limit_reached);
        assert!((stats.bytes_scanned as usize) < src.len());
    }

    let (fp, stats) = w.fingerprint_with_stats(&src, full.len() + 5).unwrap();
    assert_eq!(fp, full);
    assert!(!stats.limit_reached);
    assert_eq!(stats.bytes_scanned as usize, src.len());
}

#[test]
fn lines_follow_raw_newlines() {
    // The first gram closes on the 30th 'a', before the newline.
    let mut src = vec![b'a'; 30];
    src.push(b'\n');
    src.extend(std::iter::repeat(b'b').take(30));

    let w = Winnower::new(WinnowConfig::new(30, 1)).unwrap();
    let fp = w.fingerprint(&src, 100).unwrap();

    assert_eq!(fp.len(), 31);
    assert_eq!(fp.lines[0], 1);
    assert!(fp.lines[1..].iter().all(|&l| l == 2));
    assert!(fp.lines.windows(2).all(|p| p[0] <= p[1]));
    assert_eq!(fp.hashes[0], 2066825570);
    assert_eq!(fp.hashes[30], 2550392008);
}

#[test]
fn blank_lines_still_count() {
    let w = Winnower::new(WinnowConfig::new(2, 1)).unwrap();
    let fp = w.fingerprint(b"\n\n\r\nab\n\ncd", 100).unwrap();
    // "ab" closes on line 4; "bc" and "cd" on line 6.
    assert_eq!(fp.lines, vec![4, 6, 6]);
}

#[test]
fn short_input_yields_nothing() {
    assert!(fingerprint(b"", 10).unwrap().is_empty());
    assert!(fingerprint(b"too short to fill a gram", 10).unwrap().is_empty());

    // Exactly one gram short of a full window.
    let cfg = WinnowConfig::default();
    let src = vec![b'x'; cfg.min_significant_bytes() - 1];
    assert!(fingerprint(&src, 10).unwrap().is_empty());
    let src = vec![b'x'; cfg.min_significant_bytes()];
    assert_eq!(fingerprint(&src, 10).unwrap().len(), 1);
}

#[test]
fn hand_checked_selection() {
    // Checksum = first byte, so grams of one byte hash to themselves and the
    // re-hash of a minimum is its low byte.
    let ck = FnChecksum(|b: &[u8]| b[0] as u32);
    let w = Winnower::with_checksum(WinnowConfig::new(1, 2), ck).unwrap();
    let (fp, stats) = w.fingerprint_with_stats(b"C-b a;d", 10).unwrap();

    // windows: [c,b]->b, [b,a]->a, [a,d]->a (repeat)
    assert_eq!(fp.hashes, vec![b'b' as u32, b'a' as u32]);
    assert_eq!(fp.lines, vec![1, 1]);
    assert_eq!(stats.windows, 3);
    assert_eq!(stats.suppressed, 1);
}

#[test]
fn ties_keep_the_earliest_minimum() {
    // Same value at both ends of each window; output only depends on the value.
    let ck = FnChecksum(|b: &[u8]| if b[0] == b'x' { 1 } else { 9 });
    let w = Winnower::with_checksum(WinnowConfig::new(1, 3), ck).unwrap();
    let fp = w.fingerprint(b"xyxyx", 10).unwrap();
    assert_eq!(fp.len(), 1);
}

#[test]
fn zero_minimum_matches_initial_state() {
    // The dedup state starts at 0, so a leading run whose minimum is 0 is never emitted.
    let ck = FnChecksum(|_: &[u8]| 0u32);
    let w = Winnower::with_checksum(WinnowConfig::new(1, 1), ck).unwrap();
    let (fp, stats) = w.fingerprint_with_stats(b"abc", 10).unwrap();
    assert!(fp.is_empty());
    assert_eq!(stats.suppressed, 3);
}

#[test]
fn caller_slices_match_owned_result() {
    let src: Vec<u8> = (0..300u32)
        .flat_map(|i| format!("let v{} = v{} * {};\n", i, i / 2, i * 17).into_bytes())
        .collect();
    let w = Winnower::new(WinnowConfig::default()).unwrap();
    let owned = w.fingerprint(&src, 64).unwrap();

    let mut hashes = [0u32; 64];
    let mut lines = [0u32; 64];
    let n = w.fingerprint_into(&src, &mut hashes, &mut lines, 64).unwrap();

    assert_eq!(n, 64);
    assert_eq!(n, owned.len());
    assert_eq!(&hashes[..n], owned.hashes.as_slice());
    assert_eq!(&lines[..n], owned.lines.as_slice());
}

#[test]
fn bad_config_is_rejected_up_front() {
    for cfg in [
        WinnowConfig::new(0, 64),
        WinnowConfig::new(30, 0),
        WinnowConfig::default().with_buffer_rate(1),
        WinnowConfig::new(usize::MAX, 64),
    ] {
        assert!(matches!(Winnower::new(cfg), Err(WfpError::Config(_))), "{cfg:?}");
    }

    let w = Winnower::new(WinnowConfig::default()).unwrap();
    assert!(matches!(w.fingerprint(b"abc", 0), Err(WfpError::Config(_))));

    let mut hashes = [0u32; 4];
    let mut lines = [0u32; 8];
    let err = w.fingerprint_into(b"abc", &mut hashes, &mut lines, 8).unwrap_err();
    assert!(format!("{err}").contains("output capacity"));
}

#[test]
fn by_line_groups_consecutive_entries() {
    let w = Winnower::new(WinnowConfig::new(2, 1)).unwrap();
    let fp = w.fingerprint(b"ab\ncd\n\nef", 100).unwrap();
    // grams: ab(1) bc(2) cd(2) de(4) ef(4)
    let groups = fp.by_line();
    let lines: Vec<u32> = groups.iter().map(|(l, _)| *l).collect();
    let sizes: Vec<usize> = groups.iter().map(|(_, h)| h.len()).collect();
    assert_eq!(lines, vec![1, 2, 4]);
    assert_eq!(sizes, vec![1, 2, 2]);
}
