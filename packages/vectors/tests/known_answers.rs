//! Digests recorded from the C reference implementation

use xxh_vectors::{Dispatcher, DigestValue, HashFamily, TwoxHash, Variant};

const SEED32: u32 = 0x1234_5678;
const SEED64: u64 = 0x1234_5678_9abc_def0;

#[test]
fn xxh32_matches_reference() {
    let family = TwoxHash;
    assert_eq!(family.xxh32(b"", 0), 0x02cc_5d05);
    assert_eq!(family.xxh32(b"a", 0), 0x550d_7456);
    assert_eq!(family.xxh32(b"ab", 0), 0x4999_fc53);
    assert_eq!(family.xxh32(b"abc", 0), 0x32d1_53ff);
    assert_eq!(family.xxh32(b"abcd", 0), 0xa364_3705);
    assert_eq!(family.xxh32(b"hello world", 0), 0xcebb_6622);

    assert_eq!(family.xxh32(b"", SEED32), 0xbd20_9070);
    assert_eq!(family.xxh32(b"a", SEED32), 0x0d5a_8e75);
    assert_eq!(family.xxh32(b"ab", SEED32), 0xa5a7_855b);
    assert_eq!(family.xxh32(b"hello world", SEED32), 0x745a_8450);
}

#[test]
fn xxh64_matches_reference() {
    let family = TwoxHash;
    assert_eq!(family.xxh64(b"", 0), 0xef46_db37_51d8_e999);
    assert_eq!(family.xxh64(b"a", 0), 0xd24e_c4f1_a98c_6e5b);
    assert_eq!(family.xxh64(b"ab", 0), 0x65f7_08ca_92d0_4a61);
    assert_eq!(family.xxh64(b"abc", 0), 0x44bc_2cf5_ad77_0999);
    assert_eq!(family.xxh64(b"hello world", 0), 0x45ab_6734_b21e_6968);

    assert_eq!(family.xxh64(b"", SEED64), 0x7fef_5b0c_3167_77ed);
    assert_eq!(family.xxh64(b"a", SEED64), 0x9e29_aa7f_69e1_808f);
    assert_eq!(family.xxh64(b"ab", SEED64), 0x8345_3a26_50f8_b47e);
    assert_eq!(family.xxh64(b"hello world", SEED64), 0x1d05_e72f_25bc_8061);
}

#[test]
fn xxh3_64_matches_reference() {
    let cases: &[(&[u8], u64, u64)] = &[
        (b"", 0x2d06_8005_38d3_94c2, 0x8aa5_6c2c_3d83_17f6),
        (b"a", 0xe6c6_32b6_1e96_4e1f, 0xb3d4_9906_9b2d_173a),
        (b"ab", 0xa873_719c_24d5_735c, 0xf9ea_6db1_e81f_9e41),
        (b"abc", 0x78af_5f94_892f_3950, 0xfdc1_d438_21ba_04d4),
    ];

    let family = TwoxHash;
    for &(input, unseeded, seeded) in cases {
        assert_eq!(family.xxh3_64(input), unseeded, "XXH3_64({input:?})");
        assert_eq!(
            family.xxh3_64_with_seed(input, SEED64),
            seeded,
            "XXH3_64({input:?}, seed)"
        );
    }
}

#[test]
fn xxh3_128_matches_reference() {
    let cases: &[(&[u8], u64, u64)] = &[
        (b"", 0x99aa_06d3_0147_98d8, 0x6001_c324_468d_497f),
        (b"a", 0xa96f_af70_5af1_6834, 0xe6c6_32b6_1e96_4e1f),
        (b"ab", 0x89c6_5ebc_828e_ebac, 0xa873_719c_24d5_735c),
        (b"abc", 0x06b0_5ab6_733a_6185, 0x78af_5f94_892f_3950),
    ];

    let dispatcher = Dispatcher::new(TwoxHash);
    for &(input, high, low) in cases {
        let digest = dispatcher
            .compute(Variant::Xxh3_128 { seed: None }, input)
            .expect("unseeded XXH3_128 is infallible");
        assert_eq!(digest, DigestValue::from_halves(high, low), "XXH3_128({input:?})");
    }

    let seeded = dispatcher
        .compute(Variant::Xxh3_128 { seed: Some(SEED64) }, b"")
        .expect("seeded XXH3_128 is infallible");
    assert_eq!(seeded.high64(), Some(0xe7da_0084_5366_b2f3));
    assert_eq!(seeded.low64(), Some(0xb950_a1d9_e9a4_a947));
}

#[test]
fn abc_under_representative_seed_is_pinned() {
    assert_eq!(TwoxHash.xxh32(b"abc", SEED32), 0x1136_4062);

    let digest = Dispatcher::new(TwoxHash)
        .compute(Variant::Xxh32 { seed: SEED32 }, b"abc")
        .expect("XXH32 is infallible");
    assert_eq!(digest, DigestValue::Bits32(0x1136_4062));
    assert_eq!(digest.to_string(), "0x11364062");
}

#[test]
fn reference_lines_render_exactly() {
    let transcript = xxh_vectors::render_transcript(TwoxHash).expect("run succeeds");

    for expected in [
        "XXH32('', 0x00000000) = 0x02cc5d05",
        "XXH32('abc', 0x00000000) = 0x32d153ff",
        "XXH32('abc', 0x12345678) = 0x11364062",
        "XXH64('', 0x0000000000000000) = 0xef46db3751d8e999",
        "XXH64('a', 0x123456789abcdef0) = 0x9e29aa7f69e1808f",
        "XXH3_64('') = 0x2d06800538d394c2",
        "XXH3_64('abc', 0x123456789abcdef0) = 0xfdc1d43821ba04d4",
        "XXH3_128('') = 0x99aa06d3014798d86001c324468d497f",
        "XXH3_128('', 0x123456789abcdef0) = 0xe7da00845366b2f3b950a1d9e9a4a947",
    ] {
        assert!(
            transcript.lines().any(|line| line == expected),
            "missing line: {expected}"
        );
    }
}
