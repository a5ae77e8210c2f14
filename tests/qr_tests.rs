use qrmint::QrMatrix;

const QUIET_ZONE: usize = 4;
const MODULE_SZ: usize = 4;

// Greyscale raster with a quiet zone, 0 for dark
fn rasterize(qr: &QrMatrix) -> (usize, Vec<u8>) {
    let total_sz = (qr.size() + 2 * QUIET_ZONE) * MODULE_SZ;
    let mut pixels = vec![255u8; total_sz * total_sz];
    for (r, row) in qr.rows().enumerate() {
        for (c, &dark) in row.iter().enumerate() {
            if !dark {
                continue;
            }
            for i in 0..MODULE_SZ {
                for j in 0..MODULE_SZ {
                    let y = (r + QUIET_ZONE) * MODULE_SZ + i;
                    let x = (c + QUIET_ZONE) * MODULE_SZ + j;
                    pixels[y * total_sz + x] = 0;
                }
            }
        }
    }
    (total_sz, pixels)
}

// Decodes with an independent reader, returns metadata and raw payload bytes
fn read_raw(qr: &QrMatrix) -> (rqrr::MetaData, Vec<u8>) {
    let (sz, pixels) = rasterize(qr);
    let mut img = rqrr::PreparedImage::prepare_from_greyscale(sz, sz, |x, y| pixels[y * sz + x]);
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");

    let mut raw = Vec::new();
    let meta = grids[0].decode_to(&mut raw).expect("Failed to read QR");
    (meta, raw)
}

fn read_meta(qr: &QrMatrix) -> (rqrr::MetaData, String) {
    let (meta, raw) = read_raw(qr);
    (meta, String::from_utf8(raw).expect("Payload is not utf-8"))
}

fn read(qr: &QrMatrix) -> (usize, String) {
    let (meta, content) = read_meta(qr);
    (meta.version.0, content)
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use super::{read, read_meta, read_raw};
    use qrmint::{encode, render, Charset, ECLevel, EncodeOptions, MaskPattern, QRBuilder, Version};

    #[test]
    fn test_round_trip_test_m() {
        let qr = QRBuilder::new("TEST").ec_level(ECLevel::M).build().unwrap();
        assert_eq!(qr.size(), 21);
        assert_eq!(read(&qr), (1, "TEST".to_string()));
    }

    #[test_case("Hello, world!".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("qrmint".to_string(), 2, ECLevel::H; "test_qr_2")]
    #[test_case("ABCDEFGHIJKLMNOPQRSTUVWXYZ012".to_string(), 3, ECLevel::Q; "test_qr_3")]
    #[test_case("A".repeat(78), 4, ECLevel::L; "test_qr_4")]
    #[test_case("The quick brown fox jumps over lazy dogs".to_string(), 5, ECLevel::Q; "test_qr_5")]
    #[test_case("Hello, world! ".repeat(7), 6, ECLevel::M; "test_qr_6")]
    #[test_case("0123456789".repeat(15), 7, ECLevel::L; "test_qr_7")]
    #[test_case("abc".repeat(20), 7, ECLevel::H; "test_qr_8")]
    #[test_case("https://example.com/".repeat(7), 8, ECLevel::M; "test_qr_9")]
    #[test_case("x".repeat(130), 9, ECLevel::Q; "test_qr_10")]
    #[test_case("1234567890".repeat(27), 10, ECLevel::L; "test_qr_11")]
    #[test_case("Q".repeat(119), 10, ECLevel::H; "test_qr_12")]
    fn test_qr(data: String, version: usize, ec_level: ECLevel) {
        let qr = QRBuilder::new(&data)
            .version(Version::new(version).unwrap())
            .ec_level(ec_level)
            .build()
            .unwrap();

        assert_eq!(qr.size(), version * 4 + 17);
        assert_eq!(read(&qr), (version, data));
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(5)]
    #[test_case(6)]
    #[test_case(7)]
    fn test_mask_patterns(pattern: u8) {
        let data = "Mask pattern round trip";
        let qr = QRBuilder::new(data).mask(MaskPattern::new(pattern).unwrap()).build().unwrap();
        let (meta, content) = read_meta(&qr);
        assert_eq!(meta.mask as u8, pattern);
        assert_eq!(content, data);
    }

    #[test]
    fn test_utf8_charset() {
        let data = "Hello, world! 🌏";
        let qr = QRBuilder::new(data).charset(Charset::Utf8).build().unwrap();
        assert_eq!(read(&qr).1, data);
    }

    #[test]
    fn test_latin1_bytes() {
        let qr = QRBuilder::new("café").build().unwrap();
        assert_eq!(read_raw(&qr).1, [b'c', b'a', b'f', 0xe9]);
    }

    #[test]
    fn test_empty_input() {
        let qr = encode("", &EncodeOptions::default()).unwrap();
        assert_eq!(qr.size(), 21);
        assert!(qr.count_dark_modules() > 0);
        assert_eq!(read(&qr), (1, String::new()));
    }

    #[test]
    fn test_determinism() {
        let opts = EncodeOptions { ec_level: ECLevel::Q, ..Default::default() };
        let a = encode("deterministic", &opts).unwrap();
        let b = encode("deterministic", &opts).unwrap();
        assert_eq!(a, b);
        assert_eq!(render::svg(&a, Default::default()), render::svg(&b, Default::default()));
    }

    #[test]
    fn test_distinct_payloads() {
        let opts = EncodeOptions::default();
        let hello = encode("Hello", &opts).unwrap();
        let world = encode("World", &opts).unwrap();
        assert_eq!(hello.size(), world.size());
        assert_ne!(hello.to_rows(), world.to_rows());
    }

    #[test]
    fn test_size_law_and_squareness() {
        for ver in Version::all() {
            let opts = EncodeOptions { version: Some(ver), ..Default::default() };
            let qr = encode("size", &opts).unwrap();
            assert_eq!(qr.size(), *ver * 4 + 17);
            let rows = qr.to_rows();
            assert_eq!(rows.len(), qr.size());
            assert!(rows.iter().all(|r| r.len() == qr.size()));
        }
    }

    #[test]
    fn test_finder_corners() {
        let qr = encode("finder", &EncodeOptions::default()).unwrap();
        let last = qr.size() - 1;
        for (r, c) in [(0, 0), (6, 0), (0, 6), (6, 6), (3, 3)] {
            assert!(qr.get(r, c), "Top left finder not dark at ({r}, {c})");
            assert!(qr.get(r, last - c), "Top right finder not dark at ({r}, {})", last - c);
            assert!(qr.get(last - r, c), "Bottom left finder not dark at ({}, {c})", last - r);
        }
        assert!(!qr.get(1, 1));
        assert!(!qr.get(7, 7));
        // Always dark module next to the bottom left finder
        assert!(qr.get(qr.size() - 8, 8));
    }

    #[test_case(ECLevel::L)]
    #[test_case(ECLevel::M)]
    #[test_case(ECLevel::Q)]
    #[test_case(ECLevel::H)]
    fn test_hi_is_version_1(ec_level: ECLevel) {
        let qr = encode("Hi", &EncodeOptions { ec_level, ..Default::default() }).unwrap();
        assert_eq!(*qr.version(), 1);
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn test_shared_field_across_threads() {
        let gf = qrmint::GaloisField::new();
        let exp = QRBuilder::new("threads").build().unwrap();
        std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| QRBuilder::new("threads").field(&gf).build().unwrap()))
                .collect::<Vec<_>>();
            for h in handles {
                assert_eq!(h.join().unwrap(), exp);
            }
        });
    }
}

#[cfg(test)]
mod qr_error_tests {
    use qrmint::{encode, ECLevel, EncodeOptions, QRError, Version};

    #[test]
    fn test_capacity_exceeded() {
        let data = "x".repeat(272);
        let res = encode(&data, &EncodeOptions { ec_level: ECLevel::L, ..Default::default() });
        assert_eq!(res.unwrap_err(), QRError::CapacityExceeded { len: 272, ecl: ECLevel::L });
    }

    #[test]
    fn test_non_latin_codepoint() {
        let res = encode("QR 🌏", &EncodeOptions::default());
        assert_eq!(res.unwrap_err(), QRError::NonLatinCodepoint { ch: '🌏', index: 3 });
    }

    #[test]
    fn test_data_too_long() {
        let version = Version::new(2).unwrap();
        let opts =
            EncodeOptions { ec_level: ECLevel::H, version: Some(version), ..Default::default() };
        let res = encode(&"y".repeat(15), &opts);
        assert_eq!(res.unwrap_err(), QRError::DataTooLong { len: 15, version, ecl: ECLevel::H });
    }
}

#[cfg(test)]
mod qr_proptests {
    use proptest::prelude::*;

    use super::read;
    use qrmint::{encode, ECLevel, EncodeOptions};

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_round_trip(ecl in ec_level_strategy(), data in "[ -~]{0,119}") {
            let qr = encode(&data, &EncodeOptions { ec_level: ecl, ..Default::default() }).unwrap();
            let (version, decoded) = read(&qr);

            prop_assert_eq!(version, *qr.version());
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_monotonic_version(
            ecl in ec_level_strategy(),
            data in "[a-z0-9]{0,60}",
            ext in "[a-z0-9]{0,59}",
        ) {
            let opts = EncodeOptions { ec_level: ecl, ..Default::default() };
            let short = encode(&data, &opts).unwrap();
            let long = encode(&format!("{data}{ext}"), &opts).unwrap();

            prop_assert!(long.version() >= short.version());
        }
    }
}
