/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnmchain_core::colorspace::ColorSpace;
use pnmchain_core::options::DecoderOptions;
use pnmchain_ppm::{decode, decode_with_options, PnmDecodeErrors, PnmDecoder, PnmVersions};

#[test]
fn decode_p2_column() {
    let buffer = decode(b"P2\n1 2\n255\n50\n200\n", PnmVersions::P2).unwrap();

    assert_eq!(buffer.dimensions(), (1, 2));
    assert_eq!(buffer.colorspace(), ColorSpace::Luma);
    assert_eq!(buffer.num_components(), 1);
    assert_eq!(buffer.samples(), &[50, 200]);
}

#[test]
fn decode_p3_with_arbitrary_whitespace() {
    let data = b"P3\r\n2 1\r\n255\r\n10   20\t30\n\n200 210\n220";
    let buffer = decode(data, PnmVersions::P3).unwrap();

    assert_eq!(buffer.colorspace(), ColorSpace::RGB);
    assert_eq!(buffer.samples(), &[10, 20, 30, 200, 210, 220]);
}

#[test]
fn decode_p1() {
    let buffer = decode(b"P1\n3 2\n1 0 1\n0 1 0\n", PnmVersions::P1).unwrap();

    assert_eq!(buffer.colorspace(), ColorSpace::Bilevel);
    assert_eq!(buffer.samples(), &[1, 0, 1, 0, 1, 0]);
}

#[test]
fn wrong_magic_is_header_mismatch() {
    let err = decode(b"P3\n1 1\n255\n1 2 3\n", PnmVersions::P2).unwrap_err();

    match err {
        PnmDecodeErrors::HeaderMismatch(expected, found) => {
            assert_eq!(expected, PnmVersions::P2);
            assert_eq!(found, "P3");
        }
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn empty_input_is_header_mismatch() {
    assert!(matches!(
        decode(b"", PnmVersions::P1),
        Err(PnmDecodeErrors::HeaderMismatch(PnmVersions::P1, _))
    ));
}

#[test]
fn bad_dimensions_are_malformed_header() {
    for data in [
        &b"P2\n0 2\n255\n"[..],
        b"P2\n2\n255\n1 2\n",
        b"P2\n2 2 2\n255\n1 2 3 4\n",
        b"P2\nx 2\n255\n1 2\n",
        b"P2\n-1 2\n255\n1 2\n"
    ] {
        assert!(
            matches!(
                decode(data, PnmVersions::P2),
                Err(PnmDecodeErrors::MalformedHeader(_))
            ),
            "{:?}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn missing_max_value_is_malformed_header() {
    assert!(matches!(
        decode(b"P2\n1 1\n", PnmVersions::P2),
        Err(PnmDecodeErrors::MalformedHeader(_))
    ));
    assert!(matches!(
        decode(b"P3\n1 1\nabc\n1 2 3\n", PnmVersions::P3),
        Err(PnmDecodeErrors::MalformedHeader(_))
    ));
}

#[test]
fn other_max_values_are_accepted_but_not_honored() {
    let buffer = decode(b"P2\n2 1\n15\n15 200\n", PnmVersions::P2).unwrap();
    assert_eq!(buffer.samples(), &[15, 200]);
}

#[test]
fn rescaling_honors_max_value() {
    let options = DecoderOptions::default().set_rescale_max_value(true);
    let buffer = decode_with_options(b"P2\n3 1\n15\n0 15 5\n", PnmVersions::P2, options).unwrap();

    assert_eq!(buffer.samples(), &[0, 255, 85]);

    let err =
        decode_with_options(b"P2\n1 1\n15\n16\n", PnmVersions::P2, options).unwrap_err();
    assert!(matches!(err, PnmDecodeErrors::MalformedPixelData(_)));
}

#[test]
fn non_integer_token_is_malformed_pixel_data() {
    assert!(matches!(
        decode(b"P2\n2 1\n255\n12 abc\n", PnmVersions::P2),
        Err(PnmDecodeErrors::MalformedPixelData(_))
    ));
}

#[test]
fn out_of_range_samples_are_malformed_pixel_data() {
    assert!(matches!(
        decode(b"P2\n1 1\n255\n256\n", PnmVersions::P2),
        Err(PnmDecodeErrors::MalformedPixelData(_))
    ));
    assert!(matches!(
        decode(b"P1\n2 1\n0 2\n", PnmVersions::P1),
        Err(PnmDecodeErrors::MalformedPixelData(_))
    ));
}

#[test]
fn partial_pixels_are_malformed_pixel_data() {
    assert!(matches!(
        decode(b"P3\n1 1\n255\n1 2\n", PnmVersions::P3),
        Err(PnmDecodeErrors::MalformedPixelData(_))
    ));
}

#[test]
fn wrong_counts_are_pixel_count_mismatch() {
    assert!(matches!(
        decode(b"P2\n2 2\n255\n1 2 3\n", PnmVersions::P2),
        Err(PnmDecodeErrors::PixelCountMismatch(4, 3))
    ));
    assert!(matches!(
        decode(b"P3\n1 1\n255\n1 2 3 4 5 6\n", PnmVersions::P3),
        Err(PnmDecodeErrors::PixelCountMismatch(3, 6))
    ));
}

#[test]
fn lenient_mode_truncates_surplus() {
    let options = DecoderOptions::default().set_strict_mode(false);

    let buffer =
        decode_with_options(b"P2\n2 1\n255\n1 2 3 4\n", PnmVersions::P2, options).unwrap();
    assert_eq!(buffer.samples(), &[1, 2]);

    // a shortfall can never make a valid buffer
    assert!(matches!(
        decode_with_options(b"P2\n2 1\n255\n1\n", PnmVersions::P2, options),
        Err(PnmDecodeErrors::PixelCountMismatch(2, 1))
    ));
}

#[test]
fn dimension_limits() {
    let options = DecoderOptions::default().set_max_width(4).set_max_height(4);

    assert!(matches!(
        decode_with_options(b"P1\n5 1\n0 0 0 0 0\n", PnmVersions::P1, options),
        Err(PnmDecodeErrors::LargeDimensions(4, 5))
    ));
    assert!(matches!(
        decode_with_options(b"P1\n1 9\n", PnmVersions::P1, options),
        Err(PnmDecodeErrors::LargeDimensions(4, 9))
    ));
}

#[test]
fn huge_declared_dimensions_with_little_data() {
    let options = DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    assert!(matches!(
        decode_with_options(b"P2\n3100000000 3000000000\n255\n1\n", PnmVersions::P2, options),
        Err(PnmDecodeErrors::PixelCountMismatch(9_300_000_000_000_000_000, 1))
    ));
    assert!(matches!(
        decode(b"P3\n16384 16384\n255\n", PnmVersions::P3),
        Err(PnmDecodeErrors::PixelCountMismatch(805_306_368, 0))
    ));
}

#[test]
fn headers_can_be_read_alone() {
    let mut decoder = PnmDecoder::new(b"P2\n3 4\n100\n", PnmVersions::P2);

    assert!(decoder.get_dimensions().is_none());
    decoder.read_headers().unwrap();

    assert_eq!(decoder.get_dimensions(), Some((3, 4)));
    assert_eq!(decoder.get_colorspace(), Some(ColorSpace::Luma));
    assert_eq!(decoder.get_max_value(), Some(100));
}
