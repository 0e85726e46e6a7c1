use medvoice::application::ports::{ImageCodec, ImageCodecError};
use medvoice::domain::EncodedImage;
use medvoice::infrastructure::imaging::RasterImageCodec;

use crate::helpers::png_bytes;

#[test]
fn given_png_when_encoding_and_decoding_then_dimensions_and_format_are_read() {
    let codec = RasterImageCodec::new();
    let png = png_bytes(5, 7);

    let encoded = codec.encode(&png).unwrap();
    let decoded = codec.decode(&encoded).unwrap();

    assert_eq!(decoded.width, 5);
    assert_eq!(decoded.height, 7);
    assert_eq!(decoded.format, "png");
    assert_eq!(decoded.bytes, png);
}

#[test]
fn given_data_uri_when_decoding_then_prefix_is_ignored() {
    let codec = RasterImageCodec::new();
    let encoded = codec.encode(&png_bytes(2, 2)).unwrap();
    let with_prefix = EncodedImage::new(format!("data:image/png;base64,{}", encoded.as_str()));

    let decoded = codec.decode(&with_prefix).unwrap();

    assert_eq!((decoded.width, decoded.height), (2, 2));
}

#[test]
fn given_png_when_converting_to_jpeg_then_output_is_jpeg() {
    let codec = RasterImageCodec::new();

    let jpeg = codec.to_jpeg(&png_bytes(4, 4)).unwrap();

    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    assert_eq!(image::guess_format(&jpeg).unwrap(), image::ImageFormat::Jpeg);
}

#[test]
fn given_empty_bytes_when_encoding_then_empty_error() {
    let result = RasterImageCodec::new().encode(&[]);

    assert!(matches!(result, Err(ImageCodecError::Empty)));
}

#[test]
fn given_non_image_bytes_when_encoding_then_decoding_failed() {
    let result = RasterImageCodec::new().encode(b"definitely not an image");

    assert!(matches!(result, Err(ImageCodecError::DecodingFailed(_))));
}

#[test]
fn given_invalid_base64_when_decoding_then_invalid_base64() {
    let result = RasterImageCodec::new().decode(&EncodedImage::new("***"));

    assert!(matches!(result, Err(ImageCodecError::InvalidBase64(_))));
}
