//! Conversion of images into inline JPEG data.
//!
//! Host image types plug in through [`JpegEncode`]; the rest of the crate only ever sees
//! the resulting [`InlineData`]. With the `image` feature enabled,
//! [`image::DynamicImage`] is supported out of the box.

use super::content::{InlineData, Part};
use super::representable::ThrowingPartsRepresentable;
use thiserror::Error;
use tracing::debug;

/// Compression quality used for every image sent to the API.
pub const JPEG_COMPRESSION_QUALITY: f32 = 0.8;
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("image has no usable pixel buffer")]
    InvalidImage,
    #[error("failed to allocate the destination buffer for the encoded image")]
    DestinationAllocationFailed,
    #[error("jpeg encoding failed: {0}")]
    EncodingFailed(String),
}

/// Platform image capability: encode the image as JPEG at `quality` (0.0 to 1.0).
pub trait JpegEncode {
    fn encode_jpeg(&self, quality: f32) -> Result<Vec<u8>, Error>;
}

/// Encode `image` at [`JPEG_COMPRESSION_QUALITY`] into inline `image/jpeg` data.
pub fn jpeg_inline_data<I>(image: &I) -> Result<InlineData, Error>
where
    I: JpegEncode + ?Sized,
{
    let bytes = image.encode_jpeg(JPEG_COMPRESSION_QUALITY)?;
    if bytes.is_empty() {
        return Err(Error::EncodingFailed("encoder produced no output".into()));
    }
    debug!(len = bytes.len(), "encoded image as jpeg");
    Ok(InlineData::new(JPEG_MIME_TYPE, bytes))
}

/// Wraps a host image so it can be used wherever parts are expected.
#[derive(Debug, Clone)]
pub struct Jpeg<I>(pub I);

impl<I> ThrowingPartsRepresentable for Jpeg<I>
where
    I: JpegEncode,
{
    fn try_to_parts(&self) -> Result<Vec<Part>, Error> {
        Ok(vec![Part::InlineData(jpeg_inline_data(&self.0)?)])
    }
}

#[cfg(feature = "image")]
mod dynamic_image {
    use super::{Error, JpegEncode, jpeg_inline_data};
    use crate::v1beta::content::Part;
    use crate::v1beta::representable::ThrowingPartsRepresentable;
    use image::codecs::jpeg::JpegEncoder;
    use image::{ColorType, DynamicImage};
    use std::borrow::Cow;

    impl JpegEncode for DynamicImage {
        fn encode_jpeg(&self, quality: f32) -> Result<Vec<u8>, Error> {
            if self.width() == 0 || self.height() == 0 {
                return Err(Error::InvalidImage);
            }

            // The encoder only takes 8-bit luma or RGB samples.
            let image = match self.color() {
                ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(self),
                _ => Cow::Owned(DynamicImage::ImageRgb8(self.to_rgb8())),
            };

            let mut buffer = Vec::new();
            buffer
                .try_reserve(image.as_bytes().len() / 4)
                .map_err(|_| Error::DestinationAllocationFailed)?;

            let quality = (quality.clamp(0.01, 1.0) * 100.0).round() as u8;
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            image
                .write_with_encoder(encoder)
                .map_err(|e| Error::EncodingFailed(e.to_string()))?;

            Ok(buffer)
        }
    }

    impl ThrowingPartsRepresentable for DynamicImage {
        fn try_to_parts(&self) -> Result<Vec<Part>, Error> {
            Ok(vec![Part::InlineData(jpeg_inline_data(self)?)])
        }
    }
}
