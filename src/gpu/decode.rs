use crate::error::GalleryError;
use crate::gallery::AssetRef;

/// Tightly packed 8-bit RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, row-major, top row first.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Wrap raw pixels, checking that the buffer matches the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::AssetLoad`] for empty images or a buffer of
    /// the wrong length.
    pub fn new(
        asset: &AssetRef,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> Result<Self, GalleryError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(GalleryError::AssetLoad {
                asset: asset.to_string(),
                reason: format!(
                    "{width}x{height} image with {} bytes of pixel data",
                    rgba.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }
}

/// Turns an asset reference into pixels. Decoding lives outside the
/// gallery; this is the seam it is plugged in through.
pub trait ImageDecoder {
    /// Fetch and decode `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::AssetLoad`] when the asset is missing or not
    /// a decodable image.
    fn decode(&self, asset: &AssetRef) -> Result<DecodedImage, GalleryError>;
}

/// Decodes local image files with the `image` crate, downscaling anything
/// larger than the GPU's texture limit.
#[cfg(feature = "viewer")]
#[derive(Debug, Clone, Copy)]
pub struct FileDecoder {
    max_dimension: u32,
}

#[cfg(feature = "viewer")]
impl FileDecoder {
    /// Create a decoder that keeps both sides at or below `max_dimension`.
    #[must_use]
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension: max_dimension.max(1),
        }
    }
}

#[cfg(feature = "viewer")]
impl ImageDecoder for FileDecoder {
    fn decode(&self, asset: &AssetRef) -> Result<DecodedImage, GalleryError> {
        let fail = |reason: String| GalleryError::AssetLoad {
            asset: asset.to_string(),
            reason,
        };
        let mut image =
            image::open(asset.as_str()).map_err(|e| fail(e.to_string()))?;
        if image.width() > self.max_dimension
            || image.height() > self.max_dimension
        {
            log::debug!(
                "downscaling {asset} from {}x{}",
                image.width(),
                image.height()
            );
            image = image.resize(
                self.max_dimension,
                self.max_dimension,
                image::imageops::FilterType::Triangle,
            );
        }
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        DecodedImage::new(asset, width, height, rgba.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffer_must_match_dimensions() {
        let asset = AssetRef::new("x.png");
        assert!(DecodedImage::new(&asset, 2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            DecodedImage::new(&asset, 2, 2, vec![0; 15]),
            Err(GalleryError::AssetLoad { .. })
        ));
        assert!(DecodedImage::new(&asset, 0, 0, Vec::new()).is_err());
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn missing_file_is_an_asset_error() {
        let decoder = FileDecoder::new(4096);
        let err = decoder
            .decode(&AssetRef::new("/definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, GalleryError::AssetLoad { .. }));
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn oversized_images_are_downscaled() {
        let path = std::env::temp_dir()
            .join(format!("orbis-decode-{}.png", std::process::id()));
        image::RgbaImage::from_pixel(64, 32, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        let decoded = FileDecoder::new(16)
            .decode(&AssetRef::new(path.to_string_lossy()))
            .unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 8));
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
        std::fs::remove_file(&path).unwrap();
    }
}
