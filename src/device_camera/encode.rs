use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

pub const JPEG_QUALITY: u8 = 85;

/// Shrinks `image` to fit within `max_width`x`max_height`, keeping aspect
/// ratio. Smaller images are returned unchanged.
pub fn fit_within(image: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if image.width() <= max_width && image.height() <= max_height {
        return image;
    }
    image.resize(max_width, max_height, FilterType::Triangle)
}

pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_fit_within_keeps_aspect_ratio() {
        let image = DynamicImage::ImageRgb8(ImageBuffer::new(1280, 720));
        let fitted = fit_within(image, 640, 480);
        assert_eq!((fitted.width(), fitted.height()), (640, 360));
    }

    #[test]
    fn test_fit_within_leaves_small_images() {
        let image = DynamicImage::ImageRgb8(ImageBuffer::new(320, 240));
        let fitted = fit_within(image, 640, 480);
        assert_eq!((fitted.width(), fitted.height()), (320, 240));
    }

    #[test]
    fn test_encode_jpeg_drops_alpha() {
        let mut img = ImageBuffer::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([10, 20, 30, 128]);
        }
        let bytes = encode_jpeg(&DynamicImage::ImageRgba8(img)).unwrap();

        assert_eq!(&bytes[..2], &[0xff, 0xd8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }
}
