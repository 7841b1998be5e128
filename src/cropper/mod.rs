//! 画像の読み込み・切り抜き・PNGエンコード

use crate::error::{Result, TrademarkError};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use trademark_search_common::{is_supported_image_name, CropRect};

/// アップロード可能な拡張子か（大文字小文字を区別しない）
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| is_supported_image_name(&name))
}

/// 画像ファイルを読み込む
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(TrademarkError::FileNotFound(path.display().to_string()));
    }
    if !is_supported_image(path) {
        return Err(TrademarkError::UnsupportedImage(path.display().to_string()));
    }

    let image = image::ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// 切り抜き（範囲は画像内に収める）
pub fn crop(image: &DynamicImage, rect: Option<CropRect>) -> Result<DynamicImage> {
    let (width, height) = (image.width(), image.height());
    let rect = rect.unwrap_or_else(|| CropRect::full(width, height)).clamp_to(width, height)?;
    Ok(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}

/// PNGバイト列にエンコード
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// 読み込み → 切り抜き → PNG
pub fn load_cropped_png(path: &Path, rect: Option<CropRect>) -> Result<Vec<u8>> {
    let image = load_image(path)?;
    let cropped = crop(&image, rect)?;
    log::debug!(
        "cropped {} to {}x{}",
        path.display(),
        cropped.width(),
        cropped.height()
    );
    encode_png(&cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample_image() -> DynamicImage {
        let mut img = RgbImage::new(40, 30);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([x as u8, y as u8, 128]);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("logo.JPG")));
        assert!(is_supported_image(Path::new("logo.jpeg")));
        assert!(is_supported_image(Path::new("logo.gif")));
        assert!(is_supported_image(Path::new("logo.Bmp")));
        assert!(!is_supported_image(Path::new("logo.webp")));
        assert!(!is_supported_image(Path::new("logo")));
    }

    #[test]
    fn test_crop_default_is_full_image() {
        let cropped = crop(&sample_image(), None).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (40, 30));
    }

    #[test]
    fn test_crop_clamped() {
        let cropped = crop(&sample_image(), Some(CropRect::new(30, 20, 50, 50))).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (10, 10));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &Rgb([30, 20, 128]));
    }

    #[test]
    fn test_crop_outside_is_error() {
        assert!(crop(&sample_image(), Some(CropRect::new(40, 0, 5, 5))).is_err());
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(&sample_image()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, TrademarkError::FileNotFound(_)));
    }

    #[test]
    fn test_load_cropped_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        sample_image().save(&path).unwrap();

        let png = load_cropped_png(&path, Some(CropRect::new(0, 0, 8, 6))).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }
}
