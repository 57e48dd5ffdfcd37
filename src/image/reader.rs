use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::{Image, ImageReader};
use crate::color::RGBColorFormat;
use crate::error::Error;
use crate::logger;

/// bicubic, comparable to the default of common imaging libraries
const RESAMPLING_FILTER: FilterType = FilterType::CatmullRom;

/// Decodes an image file and resamples it to a fixed size.
pub struct FileImageReader {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl FileImageReader {
    pub fn new(path: &Path, width: u32, height: u32) -> Self {
        Self {
            path: path.to_path_buf(),
            width,
            height,
        }
    }

    fn decode(&self) -> crate::Result<RgbImage> {
        let decoded = image::open(&self.path).map_err(|e| {
            Error::UnableToDecodeInputImage(self.path.to_string_lossy().into_owned(), e)
        })?;
        log::info!(
            "Decoded '{}' ({}x{}, {:?})",
            self.path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(decoded.into_rgb8())
    }

    fn resize(&self, image: RgbImage) -> RgbImage {
        logger::log_resize(image.dimensions(), (self.width, self.height));
        if image.dimensions() == (self.width, self.height) {
            return image;
        }
        imageops::resize(&image, self.width, self.height, RESAMPLING_FILTER)
    }
}

impl ImageReader for FileImageReader {
    fn read_image(&mut self) -> crate::Result<Image> {
        let image = self.decode()?;
        let image = self.resize(image);
        let (width, height) = image.dimensions();
        let dots = image
            .pixels()
            .map(|pixel| RGBColorFormat::from(pixel.0))
            .collect::<Vec<RGBColorFormat<u8>>>();
        Ok(Image::new(width, height, dots))
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    use super::FileImageReader;
    use crate::color::RGBColorFormat;
    use crate::image::ImageReader;

    fn temp_image_path(file_name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("rgb565_reader_{}_{}", std::process::id(), file_name));
        path
    }

    #[test]
    fn read_image_keeps_pixels_when_size_matches() {
        let path = temp_image_path("exact.png");
        let source = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        source.save(&path).unwrap();
        let mut reader = FileImageReader::new(&path, 3, 2);
        let image = reader.read_image().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.dot(2, 1), RGBColorFormat::new(20, 20, 7));
        assert_eq!(image.dot(0, 0), RGBColorFormat::new(0, 0, 7));
    }

    #[test]
    fn read_image_resizes_to_target_size() {
        let path = temp_image_path("resize.png");
        let source = RgbImage::from_pixel(37, 11, Rgb([90, 180, 30]));
        source.save(&path).unwrap();
        for (width, height) in [(8, 8), (320, 240), (1, 1), (100, 3)] {
            let mut reader = FileImageReader::new(&path, width, height);
            let image = reader.read_image().unwrap();
            assert_eq!(image.width(), width);
            assert_eq!(image.height(), height);
            assert_eq!(image.quantize().len(), (width * height) as usize);
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_image_drops_alpha_channel() {
        let path = temp_image_path("alpha.png");
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        source.save(&path).unwrap();
        let mut reader = FileImageReader::new(&path, 2, 2);
        let image = reader.read_image().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(image.dot(1, 1), RGBColorFormat::new(255, 0, 0));
    }

    #[test]
    fn read_missing_image_fails_with_decode_error() {
        let path = temp_image_path("missing.png");
        let mut reader = FileImageReader::new(&path, 4, 4);
        let error = reader.read_image().err().unwrap();
        assert!(error.is_decode_error(), "unexpected error: {}", error);
    }

    #[test]
    fn read_corrupt_image_fails_with_decode_error() {
        let path = temp_image_path("corrupt.png");
        fs::write(&path, b"definitely not a png").unwrap();
        let mut reader = FileImageReader::new(&path, 4, 4);
        let result = reader.read_image();
        fs::remove_file(&path).unwrap();
        assert!(result.err().unwrap().is_decode_error());
    }
}
