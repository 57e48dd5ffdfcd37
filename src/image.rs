use crate::color::{RGB565ColorFormat, RGBColorFormat};

pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

pub struct Image {
    width: u32,
    height: u32,
    dots: Vec<RGBColorFormat<u8>>,
}

impl Image {
    /// dots are expected in row-major order
    pub fn new(width: u32, height: u32, dots: Vec<RGBColorFormat<u8>>) -> Self {
        assert_eq!(
            dots.len(),
            width as usize * height as usize,
            "Number of dots does not match image size"
        );
        Self {
            width,
            height,
            dots,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> RGBColorFormat<u8> {
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.dots[index]
    }

    pub fn quantize(&self) -> PixelSequence {
        let values = self
            .dots
            .iter()
            .map(RGB565ColorFormat::from)
            .map(u16::from)
            .collect();
        PixelSequence {
            width: self.width,
            height: self.height,
            values,
        }
    }
}

/// RGB565 values of an image in row-major order
pub struct PixelSequence {
    width: u32,
    height: u32,
    values: Vec<u16>,
}

impl PixelSequence {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
