use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

pub use error::Error;
use crate::image::{
    reader::FileImageReader,
    writer::progmem::{check_array_name, ProgmemImageWriter},
    ImageReader, ImageWriter,
};

pub mod color;
mod error;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Settings of a single conversion run.
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub array_name: String,
}

impl Default for Config {
    /// full screen logo for a 320x240 TFT panel
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("logo.png"),
            output_file: PathBuf::from("output.h"),
            width: 320,
            height: 240,
            array_name: String::from("logo"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ConversionSummary {
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
}

impl Display for ConversionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task completed, generated {}. Size: {}x{}, total pixels: {}.",
            self.output_file.display(),
            self.width,
            self.height,
            self.pixel_count
        )
    }
}

fn check_config(config: &Config) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::InvalidTargetDimensions(config.width, config.height));
    }
    check_array_name(&config.array_name)
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

/// Loads, resizes and quantizes the input image, then writes the RGB565
/// array declaration. The output file is only touched once decoding succeeded.
pub fn convert_image_to_rgb565_array(config: &Config) -> Result<ConversionSummary> {
    check_config(config)?;
    let mut reader = FileImageReader::new(&config.input_file, config.width, config.height);
    let image = reader.read_image()?;
    let pixels = image.quantize();
    log::debug!("Quantized {} pixels to RGB565", pixels.len());
    let output_file = open_output_file(&config.output_file)?;
    log::info!("Writing '{}'", config.output_file.display());
    let mut writer = ProgmemImageWriter::new(
        BufWriter::new(&output_file),
        &pixels,
        &config.array_name,
    );
    writer.write_image()?;
    Ok(ConversionSummary {
        output_file: config.output_file.clone(),
        width: pixels.width(),
        height: pixels.height(),
        pixel_count: pixels.len(),
    })
}
