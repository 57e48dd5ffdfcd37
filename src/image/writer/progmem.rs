use std::io::Write;

mod encoder;

use encoder::ArrayEncoder;

use crate::error::Error;
use crate::image::{ImageWriter, PixelSequence};

/// Writes a pixel sequence as `const uint16_t <name>[] PROGMEM` declaration.
pub struct ProgmemImageWriter<'a, T: Write> {
    writer: T,
    pixels: &'a PixelSequence,
    array_name: &'a str,
}

impl<'a, T: Write> ProgmemImageWriter<'a, T> {
    pub fn new(writer: T, pixels: &'a PixelSequence, array_name: &'a str) -> Self {
        Self {
            writer,
            pixels,
            array_name,
        }
    }

    pub fn into_inner(self) -> T {
        self.writer
    }
}

impl<T: Write> ImageWriter for ProgmemImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        check_array_name(self.array_name)?;
        let mut encoder = ArrayEncoder::new(&mut self.writer, self.array_name);
        let bytes_written = encoder.encode(self.pixels.values())?;
        self.writer.flush()?;
        log::info!(
            "Wrote array '{}' with {} values ({} bytes)",
            self.array_name,
            self.pixels.len(),
            bytes_written
        );
        Ok(())
    }
}

/// the name ends up verbatim in C source, so it has to be a C identifier
pub fn check_array_name(name: &str) -> crate::Result<()> {
    let mut characters = name.chars();
    let valid_start = characters
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = characters.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !(valid_start && valid_rest) {
        return Err(Error::InvalidArrayName(name.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{check_array_name, ProgmemImageWriter};
    use crate::color::RGBColorFormat;
    use crate::image::{Image, ImageWriter};

    #[test]
    fn write_quantized_image() {
        let image = Image::new(
            2,
            1,
            vec![RGBColorFormat::new(255, 0, 0), RGBColorFormat::new(0, 255, 0)],
        );
        let pixels = image.quantize();
        let mut writer = ProgmemImageWriter::new(Vec::new(), &pixels, "logo");
        writer.write_image().unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "const uint16_t logo[] PROGMEM = {\n0xF800, 0x07E0\n};\n"
        );
    }

    #[test]
    fn write_with_invalid_array_name() {
        let image = Image::new(1, 1, vec![RGBColorFormat::default()]);
        let pixels = image.quantize();
        let mut writer = ProgmemImageWriter::new(Vec::new(), &pixels, "my logo");
        let error = writer.write_image().err().unwrap();
        assert_eq!(error.to_string(), "Array name 'my logo' is not a valid C identifier");
        assert!(writer.into_inner().is_empty(), "nothing must be written");
    }

    #[test]
    fn accept_c_identifiers() {
        for name in ["logo", "_icon", "camera_30x30", "Up2"] {
            assert!(check_array_name(name).is_ok(), "'{}' rejected", name);
        }
    }

    #[test]
    fn reject_non_identifiers() {
        for name in ["", "1logo", "logo-dark", "logo[]", "lögo"] {
            assert!(check_array_name(name).is_err(), "'{}' accepted", name);
        }
    }
}
