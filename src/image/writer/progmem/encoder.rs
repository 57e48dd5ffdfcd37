use std::io;
use std::io::Write;

const VALUES_PER_LINE: usize = 12;
const VALUE_SEPARATOR: &str = ", ";
const LINE_BREAK: &str = "\n";
const CLOSING: &str = "\n};\n";

pub struct ArrayEncoder<'a, T: Write> {
    writer: &'a mut T,
    array_name: &'a str,
    bytes_written: usize,
}

impl<'a, T: Write> ArrayEncoder<'a, T> {
    pub fn new(writer: &'a mut T, array_name: &'a str) -> Self {
        Self {
            writer,
            array_name,
            bytes_written: 0,
        }
    }

    /// returns the number of bytes written to the underlying writer
    pub fn encode(&mut self, values: &[u16]) -> io::Result<usize> {
        self.write_declaration()?;
        self.write_values(values)?;
        self.write_closing()?;
        Ok(self.bytes_written)
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.bytes_written += text.len();
        Ok(())
    }

    fn write_declaration(&mut self) -> io::Result<()> {
        let declaration = format!("const uint16_t {}[] PROGMEM = {{\n", self.array_name);
        self.write_str(&declaration)
    }

    fn write_values(&mut self, values: &[u16]) -> io::Result<()> {
        let last_index = values.len().saturating_sub(1);
        for (index, value) in values.iter().enumerate() {
            self.write_value(*value)?;
            if index != last_index {
                self.write_str(VALUE_SEPARATOR)?;
            }
            if (index + 1) % VALUES_PER_LINE == 0 {
                self.write_str(LINE_BREAK)?;
            }
        }
        Ok(())
    }

    fn write_value(&mut self, value: u16) -> io::Result<()> {
        self.write_str(&format!("0x{:04X}", value))
    }

    fn write_closing(&mut self) -> io::Result<()> {
        self.write_str(CLOSING)
    }
}
