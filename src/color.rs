#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    red: T,
    green: T,
    blue: T,
}

/// 16 bit packed color, 5 bits red, 6 bits green, 5 bits blue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGB565ColorFormat {
    value: u16,
}

const RED_MASK: u8 = 0xF8;
const GREEN_MASK: u8 = 0xFC;

impl<T> RGBColorFormat<T> {
    pub fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

impl Default for RGBColorFormat<u8> {
    fn default() -> Self {
        RGBColorFormat {
            red: 0,
            green: 0,
            blue: 0,
        }
    }
}

impl From<[u8; 3]> for RGBColorFormat<u8> {
    fn from(value: [u8; 3]) -> Self {
        RGBColorFormat::new(value[0], value[1], value[2])
    }
}

impl RGB565ColorFormat {
    pub fn value(&self) -> u16 {
        self.value
    }
}

impl From<&RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: &RGBColorFormat<u8>) -> Self {
        let red = ((value.red & RED_MASK) as u16) << 8;
        let green = ((value.green & GREEN_MASK) as u16) << 3;
        let blue = (value.blue >> 3) as u16;
        RGB565ColorFormat {
            value: red | green | blue,
        }
    }
}

impl From<RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: RGBColorFormat<u8>) -> Self {
        RGB565ColorFormat::from(&value)
    }
}

impl From<RGB565ColorFormat> for u16 {
    fn from(value: RGB565ColorFormat) -> Self {
        value.value
    }
}
