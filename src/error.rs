use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidTargetDimensions(u32, u32),
    InvalidArrayName(String),
    UnableToDecodeInputImage(String, image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteArray(std::io::Error),
}

impl Error {
    /// input file missing, unreadable or in an unsupported format
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::UnableToDecodeInputImage(..))
    }

    /// output file could not be created or written
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::UnableToOpenOutputFileForWriting(..) | Self::FailedToWriteArray(_)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTargetDimensions(width, height) => {
                write!(
                    f,
                    "Target size {}x{} is invalid. Width and height must be greater than zero.",
                    width, height
                )
            }
            Self::InvalidArrayName(name) => {
                write!(f, "Array name '{}' is not a valid C identifier", name)
            }
            Self::UnableToDecodeInputImage(path, error) => {
                write!(f, "Unable to decode input image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteArray(error) => {
                write!(f, "Failed to write array declaration: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::FailedToWriteArray(value)
    }
}
