use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    FailedToWriteReport(std::io::Error),
    WrongNumberOfFields(usize),
    ParsingOfFieldFailed(&'static str),
    LineIsNotValidUtf8,
    NoValidPixelsRead(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write report: {}", error)
            }
            Self::WrongNumberOfFields(found) => {
                write!(f, "Expected 5 comma separated fields, but got {}", found)
            }
            Self::ParsingOfFieldFailed(field_name) => {
                write!(f, "Parsing of field '{}' failed", field_name)
            }
            Self::LineIsNotValidUtf8 => write!(f, "Line is not valid UTF-8"),
            Self::NoValidPixelsRead(path) => {
                write!(f, "No valid pixels were read from '{}'", path)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadInputFile(_, error)
            | Self::FailedToWriteOutputFile(_, error)
            | Self::FailedToWriteReport(error) => Some(error),
            _ => None,
        }
    }
}
