//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("coordinates ({x}, {y}) out of range for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::OutOfBounds {
            x: 5,
            y: 0,
            width: 5,
            height: 1,
        };
        assert_eq!(
            err.to_string(),
            "coordinates (5, 0) out of range for a 5x1 grid"
        );
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
