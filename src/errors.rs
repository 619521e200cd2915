use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building, querying or exporting colors and grids
#[derive(Error, Debug)]
pub enum RasterError {
    /// A color channel input is not a finite number
    #[error("Invalid color component for channel {channel}: {value}")]
    InvalidComponent { channel: &'static str, value: f64 },

    /// Hex string has the wrong length or contains non-hex characters
    #[error("Invalid hex color format: {0:?} (expected 3, 6 or 8 hex digits, optional leading '#')")]
    InvalidHexFormat(Arc<String>),

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("coordinates ({x}, {y}) are out of bounds for grid size {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Grid dimensions that cannot describe a raster
    #[error("Invalid grid dimensions: {message}")]
    InvalidDimensions { message: Arc<String> },

    /// Image encoder failure
    #[error("Encoding error: {0}")]
    Encoding(Arc<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(Arc<String>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with RasterError
pub type Result<T> = std::result::Result<T, RasterError>;

impl RasterError {
    pub(crate) fn invalid_hex(input: &str) -> Self {
        RasterError::InvalidHexFormat(Arc::new(input.to_string()))
    }

    pub(crate) fn invalid_dimensions(message: impl Into<String>) -> Self {
        RasterError::InvalidDimensions {
            message: Arc::new(message.into()),
        }
    }

    pub(crate) fn encoding(message: impl Into<String>) -> Self {
        RasterError::Encoding(Arc::new(message.into()))
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        RasterError::Configuration(Arc::new(message.into()))
    }
}

/// Enable cloning for RasterError
impl Clone for RasterError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidComponent { channel, value } => Self::InvalidComponent {
                channel: *channel,
                value: *value,
            },
            Self::InvalidHexFormat(input) => Self::InvalidHexFormat(Arc::clone(input)),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => Self::OutOfBounds {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            },
            Self::InvalidDimensions { message } => Self::InvalidDimensions {
                message: Arc::clone(message),
            },
            Self::Encoding(msg) => Self::Encoding(Arc::clone(msg)),
            Self::Configuration(msg) => Self::Configuration(Arc::clone(msg)),
            Self::Io(err) => Self::Io(std::io::Error::new(err.kind(), err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = RasterError::OutOfBounds {
            x: 5,
            y: 10,
            width: 3,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "coordinates (5, 10) are out of bounds for grid size 3x2"
        );
    }

    #[test]
    fn test_clone_keeps_io_kind() {
        let err = RasterError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        match err.clone() {
            RasterError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected clone: {other:?}"),
        }
    }
}
