//! Error types for SVG output

use thiserror::Error;

/// Errors that can occur while writing to the canvas sink
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The underlying sink rejected a write
    #[error("failed to write SVG output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CanvasError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(err.to_string().contains("pipe closed"));
    }
}
