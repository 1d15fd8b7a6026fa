use thiserror::Error;

/// Errors that can occur while computing or writing cut-outs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CutoutError {
    #[error("invalid bounding box: {0}")]
    InvalidBounds(String),

    #[error("units per em must be positive and finite, got {0}")]
    InvalidUnitsPerEm(f64),

    #[error("empty contour")]
    EmptyContour,

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[cfg(feature = "ufo")]
    #[error("layer error: {0}")]
    Layer(String),

    #[cfg(feature = "ufo")]
    #[error("glyph '{glyph}': {source}")]
    ContourConvert {
        glyph: String,
        #[source]
        source: norad::error::ConvertContourError,
    },

    #[cfg(feature = "ufo")]
    #[error("failed to load UFO: {0}")]
    Norad(#[from] norad::error::FontLoadError),

    #[cfg(feature = "ufo")]
    #[error("failed to save UFO: {0}")]
    NoradWrite(#[from] norad::error::FontWriteError),
}
