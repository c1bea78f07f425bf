use thiserror::Error;

/// Errors produced while loading, exporting or packaging an image.
///
/// None of these are shown to the user: the editor logs them and carries on.
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decoded image has no pixels")]
    EmptyImage,
    #[error("No image selected")]
    NoImageSelected,
    #[error("Export failed: {0}")]
    Export(String),
}

pub type SketchResult<T> = Result<T, SketchError>;
