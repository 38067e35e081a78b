use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// No open frontier corner (or tree slot) could host the sprite.
    #[error("Sprite '{key}' ({width}x{height}) could not be placed")]
    UnplaceableSprite { key: String, width: u32, height: u32 },
    #[error("Canvas {width}x{height} cannot be rounded up to a power of two")]
    CanvasTooLarge { width: u32, height: u32 },
    #[error("Encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
