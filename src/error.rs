use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid value range [{min}, {max}] (bounds must be finite and min < max)")]
    InvalidRange { min: f64, max: f64 },
    #[error("invalid hex colour '{0}' (expected #RRGGBB)")]
    InvalidHex(String),
    #[error("failed to write output\n{0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV\n{0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON\n{0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to save image\n{0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
