pub mod config;
pub mod error;
pub mod gradient;
pub mod map;
pub mod models;
pub mod utils;

pub use config::{Config, Notation, ReportFormat};
pub use error::{Error, Result};
pub use gradient::{GradientMapper, RAINBOW};
pub use map::{map_value, value_to_color_hex, value_to_rainbow_hex, value_to_rainbow_rgb};
pub use models::{ColourStop, Rgb, Rgb8, ValueRange, hex_to_rgb, rgb_to_hex};
