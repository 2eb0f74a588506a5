pub mod colour;
pub mod range;
pub mod stop;

pub use colour::{Rgb, Rgb8, hex_to_rgb, rgb_to_hex};
pub use range::ValueRange;
pub use stop::ColourStop;
