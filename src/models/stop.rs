use super::colour::{Rgb, Rgb8};
use serde::Serialize;

/// A fixed anchor of the gradient: `position` in `[0, 1]` and the colour there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColourStop {
    pub position: f64,
    pub colour: Rgb8,
}

impl ColourStop {
    pub const fn new(position: f64, colour: Rgb8) -> Self {
        Self { position, colour }
    }

    pub fn rgb(&self) -> Rgb {
        self.colour.to_rgb()
    }
}
