use crate::models::{ColourStop, Rgb, Rgb8, ValueRange};

pub const RED: Rgb8 = Rgb8::new(0xFF, 0x00, 0x00);
pub const ORANGE: Rgb8 = Rgb8::new(0xFF, 0x7F, 0x00);
pub const YELLOW: Rgb8 = Rgb8::new(0xFF, 0xFF, 0x00);
pub const GREEN: Rgb8 = Rgb8::new(0x00, 0xFF, 0x00);
pub const VIOLET: Rgb8 = Rgb8::new(0x8B, 0x00, 0xFF);

/// Red, orange, yellow, green, violet at even quarter steps.
pub const RAINBOW_STOPS: [ColourStop; 5] = [
    ColourStop::new(0.0, RED),
    ColourStop::new(0.25, ORANGE),
    ColourStop::new(0.5, YELLOW),
    ColourStop::new(0.75, GREEN),
    ColourStop::new(1.0, VIOLET),
];

pub const RAINBOW: GradientMapper = GradientMapper {
    stops: &RAINBOW_STOPS,
};

/// Piecewise-linear ramp over a constant stop table.
///
/// The table starts at position 0.0, ends at 1.0 and is strictly increasing,
/// so every clamped `t` falls inside exactly one segment (or on the shared
/// stop between two, where both give the stop's own colour).
#[derive(Debug, Clone, Copy)]
pub struct GradientMapper {
    stops: &'static [ColourStop],
}

impl GradientMapper {
    pub fn stops(&self) -> &'static [ColourStop] {
        self.stops
    }

    /// Returns the bracketing stops and the local position between them.
    fn segment(&self, t: f64) -> (&ColourStop, &ColourStop, f64) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let hi = self
            .stops
            .partition_point(|s| s.position < t)
            .clamp(1, last);
        let (a, b) = (&self.stops[hi - 1], &self.stops[hi]);
        let local = (t - a.position) / (b.position - a.position);
        log::trace!(
            "t={} in segment [{}, {}], local_t={}",
            t,
            a.position,
            b.position,
            local
        );
        (a, b, local)
    }

    /// Colour at normalized position `t`, interpolated in `[0, 1]` space.
    pub fn sample(&self, t: f64) -> Rgb {
        let (a, b, local) = self.segment(t);
        a.rgb().lerp(b.rgb(), local)
    }

    /// Colour at normalized position `t`, interpolated in 0-255 space.
    pub fn sample_rgb8(&self, t: f64) -> Rgb8 {
        let (a, b, local) = self.segment(t);
        a.colour.lerp(b.colour, local)
    }

    pub fn map(&self, value: f64, range: ValueRange) -> Rgb {
        self.sample(range.normalize(value))
    }

    pub fn map_rgb8(&self, value: f64, range: ValueRange) -> Rgb8 {
        self.sample_rgb8(range.normalize(value))
    }
}

impl colorgrad::Gradient for GradientMapper {
    fn at(&self, t: f32) -> colorgrad::Color {
        let c = self.sample(t as f64);
        colorgrad::Color::new(c.red as f32, c.green as f32, c.blue as f32, 1.0)
    }
}
