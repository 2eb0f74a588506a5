use crate::{config::LegendConfig, error::Result, gradient::GradientMapper};
use image::{ImageFormat, Rgb as Pixel, RgbImage};

/// Horizontal colour bar: the left column is the start of the ramp, the right
/// column the end.
pub fn render_legend(mapper: &GradientMapper, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let t = if width > 1 {
            x as f64 / (width - 1) as f64
        } else {
            0.0
        };
        Pixel(mapper.sample_rgb8(t).channels())
    })
}

pub fn write_legend(mapper: &GradientMapper, legend: &LegendConfig) -> Result<()> {
    let img = render_legend(mapper, legend.width, legend.height);
    img.save_with_format(&legend.path, ImageFormat::Png)?;
    log::debug!(
        "wrote {}x{} legend to {:?}",
        legend.width,
        legend.height,
        legend.path
    );
    Ok(())
}
