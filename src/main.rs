use anyhow::Context;
use clap::Parser;
use rainbowmap::{
    RAINBOW, ValueRange,
    config::{Config, DEMO_VALUES, LegendConfig, Notation, ReportFormat},
    models::range::{DEFAULT_MAX, DEFAULT_MIN},
    utils::{legend, report},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Values to map (defaults to -1000 -500 0 500 1000).
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
    /// Value mapped to the first stop (red).
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: f64,
    /// Value mapped to the last stop (violet).
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: f64,
    /// Colour notation for table and plain output.
    #[arg(short, long, value_enum, default_value_t = Notation::Hex)]
    notation: Notation,
    /// Output layout.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    report: ReportFormat,
    /// Also write a PNG colour bar of the range to this path.
    #[arg(long)]
    legend: Option<PathBuf>,
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    legend_width: u32,
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    legend_height: u32,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let range = ValueRange::new(self.min, self.max)?;
        let values = if self.values.is_empty() {
            DEMO_VALUES.to_vec()
        } else {
            self.values
        };
        let legend = self.legend.map(|path| LegendConfig {
            path,
            width: self.legend_width,
            height: self.legend_height,
        });

        Ok(Config {
            range,
            values,
            notation: self.notation,
            report: self.report,
            legend,
        })
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let rows = report::map_rows(&RAINBOW, &config.values, config.range);
    let stdout = std::io::stdout();

    match config.report {
        ReportFormat::Table => report::print_table_report(&rows, config.range, config.notation),
        ReportFormat::Plain => {
            report::write_plain(&rows, config.range, config.notation, stdout.lock())?
        }
        ReportFormat::Json => report::write_json(&rows, stdout.lock())?,
        ReportFormat::Csv => report::write_csv(&rows, stdout.lock())?,
    }

    if let Some(legend) = &config.legend {
        legend::write_legend(&RAINBOW, legend)
            .with_context(|| format!("writing legend to {}", legend.path.display()))?;
        eprintln!(
            "🎨 Legend {}x{} for [{}…{}] written to {}",
            legend.width,
            legend.height,
            config.range.min(),
            config.range.max(),
            legend.path.display()
        );
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config()?;
    run(&config)
}
