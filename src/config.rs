use crate::models::ValueRange;
use clap::ValueEnum;
use std::path::PathBuf;

/// How a single mapped colour is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Notation {
    /// `#RRGGBB`
    Hex,
    /// `#rrggbb`
    HexLower,
    /// Normalized channels
    Rgb,
    /// 8-bit channels
    Rgb8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Plain,
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct LegendConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub range: ValueRange,
    pub values: Vec<f64>,
    pub notation: Notation,
    pub report: ReportFormat,
    pub legend: Option<LegendConfig>,
}

/// Sample inputs used when none are given.
pub const DEMO_VALUES: [f64; 5] = [-1000.0, -500.0, 0.0, 500.0, 1000.0];

impl Default for Config {
    fn default() -> Self {
        Config {
            range: ValueRange::default(),
            values: DEMO_VALUES.to_vec(),
            notation: Notation::Hex,
            report: ReportFormat::Table,
            legend: None,
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        LegendConfig {
            path: PathBuf::from("legend.png"),
            width: 512,
            height: 32,
        }
    }
}
