use crate::{
    config::Notation,
    error::Result,
    gradient::{GradientMapper, RAINBOW},
    map::map_value,
    models::{Rgb8, ValueRange},
};
use colorgrad::Gradient;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Serialize;
use std::io::Write;

/// One mapped input, flat so it serializes to a single CSV record.
#[derive(Debug, Clone, Serialize)]
pub struct MappedRow {
    pub value: f64,
    pub t: f64,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub hex: String,
    pub clamped: bool,
}

impl MappedRow {
    pub fn rgb8(&self) -> Rgb8 {
        Rgb8::new(self.red, self.green, self.blue)
    }
}

pub fn map_rows(mapper: &GradientMapper, values: &[f64], range: ValueRange) -> Vec<MappedRow> {
    values
        .iter()
        .map(|&value| {
            let t = range.normalize(value);
            let rgb8 = mapper.sample_rgb8(t);
            let rgb = mapper.sample(t);
            MappedRow {
                value,
                t,
                red: rgb8.red,
                green: rgb8.green,
                blue: rgb8.blue,
                r: rgb.red,
                g: rgb.green,
                b: rgb.blue,
                hex: rgb8.to_hex_upper(),
                clamped: !(range.min()..=range.max()).contains(&value),
            }
        })
        .collect()
}

/// A truecolour block for terminals.
pub fn swatch(c: Rgb8) -> String {
    format!("\x1b[38;2;{};{};{}m█\x1b[0m", c.red, c.green, c.blue)
}

pub fn colourbar(grad: &dyn Gradient, n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        let [r, g, b, _] = grad.at(t).to_rgba8();
        s.push_str(&swatch(Rgb8::new(r, g, b)));
    }
    s
}

pub fn render_table(rows: &[MappedRow], range: ValueRange, notation: Notation) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Value")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("t")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colour")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Swatch").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for row in rows {
        let status = if row.clamped { "⚠️" } else { "✅" };
        table.add_row(vec![
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(row.value).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.t)).set_alignment(CellAlignment::Center),
            Cell::new(map_value(row.value, range, notation)),
            Cell::new(swatch(row.rgb8()).repeat(4)),
        ]);
    }
    table
}

pub fn print_table_report(rows: &[MappedRow], range: ValueRange, notation: Notation) {
    let table = render_table(rows, range, notation);
    println!("\nMapping summary:\n{}", table);
    println!(
        "\n{:>10} {} {}",
        range.min(),
        colourbar(&RAINBOW, 40),
        range.max()
    );

    let warnings: Vec<String> = rows
        .iter()
        .filter(|r| r.clamped)
        .map(|r| {
            format!(
                "  ⚠️{}: outside [{:.2}…{:.2}], clamped to {}",
                r.value,
                range.min(),
                range.max(),
                r.hex
            )
        })
        .collect();
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("{}", warning);
        }
    }
    println!();
}

/// `value -> rgb -> colour` lines.
pub fn write_plain<W: Write>(
    rows: &[MappedRow],
    range: ValueRange,
    notation: Notation,
    mut w: W,
) -> Result<()> {
    for row in rows {
        writeln!(
            w,
            "{} -> ({}, {}, {}) -> {}",
            row.value,
            row.r,
            row.g,
            row.b,
            map_value(row.value, range, notation)
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(rows: &[MappedRow], mut w: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, rows)?;
    writeln!(w)?;
    Ok(())
}

pub fn write_csv<W: Write>(rows: &[MappedRow], w: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_rows() -> Vec<MappedRow> {
        map_rows(
            &RAINBOW,
            &[-1000.0, -500.0, 0.0, 500.0, 1000.0, 2500.0],
            ValueRange::default(),
        )
    }

    #[test]
    fn rows_flag_clamped_values() {
        let rows = demo_rows();
        assert!(rows[..5].iter().all(|r| !r.clamped));
        assert!(rows[5].clamped);
        assert_eq!(rows[5].hex, "#8B00FF");
        assert_eq!(rows[1].rgb8(), Rgb8::new(0xFF, 0x7F, 0x00));
    }

    #[test]
    fn table_lists_every_colour() {
        let rendered = render_table(&demo_rows(), ValueRange::default(), Notation::Hex).to_string();
        for hex in ["#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#8B00FF"] {
            assert!(rendered.contains(hex), "missing {} in\n{}", hex, rendered);
        }
    }

    #[test]
    fn plain_output_matches_demo_layout() {
        let mut out = Vec::new();
        write_plain(
            &demo_rows()[..1],
            ValueRange::default(),
            Notation::HexLower,
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1000 -> (1, 0, 0) -> #ff0000\n");
    }

    #[test]
    fn csv_has_header_and_one_record_per_row() {
        let mut out = Vec::new();
        write_csv(&demo_rows(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("value,t,red,green,blue,r,g,b,hex,clamped")
        );
        assert_eq!(lines.count(), 6);
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let mut out = Vec::new();
        write_json(&demo_rows(), &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2]["hex"], "#FFFF00");
        assert_eq!(rows[2]["t"], 0.5);
    }

    #[test]
    fn colourbar_emits_one_block_per_step() {
        let bar = colourbar(&RAINBOW, 10);
        assert_eq!(bar.matches('█').count(), 10);
        assert!(bar.starts_with("\x1b[38;2;255;0;0m"));
    }
}
