use rainbowmap::{
    RAINBOW, Rgb, ValueRange, hex_to_rgb, rgb_to_hex, value_to_color_hex, value_to_rainbow_hex,
    value_to_rainbow_rgb,
};

const EPS: f64 = 1e-9;

fn assert_rgb_eq(actual: Rgb, expected: (f64, f64, f64)) {
    let (r, g, b): (f64, f64, f64) = actual.into();
    assert!(
        (r - expected.0).abs() < EPS && (g - expected.1).abs() < EPS && (b - expected.2).abs() < EPS,
        "{:?} != {:?}",
        (r, g, b),
        expected
    );
}

#[test]
fn sample_values_hit_each_stop() {
    let range = ValueRange::default();
    let cases = [
        (-1000.0, "#FF0000"),
        (-500.0, "#FF7F00"),
        (0.0, "#FFFF00"),
        (500.0, "#00FF00"),
        (1000.0, "#8B00FF"),
    ];
    for (value, hex) in cases {
        assert_eq!(value_to_color_hex(value, range), hex, "value {}", value);
        assert_eq!(value_to_rainbow_hex(value, range), hex.to_lowercase());
    }
}

#[test]
fn ends_clamp_to_first_and_last_stop() {
    let range = ValueRange::default();
    for value in [-1000.0, -1000.5, -1e9, f64::NEG_INFINITY] {
        assert_eq!(value_to_color_hex(value, range), "#FF0000");
        assert_rgb_eq(value_to_rainbow_rgb(value, range), (1.0, 0.0, 0.0));
    }
    for value in [1000.0, 1000.5, 1e9, f64::INFINITY] {
        assert_eq!(value_to_color_hex(value, range), "#8B00FF");
        assert_rgb_eq(value_to_rainbow_rgb(value, range), (139.0 / 255.0, 0.0, 1.0));
    }
}

#[test]
fn mid_segment_values_round_to_nearest() {
    let range = ValueRange::default();
    assert_eq!(value_to_color_hex(-750.0, range), "#FF4000");
    assert_eq!(value_to_color_hex(250.0, range), "#80FF00");
    assert_eq!(value_to_color_hex(750.0, range), "#468080");
}

#[test]
fn midpoint_of_any_range_is_yellow() {
    for (min, max) in [(-1.0, 1.0), (0.0, 255.0), (1e6, 3e6), (-0.002, -0.001)] {
        let range = ValueRange::new(min, max).unwrap();
        assert_eq!(value_to_color_hex(range.value_at(0.5), range), "#FFFF00");
    }
}

#[test]
fn stop_colours_round_trip_through_hex_helpers() {
    for stop in RAINBOW.stops() {
        let hex = stop.colour.to_hex_lower();
        assert_eq!(rgb_to_hex(hex_to_rgb(&hex).unwrap()), hex);
    }
}

#[test]
fn degenerate_range_is_rejected() {
    let err = ValueRange::new(5.0, 5.0).unwrap_err();
    assert!(err.to_string().contains("min < max"));
}
