use ratatui::style::Color;
use seesort_trace::ColorToken;

/// Default bar color: green for short bars through red for the tallest.
pub fn gradient_color(value: u64, max_value: u64) -> Color {
    let ratio = if max_value == 0 {
        0.0
    } else {
        (value as f64 / max_value as f64).clamp(0.0, 1.0)
    };
    let (r, g, b) = hsl_to_rgb(120.0 - ratio * 120.0, 1.0, 0.5);
    Color::Rgb(r, g, b)
}

pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Compare => Color::Cyan,
        ColorToken::Pivot => Color::Magenta,
    }
}

/// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round() as u8;
    (channel(r), channel(g), channel(b))
}
