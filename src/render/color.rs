//! Palette entries are CSS color strings; the backend wants RGB triples.

use plotters::style::{Color, HSLColor, RGBColor};

/// Fallback for text that is not a color we understand
const FALLBACK: RGBColor = RGBColor(0, 0, 0);

/// Parse `#rgb`, `#rrggbb` or `hsl(h, s%, l%)`
pub fn parse_color(text: &str) -> RGBColor {
    let text = text.trim();
    let parsed = if let Some(hex) = text.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = text.strip_prefix("hsl(").and_then(|t| t.strip_suffix(')')) {
        parse_hsl(args)
    } else {
        None
    };
    parsed.unwrap_or(FALLBACK)
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(RGBColor(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(RGBColor(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

fn parse_hsl(args: &str) -> Option<RGBColor> {
    let mut parts = args.split(',').map(|p| p.trim().trim_end_matches('%').parse::<f64>());
    let hue = parts.next()?.ok()?;
    let saturation = parts.next()?.ok()?;
    let lightness = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }

    let hsl = HSLColor(
        hue.rem_euclid(360.0) / 360.0,
        (saturation / 100.0).clamp(0.0, 1.0),
        (lightness / 100.0).clamp(0.0, 1.0),
    );
    let (r, g, b) = hsl.rgb();
    Some(RGBColor(r, g, b))
}
