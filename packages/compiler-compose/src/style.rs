//! Compose style expressions derived from the resolved theme.

use capsule_theme::Rgba;

/// `Color(0xAARRGGBB)` literal for a resolved color
pub fn color_expr(color: &Rgba) -> String {
    format!("Color(0x{})", color.argb_hex())
}

/// Format a dimension for Kotlin source (drops a trailing `.0`)
pub fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
