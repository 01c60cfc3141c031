//! SwiftUI style expressions derived from the resolved theme.

use capsule_theme::Rgba;

/// `Color(red:green:blue:)` literal for a resolved color
pub fn color_expr(color: &Rgba) -> String {
    let base = format!(
        "Color(red: {:.3}, green: {:.3}, blue: {:.3})",
        color.red_f(),
        color.green_f(),
        color.blue_f()
    );
    if color.a == 255 {
        base
    } else {
        format!("{}.opacity({:.3})", base, color.alpha_f())
    }
}

/// Format a dimension for Swift source (drops a trailing `.0`)
pub fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
