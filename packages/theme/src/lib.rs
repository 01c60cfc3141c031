//! Theme resolution: abstract design tokens → concrete, fully-defaulted
//! values every target backend can render from.
//!
//! Absence is a resolver concern, not an emitter concern: a resolved theme
//! has no optional fields, so emitters never special-case a missing token.
//! Target-specific style expressions (SwiftUI `Color(red:...)`, Compose
//! `Color(0xFF...)`, CSS custom properties) live in the backends; this crate
//! only owns the neutral resolved form.

pub mod color;
pub mod css;
pub mod resolved;

pub use color::{ColorParseError, Rgba};
pub use resolved::{
    RadiusScale, ResolvedPalette, ResolvedTheme, ResolvedTypography, SpacingScale, ThemeError,
};
