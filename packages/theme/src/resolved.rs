use crate::color::{ColorParseError, Rgba};
use capsule_schema::ThemeTokens;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("Invalid color for token '{token}': {source}")]
    InvalidColor {
        token: String,
        source: ColorParseError,
    },
}

/// Fully-defaulted palette. Every color an emitter may reference is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPalette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub background: Rgba,
    pub foreground: Rgba,
    pub surface: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypography {
    pub font_family: String,
    pub base_size: f64,
    pub heading_size: f64,
    pub small_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl SpacingScale {
    /// Scale step by its token name; `md` for unknown names
    pub fn step(&self, name: &str) -> f64 {
        match name {
            "xs" => self.xs,
            "sm" => self.sm,
            "lg" => self.lg,
            "xl" => self.xl,
            _ => self.md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub full: f64,
}

impl RadiusScale {
    pub fn step(&self, name: &str) -> f64 {
        match name {
            "sm" => self.sm,
            "lg" => self.lg,
            "full" => self.full,
            _ => self.md,
        }
    }
}

/// One project's design tokens resolved to concrete values.
///
/// Resolution is pure: same tokens always resolve to the same theme, and
/// resolving for one target is not observable from another (the resolved form
/// is target-neutral; backends derive their own style expressions from it).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub colors: ResolvedPalette,
    pub typography: ResolvedTypography,
    pub spacing: SpacingScale,
    pub radius: RadiusScale,
}

const DEFAULT_PRIMARY: Rgba = Rgba::opaque(0x3b, 0x82, 0xf6);
const DEFAULT_SECONDARY: Rgba = Rgba::opaque(0x64, 0x74, 0x8b);
const DEFAULT_ACCENT: Rgba = Rgba::opaque(0x8b, 0x5c, 0xf6);
const DEFAULT_BACKGROUND: Rgba = Rgba::opaque(0xff, 0xff, 0xff);
const DEFAULT_FOREGROUND: Rgba = Rgba::opaque(0x0f, 0x17, 0x2a);
const DEFAULT_SURFACE: Rgba = Rgba::opaque(0xf8, 0xfa, 0xfc);

fn resolve_color(
    token: &str,
    literal: &Option<String>,
    fallback: Rgba,
) -> Result<Rgba, ThemeError> {
    match literal {
        Some(value) => Rgba::parse(value).map_err(|source| ThemeError::InvalidColor {
            token: token.to_string(),
            source,
        }),
        None => Ok(fallback),
    }
}

impl ResolvedTheme {
    pub fn resolve(tokens: &ThemeTokens) -> Result<Self, ThemeError> {
        let colors = ResolvedPalette {
            primary: resolve_color("primary", &tokens.colors.primary, DEFAULT_PRIMARY)?,
            secondary: resolve_color("secondary", &tokens.colors.secondary, DEFAULT_SECONDARY)?,
            accent: resolve_color("accent", &tokens.colors.accent, DEFAULT_ACCENT)?,
            background: resolve_color(
                "background",
                &tokens.colors.background,
                DEFAULT_BACKGROUND,
            )?,
            foreground: resolve_color(
                "foreground",
                &tokens.colors.foreground,
                DEFAULT_FOREGROUND,
            )?,
            surface: resolve_color("surface", &tokens.colors.surface, DEFAULT_SURFACE)?,
        };

        let typo = tokens.typography.clone().unwrap_or_default();
        let base_size = typo.base_size.unwrap_or(16.0);
        let typography = ResolvedTypography {
            font_family: typo.font_family.unwrap_or_else(|| "system-ui".to_string()),
            base_size,
            heading_size: typo.heading_size.unwrap_or(base_size * 1.5),
            small_size: base_size * 0.875,
        };

        let sp = tokens.spacing.clone().unwrap_or_default();
        let spacing = SpacingScale {
            xs: sp.xs.unwrap_or(4.0),
            sm: sp.sm.unwrap_or(8.0),
            md: sp.md.unwrap_or(16.0),
            lg: sp.lg.unwrap_or(24.0),
            xl: sp.xl.unwrap_or(32.0),
        };

        let rad = tokens.border_radius.clone().unwrap_or_default();
        let radius = RadiusScale {
            sm: rad.sm.unwrap_or(4.0),
            md: rad.md.unwrap_or(8.0),
            lg: rad.lg.unwrap_or(16.0),
            full: rad.full.unwrap_or(9999.0),
        };

        Ok(ResolvedTheme {
            colors,
            typography,
            spacing,
            radius,
        })
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self::resolve(&ThemeTokens::default()).expect("default tokens always resolve")
    }
}
