use serde::{Deserialize, Serialize};

/// Abstract design-token set for one project, as persisted by the editor.
/// Every field is optional on the wire; the theme resolver supplies defaults
/// so emitters never observe an absent token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyTokens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingTokens>,
    #[serde(
        default,
        rename = "borderRadius",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<RadiusTokens>,
}

/// Palette tokens, hex color literals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    #[serde(
        default,
        rename = "fontFamily",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_family: Option<String>,
    #[serde(default, rename = "baseSize", skip_serializing_if = "Option::is_none")]
    pub base_size: Option<f64>,
    #[serde(
        default,
        rename = "headingSize",
        skip_serializing_if = "Option::is_none"
    )]
    pub heading_size: Option<f64>,
}

/// Spacing scale in logical pixels / points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
}

/// Corner-radius scale in logical pixels / points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<f64>,
}
