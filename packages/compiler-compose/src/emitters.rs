//! Per-capsule Compose emitters. Each produces a self-contained Kotlin file
//! with one `@Composable` function; interpolated values go through
//! [`crate::escape`].

use crate::escape::string_literal;
use crate::APP_PACKAGE;
use capsule_registry::EmitContext;
use capsule_schema::SourceFragment;

const MATERIAL3: &str = "androidx.compose.material3:material3";
const COIL: &str = "io.coil-kt:coil-compose";

fn composable_file(unit_name: &str, extra_imports: &[&str], body_lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("package {}.ui.components\n\n", APP_PACKAGE));

    let mut imports = vec![
        "androidx.compose.foundation.layout.*".to_string(),
        "androidx.compose.material3.*".to_string(),
        "androidx.compose.runtime.*".to_string(),
        "androidx.compose.ui.Modifier".to_string(),
        format!("{}.ui.theme.Theme", APP_PACKAGE),
    ];
    imports.extend(extra_imports.iter().map(|i| i.to_string()));
    imports.sort();
    for import in imports {
        out.push_str(&format!("import {}\n", import));
    }

    out.push_str("\n@Composable\n");
    out.push_str(&format!("fun {}() {{\n", unit_name));
    for line in body_lines {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("    {}\n", line));
        }
    }
    out.push_str("}\n");
    out
}

fn fragment(ctx: &EmitContext, extra_imports: &[&str], body_lines: &[String]) -> SourceFragment {
    SourceFragment::new(
        ctx.unit_name,
        composable_file(ctx.unit_name, extra_imports, body_lines),
    )
    .with_imports(&[MATERIAL3])
}

pub fn button(ctx: &EmitContext) -> SourceFragment {
    let label = string_literal(ctx.string("label"));
    let enabled = if ctx.boolean("disabled") { "false" } else { "true" };

    let lines = match ctx.string("variant") {
        "outline" => vec![
            "OutlinedButton(".to_string(),
            "    onClick = {},".to_string(),
            format!("    enabled = {},", enabled),
            "    shape = RoundedCornerShape(Theme.RadiusMd),".to_string(),
            "    border = BorderStroke(1.dp, Theme.Primary)".to_string(),
            ") {".to_string(),
            format!("    Text({}, color = Theme.Primary)", label),
            "}".to_string(),
        ],
        variant => {
            let container = if variant == "secondary" {
                "Theme.Secondary"
            } else {
                "Theme.Primary"
            };
            vec![
                "Button(".to_string(),
                "    onClick = {},".to_string(),
                format!("    enabled = {},", enabled),
                "    shape = RoundedCornerShape(Theme.RadiusMd),".to_string(),
                format!(
                    "    colors = ButtonDefaults.buttonColors(containerColor = {})",
                    container
                ),
                ") {".to_string(),
                format!("    Text({})", label),
                "}".to_string(),
            ]
        }
    };

    let extra: &[&str] = if ctx.string("variant") == "outline" {
        &[
            "androidx.compose.foundation.BorderStroke",
            "androidx.compose.foundation.shape.RoundedCornerShape",
            "androidx.compose.ui.unit.dp",
        ]
    } else {
        &["androidx.compose.foundation.shape.RoundedCornerShape"]
    };
    fragment(ctx, extra, &lines)
}

pub fn text(ctx: &EmitContext) -> SourceFragment {
    let content = string_literal(ctx.string("content"));
    let (size, weight) = match ctx.string("size") {
        "small" => ("Theme.FontSmall", None),
        "heading" => ("Theme.FontHeading", Some("FontWeight.Bold")),
        _ => ("Theme.FontBase", None),
    };

    let mut line = format!(
        "Text({}, fontSize = {}, color = Theme.Foreground",
        content, size
    );
    if let Some(weight) = weight {
        line.push_str(&format!(", fontWeight = {}", weight));
    }
    line.push(')');

    let extra: &[&str] = if weight.is_some() {
        &["androidx.compose.ui.text.font.FontWeight"]
    } else {
        &[]
    };
    fragment(ctx, extra, &[line])
}

pub fn input(ctx: &EmitContext) -> SourceFragment {
    let placeholder = string_literal(ctx.string("placeholder"));
    let label = ctx.string("label");

    let mut lines = vec![
        "var value by remember { mutableStateOf(\"\") }".to_string(),
        String::new(),
        "OutlinedTextField(".to_string(),
        "    value = value,".to_string(),
        "    onValueChange = { value = it },".to_string(),
        format!("    placeholder = {{ Text({}) }},", placeholder),
    ];
    if !label.is_empty() {
        lines.push(format!("    label = {{ Text({}) }},", string_literal(label)));
    }
    if ctx.boolean("secure") {
        lines.push("    visualTransformation = PasswordVisualTransformation(),".to_string());
    }
    lines.push("    singleLine = true".to_string());
    lines.push(")".to_string());

    let extra: &[&str] = if ctx.boolean("secure") {
        &["androidx.compose.ui.text.input.PasswordVisualTransformation"]
    } else {
        &[]
    };
    fragment(ctx, extra, &lines)
}

pub fn image(ctx: &EmitContext) -> SourceFragment {
    let src = string_literal(ctx.string("src"));
    let alt = string_literal(ctx.string("alt"));
    let scale = match ctx.string("fit") {
        "contain" => "ContentScale.Fit",
        "fill" => "ContentScale.FillBounds",
        _ => "ContentScale.Crop",
    };

    let mut modifier = "Modifier".to_string();
    let width = ctx.number("width", 0.0);
    let height = ctx.number("height", 0.0);
    if width > 0.0 {
        modifier.push_str(&format!(".width({}.dp)", crate::style::num(width)));
    }
    if height > 0.0 {
        modifier.push_str(&format!(".height({}.dp)", crate::style::num(height)));
    }
    modifier.push_str(".clip(RoundedCornerShape(Theme.RadiusSm))");

    let lines = vec![
        "AsyncImage(".to_string(),
        format!("    model = {},", src),
        format!("    contentDescription = {},", alt),
        format!("    contentScale = {},", scale),
        format!("    modifier = {}", modifier),
        ")".to_string(),
    ];

    SourceFragment::new(
        ctx.unit_name,
        composable_file(
            ctx.unit_name,
            &[
                "androidx.compose.foundation.shape.RoundedCornerShape",
                "androidx.compose.ui.draw.clip",
                "androidx.compose.ui.layout.ContentScale",
                "androidx.compose.ui.unit.dp",
                "coil.compose.AsyncImage",
            ],
            &lines,
        ),
    )
    .with_imports(&[MATERIAL3, COIL])
}

pub fn stack(ctx: &EmitContext) -> SourceFragment {
    let horizontal = ctx.string("direction") == "horizontal";
    let spacing = spacing_token(ctx.string("spacing"));

    let (container, arrangement, alignment) = if horizontal {
        let align = match ctx.string("align") {
            "center" => "Alignment.CenterVertically",
            "end" => "Alignment.Bottom",
            _ => "Alignment.Top",
        };
        (
            "Row",
            format!("horizontalArrangement = Arrangement.spacedBy({})", spacing),
            format!("verticalAlignment = {}", align),
        )
    } else {
        let align = match ctx.string("align") {
            "center" => "Alignment.CenterHorizontally",
            "end" => "Alignment.End",
            _ => "Alignment.Start",
        };
        (
            "Column",
            format!("verticalArrangement = Arrangement.spacedBy({})", spacing),
            format!("horizontalAlignment = {}", align),
        )
    };

    let mut lines = vec![
        format!("{}(", container),
        format!("    {},", arrangement),
        format!("    {}", alignment),
        ") {".to_string(),
    ];
    for child in ctx.children {
        lines.push(format!("    {}()", child.unit_name));
    }
    lines.push("}".to_string());

    fragment(ctx, &["androidx.compose.ui.Alignment"], &lines)
}

pub fn card(ctx: &EmitContext) -> SourceFragment {
    let padding = spacing_token(ctx.string("padding"));
    let elevation = if ctx.boolean("elevated") {
        "CardDefaults.cardElevation(defaultElevation = 4.dp)"
    } else {
        "CardDefaults.cardElevation(defaultElevation = 0.dp)"
    };

    let mut lines = vec![
        "Card(".to_string(),
        "    shape = RoundedCornerShape(Theme.RadiusLg),".to_string(),
        "    colors = CardDefaults.cardColors(containerColor = Theme.Surface),".to_string(),
        format!("    elevation = {}", elevation),
        ") {".to_string(),
        format!(
            "    Column(Modifier.padding({}), verticalArrangement = Arrangement.spacedBy(Theme.SpacingSm)) {{",
            padding
        ),
    ];
    for child in ctx.children {
        lines.push(format!("        {}()", child.unit_name));
    }
    lines.push("    }".to_string());
    lines.push("}".to_string());

    fragment(
        ctx,
        &[
            "androidx.compose.foundation.shape.RoundedCornerShape",
            "androidx.compose.ui.unit.dp",
        ],
        &lines,
    )
}

pub fn toggle(ctx: &EmitContext) -> SourceFragment {
    let label = string_literal(ctx.string("label"));
    let initial = if ctx.boolean("initial") { "true" } else { "false" };

    let lines = vec![
        format!("var checked by remember {{ mutableStateOf({}) }}", initial),
        String::new(),
        "Row(".to_string(),
        "    horizontalArrangement = Arrangement.spacedBy(Theme.SpacingSm),".to_string(),
        "    verticalAlignment = Alignment.CenterVertically".to_string(),
        ") {".to_string(),
        format!("    Text({}, color = Theme.Foreground)", label),
        "    Switch(".to_string(),
        "        checked = checked,".to_string(),
        "        onCheckedChange = { checked = it },".to_string(),
        "        colors = SwitchDefaults.colors(checkedTrackColor = Theme.Primary)".to_string(),
        "    )".to_string(),
        "}".to_string(),
    ];

    fragment(ctx, &["androidx.compose.ui.Alignment"], &lines)
}

fn spacing_token(name: &str) -> &'static str {
    match name {
        "xs" => "Theme.SpacingXs",
        "sm" => "Theme.SpacingSm",
        "lg" => "Theme.SpacingLg",
        "xl" => "Theme.SpacingXl",
        _ => "Theme.SpacingMd",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_schema::PropValue;
    use capsule_theme::ResolvedTheme;
    use indexmap::IndexMap;

    fn simple_ctx<'a>(
        values: &'a IndexMap<String, PropValue>,
        theme: &'a ResolvedTheme,
    ) -> EmitContext<'a> {
        EmitContext {
            instance_id: "cap-1",
            type_id: "test",
            unit_name: "UnitAb12Cd34",
            values,
            children: &[],
            theme,
        }
    }

    #[test]
    fn test_button_is_a_composable_in_the_app_package() {
        let theme = ResolvedTheme::default();
        let mut values = IndexMap::new();
        values.insert("label".to_string(), PropValue::from("Sign In"));
        let frag = button(&simple_ctx(&values, &theme));

        assert!(frag.body.starts_with("package app.capsule.ui.components\n"));
        assert!(frag.body.contains("@Composable\nfun UnitAb12Cd34()"));
        assert!(frag.body.contains("Text(\"Sign In\")"));
        assert!(frag.imports.contains(&MATERIAL3.to_string()));
    }

    #[test]
    fn test_dollar_in_label_cannot_become_a_template() {
        let theme = ResolvedTheme::default();
        let mut values = IndexMap::new();
        values.insert("label".to_string(), PropValue::from("Pay $amount"));
        let frag = button(&simple_ctx(&values, &theme));

        assert!(frag.body.contains(r#"Text("Pay \$amount")"#));
        assert!(!frag.body.contains("\"Pay $amount\""));
    }

    #[test]
    fn test_image_pulls_in_coil() {
        let theme = ResolvedTheme::default();
        let mut values = IndexMap::new();
        values.insert("src".to_string(), PropValue::from("https://x/y.png"));
        let frag = image(&simple_ctx(&values, &theme));

        assert!(frag.imports.contains(&COIL.to_string()));
        assert!(frag.body.contains("coil.compose.AsyncImage"));
    }
}
