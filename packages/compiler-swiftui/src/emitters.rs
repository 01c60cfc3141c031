//! Per-capsule SwiftUI emitters. Each produces a self-contained `View`
//! struct; interpolated values go through [`crate::escape`].

use crate::escape::string_literal;
use capsule_registry::EmitContext;
use capsule_schema::SourceFragment;

fn view_struct(unit_name: &str, body_lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str("import SwiftUI\n\n");
    out.push_str(&format!("struct {}: View {{\n", unit_name));
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

fn fragment(ctx: &EmitContext, body_lines: &[String]) -> SourceFragment {
    SourceFragment::new(ctx.unit_name, view_struct(ctx.unit_name, body_lines))
        .with_imports(&["SwiftUI"])
}

pub fn button(ctx: &EmitContext) -> SourceFragment {
    let label = string_literal(ctx.string("label"));
    let variant = ctx.string("variant");

    let (background, foreground) = match variant {
        "secondary" => ("Theme.secondary", "Theme.background"),
        "outline" => ("Color.clear", "Theme.primary"),
        _ => ("Theme.primary", "Theme.background"),
    };

    let mut lines = vec![
        "var body: some View {".to_string(),
        "    Button(action: {}) {".to_string(),
        format!("        Text({})", label),
        "            .font(.system(size: Theme.fontBase, weight: .semibold))".to_string(),
        "    }".to_string(),
        "    .buttonStyle(.plain)".to_string(),
        "    .padding(.vertical, Theme.spacingSm)".to_string(),
        "    .padding(.horizontal, Theme.spacingMd)".to_string(),
        format!("    .background({})", background),
        format!("    .foregroundColor({})", foreground),
        "    .cornerRadius(Theme.radiusMd)".to_string(),
    ];
    if variant == "outline" {
        lines.push("    .overlay(".to_string());
        lines.push(
            "        RoundedRectangle(cornerRadius: Theme.radiusMd).stroke(Theme.primary, lineWidth: 1)"
                .to_string(),
        );
        lines.push("    )".to_string());
    }
    if ctx.boolean("disabled") {
        lines.push("    .disabled(true)".to_string());
        lines.push("    .opacity(0.5)".to_string());
    }
    lines.push("}".to_string());

    fragment(ctx, &lines)
}

pub fn text(ctx: &EmitContext) -> SourceFragment {
    let content = string_literal(ctx.string("content"));

    let font = match ctx.string("size") {
        "small" => "Theme.fontSmall",
        "heading" => "Theme.fontHeading",
        _ => "Theme.fontBase",
    };
    let weight = if ctx.string("size") == "heading" {
        ", weight: .bold"
    } else {
        ""
    };

    let lines = vec![
        "var body: some View {".to_string(),
        format!("    Text({})", content),
        format!("        .font(.system(size: {}{}))", font, weight),
        "        .foregroundColor(Theme.foreground)".to_string(),
        "}".to_string(),
    ];

    fragment(ctx, &lines)
}

pub fn input(ctx: &EmitContext) -> SourceFragment {
    let placeholder = string_literal(ctx.string("placeholder"));
    let field = if ctx.boolean("secure") {
        format!("SecureField({}, text: $value)", placeholder)
    } else {
        format!("TextField({}, text: $value)", placeholder)
    };

    let mut lines = vec![
        "@State private var value: String = \"\"".to_string(),
        String::new(),
        "var body: some View {".to_string(),
    ];

    let label = ctx.string("label");
    if label.is_empty() {
        lines.push(format!("    {}", field));
        lines.push("        .textFieldStyle(.roundedBorder)".to_string());
    } else {
        lines.push("    VStack(alignment: .leading, spacing: Theme.spacingXs) {".to_string());
        lines.push(format!("        Text({})", string_literal(label)));
        lines.push("            .font(.system(size: Theme.fontSmall, weight: .medium))".to_string());
        lines.push("            .foregroundColor(Theme.secondary)".to_string());
        lines.push(format!("        {}", field));
        lines.push("            .textFieldStyle(.roundedBorder)".to_string());
        lines.push("    }".to_string());
    }
    lines.push("}".to_string());

    fragment(ctx, &lines)
}

pub fn image(ctx: &EmitContext) -> SourceFragment {
    let src = string_literal(ctx.string("src"));
    let content_mode = match ctx.string("fit") {
        "contain" => ".fit",
        _ => ".fill",
    };

    let mut lines = vec![
        "var body: some View {".to_string(),
        format!("    AsyncImage(url: URL(string: {})) {{ image in", src),
        "        image".to_string(),
        "            .resizable()".to_string(),
        format!("            .aspectRatio(contentMode: {})", content_mode),
        "    } placeholder: {".to_string(),
        "        Theme.surface".to_string(),
        "    }".to_string(),
    ];

    let width = ctx.number("width", 0.0);
    let height = ctx.number("height", 0.0);
    if width > 0.0 || height > 0.0 {
        let mut frame = Vec::new();
        if width > 0.0 {
            frame.push(format!("width: {}", crate::style::num(width)));
        }
        if height > 0.0 {
            frame.push(format!("height: {}", crate::style::num(height)));
        }
        lines.push(format!("    .frame({})", frame.join(", ")));
    }
    lines.push("    .clipped()".to_string());
    lines.push("    .cornerRadius(Theme.radiusSm)".to_string());
    lines.push("}".to_string());

    fragment(ctx, &lines)
}

pub fn stack(ctx: &EmitContext) -> SourceFragment {
    let horizontal = ctx.string("direction") == "horizontal";
    let spacing = spacing_token(ctx.string("spacing"));
    let alignment = if horizontal {
        match ctx.string("align") {
            "center" => ".center",
            "end" => ".bottom",
            _ => ".top",
        }
    } else {
        match ctx.string("align") {
            "center" => ".center",
            "end" => ".trailing",
            _ => ".leading",
        }
    };
    let container = if horizontal { "HStack" } else { "VStack" };

    let mut lines = vec![
        "var body: some View {".to_string(),
        format!(
            "    {}(alignment: {}, spacing: {}) {{",
            container, alignment, spacing
        ),
    ];
    for child in ctx.children {
        lines.push(format!("        {}()", child.unit_name));
    }
    lines.push("    }".to_string());
    lines.push("}".to_string());

    fragment(ctx, &lines)
}

pub fn card(ctx: &EmitContext) -> SourceFragment {
    let padding = spacing_token(ctx.string("padding"));

    let mut lines = vec![
        "var body: some View {".to_string(),
        "    VStack(alignment: .leading, spacing: Theme.spacingSm) {".to_string(),
    ];
    for child in ctx.children {
        lines.push(format!("        {}()", child.unit_name));
    }
    lines.push("    }".to_string());
    lines.push(format!("    .padding({})", padding));
    lines.push("    .frame(maxWidth: .infinity, alignment: .leading)".to_string());
    lines.push("    .background(Theme.surface)".to_string());
    lines.push("    .cornerRadius(Theme.radiusLg)".to_string());
    if ctx.boolean("elevated") {
        lines.push(
            "    .shadow(color: .black.opacity(0.1), radius: 8, x: 0, y: 2)".to_string(),
        );
    }
    lines.push("}".to_string());

    fragment(ctx, &lines)
}

pub fn toggle(ctx: &EmitContext) -> SourceFragment {
    let label = string_literal(ctx.string("label"));
    let initial = if ctx.boolean("initial") { "true" } else { "false" };

    let lines = vec![
        format!("@State private var isOn: Bool = {}", initial),
        String::new(),
        "var body: some View {".to_string(),
        format!("    Toggle({}, isOn: $isOn)", label),
        "        .tint(Theme.primary)".to_string(),
        "}".to_string(),
    ];

    fragment(ctx, &lines)
}

fn spacing_token(name: &str) -> &'static str {
    match name {
        "xs" => "Theme.spacingXs",
        "sm" => "Theme.spacingSm",
        "lg" => "Theme.spacingLg",
        "xl" => "Theme.spacingXl",
        _ => "Theme.spacingMd",
    }
}
