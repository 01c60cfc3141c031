//! CSS rendering of the resolved theme, shared by the web-technology
//! backends (React, Tauri). Tokens become custom properties on `:root`;
//! component classes reference only those properties.

use crate::resolved::ResolvedTheme;

fn px(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `:root` custom-property block plus base body rules
pub fn css_variables(theme: &ResolvedTheme) -> String {
    let c = &theme.colors;
    let s = &theme.spacing;
    let r = &theme.radius;
    let t = &theme.typography;

    format!(
        r#":root {{
  --cap-color-primary: {primary};
  --cap-color-secondary: {secondary};
  --cap-color-accent: {accent};
  --cap-color-background: {background};
  --cap-color-foreground: {foreground};
  --cap-color-surface: {surface};

  --cap-spacing-xs: {sxs}px;
  --cap-spacing-sm: {ssm}px;
  --cap-spacing-md: {smd}px;
  --cap-spacing-lg: {slg}px;
  --cap-spacing-xl: {sxl}px;

  --cap-radius-sm: {rsm}px;
  --cap-radius-md: {rmd}px;
  --cap-radius-lg: {rlg}px;
  --cap-radius-full: {rfull}px;

  --cap-font-family: {font};
  --cap-font-small: {fsmall}px;
  --cap-font-base: {fbase}px;
  --cap-font-heading: {fheading}px;
}}

body {{
  margin: 0;
  background: var(--cap-color-background);
  color: var(--cap-color-foreground);
  font-family: var(--cap-font-family);
  font-size: var(--cap-font-base);
}}
"#,
        primary = c.primary.hex(),
        secondary = c.secondary.hex(),
        accent = c.accent.hex(),
        background = c.background.hex(),
        foreground = c.foreground.hex(),
        surface = c.surface.hex(),
        sxs = px(s.xs),
        ssm = px(s.sm),
        smd = px(s.md),
        slg = px(s.lg),
        sxl = px(s.xl),
        rsm = px(r.sm),
        rmd = px(r.md),
        rlg = px(r.lg),
        rfull = px(r.full),
        font = t.font_family,
        fsmall = px(t.small_size),
        fbase = px(t.base_size),
        fheading = px(t.heading_size),
    )
}

/// Class rules for every built-in capsule, keyed entirely off the custom
/// properties above
pub fn component_classes() -> &'static str {
    r#".cap-app {
  display: flex;
  flex-direction: column;
  gap: var(--cap-spacing-lg);
  padding: var(--cap-spacing-md);
}

.cap-button {
  border: none;
  cursor: pointer;
  font-size: var(--cap-font-base);
  font-weight: 600;
  padding: var(--cap-spacing-sm) var(--cap-spacing-md);
  border-radius: var(--cap-radius-md);
}
.cap-button--primary {
  background: var(--cap-color-primary);
  color: var(--cap-color-background);
}
.cap-button--secondary {
  background: var(--cap-color-secondary);
  color: var(--cap-color-background);
}
.cap-button--outline {
  background: transparent;
  color: var(--cap-color-primary);
  border: 1px solid var(--cap-color-primary);
}
.cap-button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.cap-text {
  margin: 0;
}
.cap-text--small {
  font-size: var(--cap-font-small);
}
.cap-text--heading {
  font-size: var(--cap-font-heading);
  font-weight: 700;
}

.cap-field {
  display: flex;
  flex-direction: column;
  gap: var(--cap-spacing-xs);
}
.cap-field__label {
  font-size: var(--cap-font-small);
  font-weight: 500;
  color: var(--cap-color-secondary);
}
.cap-input {
  font-size: var(--cap-font-base);
  padding: var(--cap-spacing-sm);
  border: 1px solid var(--cap-color-secondary);
  border-radius: var(--cap-radius-sm);
}

.cap-image {
  border-radius: var(--cap-radius-sm);
  max-width: 100%;
}
.cap-image--cover { object-fit: cover; }
.cap-image--contain { object-fit: contain; }
.cap-image--fill { object-fit: fill; }

.cap-stack { display: flex; }
.cap-stack--vertical { flex-direction: column; }
.cap-stack--horizontal { flex-direction: row; }
.cap-stack--spacing-xs { gap: var(--cap-spacing-xs); }
.cap-stack--spacing-sm { gap: var(--cap-spacing-sm); }
.cap-stack--spacing-md { gap: var(--cap-spacing-md); }
.cap-stack--spacing-lg { gap: var(--cap-spacing-lg); }
.cap-stack--spacing-xl { gap: var(--cap-spacing-xl); }
.cap-stack--align-start { align-items: flex-start; }
.cap-stack--align-center { align-items: center; }
.cap-stack--align-end { align-items: flex-end; }

.cap-card {
  display: flex;
  flex-direction: column;
  gap: var(--cap-spacing-sm);
  background: var(--cap-color-surface);
  border-radius: var(--cap-radius-lg);
}
.cap-card--padding-xs { padding: var(--cap-spacing-xs); }
.cap-card--padding-sm { padding: var(--cap-spacing-sm); }
.cap-card--padding-md { padding: var(--cap-spacing-md); }
.cap-card--padding-lg { padding: var(--cap-spacing-lg); }
.cap-card--padding-xl { padding: var(--cap-spacing-xl); }
.cap-card--elevated {
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}

.cap-toggle {
  display: inline-flex;
  align-items: center;
  gap: var(--cap-spacing-sm);
}
.cap-toggle input {
  accent-color: var(--cap-color-primary);
}

.cap-placeholder {
  border: 1px dashed var(--cap-color-secondary);
  border-radius: var(--cap-radius-sm);
  color: var(--cap-color-secondary);
  font-size: var(--cap-font-small);
  padding: var(--cap-spacing-sm);
}
"#
}

/// Complete stylesheet for a web-technology target
pub fn stylesheet(theme: &ResolvedTheme) -> String {
    format!("{}\n{}", css_variables(theme), component_classes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_carry_resolved_palette() {
        let css = css_variables(&ResolvedTheme::default());
        assert!(css.contains("--cap-color-primary: #3b82f6;"));
        assert!(css.contains("--cap-spacing-md: 16px;"));
        assert!(css.contains("--cap-radius-full: 9999px;"));
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let theme = ResolvedTheme::default();
        assert_eq!(stylesheet(&theme), stylesheet(&theme));
    }

    #[test]
    fn test_component_classes_only_reference_variables() {
        // No raw hex colors outside the :root block
        assert!(!component_classes().contains('#'));
    }
}
