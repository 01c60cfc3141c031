//! Built-in capsule library: the component types the editor ships with,
//! each pairing a property schema with one emitter per framework target.
//! Adding a capsule type means adding a definition here — the project
//! compiler is never touched.

use capsule_compiler_compose::emitters as compose;
use capsule_compiler_react::emitters as react;
use capsule_compiler_swiftui::emitters as swiftui;
use capsule_compiler_tauri::emitters as tauri;
use capsule_registry::{CapsuleDefinition, Registry};
use capsule_schema::{PropKind, PropertySchema, Target};

fn button() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "button",
        "Button",
        "form",
        vec![
            PropertySchema::new("label", PropKind::String).required(),
            PropertySchema::new("variant", PropKind::Enum)
                .with_options(&["primary", "secondary", "outline"])
                .with_default("primary"),
            PropertySchema::new("disabled", PropKind::Boolean).with_default(false),
            PropertySchema::new("onTap", PropKind::Action),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::button)
    .with_emitter(Target::AndroidCompose, compose::button)
    .with_emitter(Target::WebReact, react::button)
    .with_emitter(Target::DesktopTauri, tauri::button)
}

fn text() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "text",
        "Text",
        "content",
        vec![
            PropertySchema::new("content", PropKind::String).required(),
            PropertySchema::new("size", PropKind::Enum)
                .with_options(&["small", "body", "heading"])
                .with_default("body"),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::text)
    .with_emitter(Target::AndroidCompose, compose::text)
    .with_emitter(Target::WebReact, react::text)
    .with_emitter(Target::DesktopTauri, tauri::text)
}

fn input() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "input",
        "Text Input",
        "form",
        vec![
            PropertySchema::new("placeholder", PropKind::String).with_default(""),
            PropertySchema::new("label", PropKind::String).with_default(""),
            PropertySchema::new("secure", PropKind::Boolean).with_default(false),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::input)
    .with_emitter(Target::AndroidCompose, compose::input)
    .with_emitter(Target::WebReact, react::input)
    .with_emitter(Target::DesktopTauri, tauri::input)
}

fn image() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "image",
        "Image",
        "content",
        vec![
            PropertySchema::new("src", PropKind::String).required(),
            PropertySchema::new("alt", PropKind::String).with_default(""),
            PropertySchema::new("width", PropKind::Number),
            PropertySchema::new("height", PropKind::Number),
            PropertySchema::new("fit", PropKind::Enum)
                .with_options(&["cover", "contain", "fill"])
                .with_default("cover"),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::image)
    .with_emitter(Target::AndroidCompose, compose::image)
    .with_emitter(Target::WebReact, react::image)
    .with_emitter(Target::DesktopTauri, tauri::image)
}

fn stack() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "stack",
        "Stack",
        "layout",
        vec![
            PropertySchema::new("direction", PropKind::Enum)
                .with_options(&["vertical", "horizontal"])
                .with_default("vertical"),
            PropertySchema::new("spacing", PropKind::Enum)
                .with_options(&["xs", "sm", "md", "lg", "xl"])
                .with_default("md"),
            PropertySchema::new("align", PropKind::Enum)
                .with_options(&["start", "center", "end"])
                .with_default("start"),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::stack)
    .with_emitter(Target::AndroidCompose, compose::stack)
    .with_emitter(Target::WebReact, react::stack)
    .with_emitter(Target::DesktopTauri, tauri::stack)
}

fn card() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "card",
        "Card",
        "layout",
        vec![
            PropertySchema::new("padding", PropKind::Enum)
                .with_options(&["xs", "sm", "md", "lg", "xl"])
                .with_default("md"),
            PropertySchema::new("elevated", PropKind::Boolean).with_default(true),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::card)
    .with_emitter(Target::AndroidCompose, compose::card)
    .with_emitter(Target::WebReact, react::card)
    .with_emitter(Target::DesktopTauri, tauri::card)
}

fn toggle() -> CapsuleDefinition {
    CapsuleDefinition::new(
        "toggle",
        "Toggle",
        "form",
        vec![
            PropertySchema::new("label", PropKind::String).required(),
            PropertySchema::new("initial", PropKind::Boolean).with_default(false),
        ],
    )
    .with_emitter(Target::IosSwiftui, swiftui::toggle)
    .with_emitter(Target::AndroidCompose, compose::toggle)
    .with_emitter(Target::WebReact, react::toggle)
    .with_emitter(Target::DesktopTauri, tauri::toggle)
}

/// Build the frozen registry of built-in capsule types
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    for definition in [button(), text(), input(), image(), stack(), card(), toggle()] {
        registry
            .register(definition)
            .expect("built-in type ids are unique");
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 7);
        for type_id in ["button", "text", "input", "image", "stack", "card", "toggle"] {
            assert!(registry.lookup(type_id).is_some(), "missing {}", type_id);
        }
    }

    #[test]
    fn test_every_builtin_covers_the_framework_targets() {
        let registry = builtin_registry();
        let frameworks = [
            Target::IosSwiftui,
            Target::AndroidCompose,
            Target::WebReact,
            Target::DesktopTauri,
        ];
        for definition in registry.definitions() {
            for target in frameworks {
                assert!(
                    definition.emitter(target).is_some(),
                    "{} has no {} emitter",
                    definition.type_id,
                    target
                );
            }
        }
    }

    #[test]
    fn test_secondary_targets_rely_on_fallback() {
        let registry = builtin_registry();
        let button = registry.lookup("button").unwrap();
        assert!(button.emitter(Target::IosUikit).is_none());
        assert!(button.emitter(Target::DesktopElectron).is_none());
    }
}
