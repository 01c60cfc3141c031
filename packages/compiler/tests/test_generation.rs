//! End-to-end generation tests against the built-in capsule library.

use capsule_compiler::{builtin_registry, GenerateError, GenerateWarning, ProjectCompiler};
use capsule_registry::ValidationError;
use capsule_schema::{FileKind, Project, Target};

fn compiler() -> ProjectCompiler {
    ProjectCompiler::new(builtin_registry())
}

fn project(json: &str) -> Project {
    serde_json::from_str(json).expect("Failed to parse project")
}

#[test]
fn test_end_to_end_react_button() {
    let project = project(
        r##"{
            "id": "proj-1",
            "capsules": [
                { "id": "cap-1", "type": "button", "props": { "label": "Sign In" } }
            ],
            "theme": { "colors": { "primary": "#3b82f6" } },
            "targets": ["web-react"]
        }"##,
    );

    let export = compiler()
        .generate(&project, Target::WebReact)
        .expect("generation failed");

    assert!(export.warnings.is_empty());

    // Exactly one button source unit
    let components: Vec<_> = export
        .manifest
        .files
        .iter()
        .filter(|f| f.kind == FileKind::Component)
        .collect();
    assert_eq!(components.len(), 1);
    assert!(components[0].path.starts_with("src/components/Button"));
    assert!(components[0].content.contains("Sign In"));

    // primary resolves to the project token
    let theme = export.manifest.file("src/theme.css").unwrap();
    assert!(theme.content.contains("--cap-color-primary: #3b82f6;"));

    // The entry references the unit
    let unit_name = components[0]
        .path
        .trim_start_matches("src/components/")
        .trim_end_matches(".jsx");
    let app = export.manifest.file("src/App.jsx").unwrap();
    assert!(app.content.contains(&format!("<{} />", unit_name)));

    assert!(export.manifest.dependencies.contains(&"react".to_string()));
}

#[test]
fn test_validation_failure_reports_every_error() {
    let project = project(
        r#"{
            "id": "proj-2",
            "capsules": [
                { "id": "cap-1", "type": "button", "props": {} },
                { "id": "cap-2", "type": "text", "props": { "content": 42 } },
                { "id": "cap-3", "type": "toggle", "props": { "label": "Ok" } }
            ],
            "theme": {},
            "targets": ["web-react"]
        }"#,
    );

    let err = compiler()
        .generate(&project, Target::WebReact)
        .unwrap_err();

    match err {
        GenerateError::ProjectValidation { errors } => {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().any(|e| matches!(
                e,
                ValidationError::MissingRequiredProperty { path } if path == "cap-1.label"
            )));
            assert!(errors.iter().any(|e| matches!(
                e,
                ValidationError::TypeMismatch { path, .. } if path == "cap-2.content"
            )));
        }
        other => panic!("expected ProjectValidation, got {:?}", other),
    }
}

#[test]
fn test_unknown_type_degrades_to_placeholder() {
    let project = project(
        r#"{
            "id": "proj-3",
            "capsules": [
                { "id": "cap-1", "type": "carousel", "props": { "slides": 3 } },
                { "id": "cap-2", "type": "button", "props": { "label": "Next" } }
            ],
            "theme": {},
            "targets": ["web-react"]
        }"#,
    );

    let export = compiler()
        .generate(&project, Target::WebReact)
        .expect("placeholder fallback must not abort generation");

    assert_eq!(
        export.warnings,
        vec![GenerateWarning::UnknownComponentType {
            instance_id: "cap-1".to_string(),
            type_id: "carousel".to_string(),
        }]
    );

    let placeholder = export
        .manifest
        .files
        .iter()
        .find(|f| f.content.contains("Unsupported component: carousel"))
        .expect("missing placeholder unit");
    assert_eq!(placeholder.kind, FileKind::Component);
}

#[test]
fn test_repeated_instances_share_one_unit() {
    let project = project(
        r#"{
            "id": "proj-4",
            "capsules": [
                { "id": "c1", "type": "button", "props": { "label": "Buy" } },
                { "id": "c2", "type": "button", "props": { "label": "Buy" } },
                { "id": "c3", "type": "button", "props": { "label": "Buy" } },
                { "id": "c4", "type": "button", "props": { "label": "Buy" } },
                { "id": "c5", "type": "button", "props": { "label": "Buy" } }
            ],
            "theme": {},
            "targets": ["web-react"]
        }"#,
    );

    let export = compiler().generate(&project, Target::WebReact).unwrap();

    // One shared definition...
    let components: Vec<_> = export
        .manifest
        .files
        .iter()
        .filter(|f| f.kind == FileKind::Component)
        .collect();
    assert_eq!(components.len(), 1);

    // ...and five usage references in the entry
    let unit_name = components[0]
        .path
        .trim_start_matches("src/components/")
        .trim_end_matches(".jsx");
    let app = export.manifest.file("src/App.jsx").unwrap();
    assert_eq!(
        app.content.matches(&format!("<{} />", unit_name)).count(),
        5
    );
}

#[test]
fn test_distinct_values_produce_distinct_units() {
    let project = project(
        r#"{
            "id": "proj-5",
            "capsules": [
                { "id": "c1", "type": "button", "props": { "label": "Buy" } },
                { "id": "c2", "type": "button", "props": { "label": "Sell" } }
            ],
            "theme": {},
            "targets": ["web-react"]
        }"#,
    );

    let export = compiler().generate(&project, Target::WebReact).unwrap();
    let components: Vec<_> = export
        .manifest
        .files
        .iter()
        .filter(|f| f.kind == FileKind::Component)
        .collect();
    assert_eq!(components.len(), 2);
}

#[test]
fn test_nested_tree_emits_children_before_parents() {
    let project = project(
        r#"{
            "id": "proj-6",
            "capsules": [
                {
                    "id": "root",
                    "type": "card",
                    "props": {},
                    "children": [
                        { "id": "title", "type": "text", "props": { "content": "Welcome", "size": "heading" } },
                        { "id": "cta", "type": "button", "props": { "label": "Start" } }
                    ]
                }
            ],
            "theme": {},
            "targets": ["ios-swiftui"]
        }"#,
    );

    let export = compiler().generate(&project, Target::IosSwiftui).unwrap();

    let components: Vec<_> = export
        .manifest
        .files
        .iter()
        .filter(|f| f.kind == FileKind::Component)
        .collect();
    assert_eq!(components.len(), 3);

    // The card's body references both child units
    let card = components
        .iter()
        .find(|f| f.path.contains("/Card"))
        .expect("card unit missing");
    let text_unit = components
        .iter()
        .find(|f| f.path.contains("/Text"))
        .unwrap();
    let button_unit = components
        .iter()
        .find(|f| f.path.contains("/Button"))
        .unwrap();

    let text_name = text_unit
        .path
        .trim_start_matches("Sources/Components/")
        .trim_end_matches(".swift");
    let button_name = button_unit
        .path
        .trim_start_matches("Sources/Components/")
        .trim_end_matches(".swift");
    assert!(card.content.contains(&format!("{}()", text_name)));
    assert!(card.content.contains(&format!("{}()", button_name)));

    // Entry references only the root unit
    let entry = export.manifest.file("Sources/ContentView.swift").unwrap();
    assert!(!entry.content.contains(&format!("{}()", text_name)));
}

#[test]
fn test_invalid_enum_value_is_a_warning_not_an_error() {
    let project = project(
        r#"{
            "id": "proj-7",
            "capsules": [
                { "id": "c1", "type": "button", "props": { "label": "Go", "variant": "jumbo" } }
            ],
            "theme": {},
            "targets": ["web-react"]
        }"#,
    );

    let export = compiler()
        .generate(&project, Target::WebReact)
        .expect("enum fallback must not abort generation");

    assert_eq!(
        export.warnings,
        vec![GenerateWarning::InvalidEnumValue {
            path: "c1.variant".to_string(),
            value: "jumbo".to_string(),
        }]
    );

    // The schema default was substituted
    let button = export
        .manifest
        .files
        .iter()
        .find(|f| f.kind == FileKind::Component)
        .unwrap();
    assert!(button.content.contains("cap-button--primary"));
}

#[test]
fn test_compose_manifest_pulls_image_dependency() {
    let project = project(
        r#"{
            "id": "proj-8",
            "capsules": [
                { "id": "c1", "type": "image", "props": { "src": "https://cdn/x.png" } }
            ],
            "theme": {},
            "targets": ["android-compose"]
        }"#,
    );

    let export = compiler().generate(&project, Target::AndroidCompose).unwrap();
    assert!(export
        .manifest
        .dependencies
        .contains(&"io.coil-kt:coil-compose".to_string()));
    assert!(export
        .manifest
        .dependencies
        .contains(&"androidx.compose.material3:material3".to_string()));
}

#[test]
fn test_secondary_target_exports_with_warnings() {
    let project = project(
        r#"{
            "id": "proj-9",
            "capsules": [
                { "id": "c1", "type": "button", "props": { "label": "Go" } }
            ],
            "theme": {},
            "targets": ["ios-uikit"]
        }"#,
    );

    let export = compiler().generate(&project, Target::IosUikit).unwrap();

    assert_eq!(export.warnings.len(), 1);
    assert!(matches!(
        export.warnings[0],
        GenerateWarning::MissingEmitter {
            target: Target::IosUikit,
            ..
        }
    ));
    assert!(export
        .manifest
        .files
        .iter()
        .any(|f| f.content.contains("Unsupported component: button")));
}

#[test]
fn test_schema_entries_serialize_for_the_editor() {
    let registry = builtin_registry();
    let json = serde_json::to_value(registry.schema_entries()).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["typeId"], "button");
    assert_eq!(entries[0]["displayName"], "Button");
    assert_eq!(entries[0]["schema"][0]["name"], "label");
    assert_eq!(entries[0]["schema"][0]["required"], true);
}
