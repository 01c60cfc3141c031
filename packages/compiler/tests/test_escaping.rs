//! Escaping safety: property values carrying each target's
//! syntax-terminating characters must come out of generation with the
//! emitted units still syntactically well-formed.

use capsule_compiler::{builtin_registry, ProjectCompiler};
use capsule_schema::{FileKind, Project, ProjectFile, Target};

const HOSTILE_LABEL: &str = r#"He said "quit" \(now) ${user} {brace} </button><script>"#;

fn hostile_project() -> Project {
    let mut project: Project = serde_json::from_str(
        r#"{
            "id": "hostile",
            "capsules": [
                { "id": "b1", "type": "button", "props": { "label": "PLACEHOLDER" } },
                { "id": "t1", "type": "text", "props": { "content": "PLACEHOLDER" } },
                { "id": "i1", "type": "input", "props": { "placeholder": "PLACEHOLDER", "label": "PLACEHOLDER" } }
            ],
            "theme": {},
            "targets": []
        }"#,
    )
    .unwrap();

    for capsule in &mut project.capsules {
        for (_, value) in capsule.properties.iter_mut() {
            *value = HOSTILE_LABEL.into();
        }
    }
    project
}

fn component_files(target: Target) -> Vec<ProjectFile> {
    let compiler = ProjectCompiler::new(builtin_registry());
    let export = compiler
        .generate(&hostile_project(), target)
        .expect("hostile values must not abort generation");
    export
        .manifest
        .files
        .into_iter()
        .filter(|f| f.kind == FileKind::Component)
        .collect()
}

/// Every double quote inside the unit must be either an escaped `\"` or a
/// syntactic delimiter; counting unescaped quotes catches a terminated
/// literal
fn unescaped_quote_count(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut count = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'"' {
            let mut backslashes = 0;
            let mut j = i;
            while j > 0 && bytes[j - 1] == b'\\' {
                backslashes += 1;
                j -= 1;
            }
            if backslashes % 2 == 0 {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_swift_units_keep_literals_closed() {
    for file in component_files(Target::IosSwiftui) {
        // Interpolation must be neutralized
        assert!(
            !file.content.contains(r#" \(now)"#),
            "raw interpolation in {}",
            file.path
        );
        assert_eq!(
            unescaped_quote_count(&file.content) % 2,
            0,
            "odd number of delimiter quotes in {}",
            file.path
        );
    }
}

#[test]
fn test_kotlin_units_keep_templates_inert() {
    for file in component_files(Target::AndroidCompose) {
        assert!(
            !file.content.contains("${user}") || file.content.contains("\\${user}"),
            "live template expression in {}",
            file.path
        );
        assert_eq!(unescaped_quote_count(&file.content) % 2, 0);
    }
}

#[test]
fn test_react_units_keep_jsx_balanced() {
    for file in component_files(Target::WebReact) {
        // JSX text positions must entity-encode markup; string-literal
        // positions keep it inert, so only the button (text child) is
        // checked for raw tags
        if file.path.contains("/Button") {
            assert!(
                !file.content.contains("</button><script>"),
                "raw markup injected into {}",
                file.path
            );
            assert!(file.content.contains("&lt;/button&gt;"));
        }
        let opens = file.content.matches('{').count();
        let closes = file.content.matches('}').count();
        assert_eq!(opens, closes, "unbalanced braces in {}", file.path);
    }
}

#[test]
fn test_tauri_units_keep_literals_closed() {
    for file in component_files(Target::DesktopTauri) {
        assert!(!file.content.contains("innerHTML"));
        assert_eq!(unescaped_quote_count(&file.content) % 2, 0);
    }
}

#[test]
fn test_newlines_in_values_never_break_lines() {
    let mut project = hostile_project();
    project.capsules[0]
        .properties
        .insert("label".to_string(), "line one\nline two".into());

    for target in [
        Target::IosSwiftui,
        Target::AndroidCompose,
        Target::WebReact,
        Target::DesktopTauri,
    ] {
        let compiler = ProjectCompiler::new(builtin_registry());
        let export = compiler.generate(&project, target).unwrap();
        for file in export
            .manifest
            .files
            .iter()
            .filter(|f| f.kind == FileKind::Component)
        {
            // React renders text as JSX children where a literal newline is
            // harmless; every string-literal position must escape it
            if target != Target::WebReact {
                assert!(
                    !file.content.contains("line one\nline two"),
                    "raw newline in a string literal in {}",
                    file.path
                );
            }
        }
    }
}
