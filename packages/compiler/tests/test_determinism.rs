//! Determinism tests: for a fixed (project, target) pair, repeated
//! generation must produce byte-identical manifests. No map iteration order,
//! ID generation or environment state may leak into output.

use capsule_compiler::{builtin_registry, ProjectCompiler};
use capsule_schema::{Project, ProjectManifest, Target};

fn rich_project() -> Project {
    serde_json::from_str(
        r##"{
            "id": "determinism-fixture",
            "name": "Determinism Fixture",
            "capsules": [
                {
                    "id": "hero",
                    "type": "card",
                    "props": { "padding": "lg", "elevated": true },
                    "children": [
                        { "id": "title", "type": "text", "props": { "content": "Welcome back", "size": "heading" } },
                        { "id": "subtitle", "type": "text", "props": { "content": "Good to see you", "size": "small" } },
                        {
                            "id": "form",
                            "type": "stack",
                            "props": { "direction": "vertical", "spacing": "sm" },
                            "children": [
                                { "id": "email", "type": "input", "props": { "label": "Email", "placeholder": "you@example.com" } },
                                { "id": "password", "type": "input", "props": { "label": "Password", "secure": true } },
                                { "id": "submit", "type": "button", "props": { "label": "Sign In" } }
                            ]
                        }
                    ]
                },
                { "id": "avatar", "type": "image", "props": { "src": "https://cdn/a.png", "width": 64, "height": 64 } },
                { "id": "remember", "type": "toggle", "props": { "label": "Remember me", "initial": true } },
                { "id": "mystery", "type": "carousel", "props": { "slides": 3 } }
            ],
            "theme": {
                "colors": { "primary": "#0ea5e9", "surface": "#f1f5f9" },
                "typography": { "fontFamily": "Inter", "baseSize": 15 },
                "spacing": { "md": 14 },
                "borderRadius": { "lg": 20 }
            },
            "targets": []
        }"##,
    )
    .expect("Failed to parse fixture")
}

fn generate(target: Target) -> ProjectManifest {
    let compiler = ProjectCompiler::new(builtin_registry());
    compiler
        .generate(&rich_project(), target)
        .expect("generation failed")
        .manifest
}

#[test]
fn test_generation_is_byte_identical_across_invocations() {
    for target in Target::ALL {
        let first = generate(target);
        for run in 1..5 {
            let next = generate(target);
            assert_eq!(
                first, next,
                "manifest for {} differs between run 0 and run {}",
                target, run
            );
        }
    }
}

#[test]
fn test_fresh_registry_instances_do_not_change_output() {
    // The registry is construct-then-freeze; building it twice must not be
    // observable in generated output
    let a = ProjectCompiler::new(builtin_registry())
        .generate(&rich_project(), Target::AndroidCompose)
        .unwrap()
        .manifest;
    let b = ProjectCompiler::new(builtin_registry())
        .generate(&rich_project(), Target::AndroidCompose)
        .unwrap()
        .manifest;
    assert_eq!(a, b);
}

#[test]
fn test_file_order_is_stable_and_scaffold_first() {
    let manifest = generate(Target::WebReact);
    let paths: Vec<&str> = manifest.files.iter().map(|f| f.path.as_str()).collect();

    // Scaffold files lead, component units follow in encounter order
    assert_eq!(paths[0], "package.json");
    assert!(paths
        .iter()
        .position(|p| p.starts_with("src/components/"))
        .unwrap() > 4);
}

#[test]
fn test_multi_target_runs_preserve_request_order() {
    let compiler = ProjectCompiler::new(builtin_registry());
    let targets = [Target::DesktopTauri, Target::IosSwiftui, Target::WebReact];
    let multi = compiler.generate_multi(&rich_project(), &targets);

    let run_targets: Vec<Target> = multi.runs.iter().map(|r| r.target).collect();
    assert_eq!(run_targets, targets);
}
