//! Multi-target isolation: each target is processed independently, and one
//! target's assembly failure never disturbs its siblings.

use capsule_compiler::{builtin_registry, GenerateError, GenerateMultiResponse, ProjectCompiler};
use capsule_registry::{CapsuleDefinition, EmitContext, Registry};
use capsule_schema::{
    FileKind, Project, ProjectFile, PropKind, PropertySchema, SourceFragment, Target,
};

fn project(json: &str) -> Project {
    serde_json::from_str(json).expect("Failed to parse project")
}

/// Emitter that contributes an extra file colliding with the React
/// scaffold's package.json — a FileConflict for web-react only
fn conflicting_emitter(ctx: &EmitContext) -> SourceFragment {
    SourceFragment::new(ctx.unit_name, "export function broken() {}\n")
        .with_target_file(ProjectFile::new("package.json", "{}", FileKind::Config))
}

fn registry_with_conflict() -> Registry {
    let mut registry = builtin_registry();
    registry
        .register(
            CapsuleDefinition::new(
                "legacy-widget",
                "Legacy Widget",
                "misc",
                vec![PropertySchema::new("title", PropKind::String)],
            )
            .with_emitter(Target::WebReact, conflicting_emitter),
        )
        .unwrap();
    registry
}

#[test]
fn test_one_failing_target_does_not_abort_siblings() {
    let compiler = ProjectCompiler::new(registry_with_conflict());
    let project = project(
        r#"{
            "id": "proj-iso",
            "capsules": [
                { "id": "w1", "type": "legacy-widget", "props": { "title": "old" } },
                { "id": "b1", "type": "button", "props": { "label": "Go" } }
            ],
            "theme": {},
            "targets": []
        }"#,
    );

    let targets = [Target::IosSwiftui, Target::WebReact, Target::AndroidCompose];
    let multi = compiler.generate_multi(&project, &targets);
    let summary = multi.summary();

    assert_eq!(summary.total_platforms, 3);
    assert_eq!(summary.successful_platforms, 2);
    assert_eq!(summary.failed_platforms, vec!["web-react".to_string()]);

    // The failing target reports the conflict...
    let react_run = multi
        .runs
        .iter()
        .find(|r| r.target == Target::WebReact)
        .unwrap();
    assert!(matches!(
        react_run.outcome,
        Err(GenerateError::FileConflict { ref path }) if path == "package.json"
    ));

    // ...and the sibling manifests are fully intact
    for run in multi.runs.iter().filter(|r| r.target != Target::WebReact) {
        let export = run.outcome.as_ref().expect("sibling target failed");
        assert!(export.manifest.file_count() > 3);
        assert!(export.manifest.total_size() > 0);
    }
}

#[test]
fn test_multi_response_envelope_shape() {
    let compiler = ProjectCompiler::new(registry_with_conflict());
    let project = project(
        r#"{
            "id": "proj-env",
            "capsules": [
                { "id": "w1", "type": "legacy-widget", "props": {} }
            ],
            "theme": {},
            "targets": []
        }"#,
    );

    let multi = compiler.generate_multi(&project, &[Target::WebReact, Target::DesktopTauri]);
    let response = GenerateMultiResponse::from_multi(&multi);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["summary"]["totalPlatforms"], 2);
    assert_eq!(json["summary"]["successfulPlatforms"], 1);
    assert_eq!(json["summary"]["failedPlatforms"][0], "web-react");

    let exports = json["exports"].as_array().unwrap();
    assert_eq!(exports[0]["platform"], "web-react");
    assert_eq!(exports[0]["success"], false);
    assert!(exports[0]["errors"][0]
        .as_str()
        .unwrap()
        .contains("package.json"));

    assert_eq!(exports[1]["platform"], "desktop-tauri");
    assert_eq!(exports[1]["success"], true);
    assert!(exports[1]["fileCount"].as_u64().unwrap() > 0);
}

#[test]
fn test_all_targets_succeed_for_a_clean_project() {
    let compiler = ProjectCompiler::new(builtin_registry());
    let project = project(
        r#"{
            "id": "proj-clean",
            "capsules": [
                { "id": "b1", "type": "button", "props": { "label": "Go" } }
            ],
            "theme": {},
            "targets": []
        }"#,
    );

    let multi = compiler.generate_multi(
        &project,
        &[
            Target::IosSwiftui,
            Target::AndroidCompose,
            Target::WebReact,
            Target::DesktopTauri,
        ],
    );
    let summary = multi.summary();

    assert_eq!(summary.successful_platforms, 4);
    assert!(summary.failed_platforms.is_empty());
    assert!(summary.total_files > 0);
    assert_eq!(
        summary.total_files,
        multi.successes().map(|e| e.manifest.file_count()).sum::<usize>()
    );
}
