use crate::backend;
use crate::error::GenerateError;
use crate::fallback;
use crate::naming;
use crate::report::{GenerateWarning, MultiExport, TargetExport, TargetRun};
use capsule_registry::{validate, ChildUnit, EmitContext, Registry, ValidationError};
use capsule_schema::{
    ComponentInstance, FileKind, Project, ProjectFile, ProjectManifest, PropValue, SourceFragment,
    Target,
};
use capsule_theme::ResolvedTheme;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

type ValueMap = HashMap<String, IndexMap<String, PropValue>>;

/// The single generation entry point. Holds the frozen registry; everything
/// else is per-call state, so one compiler serves any number of concurrent
/// callers.
pub struct ProjectCompiler {
    registry: Registry,
}

impl ProjectCompiler {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Generate the complete file set for one target.
    ///
    /// Fails fast with every hard validation error before any emitter runs;
    /// never produces a partial manifest.
    #[instrument(skip(self, project), fields(project_id = %project.id, target = %target))]
    pub fn generate(
        &self,
        project: &Project,
        target: Target,
    ) -> Result<TargetExport, GenerateError> {
        let mut errors: Vec<ValidationError> = Vec::new();
        let mut warnings: Vec<GenerateWarning> = Vec::new();
        let mut values: ValueMap = HashMap::new();

        for instance in &project.capsules {
            self.validate_tree(instance, &mut errors, &mut warnings, &mut values);
        }
        if !errors.is_empty() {
            warn!(errors = errors.len(), "project validation failed");
            return Err(GenerateError::ProjectValidation { errors });
        }

        let theme = ResolvedTheme::resolve(&project.theme)?;

        let mut fragments: IndexMap<String, SourceFragment> = IndexMap::new();
        let mut root_units = Vec::with_capacity(project.capsules.len());
        for instance in &project.capsules {
            root_units.push(self.emit_tree(
                instance,
                target,
                &theme,
                &values,
                &mut fragments,
                &mut warnings,
            ));
        }

        let manifest = assemble(target, project.display_name(), &root_units, &theme, &fragments)?;
        info!(
            files = manifest.file_count(),
            bytes = manifest.total_size(),
            warnings = warnings.len(),
            "generated manifest"
        );
        Ok(TargetExport {
            target,
            manifest,
            warnings,
        })
    }

    /// Generate for several targets, each processed independently: one
    /// target's failure never aborts its siblings. Each target's pipeline
    /// shares only the read-only project snapshot and registry, so callers
    /// may fan the loop body out across threads without locking.
    pub fn generate_multi(&self, project: &Project, targets: &[Target]) -> MultiExport {
        let runs = targets
            .iter()
            .map(|&target| TargetRun {
                target,
                outcome: self.generate(project, target),
            })
            .collect();
        MultiExport { runs }
    }

    /// Depth-first validation pass. Hard errors accumulate across the whole
    /// project so a single call reports every problem at once; enum
    /// fallbacks and unknown types become warnings.
    fn validate_tree(
        &self,
        instance: &ComponentInstance,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<GenerateWarning>,
        values: &mut ValueMap,
    ) {
        match self.registry.lookup(&instance.type_id) {
            Some(definition) => {
                let validated = validate(instance, definition);
                for error in &validated.errors {
                    match error {
                        ValidationError::InvalidEnumValue { path, value } => {
                            warnings.push(GenerateWarning::InvalidEnumValue {
                                path: path.clone(),
                                value: value.clone(),
                            });
                        }
                        fatal => errors.push(fatal.clone()),
                    }
                }
                values.insert(instance.id.clone(), validated.values);
            }
            None => {
                // Resolved at generation time by design; the editor may
                // reference types optimistically. The placeholder emitter
                // keeps the export alive.
                warnings.push(GenerateWarning::UnknownComponentType {
                    instance_id: instance.id.clone(),
                    type_id: instance.type_id.clone(),
                });
                values.insert(instance.id.clone(), instance.properties.clone());
            }
        }

        for child in &instance.children {
            self.validate_tree(child, errors, warnings, values);
        }
    }

    /// Post-order emission: children first, so containers reference child
    /// unit names. Fragments are deduplicated by unit name, first seen wins.
    fn emit_tree(
        &self,
        instance: &ComponentInstance,
        target: Target,
        theme: &ResolvedTheme,
        values: &ValueMap,
        fragments: &mut IndexMap<String, SourceFragment>,
        warnings: &mut Vec<GenerateWarning>,
    ) -> ChildUnit {
        let children: Vec<ChildUnit> = instance
            .children
            .iter()
            .map(|child| self.emit_tree(child, target, theme, values, fragments, warnings))
            .collect();

        let empty = IndexMap::new();
        let instance_values = values.get(&instance.id).unwrap_or(&empty);
        let unit_name = naming::unit_name(&instance.type_id, instance_values, &children);

        let ctx = EmitContext {
            instance_id: &instance.id,
            type_id: &instance.type_id,
            unit_name: &unit_name,
            values: instance_values,
            children: &children,
            theme,
        };

        let definition = self.registry.lookup(&instance.type_id);
        let fragment = match definition.and_then(|d| d.emitter(target)) {
            Some(emitter) => emitter(&ctx),
            None => {
                if definition.is_some() {
                    warnings.push(GenerateWarning::MissingEmitter {
                        instance_id: instance.id.clone(),
                        type_id: instance.type_id.clone(),
                        target,
                    });
                }
                fallback::emit(target, &ctx)
            }
        };

        debug!(unit = %unit_name, type_id = %instance.type_id, "emitted fragment");
        if !fragments.contains_key(&fragment.unit_name) {
            fragments.insert(fragment.unit_name.clone(), fragment);
        }

        ChildUnit {
            unit_name,
            type_id: instance.type_id.clone(),
        }
    }
}

/// Merge scaffold and per-fragment files into one manifest, union the
/// dependency list in first-seen order, and reject path collisions.
fn assemble(
    target: Target,
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
    fragments: &IndexMap<String, SourceFragment>,
) -> Result<ProjectManifest, GenerateError> {
    let mut dependencies = backend::base_dependencies(target);
    for fragment in fragments.values() {
        for import in &fragment.imports {
            if !dependencies.contains(import) {
                dependencies.push(import.clone());
            }
        }
    }

    let mut files = backend::scaffold(target, project_name, root_units, theme);
    for fragment in fragments.values() {
        files.push(ProjectFile::new(
            backend::component_path(target, &fragment.unit_name),
            fragment.body.clone(),
            FileKind::Component,
        ));
        files.extend(fragment.target_files.iter().cloned());
    }

    let mut seen: IndexSet<&str> = IndexSet::with_capacity(files.len());
    for file in &files {
        if !seen.insert(file.path.as_str()) {
            return Err(GenerateError::FileConflict {
                path: file.path.clone(),
            });
        }
    }

    Ok(ProjectManifest {
        target,
        files,
        dependencies,
    })
}
