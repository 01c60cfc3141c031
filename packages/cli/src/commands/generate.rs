use anyhow::{anyhow, Context, Result};
use capsule_compiler::{builtin_registry, GenerateResponse, ProjectCompiler};
use capsule_schema::{Project, Target};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project file to generate from
    #[arg(default_value = "capsule.json")]
    pub project: String,

    /// Target platform(s); defaults to the project's own target list
    #[arg(short, long)]
    pub target: Vec<String>,

    /// Output directory (one subdirectory per target)
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Print the generation result as JSON instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let project_path = PathBuf::from(cwd).join(&args.project);
    let source = fs::read_to_string(&project_path)
        .with_context(|| format!("Cannot read project file {:?}", project_path))?;
    let project: Project =
        serde_json::from_str(&source).context("Project file is not valid project JSON")?;

    let requested: Vec<String> = if args.target.is_empty() {
        project.targets.clone()
    } else {
        args.target.clone()
    };
    if requested.is_empty() {
        return Err(anyhow!(
            "No targets: pass --target or set \"targets\" in the project file"
        ));
    }
    let targets: Vec<Target> = requested
        .iter()
        .map(|t| t.parse::<Target>().map_err(|e| anyhow!(e)))
        .collect::<Result<_>>()?;

    println!(
        "{}",
        format!("🔨 Generating {} ...", project.display_name())
            .bright_blue()
            .bold()
    );

    let compiler = ProjectCompiler::new(builtin_registry());
    let multi = compiler.generate_multi(&project, &targets);

    if args.stdout {
        let responses: Vec<GenerateResponse> = multi
            .runs
            .iter()
            .map(|run| GenerateResponse::from_outcome(&run.outcome))
            .collect();
        println!("{}", serde_json::to_string_pretty(&responses)?);
        return Ok(());
    }

    let out_root = PathBuf::from(cwd).join(&args.out_dir);
    for run in &multi.runs {
        match &run.outcome {
            Ok(export) => {
                let target_dir = out_root.join(run.target.id());
                for file in &export.manifest.files {
                    let path = target_dir.join(&file.path);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, &file.content)?;
                }
                println!(
                    "  {} {} → {} files, {} bytes",
                    "✓".green(),
                    run.target.id(),
                    export.manifest.file_count(),
                    export.manifest.total_size()
                );
                for warning in &export.warnings {
                    println!("    {} {}", "⚠".yellow(), warning);
                }
            }
            Err(error) => {
                println!("  {} {}", "✗".red(), run.target.id());
                for message in error.messages() {
                    println!("    {}", message.red());
                }
            }
        }
    }

    let summary = multi.summary();
    println!();
    if summary.failed_platforms.is_empty() {
        println!(
            "{} Generated {} targets ({} files) into {}",
            "✅".green(),
            summary.successful_platforms,
            summary.total_files,
            out_root.display()
        );
        Ok(())
    } else if summary.successful_platforms > 0 {
        println!(
            "{} Generated {} of {} targets ({} failed)",
            "⚠️".yellow(),
            summary.successful_platforms,
            summary.total_platforms,
            summary.failed_platforms.join(", ")
        );
        Ok(())
    } else {
        Err(anyhow!("All targets failed"))
    }
}
