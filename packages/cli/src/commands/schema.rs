use anyhow::Result;
use capsule_compiler::builtin_registry;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Print as JSON (the same payload the editor consumes)
    #[arg(long)]
    pub json: bool,
}

pub fn schema(args: SchemaArgs) -> Result<()> {
    let registry = builtin_registry();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry.schema_entries())?);
        return Ok(());
    }

    for definition in registry.definitions() {
        println!(
            "{} {} {}",
            definition.type_id.cyan().bold(),
            definition.display_name,
            format!("[{}]", definition.category).dimmed()
        );
        for prop in &definition.schema {
            let mut details = vec![prop.kind.name().to_string()];
            if prop.required {
                details.push("required".to_string());
            }
            if !prop.options.is_empty() {
                details.push(prop.options.join("|"));
            }
            if let Some(default) = &prop.default {
                details.push(format!("default {}", default.canonical()));
            }
            println!("    {} {}", prop.name, details.join(", ").dimmed());
        }
        println!();
    }
    Ok(())
}
