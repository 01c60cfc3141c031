use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// File to create
    #[arg(default_value = "capsule.json")]
    pub path: String,
}

const STARTER_PROJECT: &str = r##"{
  "id": "my-app",
  "name": "My App",
  "capsules": [
    {
      "id": "welcome-card",
      "type": "card",
      "props": { "padding": "lg" },
      "children": [
        { "id": "title", "type": "text", "props": { "content": "Welcome", "size": "heading" } },
        { "id": "cta", "type": "button", "props": { "label": "Get Started" } }
      ]
    }
  ],
  "theme": {
    "colors": { "primary": "#3b82f6" }
  },
  "targets": ["web-react", "ios-swiftui"]
}
"##;

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.path);
    if path.exists() {
        return Err(anyhow!("{:?} already exists", path));
    }

    fs::write(&path, STARTER_PROJECT)?;

    println!(
        "{} Created {}",
        "✅".green(),
        path.display().to_string().bold()
    );
    println!("Run {} to generate source code", "capsule generate".cyan());
    Ok(())
}
