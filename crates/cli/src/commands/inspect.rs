use anyhow::{Context, Result};
use exprevo_sim::simulation::Configuration;
use std::path::Path;

use crate::printing::print_parameters;

pub fn show_configuration(config_path: &Path) -> Result<()> {
    println!("🧬 Exprevo - Configuration");
    println!("============================================");

    let text = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: Configuration = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", config_path.display()))?;

    print_parameters(&config);

    println!(
        "\n💡 Use 'exprevo run -c {}' to execute this simulation",
        config_path.display()
    );

    Ok(())
}
