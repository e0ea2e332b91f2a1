use crate::config::{Config, IdStrategy, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use webshape_editor::PointerEvent;

/// Example pointer script written by `init`
pub const EXAMPLE_SCRIPT_NAME: &str = "drag.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Id strategy (sequential, random)
    #[arg(short, long, default_value = "sequential")]
    pub ids: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing webshape canvas...".bright_blue().bold());

    let id_strategy = match args.ids.as_str() {
        "sequential" => IdStrategy::Sequential,
        "random" => IdStrategy::Random,
        other => {
            return Err(anyhow::anyhow!(
                "Invalid id strategy: {}. Use: sequential or random",
                other
            ))
        }
    };

    let config = Config {
        id_strategy,
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let script_path = PathBuf::from(cwd).join(EXAMPLE_SCRIPT_NAME);
    if !script_path.exists() {
        let script = vec![
            PointerEvent::down(100.0, 50.0),
            PointerEvent::moved(100.0, 120.0),
            PointerEvent::up(100.0, 150.0),
        ];
        fs::write(&script_path, serde_json::to_string_pretty(&script)?)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_SCRIPT_NAME);
    }

    println!();
    println!(
        "Next: {}",
        format!("webshape replay {}", EXAMPLE_SCRIPT_NAME)
            .as_str()
            .bright_white()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_script() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(
            InitArgs {
                ids: "random".to_string(),
                force: false,
            },
            cwd,
        )
        .unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Random);

        let script = fs::read_to_string(dir.path().join(EXAMPLE_SCRIPT_NAME)).unwrap();
        let events: Vec<PointerEvent> = serde_json::from_str(&script).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_init_rejects_unknown_strategy() {
        let dir = tempfile::tempdir().unwrap();
        let result = init(
            InitArgs {
                ids: "nanoid".to_string(),
                force: false,
            },
            dir.path().to_str().unwrap(),
        );
        assert!(result.is_err());
    }
}
