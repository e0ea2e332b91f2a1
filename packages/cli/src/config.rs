use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use webshape_editor::CanvasBounds;
use webshape_model::{HtmlOptions, IdGenerator, RandomIdGenerator, SequentialIdGenerator};

pub const DEFAULT_CONFIG_NAME: &str = "webshape.config.json";

/// Webshape configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// How block ids are generated
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Seed for sequential ids
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Canvas extent; pointer-down outside it is ignored
    #[serde(default)]
    pub canvas: Option<CanvasBounds>,

    /// Pretty print markup
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Indentation for pretty output
    #[serde(default = "default_indent")]
    pub indent: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

fn default_seed() -> String {
    "/canvas".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            pretty: self.pretty,
            indent: self.indent.clone(),
        }
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new(&self.seed)),
            IdStrategy::Random => Box::new(RandomIdGenerator),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            seed: default_seed(),
            canvas: None,
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}
