use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, File, FileFormat};
use config::builder::DefaultState;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::{QuizMode, SentenceSplit};

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // brand color (title, current sentence, focused input)
    pub caret: String,   // cursor block color
    pub text: String,    // revealed words
    pub sub: String,     // hints / inactive text
    #[serde(alias = "subAlt", alias = "subalt")]
    pub sub_alt: String, // borders, footer
    pub error: String,   // incorrect guesses
    pub correct: String, // correct guesses
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#2c2e34".to_string(),
            main: "#e2b714".to_string(),
            caret: "#e2b714".to_string(),
            text: "#d1d0c5".to_string(),
            sub: "#646669".to_string(),
            sub_alt: "#45474d".to_string(),
            error: "#ca4754".to_string(),
            correct: "#4caf50".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QuizSettings {
    pub mode: QuizMode,
    pub split: SentenceSplit,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub theme: Theme,
    pub quiz: QuizSettings,
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordquiz").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    let defaults = Theme::default();

    let builder = Config::builder()
        .set_default("theme.bg", defaults.bg)?
        .set_default("theme.main", defaults.main)?
        .set_default("theme.caret", defaults.caret)?
        .set_default("theme.text", defaults.text)?
        .set_default("theme.sub", defaults.sub)?
        .set_default("theme.subAlt", defaults.sub_alt)?
        .set_default("theme.error", defaults.error)?
        .set_default("theme.correct", defaults.correct)?
        .set_default("quiz.mode", "default")?
        .set_default("quiz.split", "aligned")?;
    Ok(builder)
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = builder_with_defaults()?;

        if let Some(path) = config_path() {
            if path.exists() {
                log::debug!("reading config from {}", path.display());
                builder = builder.add_source(File::from(path));
            }
        }

        let cfg = builder.build().context("failed to build config")?;

        // map "subAlt" to "sub_alt"
        let app_config: AppConfig = cfg
            .try_deserialize()
            .context("failed to parse config")?;

        Ok(app_config)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let cfg = builder_with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
