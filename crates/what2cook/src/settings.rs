//! Application settings.
//!
//! Resolution order, lowest to highest: built-in defaults, the TOML settings
//! file, then `WHAT2COOK_*` environment variables. The API key is not a
//! setting; it is read from the environment when a client is built.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use what2cook_core::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use what2cook_error::{ConfigError, ConfigErrorKind};
use what2cook_generation::{GenerationOptions, GenerationOptionsBuilder};
use what2cook_models::DEFAULT_BASE_URL;
use what2cook_storage::{FileStore, RecipeBook};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "what2cook.toml";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "WHAT2COOK";

const DEFAULT_IMAGE_DELAY_MS: i64 = 1000;

#[derive(Debug, Deserialize)]
struct RawSettings {
    text_model: String,
    image_model: String,
    base_url: String,
    image_delay_ms: u64,
    generate_images: bool,
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Settings {
    /// Model for recipe and shopping-list text
    text_model: String,
    /// Model for recipe photos
    image_model: String,
    /// Endpoint of the generative language API
    base_url: String,
    /// Pause between image requests, in milliseconds
    image_delay_ms: u64,
    /// Whether recipes get photos
    generate_images: bool,
    /// Directory holding saved recipes
    data_dir: PathBuf,
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly given file is missing, a file does not parse, or
    /// no data directory can be determined.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads settings with a caller-supplied environment source.
    #[instrument(skip(env))]
    pub fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let raw: RawSettings = Config::builder()
            .set_default("text_model", DEFAULT_TEXT_MODEL)
            .and_then(|b| b.set_default("image_model", DEFAULT_IMAGE_MODEL))
            .and_then(|b| b.set_default("base_url", DEFAULT_BASE_URL))
            .and_then(|b| b.set_default("image_delay_ms", DEFAULT_IMAGE_DELAY_MS))
            .and_then(|b| b.set_default("generate_images", true))
            .map_err(settings_error)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize::<RawSettings>)
            .map_err(settings_error)?;

        let data_dir = raw
            .data_dir
            .or_else(default_data_dir)
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::NoDataDir))?;

        let settings = Self {
            text_model: raw.text_model,
            image_model: raw.image_model,
            base_url: raw.base_url,
            image_delay_ms: raw.image_delay_ms,
            generate_images: raw.generate_images,
            data_dir,
        };
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Options for the generation pipeline.
    pub fn generation_options(&self) -> Result<GenerationOptions, ConfigError> {
        GenerationOptionsBuilder::default()
            .text_model(self.text_model.as_str())
            .image_model(self.image_model.as_str())
            .image_delay(Duration::from_millis(self.image_delay_ms))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Settings(e.to_string())))
    }

    /// Persistence adapter over the data directory.
    pub fn recipe_book(&self) -> RecipeBook<FileStore> {
        RecipeBook::new(FileStore::new(self.data_dir.clone()))
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("what2cook"))
}

#[track_caller]
fn settings_error(e: config::ConfigError) -> ConfigError {
    ConfigError::new(ConfigErrorKind::Settings(e.to_string()))
}
