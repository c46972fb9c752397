use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{DietaryProfile, Ranker};
use crate::models::{ClassifyMode, DietaryCategory, ScoringWeights, Station};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub dietary: DietarySettings,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "data/venues.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

fn default_output_dir() -> String { "dist/listings".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,
    /// `strict`, `all`, or absent to list every venue
    #[serde(default = "default_mode")]
    pub mode: Option<ClassifyMode>,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            limit: default_limit(),
            top_rated_limit: default_top_rated_limit(),
            mode: default_mode(),
        }
    }
}

fn default_radius_km() -> f64 { 0.6 }
fn default_limit() -> usize { 50 }
fn default_top_rated_limit() -> usize { 100 }
fn default_mode() -> Option<ClassifyMode> { Some(ClassifyMode::All) }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_review_saturation")]
    pub review_saturation: u32,
    #[serde(default)]
    pub zero_hygiene_is_signal: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            review_saturation: default_review_saturation(),
            zero_hygiene_is_signal: false,
        }
    }
}

fn default_review_saturation() -> u32 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_reviews_weight")]
    pub reviews: f64,
    #[serde(default = "default_hygiene_weight")]
    pub hygiene: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            rating: default_rating_weight(),
            reviews: default_reviews_weight(),
            hygiene: default_hygiene_weight(),
        }
    }
}

fn default_rating_weight() -> f64 { 0.6 }
fn default_reviews_weight() -> f64 { 0.2 }
fn default_hygiene_weight() -> f64 { 0.2 }

impl ScoringSettings {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            rating: self.weights.rating,
            reviews: self.weights.reviews,
            hygiene: self.weights.hygiene,
            review_saturation: self.review_saturation,
            zero_hygiene_is_signal: self.zero_hygiene_is_signal,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DietarySettings {
    #[serde(default = "default_category")]
    pub category: DietaryCategory,
    /// Replaces the built-in associated cuisine list when set
    #[serde(default)]
    pub associated_cuisines: Option<Vec<String>>,
    /// Replaces the built-in exclusion term list when set
    #[serde(default)]
    pub exclusion_terms: Option<Vec<String>>,
}

impl Default for DietarySettings {
    fn default() -> Self {
        Self {
            category: default_category(),
            associated_cuisines: None,
            exclusion_terms: None,
        }
    }
}

fn default_category() -> DietaryCategory { DietaryCategory::Halal }

impl DietarySettings {
    /// Build the lookup tables, starting from the built-in halal tables
    pub fn profile(&self) -> DietaryProfile {
        let builtin = if self.category == DietaryCategory::Halal {
            DietaryProfile::halal()
        } else {
            DietaryProfile::new(self.category, Vec::new(), Vec::new())
        };

        DietaryProfile::new(
            self.category,
            self.associated_cuisines
                .clone()
                .unwrap_or(builtin.associated_cuisines),
            self.exclusion_terms.clone().unwrap_or(builtin.exclusion_terms),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VENUE_RANK__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VENUE_RANK__QUERY__RADIUS_KM -> query.radius_km
            .add_source(env_source())
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Ranker built from the dietary and scoring sections
    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.dietary.profile(), self.scoring.weights())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("VENUE_RANK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Short environment overrides used by the site build scripts
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("VENUES_JSON") {
        builder = builder.set_override("dataset.path", path)?;
    }
    if let Ok(dir) = env::var("LISTINGS_DIR") {
        builder = builder.set_override("output.dir", dir)?;
    }

    builder.build()
}
