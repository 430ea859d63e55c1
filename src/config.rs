use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use foodcoach_impact::ImpactSettings;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub recipe_search: RecipeSearchConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub impact: ImpactConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of the pretty console format.
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_nutrition_csv")]
    pub nutrition_csv: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            nutrition_csv: default_nutrition_csv(),
        }
    }
}

fn default_nutrition_csv() -> String {
    "crates/nutrition/data/nutrition_storage_dataset.csv".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeSearchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_recipe_search_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// How many ingredients are sent in the search query.
    #[serde(default = "default_query_ingredients")]
    pub query_ingredients: usize,
}

impl Default for RecipeSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_recipe_search_url(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            query_ingredients: default_query_ingredients(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_recipe_search_url() -> String {
    "http://www.recipepuppy.com/api/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_results() -> usize {
    4
}

fn default_query_ingredients() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

fn default_similarity_threshold() -> u8 {
    foodcoach_nutrition::DEFAULT_SIMILARITY_THRESHOLD
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImpactConfig {
    #[serde(default = "default_portion_kg")]
    pub portion_kg: f64,
    #[serde(default = "default_water_goal")]
    pub water_goal_liters: f64,
    #[serde(default = "default_co2_goal")]
    pub co2_goal_kg: f64,
    #[serde(default = "default_money_goal")]
    pub money_goal_usd: f64,
    /// Lower bounds of the four upper achievement tiers, in kg of CO2.
    #[serde(default = "default_tier_thresholds")]
    pub tier_thresholds_kg: Vec<f64>,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            portion_kg: default_portion_kg(),
            water_goal_liters: default_water_goal(),
            co2_goal_kg: default_co2_goal(),
            money_goal_usd: default_money_goal(),
            tier_thresholds_kg: default_tier_thresholds(),
        }
    }
}

impl ImpactConfig {
    pub fn settings(&self) -> ImpactSettings {
        let defaults = ImpactSettings::default();
        let tier_thresholds_kg = self
            .tier_thresholds_kg
            .as_slice()
            .try_into()
            .unwrap_or(defaults.tier_thresholds_kg);

        ImpactSettings {
            portion_kg: self.portion_kg,
            water_goal_liters: self.water_goal_liters,
            co2_goal_kg: self.co2_goal_kg,
            money_goal_usd: self.money_goal_usd,
            tier_thresholds_kg,
        }
    }
}

fn default_portion_kg() -> f64 {
    ImpactSettings::default().portion_kg
}

fn default_water_goal() -> f64 {
    ImpactSettings::default().water_goal_liters
}

fn default_co2_goal() -> f64 {
    ImpactSettings::default().co2_goal_kg
}

fn default_money_goal() -> f64 {
    ImpactSettings::default().money_goal_usd
}

fn default_tier_thresholds() -> Vec<f64> {
    ImpactSettings::default().tier_thresholds_kg.to_vec()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle time after which a session and its history are dropped.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_secs: default_ttl_secs(),
            max_history: default_max_history(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

fn default_cookie_name() -> String {
    "foodcoach_session".to_string()
}

fn default_ttl_secs() -> u64 {
    3600
}

fn default_max_history() -> usize {
    100
}

fn default_purge_interval_secs() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
            data: DataConfig::default(),
            recipe_search: RecipeSearchConfig::default(),
            matching: MatchingConfig::default(),
            impact: ImpactConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `PORT` variable
    /// 2. Environment variables (FOODCOACH__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOODCOACH")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.matching.similarity_threshold > 100 {
            return Err("Similarity threshold must be between 0 and 100".to_string());
        }
        if self.recipe_search.timeout_secs == 0 {
            return Err("Recipe search timeout must be at least 1 second".to_string());
        }

        let impact = &self.impact;
        if impact.portion_kg <= 0.0 {
            return Err("Impact portion_kg must be positive".to_string());
        }
        if impact.water_goal_liters <= 0.0 || impact.co2_goal_kg <= 0.0 || impact.money_goal_usd <= 0.0
        {
            return Err("Impact goals must be positive".to_string());
        }
        let tiers = &impact.tier_thresholds_kg;
        if tiers.len() != 4
            || tiers[0] <= 0.0
            || tiers.windows(2).any(|pair| pair[0] >= pair[1])
        {
            return Err(
                "Impact tier_thresholds_kg must hold four positive, strictly ascending values"
                    .to_string(),
            );
        }

        if self.session.ttl_secs == 0 {
            return Err("Session ttl_secs must be greater than 0".to_string());
        }
        if self.session.max_history < 2 {
            return Err("Session max_history must keep at least one exchange (2 turns)".to_string());
        }
        Ok(())
    }
}
