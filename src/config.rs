use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the pre-computed movie catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Base URL prepended to catalog poster paths
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,

    /// Rows whose production countries contain this marker are dropped at load
    #[serde(default = "default_excluded_country")]
    pub excluded_country: String,

    /// Number of cards returned by recommendations and random picks
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "data/movies.csv".to_string()
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w600_and_h900_bestv2".to_string()
}

fn default_excluded_country() -> String {
    "IN".to_string()
}

fn default_recommendation_count() -> usize {
    6
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
