use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Number of similar users considered per recommendation (K)
    #[serde(default = "default_neighbor_count")]
    pub neighbor_count: usize,

    /// Number of titles returned per recommendation (N)
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_neighbor_count() -> usize {
    10
}

fn default_recommendation_count() -> usize {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
            neighbor_count: default_neighbor_count(),
            recommendation_count: default_recommendation_count(),
        }
    }
}
