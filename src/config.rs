/// Values provided to you by AuctionEdge, sourced from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub auction_code: String,
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub api_host: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            auction_code: require_env("EDGE_AUCTION_CODE")?,
            username: require_env("EDGE_USERNAME")?,
            password: require_env("EDGE_PASSWORD")?,
            client_id: require_env("EDGE_CLIENT_ID")?,
            api_host: require_env("EDGE_API_HOST")?,
        })
    }
}

fn require_env(key: &str) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(key) {
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }

    anyhow::bail!("{key} is not set. Please export the value provided to you by AuctionEdge.");
}
