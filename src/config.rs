use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_API_BASE_URL: &str = "https://api.clashofclans.com/v1";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// Featured clan/player shown by the fixed lookup endpoints
const DEFAULT_FEATURED_CLAN_TAG: &str = "#RJ0J9JCG";
const DEFAULT_FEATURED_PLAYER_TAG: &str = "#CPLUCQ8";

// Location ids used by the clan listing endpoints
const DEFAULT_FWA_LOCATION_ID: u32 = 32000134;
const DEFAULT_INDIA_LOCATION_ID: u32 = 32000113;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Clash of Clans API token, sent as a Bearer header on every
    /// upstream request
    pub api_key: String,
    /// Upstream API base URL (overridable so tests can point at a mock)
    pub coc_api_base_url: String,
    pub upstream_timeout_secs: u64,
    pub featured_clan_tag: String,
    pub featured_player_tag: String,
    pub fwa_location_id: u32,
    pub india_location_id: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            anyhow::bail!(
                "API_KEY must be set to a Clash of Clans API token. \
                 Create one at https://developer.clashofclans.com"
            );
        }

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_key,
            coc_api_base_url: std::env::var("COC_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            featured_clan_tag: std::env::var("FEATURED_CLAN_TAG")
                .unwrap_or_else(|_| DEFAULT_FEATURED_CLAN_TAG.to_string()),
            featured_player_tag: std::env::var("FEATURED_PLAYER_TAG")
                .unwrap_or_else(|_| DEFAULT_FEATURED_PLAYER_TAG.to_string()),
            fwa_location_id: std::env::var("FWA_LOCATION_ID")
                .ok()
                .and_then(|id| id.parse().ok())
                .unwrap_or(DEFAULT_FWA_LOCATION_ID),
            india_location_id: std::env::var("INDIA_LOCATION_ID")
                .ok()
                .and_then(|id| id.parse().ok())
                .unwrap_or(DEFAULT_INDIA_LOCATION_ID),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "API_KEY",
            "PORT",
            "COC_API_BASE_URL",
            "UPSTREAM_TIMEOUT_SECS",
            "FEATURED_CLAN_TAG",
            "FEATURED_PLAYER_TAG",
            "FWA_LOCATION_ID",
            "INDIA_LOCATION_ID",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn missing_api_key_fails() {
        clear_env();
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn blank_api_key_fails() {
        clear_env();
        std::env::set_var("API_KEY", "   ");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn defaults_apply_when_only_api_key_is_set() {
        clear_env();
        std::env::set_var("API_KEY", "test-token");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.coc_api_base_url, "https://api.clashofclans.com/v1");
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.featured_clan_tag, "#RJ0J9JCG");
        assert_eq!(config.featured_player_tag, "#CPLUCQ8");
        assert_eq!(config.fwa_location_id, 32000134);
        assert_eq!(config.india_location_id, 32000113);

        clear_env();
    }

    #[test]
    #[serial]
    fn unparseable_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("API_KEY", "test-token");
        std::env::set_var("PORT", "not-a-number");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3001);

        clear_env();
    }

    #[test]
    #[serial]
    fn overrides_are_respected() {
        clear_env();
        std::env::set_var("API_KEY", "test-token");
        std::env::set_var("PORT", "8088");
        std::env::set_var("COC_API_BASE_URL", "http://127.0.0.1:9000/v1");
        std::env::set_var("FWA_LOCATION_ID", "123");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.coc_api_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.fwa_location_id, 123);

        clear_env();
    }
}
