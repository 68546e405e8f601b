use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://www.bensound.com/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("bensound-scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var("BENSOUND_BASE_URL") {
            cfg.set_base_url(&base)?;
        }
        if let Ok(timeout) = std::env::var("BENSOUND_TIMEOUT_SECS") {
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = Duration::from_secs(parsed);
            }
        }
        if let Ok(agent) = std::env::var("BENSOUND_USER_AGENT") {
            if !agent.trim().is_empty() {
                cfg.user_agent = agent;
            }
        }
        Ok(cfg)
    }

    /// Relative hrefs are joined onto the base, so it always ends with a slash.
    pub fn set_base_url(&mut self, raw: &str) -> Result<()> {
        let mut s = raw.trim().to_string();
        if !s.ends_with('/') { s.push('/'); }
        self.base_url = Url::parse(&s).with_context(|| format!("invalid base url: {raw}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_site_root() {
        let cfg = ScrapeConfig::default();
        assert_eq!(cfg.base_url.as_str(), "https://www.bensound.com/");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.user_agent.starts_with("bensound-scraper/"));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let mut cfg = ScrapeConfig::default();
        cfg.set_base_url("http://localhost:8080/mirror").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://localhost:8080/mirror/");
        assert_eq!(cfg.base_url.join("img/a.jpg").unwrap().as_str(), "http://localhost:8080/mirror/img/a.jpg");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut cfg = ScrapeConfig::default();
        assert!(cfg.set_base_url("not a url").is_err());
    }
}
