use crate::config::types::{Config, CrawlerConfig, OutputConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_source_config(&config.source)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    if config.fetch_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "fetch_timeout_ms must be >= 1".to_string(),
        ));
    }

    if config.retry_timeout_ms < config.fetch_timeout_ms {
        return Err(ConfigError::Validation(format!(
            "retry_timeout_ms ({}) must be >= fetch_timeout_ms ({})",
            config.retry_timeout_ms, config.fetch_timeout_ms
        )));
    }

    if config.client_timeout_ms < config.retry_timeout_ms {
        return Err(ConfigError::Validation(format!(
            "client_timeout_ms ({}) must be >= retry_timeout_ms ({})",
            config.client_timeout_ms, config.retry_timeout_ms
        )));
    }

    if config.max_pages_per_site < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages_per_site must be >= 1, got {}",
            config.max_pages_per_site
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the listing source configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid endpoint '{}': {}", config.endpoint, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "endpoint must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.query.trim().is_empty() {
        return Err(ConfigError::Validation("query cannot be empty".to_string()));
    }

    if config.timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "source timeout_ms must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_workers_bounds() {
        let mut config = Config::default();
        config.crawler.workers = 0;
        assert!(validate(&config).is_err());

        config.crawler.workers = 101;
        assert!(validate(&config).is_err());

        config.crawler.workers = 100;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_fetch_timeout() {
        let mut config = Config::default();
        config.crawler.fetch_timeout_ms = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_retry_timeout_shorter_than_fetch_timeout() {
        let mut config = Config::default();
        config.crawler.fetch_timeout_ms = 10_000;
        config.crawler.retry_timeout_ms = 5_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_client_timeout_shorter_than_retry_timeout() {
        let mut config = Config::default();
        config.crawler.client_timeout_ms = 12_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_page_budget() {
        let mut config = Config::default();
        config.crawler.max_pages_per_site = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = Config::default();
        config.source.endpoint = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));

        config.source.endpoint = "ftp://overpass.example.com/".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_query() {
        let mut config = Config::default();
        config.source.query = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_source_timeout() {
        let mut config = Config::default();
        config.source.timeout_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_database_path() {
        let mut config = Config::default();
        config.output.database_path = String::new();
        assert!(validate(&config).is_err());
    }
}
