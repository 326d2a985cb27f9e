use crate::config::types::{Config, CrawlerConfig, IdentityConfig, OutputConfig, SelectorConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_identity_config(&config.identity)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.listing_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "listing_pages must be >= 1, got {}",
            config.listing_pages
        )));
    }

    if config.concurrent_requests < 1 || config.concurrent_requests > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrent_requests must be between 1 and 100, got {}",
            config.concurrent_requests
        )));
    }

    // The delay range feeds a uniform sampler, which requires min <= max
    if config.delay_min_ms > config.delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "delay_min_ms ({}) must not exceed delay_max_ms ({})",
            config.delay_min_ms, config.delay_max_ms
        )));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be >= 1 second, got {}",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates identity configuration
fn validate_identity_config(config: &IdentityConfig) -> Result<(), ConfigError> {
    if config.pool_path.is_empty() {
        return Err(ConfigError::Validation(
            "pool_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates selector configuration
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "selectors path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}
