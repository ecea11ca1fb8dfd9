use crate::{Config, WeatherRequest, WeatherResult, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a location.
///
/// Implementations report every failure as an error with context; the widget
/// decides what the user gets to see.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherResult>;
}

/// Construct the weatherapi.com provider from config.
///
/// A missing API key is not an error here: it surfaces at search time.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(WeatherApiProvider::with_base_url(
        config.resolved_api_key(),
        config.resolved_base_url(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config_is_built_without_key() {
        let provider = provider_from_config(&Config::default());
        assert!(format!("{provider:?}").contains("WeatherApiProvider"));
    }
}
