use thiserror::Error;

/// Shown when the submitted location is empty or whitespace.
pub const INVALID_LOCATION_MESSAGE: &str = "Invalid location. Please try again";

/// Shown for every kind of fetch failure.
pub const CITY_NOT_RECOGNIZED_MESSAGE: &str = "City not recognized. Please try again.";

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("location is empty")]
    EmptyLocation,

    /// Network, HTTP status, body parsing and missing API key all end up here.
    #[error("weather fetch failed: {0:#}")]
    WeatherFetchFailed(#[source] anyhow::Error),
}

impl WidgetError {
    /// The text the widget shows for this error. Never includes the underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            WidgetError::EmptyLocation => INVALID_LOCATION_MESSAGE,
            WidgetError::WeatherFetchFailed(_) => CITY_NOT_RECOGNIZED_MESSAGE,
        }
    }
}
