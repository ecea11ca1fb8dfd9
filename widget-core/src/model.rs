use serde::{Deserialize, Serialize};

/// Unit reported by the weatherapi.com Celsius field.
pub const CELSIUS: &str = "C";

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub location: String,
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

/// Current conditions for one successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature_value: f64,
    pub temperature_unit: String,
    pub condition_text: String,
    pub location_name: String,
}

impl WeatherResult {
    pub fn celsius(
        temperature_value: f64,
        condition_text: impl Into<String>,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            temperature_value,
            temperature_unit: CELSIUS.to_string(),
            condition_text: condition_text.into(),
            location_name: location_name.into(),
        }
    }
}
