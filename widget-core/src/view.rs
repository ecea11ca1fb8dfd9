//! Host-independent display model of the widget.

use std::fmt;

use crate::{
    messages::{condition_message, location_message, temperature_message},
    model::WeatherResult,
    state::SearchState,
};

pub const TITLE: &str = "WEATHER WIDGET";
pub const DESCRIPTION: &str = "Find out the current weather in your city.";
pub const PLACEHOLDER: &str = "Enter a city name";

/// The three lines shown for a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDisplay {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

impl WeatherDisplay {
    pub fn new(result: &WeatherResult, current_hour: u32) -> Self {
        Self {
            temperature: temperature_message(result.temperature_value, &result.temperature_unit),
            condition: condition_message(&result.condition_text),
            location: location_message(&result.location_name, current_hour),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub input: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub weather: Option<WeatherDisplay>,
}

impl WidgetView {
    pub fn from_state(state: &SearchState, current_hour: u32) -> Self {
        Self {
            input: state.location_text().to_string(),
            submit_label: if state.is_loading() { "Loading..." } else { "Search" },
            submit_enabled: state.can_submit(),
            error: state.error_message().map(str::to_string),
            weather: state.result().map(|result| WeatherDisplay::new(result, current_hour)),
        }
    }
}

impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{DESCRIPTION}")?;

        let input = if self.input.is_empty() { PLACEHOLDER } else { self.input.as_str() };
        writeln!(f, "[ {input} ] ({})", self.submit_label)?;

        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }

        if let Some(weather) = &self.weather {
            writeln!(f, "  Temperature: {}", weather.temperature)?;
            writeln!(f, "  Conditions:  {}", weather.condition)?;
            writeln!(f, "  Location:    {}", weather.location)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Msg;

    fn state_after(msgs: Vec<Msg>) -> SearchState {
        let mut state = SearchState::default();
        for msg in msgs {
            state.update(msg);
        }
        state
    }

    #[test]
    fn london_at_two_pm() {
        let state = state_after(vec![
            Msg::TextChanged("London".into()),
            Msg::Submit,
            Msg::FetchSucceeded(WeatherResult::celsius(15.0, "Cloudy", "London")),
        ]);

        let view = WidgetView::from_state(&state, 14);
        let weather = view.weather.expect("result present");

        assert_eq!(weather.temperature, "The temperature is 15°C. Ideal for a light jacket.");
        assert_eq!(weather.condition, "It's cloudy today.");
        assert_eq!(weather.location, "London During the Day");
        assert_eq!(view.error, None);
        assert_eq!(view.submit_label, "Search");
    }

    #[test]
    fn loading_disables_submit() {
        let state = state_after(vec![Msg::TextChanged("London".into()), Msg::Submit]);
        let view = WidgetView::from_state(&state, 14);

        assert_eq!(view.submit_label, "Loading...");
        assert!(!view.submit_enabled);
        assert!(view.weather.is_none());
        assert!(view.to_string().contains("[ London ] (Loading...)"));
    }

    #[test]
    fn renders_error_line() {
        let state = state_after(vec![Msg::TextChanged(" ".into()), Msg::Submit]);
        let text = WidgetView::from_state(&state, 22).to_string();

        assert!(text.starts_with("WEATHER WIDGET\n"));
        assert!(text.contains("! Invalid location. Please try again\n"));
        assert!(!text.contains("Temperature:"));
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let text = WidgetView::from_state(&SearchState::default(), 9).to_string();
        assert!(text.contains("[ Enter a city name ] (Search)"));
    }

    #[test]
    fn night_framing_uses_supplied_hour() {
        let result = WeatherResult::celsius(-2.0, "Snow", "Oslo");
        let display = WeatherDisplay::new(&result, 23);

        assert_eq!(display.location, "Oslo at Night");
        assert_eq!(display.condition, "Bundle up! It's snowing.");
        assert_eq!(display.temperature, "It's freezing at -2°C! Wrap up!");
    }
}
