//! Search state and the single reducer that mutates it.

use tracing::debug;

use crate::{error::CITY_NOT_RECOGNIZED_MESSAGE, model::WeatherResult, validate::validate_location};

/// Events the widget reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    TextChanged(String),
    Submit,
    FetchSucceeded(WeatherResult),
    FetchFailed,
    /// The in-flight request was abandoned without an outcome.
    FetchCancelled,
}

/// Work the reducer asks its owner to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchWeather { location: String },
}

/// Everything the widget renders from.
///
/// After a completed search exactly one of `result` and `error_message` is set;
/// both are empty before the first search and while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    location_text: String,
    result: Option<WeatherResult>,
    error_message: Option<String>,
    is_loading: bool,
}

impl SearchState {
    pub fn location_text(&self) -> &str {
        &self.location_text
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::TextChanged(text) => {
                self.location_text = text;
                None
            }
            Msg::Submit if self.is_loading => {
                debug!("submit ignored while a request is in flight");
                None
            }
            Msg::Submit => match validate_location(&self.location_text) {
                Ok(location) => {
                    let location = location.to_string();
                    self.is_loading = true;
                    self.error_message = None;
                    self.result = None;
                    Some(Effect::FetchWeather { location })
                }
                Err(err) => {
                    self.fail(err.user_message());
                    None
                }
            },
            Msg::FetchSucceeded(_) | Msg::FetchFailed | Msg::FetchCancelled
                if !self.is_loading =>
            {
                debug!("dropping fetch outcome with no request in flight");
                None
            }
            Msg::FetchSucceeded(result) => {
                self.result = Some(result);
                self.error_message = None;
                self.is_loading = false;
                None
            }
            Msg::FetchFailed => {
                self.fail(CITY_NOT_RECOGNIZED_MESSAGE);
                None
            }
            Msg::FetchCancelled => {
                self.is_loading = false;
                None
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.result = None;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_LOCATION_MESSAGE;

    fn typed(text: &str) -> SearchState {
        let mut state = SearchState::default();
        state.update(Msg::TextChanged(text.to_string()));
        state
    }

    fn london() -> WeatherResult {
        WeatherResult::celsius(15.0, "Cloudy", "London")
    }

    #[test]
    fn starts_empty() {
        let state = SearchState::default();

        assert_eq!(state.location_text(), "");
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
        assert!(state.can_submit());
    }

    #[test]
    fn text_change_only_updates_text() {
        let mut state = SearchState::default();
        let effect = state.update(Msg::TextChanged("Lon".into()));

        assert_eq!(effect, None);
        assert_eq!(state.location_text(), "Lon");
        assert!(!state.is_loading());
    }

    #[test]
    fn valid_submit_starts_loading_with_trimmed_location() {
        let mut state = typed("  London ");
        let effect = state.update(Msg::Submit);

        assert_eq!(effect, Some(Effect::FetchWeather { location: "London".into() }));
        assert!(state.is_loading());
        assert!(!state.can_submit());
        assert!(state.error_message().is_none());
        assert!(state.result().is_none());
        // the typed text is left as the user entered it
        assert_eq!(state.location_text(), "  London ");
    }

    #[test]
    fn blank_submit_sets_error_without_effect() {
        let mut state = typed("London");
        state.update(Msg::Submit);
        state.update(Msg::FetchSucceeded(london()));

        state.update(Msg::TextChanged("   ".into()));
        let effect = state.update(Msg::Submit);

        assert_eq!(effect, None);
        assert_eq!(state.error_message(), Some(INVALID_LOCATION_MESSAGE));
        assert!(state.result().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut state = typed("London");
        assert!(state.update(Msg::Submit).is_some());

        let before = state.clone();
        assert_eq!(state.update(Msg::Submit), None);
        assert_eq!(state, before);
    }

    #[test]
    fn success_stores_result() {
        let mut state = typed("London");
        state.update(Msg::Submit);
        state.update(Msg::FetchSucceeded(london()));

        assert_eq!(state.result(), Some(&london()));
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_sets_generic_message_and_clears_result() {
        let mut state = typed("London");
        state.update(Msg::Submit);
        state.update(Msg::FetchSucceeded(london()));

        state.update(Msg::TextChanged("Nowhereville".into()));
        state.update(Msg::Submit);
        state.update(Msg::FetchFailed);

        assert_eq!(state.error_message(), Some(CITY_NOT_RECOGNIZED_MESSAGE));
        assert!(state.result().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn new_search_clears_previous_error() {
        let mut state = typed(" ");
        state.update(Msg::Submit);
        assert!(state.error_message().is_some());

        state.update(Msg::TextChanged("Paris".into()));
        state.update(Msg::Submit);

        assert!(state.error_message().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn outcome_without_request_is_dropped() {
        let mut state = typed("London");

        state.update(Msg::FetchSucceeded(london()));
        state.update(Msg::FetchFailed);
        state.update(Msg::FetchCancelled);

        assert_eq!(state, typed("London"));
    }

    #[test]
    fn cancelled_fetch_returns_to_ready() {
        let mut state = typed("London");
        state.update(Msg::Submit);
        state.update(Msg::FetchCancelled);

        assert!(!state.is_loading());
        assert!(state.can_submit());
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
        assert_eq!(
            state.update(Msg::Submit),
            Some(Effect::FetchWeather { location: "London".into() })
        );
    }
}
