use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    error::WidgetError,
    model::{WeatherRequest, WeatherResult},
    provider::WeatherProvider,
    state::{Effect, Msg, SearchState},
};

/// One mounted weather widget.
///
/// Owns its [`SearchState`] and publishes a snapshot to subscribers after every
/// change. Unmounting (dropping the widget, or dropping an in-flight
/// [`submit`](Self::submit) future) discards any pending response and closes
/// the render channel.
#[derive(Debug)]
pub struct WeatherWidget {
    state: SearchState,
    provider: Arc<dyn WeatherProvider>,
    renders: watch::Sender<SearchState>,
}

impl WeatherWidget {
    pub fn mount(provider: Arc<dyn WeatherProvider>) -> (Self, watch::Receiver<SearchState>) {
        let state = SearchState::default();
        let (renders, rx) = watch::channel(state.clone());
        debug!("weather widget mounted");

        (Self { state, provider, renders }, rx)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.renders.subscribe()
    }

    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::TextChanged(text.into()));
    }

    /// Validate the current text and, if it holds a location, fetch its weather.
    ///
    /// Errors never escape: they end up in [`SearchState::error_message`].
    /// Dropping the returned future mid-request discards the response and
    /// leaves the widget ready for the next submit.
    pub async fn submit(&mut self) {
        let Some(Effect::FetchWeather { location }) = self.dispatch(Msg::Submit) else {
            return;
        };

        let provider = Arc::clone(&self.provider);
        let pending = PendingFetch { widget: self, settled: false };

        let msg = match fetch(provider.as_ref(), &location).await {
            Ok(result) => Msg::FetchSucceeded(result),
            Err(err) => {
                warn!(%location, error = %err, "weather fetch failed");
                Msg::FetchFailed
            }
        };

        pending.settle(msg);
    }

    pub fn unmount(self) {
        debug!("weather widget unmounted");
    }

    fn dispatch(&mut self, msg: Msg) -> Option<Effect> {
        let before = self.state.clone();
        let effect = self.state.update(msg);

        if self.state != before {
            self.renders.send_replace(self.state.clone());
        }

        effect
    }
}

async fn fetch(provider: &dyn WeatherProvider, location: &str) -> Result<WeatherResult, WidgetError> {
    provider
        .get_weather(&WeatherRequest::new(location))
        .await
        .map_err(WidgetError::WeatherFetchFailed)
}

/// Resets the loading flag if the request is abandoned before its outcome lands.
struct PendingFetch<'a> {
    widget: &'a mut WeatherWidget,
    settled: bool,
}

impl PendingFetch<'_> {
    fn settle(mut self, msg: Msg) {
        self.widget.dispatch(msg);
        self.settled = true;
    }
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("in-flight search abandoned");
            self.widget.dispatch(Msg::FetchCancelled);
        }
    }
}
