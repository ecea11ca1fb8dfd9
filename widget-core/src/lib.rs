//! Core library for the weather widget.
//!
//! This crate defines:
//! - Input validation and the pure message formatters
//! - The weatherapi.com provider and its configuration
//! - The widget's search state, reducer and render snapshots
//!
//! It is used by the `weather-widget` terminal front end, but any host that can
//! forward text/submit events and draw a [`WidgetView`] can mount it.

pub mod clock;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod provider;
pub mod state;
pub mod validate;
pub mod view;
pub mod widget;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::Config;
pub use error::WidgetError;
pub use messages::{condition_message, location_message, temperature_message};
pub use model::{WeatherRequest, WeatherResult};
pub use provider::{WeatherProvider, provider_from_config};
pub use state::{Effect, Msg, SearchState};
pub use validate::validate_location;
pub use view::{WeatherDisplay, WidgetView};
pub use widget::WeatherWidget;
