use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tokio::sync::watch;
use tracing::debug;
use weather_widget_core::{
    Clock, Config, FixedClock, LocalClock, SearchState, WeatherWidget, WidgetView,
    provider_from_config, view::PLACEHOLDER,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key.
    Configure,

    /// Search once and print the widget.
    Show {
        /// City name.
        location: String,

        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive {
        #[command(flatten)]
        clock: ClockArgs,
    },
}

#[derive(Debug, Args)]
pub struct ClockArgs {
    /// Local hour (0-23) used for the day/night framing; defaults to now.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,
}

impl ClockArgs {
    fn clock(&self) -> Box<dyn Clock> {
        match self.hour {
            Some(hour) => Box::new(FixedClock(hour)),
            None => Box::new(LocalClock),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command =
            self.command.unwrap_or(Command::Interactive { clock: ClockArgs { hour: None } });

        match command {
            Command::Configure => configure(),
            Command::Show { location, clock } => {
                let clock = clock.clock();
                let (mut widget, mut rx) = mount()?;
                widget.on_text_change(location);
                search(&mut widget, &mut rx, clock.as_ref()).await;
                widget.unmount();
                Ok(())
            }
            Command::Interactive { clock } => {
                let clock = clock.clock();
                interactive(clock.as_ref()).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI key:")
        .without_confirmation()
        .with_help_message("Get one at https://www.weatherapi.com/my/")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

fn mount() -> anyhow::Result<(WeatherWidget, watch::Receiver<SearchState>)> {
    let config = Config::load()?;
    let provider = Arc::from(provider_from_config(&config));
    Ok(WeatherWidget::mount(provider))
}

async fn interactive(clock: &dyn Clock) -> anyhow::Result<()> {
    let (mut widget, mut rx) = mount()?;
    draw(&rx.borrow_and_update(), clock);

    loop {
        let input = match Text::new("City:").with_placeholder(PLACEHOLDER).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        widget.on_text_change(input);
        search(&mut widget, &mut rx, clock).await;
    }

    widget.unmount();
    Ok(())
}

/// Submit the current text, drawing every snapshot published while the request runs.
async fn search(widget: &mut WeatherWidget, rx: &mut watch::Receiver<SearchState>, clock: &dyn Clock) {
    // the text change itself is not worth a redraw
    rx.borrow_and_update();

    let submit = widget.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            _ = &mut submit => break,
            Ok(()) = rx.changed() => draw(&rx.borrow_and_update(), clock),
        }
    }

    if rx.has_changed().unwrap_or(false) {
        draw(&rx.borrow_and_update(), clock);
    } else {
        debug!("search finished without a new snapshot");
    }
}

fn draw(state: &SearchState, clock: &dyn Clock) {
    println!("{}", WidgetView::from_state(state, clock.current_hour()));
}
