//! Pure formatters that turn a [`WeatherResult`](crate::WeatherResult) into display strings.

use crate::model::CELSIUS;

/// Hour (inclusive) at which the evening starts.
const NIGHT_STARTS_AT: u32 = 18;
/// Hour (exclusive) at which the night ends.
const NIGHT_ENDS_AT: u32 = 6;

/// Canned sentences for the conditions the provider commonly reports.
const CONDITION_MESSAGES: &[(&str, &str)] = &[
    ("sunny", "It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's cloudy today."),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstorm", "Thunderstorms are expected today."),
    ("snow", "Bundle up! It's snowing."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful, there's fog outside."),
];

/// Bucketed advice for Celsius readings, bare `<value>°<unit>` for anything else.
///
/// Each bucket includes its lower bound, so 0, 10, 20 and 30 land in the warmer bucket.
pub fn temperature_message(value: f64, unit: &str) -> String {
    let v = display_number(value);

    if unit != CELSIUS {
        return format!("{v}°{unit}");
    }

    if value < 0.0 {
        format!("It's freezing at {v}°C! Wrap up!")
    } else if value < 10.0 {
        format!("It's quite cold at {v}°C. Put on warm clothing.")
    } else if value < 20.0 {
        format!("The temperature is {v}°C. Ideal for a light jacket.")
    } else if value < 30.0 {
        format!("It's a pleasant {v}°C. Relish the nice weather.")
    } else {
        format!("It's hot at {v}°C. Stay hydrated!")
    }
}

/// Case-insensitive lookup of a canned sentence; unknown conditions are echoed back.
pub fn condition_message(text: &str) -> String {
    let lower = text.to_lowercase();

    CONDITION_MESSAGES
        .iter()
        .find(|(condition, _)| *condition == lower)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| text.to_string())
}

fn is_night(current_hour: u32) -> bool {
    current_hour >= NIGHT_STARTS_AT || current_hour < NIGHT_ENDS_AT
}

/// `current_hour` is the local 24-hour clock hour, supplied by the caller.
pub fn location_message(name: &str, current_hour: u32) -> String {
    let period = if is_night(current_hour) { "at Night" } else { "During the Day" };
    format!("{name} {period}")
}

// `15.0` prints as `15`; `-0.0` prints as `0`.
fn display_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}
