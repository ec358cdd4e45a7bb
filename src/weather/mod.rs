//! Weather lookup feeding the style generator.

pub mod mock;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::WeatherData;
pub use crate::types::WeatherForecast;
pub use mock::MockWeatherSource;

/// Source of destination forecasts.
///
/// Lookups never fail: an unknown destination yields a default forecast.
#[async_trait]
pub trait WeatherSource: Send + Sync + std::fmt::Debug {
    async fn forecast(
        &self,
        destination: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> WeatherForecast;
}

/// Packing advice derived from threshold checks on one snapshot.
///
/// Temperature yields exactly one bucket; precipitation, humidity and wind
/// each append independently.
pub fn packing_advice(weather: &WeatherData) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::new();

    if weather.temperature.max > 30 {
        advice.extend([
            "Pack lightweight, breathable fabrics",
            "Bring sun protection (hat, sunglasses, sunscreen)",
            "Consider cooling accessories like a fan",
        ]);
    } else if weather.temperature.min < 10 {
        advice.extend([
            "Pack warm layers and a heavy coat",
            "Bring thermal underwear for extra warmth",
            "Don't forget warm accessories (gloves, scarf, hat)",
        ]);
    } else {
        advice.extend([
            "Pack versatile layers for changing temperatures",
            "Bring a light jacket for cooler evenings",
        ]);
    }

    if weather.precipitation > 50 {
        advice.extend([
            "Pack a reliable rain jacket and umbrella",
            "Bring waterproof shoes or boots",
            "Consider quick-dry clothing materials",
        ]);
    } else if weather.precipitation > 20 {
        advice.extend([
            "Bring a light rain jacket just in case",
            "Pack a compact umbrella",
        ]);
    }

    if weather.humidity > 70 {
        advice.extend([
            "Choose moisture-wicking fabrics",
            "Pack extra underwear and socks",
            "Consider anti-bacterial clothing sprays",
        ]);
    }

    if weather.wind_speed > 25 {
        advice.extend([
            "Avoid loose-fitting clothing that may flap",
            "Secure any hats or accessories",
            "Consider windproof outer layers",
        ]);
    }

    advice.into_iter().map(str::to_string).collect()
}
