use async_trait::async_trait;
use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{sync::Mutex, time::Duration};
use tracing::info;

use super::{packing_advice, WeatherSource};
use crate::{
    config::DEFAULT_WEATHER_LATENCY,
    types::{TemperatureRange, WeatherData, WeatherForecast},
};

const MAX_FORECAST_DAYS: usize = 7;
const MAX_DAILY_DELTA: i32 = 3;

struct Conditions {
    min: i32,
    max: i32,
    condition: &'static str,
    humidity: u32,
    precipitation: u32,
    wind_speed: u32,
    description: &'static str,
    icon: &'static str,
}

const DEFAULT_CONDITIONS: Conditions = Conditions {
    min: 20,
    max: 28,
    condition: "Pleasant",
    humidity: 60,
    precipitation: 15,
    wind_speed: 12,
    description: "Comfortable weather conditions",
    icon: "🌤️",
};

fn known_conditions(key: &str) -> Option<Conditions> {
    let conditions = match key {
        "paris" => Conditions {
            min: 15,
            max: 22,
            condition: "Partly Cloudy",
            humidity: 65,
            precipitation: 20,
            wind_speed: 15,
            description: "Mild autumn weather with occasional light showers",
            icon: "⛅",
        },
        "tokyo" => Conditions {
            min: 18,
            max: 25,
            condition: "Clear",
            humidity: 70,
            precipitation: 5,
            wind_speed: 10,
            description: "Pleasant spring weather with clear skies",
            icon: "☀️",
        },
        "bali" => Conditions {
            min: 24,
            max: 32,
            condition: "Tropical",
            humidity: 80,
            precipitation: 60,
            wind_speed: 12,
            description: "Warm tropical climate with afternoon showers",
            icon: "🌴",
        },
        "new york" => Conditions {
            min: 10,
            max: 18,
            condition: "Cool",
            humidity: 55,
            precipitation: 30,
            wind_speed: 20,
            description: "Cool autumn weather with crisp air",
            icon: "🍂",
        },
        "dubai" => Conditions {
            min: 25,
            max: 35,
            condition: "Hot & Dry",
            humidity: 45,
            precipitation: 5,
            wind_speed: 8,
            description: "Hot desert climate with minimal rainfall",
            icon: "🏜️",
        },
        _ => return None,
    };
    Some(conditions)
}

impl Conditions {
    fn to_weather(&self) -> WeatherData {
        WeatherData {
            temperature: TemperatureRange {
                min: self.min,
                max: self.max,
                unit: "°C".to_string(),
            },
            condition: self.condition.to_string(),
            humidity: self.humidity,
            precipitation: self.precipitation,
            wind_speed: self.wind_speed,
            description: self.description.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

/// Base conditions for a destination.
///
/// Matches the whole name case-insensitively, else the default snapshot.
pub fn base_conditions(destination: &str) -> WeatherData {
    known_conditions(&destination.trim().to_lowercase())
        .unwrap_or(DEFAULT_CONDITIONS)
        .to_weather()
}

/// Table-driven stand-in for a real weather API.
///
/// Sleeps for `latency` before answering and perturbs each forecast day's
/// temperatures by up to ±3 using the injected RNG.
#[derive(Debug)]
pub struct MockWeatherSource {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl Default for MockWeatherSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWeatherSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible forecasts for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            latency: DEFAULT_WEATHER_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn daily_forecast(&self, base: &WeatherData, days: usize) -> Vec<WeatherData> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..days)
            .map(|_| {
                let mut day = base.clone();
                day.temperature.min += rng.gen_range(-MAX_DAILY_DELTA..=MAX_DAILY_DELTA);
                day.temperature.max += rng.gen_range(-MAX_DAILY_DELTA..=MAX_DAILY_DELTA);
                day
            })
            .collect()
    }
}

fn forecast_days(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> usize {
    match (start_date, end_date) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().max(0) as usize;
            days.min(MAX_FORECAST_DAYS)
        }
        _ => MAX_FORECAST_DAYS,
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn forecast(
        &self,
        destination: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> WeatherForecast {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let current_weather = base_conditions(destination);
        let forecast = self.daily_forecast(&current_weather, forecast_days(start_date, end_date));
        let recommendations = packing_advice(&current_weather);

        info!(
            target: "vibepack::weather",
            destination,
            condition = %current_weather.condition,
            min = current_weather.temperature.min,
            max = current_weather.temperature.max,
            recommendations = recommendations.len(),
            "weather forecast generated"
        );

        WeatherForecast {
            destination: destination.to_string(),
            start_date,
            end_date,
            current_weather,
            forecast,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(base_conditions("TOKYO").condition, "Clear");
        assert_eq!(base_conditions(" New York ").condition, "Cool");
        assert_eq!(base_conditions("bali").condition, "Tropical");
        assert_eq!(base_conditions("Reykjavik").condition, "Pleasant");
    }

    #[test]
    fn test_qualified_names_use_the_default() {
        assert_eq!(base_conditions("Bali, Indonesia").condition, "Pleasant");
        assert_eq!(base_conditions("Paris, France").condition, "Pleasant");
    }

    #[test]
    fn test_forecast_length() {
        assert_eq!(forecast_days(None, None), 7);
        assert_eq!(forecast_days(Some(date(1)), None), 7);
        assert_eq!(forecast_days(Some(date(1)), Some(date(4))), 3);
        assert_eq!(forecast_days(Some(date(1)), Some(date(20))), 7);
        assert_eq!(forecast_days(Some(date(5)), Some(date(1))), 0);
    }

    #[tokio::test]
    async fn test_tokyo_ranges() {
        let source = MockWeatherSource::new().with_latency(Duration::ZERO);
        let forecast = source.forecast("tokyo", Some(date(1)), Some(date(10))).await;

        assert_eq!(forecast.current_weather.temperature.max, 25);
        assert_eq!(forecast.forecast.len(), 7);
        for day in &forecast.forecast {
            assert!((22..=28).contains(&day.temperature.max));
            assert!((15..=21).contains(&day.temperature.min));
        }
    }

    #[tokio::test]
    async fn test_seeded_forecasts_repeat() {
        let first = MockWeatherSource::seeded(42)
            .with_latency(Duration::ZERO)
            .forecast("paris", None, None)
            .await;
        let second = MockWeatherSource::seeded(42)
            .with_latency(Duration::ZERO)
            .forecast("paris", None, None)
            .await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let source = MockWeatherSource::seeded(1).with_latency(Duration::from_millis(50));
        let started = std::time::Instant::now();
        source.forecast("dubai", None, None).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
