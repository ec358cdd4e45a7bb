use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
    pub unit: String,
}

/// One weather snapshot, either the current conditions or a forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub temperature: TemperatureRange,
    pub condition: String,
    /// Relative humidity in percent
    pub humidity: u32,
    /// Chance of precipitation in percent
    pub precipitation: u32,
    /// km/h
    pub wind_speed: u32,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current_weather: WeatherData,
    pub forecast: Vec<WeatherData>,
    pub recommendations: Vec<String>,
}
