//! Weather backend integration
//!
//! Client for the CanWeatherWatch backend: current conditions and alerts at a
//! coordinate, plus the aggregated regional alert feed.

pub mod client;
mod models;

pub use client::{HttpWeatherApiClient, WeatherApiClient, WeatherApiConfig, WeatherApiError};
pub use models::{CurrentConditions, WeatherAlert, decode_alerts, decode_conditions};
