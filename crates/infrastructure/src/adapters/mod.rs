//! Adapters implementing application ports

mod weather_backend_adapter;

pub use weather_backend_adapter::WeatherBackendAdapter;
