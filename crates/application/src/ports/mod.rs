//! Ports - Interfaces the application layer expects infrastructure to provide

mod weather_backend_port;

#[cfg(test)]
pub use weather_backend_port::MockWeatherBackendPort;
pub use weather_backend_port::WeatherBackendPort;
