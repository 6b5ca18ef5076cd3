//! Domain entities - Alerts and the results produced by the two flows

mod alert;
mod conditions;
mod point_weather;
mod regional_alerts;

pub use alert::Alert;
pub use conditions::ConditionsSnapshot;
pub use point_weather::PointWeatherResult;
pub use regional_alerts::RegionalAlertSet;
