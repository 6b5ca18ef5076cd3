//! Predefined set of major Canadian cities covered by the regional alert feed

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

/// A named city with a fixed coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorCity {
    /// Display name
    pub name: &'static str,
    /// City centre
    pub coordinate: Coordinate,
}

impl MajorCity {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

/// Cities aggregated by the regional alerts endpoint
pub static MAJOR_CITIES: [MajorCity; 10] = [
    MajorCity::new("Toronto", 43.6532, -79.3832),
    MajorCity::new("Vancouver", 49.2827, -123.1207),
    MajorCity::new("Montreal", 45.5017, -73.5673),
    MajorCity::new("Calgary", 51.0447, -114.0719),
    MajorCity::new("Edmonton", 53.5461, -113.4938),
    MajorCity::new("Ottawa", 45.4215, -75.6972),
    MajorCity::new("Winnipeg", 49.8951, -97.1384),
    MajorCity::new("Halifax", 44.6488, -63.5752),
    MajorCity::new("Quebec City", 46.8139, -71.2080),
    MajorCity::new("Saskatoon", 52.1579, -106.6702),
];

/// Look up a major city by name (case-insensitive, surrounding whitespace ignored)
///
/// # Errors
///
/// Returns `DomainError::UnknownCity` if the name is not in [`MAJOR_CITIES`]
pub fn find_city(name: &str) -> Result<&'static MajorCity, DomainError> {
    let wanted = name.trim();
    MAJOR_CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DomainError::UnknownCity(wanted.to_string()))
}
