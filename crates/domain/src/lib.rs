//! Domain layer for CanWeatherWatch
//!
//! Contains the value objects and entities exchanged between the point query
//! flow, the regional polling flow and the rendering surface.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod regions;
pub mod text;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use regions::{MAJOR_CITIES, MajorCity, find_city};
pub use text::{POPUP_DESCRIPTION_LIMIT, PANEL_DESCRIPTION_LIMIT, truncate_description};
pub use value_objects::*;
