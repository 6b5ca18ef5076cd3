//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod severity;

pub use coordinate::Coordinate;
pub use severity::SeverityCategory;
