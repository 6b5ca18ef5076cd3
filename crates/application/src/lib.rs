//! Application layer - Orchestration of the two weather flows
//!
//! Defines the backend port and the services that drive the point query flow
//! and the regional polling flow, plus the view models the rendering surface
//! consumes.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
