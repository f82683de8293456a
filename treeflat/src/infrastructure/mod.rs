//! Infrastructure layer: I/O implementations, output encoding and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod render;
pub mod traits;

pub use error::{InfraError, InfraResult};
