//! Error conversions for infrastructure failures

mod conversions;

pub use conversions::{status_error, InfraError};
