//! Configuration: the table of recognized environments.

pub mod environments;

pub use environments::{EnvironmentEndpoints, EnvironmentTable};
