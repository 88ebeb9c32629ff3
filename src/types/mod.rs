//! Error and configuration types shared by the whole crate.

pub mod config;
pub mod error;

pub use config::{GraphConfig, MutationPolicy};
pub use error::{GraphError, GraphResult};
