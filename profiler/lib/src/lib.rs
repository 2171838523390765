#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
pub mod constants;

mod config;
mod error;
mod profile;
mod report;
mod samples;

pub use config::Config;
pub use error::{ConfigError, Error};
pub use profile::Profiler;
pub use report::Report;
pub use samples::Samples;
