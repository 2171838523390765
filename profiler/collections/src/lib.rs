#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
pub mod constants;

mod benchmarks;
mod fixture;
mod indexed;
mod suite;

pub use benchmarks::Benchmarks;
pub use fixture::{Element, Fixtures};
pub use indexed::{Indexed, Push};
pub use suite::Suite;
