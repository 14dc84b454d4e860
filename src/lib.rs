pub mod cli;
pub mod domain;

pub use domain::*;
