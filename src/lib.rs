#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod tools;
pub mod types;

pub use error::*;
pub use types::*;
