pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod safety;
